//! OV8865 register tables.

use crate::constants::REG_SOFTWARE_RESET;
use crate::regs::RegisterOp;

/// Common settings for every mode. Software reset needs time to settle.
pub const GLOBAL: &[RegisterOp] = &[
    RegisterOp::with_delay(REG_SOFTWARE_RESET, 0x01, 16),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x3638, 0xff),
    RegisterOp::new(0x0300, 0x05),
    RegisterOp::new(0x0302, 0x96),
    RegisterOp::new(0x0303, 0x00),
    RegisterOp::new(0x0304, 0x03),
    RegisterOp::new(0x030b, 0x05),
    RegisterOp::new(0x030e, 0x00),
    RegisterOp::new(0x030d, 0x96),
    RegisterOp::new(0x030f, 0x04),
    RegisterOp::new(0x0312, 0x01),
    RegisterOp::new(0x031e, 0x0c),
    RegisterOp::new(0x3015, 0x01),
    RegisterOp::new(0x3018, 0x72),
    RegisterOp::new(0x3020, 0x93),
    RegisterOp::new(0x3022, 0x01),
    RegisterOp::new(0x3031, 0x0a),
    RegisterOp::new(0x3106, 0x01),
    RegisterOp::new(0x3305, 0xf1),
    RegisterOp::new(0x3308, 0x00),
    RegisterOp::new(0x3309, 0x28),
    RegisterOp::new(0x330a, 0x00),
    RegisterOp::new(0x330b, 0x20),
    RegisterOp::new(0x330c, 0x00),
    RegisterOp::new(0x330d, 0x00),
    RegisterOp::new(0x330e, 0x00),
    RegisterOp::new(0x330f, 0x40),
    RegisterOp::new(0x3307, 0x04),
    RegisterOp::new(0x3604, 0x04),
    RegisterOp::new(0x3602, 0x30),
    RegisterOp::new(0x3605, 0x00),
    RegisterOp::new(0x3607, 0x20),
    RegisterOp::new(0x3608, 0x11),
    RegisterOp::new(0x3609, 0x68),
    RegisterOp::new(0x360a, 0x40),
    RegisterOp::new(0x360c, 0xdd),
    RegisterOp::new(0x360e, 0x0c),
    RegisterOp::new(0x3610, 0x07),
    RegisterOp::new(0x3612, 0x86),
    RegisterOp::new(0x3613, 0x58),
    RegisterOp::new(0x3614, 0x28),
    RegisterOp::new(0x3617, 0x40),
    RegisterOp::new(0x3618, 0x5a),
    RegisterOp::new(0x3619, 0x9b),
    RegisterOp::new(0x361c, 0x00),
    RegisterOp::new(0x361d, 0x60),
    RegisterOp::new(0x3631, 0x60),
    RegisterOp::new(0x3633, 0x10),
    RegisterOp::new(0x3634, 0x10),
    RegisterOp::new(0x3635, 0x10),
    RegisterOp::new(0x3636, 0x10),
    RegisterOp::new(0x3641, 0x55),
    RegisterOp::new(0x3646, 0x86),
    RegisterOp::new(0x3647, 0x27),
    RegisterOp::new(0x364a, 0x1b),
    RegisterOp::new(0x3500, 0x00),
    RegisterOp::new(0x3503, 0x00),
    RegisterOp::new(0x3509, 0x00),
    RegisterOp::new(0x3705, 0x00),
    RegisterOp::new(0x3719, 0x31),
    RegisterOp::new(0x3714, 0x12),
    RegisterOp::new(0x3733, 0x10),
    RegisterOp::new(0x3734, 0x40),
    RegisterOp::new(0x3755, 0x40),
    RegisterOp::new(0x3758, 0x00),
    RegisterOp::new(0x3759, 0x4c),
    RegisterOp::new(0x375c, 0x40),
    RegisterOp::new(0x375e, 0x00),
    RegisterOp::new(0x3768, 0x04),
    RegisterOp::new(0x3769, 0x20),
    RegisterOp::new(0x376c, 0xc0),
    RegisterOp::new(0x376d, 0xc0),
    RegisterOp::new(0x376a, 0x08),
    RegisterOp::new(0x3761, 0x00),
    RegisterOp::new(0x3762, 0x00),
    RegisterOp::new(0x3763, 0x00),
    RegisterOp::new(0x3766, 0xff),
    RegisterOp::new(0x376b, 0x42),
    RegisterOp::new(0x37a4, 0x00),
    RegisterOp::new(0x37a6, 0x00),
    RegisterOp::new(0x3760, 0x00),
    RegisterOp::new(0x376f, 0x01),
    RegisterOp::new(0x37b0, 0x00),
    RegisterOp::new(0x37b1, 0x00),
    RegisterOp::new(0x37b2, 0x00),
    RegisterOp::new(0x37b6, 0x00),
    RegisterOp::new(0x37b7, 0x00),
    RegisterOp::new(0x37b8, 0x00),
    RegisterOp::new(0x37b9, 0xff),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x0c),
    RegisterOp::new(0x3802, 0x00),
    RegisterOp::new(0x3803, 0x0c),
    RegisterOp::new(0x3804, 0x0c),
    RegisterOp::new(0x3805, 0xd3),
    RegisterOp::new(0x3806, 0x09),
    RegisterOp::new(0x3807, 0xa3),
    RegisterOp::new(0x3810, 0x00),
    RegisterOp::new(0x3811, 0x04),
    RegisterOp::new(0x3815, 0x01),
    RegisterOp::new(0x3820, 0x06),
    RegisterOp::new(0x382b, 0x01),
    RegisterOp::new(0x3837, 0x18),
    RegisterOp::new(0x3841, 0xff),
    RegisterOp::new(0x3d85, 0x06),
    RegisterOp::new(0x3d8c, 0x75),
    RegisterOp::new(0x3d8d, 0xef),
    RegisterOp::new(0x4000, 0xf1),
    RegisterOp::new(0x4005, 0x10),
    RegisterOp::new(0x400b, 0x0c),
    RegisterOp::new(0x400d, 0x10),
    RegisterOp::new(0x401b, 0x00),
    RegisterOp::new(0x401d, 0x00),
    RegisterOp::new(0x4028, 0x00),
    RegisterOp::new(0x4029, 0x02),
    RegisterOp::new(0x402a, 0x04),
    RegisterOp::new(0x402b, 0x04),
    RegisterOp::new(0x402c, 0x02),
    RegisterOp::new(0x402d, 0x02),
    RegisterOp::new(0x402e, 0x08),
    RegisterOp::new(0x402f, 0x02),
    RegisterOp::new(0x401f, 0x00),
    RegisterOp::new(0x4034, 0x3f),
    RegisterOp::new(0x4300, 0xff),
    RegisterOp::new(0x4301, 0x00),
    RegisterOp::new(0x4302, 0x0f),
    RegisterOp::new(0x4503, 0x10),
    RegisterOp::new(0x481f, 0x32),
    RegisterOp::new(0x4837, 0x16),
    RegisterOp::new(0x4850, 0x10),
    RegisterOp::new(0x4851, 0x32),
    RegisterOp::new(0x4b00, 0x2a),
    RegisterOp::new(0x4b0d, 0x00),
    RegisterOp::new(0x4d00, 0x04),
    RegisterOp::new(0x4d01, 0x18),
    RegisterOp::new(0x4d02, 0xc3),
    RegisterOp::new(0x4d03, 0xff),
    RegisterOp::new(0x4d04, 0xff),
    RegisterOp::new(0x4d05, 0xff),
    RegisterOp::new(0x5000, 0x96),
    RegisterOp::new(0x5001, 0x01),
    RegisterOp::new(0x5002, 0x08),
    RegisterOp::new(0x5901, 0x00),
    RegisterOp::new(0x5e00, 0x00),
    RegisterOp::new(0x5e01, 0x41),
    RegisterOp::new(0x5b00, 0x02),
    RegisterOp::new(0x5b01, 0xd0),
    RegisterOp::new(0x5b02, 0x03),
    RegisterOp::new(0x5b03, 0xff),
    RegisterOp::new(0x5b05, 0x6c),
    RegisterOp::new(0x5780, 0xfc),
    RegisterOp::new(0x5781, 0xdf),
    RegisterOp::new(0x5782, 0x3f),
    RegisterOp::new(0x5783, 0x08),
    RegisterOp::new(0x5784, 0x0c),
    RegisterOp::new(0x5786, 0x20),
    RegisterOp::new(0x5787, 0x40),
    RegisterOp::new(0x5788, 0x08),
    RegisterOp::new(0x5789, 0x08),
    RegisterOp::new(0x578a, 0x02),
    RegisterOp::new(0x578b, 0x01),
    RegisterOp::new(0x578c, 0x01),
    RegisterOp::new(0x578d, 0x0c),
    RegisterOp::new(0x578e, 0x02),
    RegisterOp::new(0x578f, 0x01),
    RegisterOp::new(0x5790, 0x01),
    RegisterOp::new(0x5800, 0x1d),
    RegisterOp::new(0x5801, 0x0e),
    RegisterOp::new(0x5802, 0x0c),
    RegisterOp::new(0x5803, 0x0c),
    RegisterOp::new(0x5804, 0x0f),
    RegisterOp::new(0x5805, 0x22),
    RegisterOp::new(0x5806, 0x0a),
    RegisterOp::new(0x5807, 0x06),
    RegisterOp::new(0x5808, 0x05),
    RegisterOp::new(0x5809, 0x05),
    RegisterOp::new(0x580a, 0x07),
    RegisterOp::new(0x580b, 0x0a),
    RegisterOp::new(0x580c, 0x06),
    RegisterOp::new(0x580d, 0x02),
    RegisterOp::new(0x580e, 0x00),
    RegisterOp::new(0x580f, 0x00),
    RegisterOp::new(0x5810, 0x03),
    RegisterOp::new(0x5811, 0x07),
    RegisterOp::new(0x5812, 0x06),
    RegisterOp::new(0x5813, 0x02),
    RegisterOp::new(0x5814, 0x00),
    RegisterOp::new(0x5815, 0x00),
    RegisterOp::new(0x5816, 0x03),
    RegisterOp::new(0x5817, 0x07),
    RegisterOp::new(0x5818, 0x09),
    RegisterOp::new(0x5819, 0x06),
    RegisterOp::new(0x581a, 0x04),
    RegisterOp::new(0x581b, 0x04),
    RegisterOp::new(0x581c, 0x06),
    RegisterOp::new(0x581d, 0x0a),
    RegisterOp::new(0x581e, 0x19),
    RegisterOp::new(0x581f, 0x0d),
    RegisterOp::new(0x5820, 0x0b),
    RegisterOp::new(0x5821, 0x0b),
    RegisterOp::new(0x5822, 0x0e),
    RegisterOp::new(0x5823, 0x22),
    RegisterOp::new(0x5824, 0x23),
    RegisterOp::new(0x5825, 0x28),
    RegisterOp::new(0x5826, 0x29),
    RegisterOp::new(0x5827, 0x27),
    RegisterOp::new(0x5828, 0x13),
    RegisterOp::new(0x5829, 0x26),
    RegisterOp::new(0x582a, 0x33),
    RegisterOp::new(0x582b, 0x32),
    RegisterOp::new(0x582c, 0x33),
    RegisterOp::new(0x582d, 0x16),
    RegisterOp::new(0x582e, 0x14),
    RegisterOp::new(0x582f, 0x30),
    RegisterOp::new(0x5830, 0x31),
    RegisterOp::new(0x5831, 0x30),
    RegisterOp::new(0x5832, 0x15),
    RegisterOp::new(0x5833, 0x26),
    RegisterOp::new(0x5834, 0x23),
    RegisterOp::new(0x5835, 0x21),
    RegisterOp::new(0x5836, 0x23),
    RegisterOp::new(0x5837, 0x05),
    RegisterOp::new(0x5838, 0x36),
    RegisterOp::new(0x5839, 0x27),
    RegisterOp::new(0x583a, 0x28),
    RegisterOp::new(0x583b, 0x26),
    RegisterOp::new(0x583c, 0x24),
    RegisterOp::new(0x583d, 0xdf),
    RegisterOp::new(0x3820, 0x06),
    RegisterOp::new(0x3821, 0x40),
    RegisterOp::new(0x5000, 0x16),
    RegisterOp::new(0x5018, 0x10),
    RegisterOp::new(0x5019, 0x00),
    RegisterOp::new(0x501a, 0x10),
    RegisterOp::new(0x501b, 0x00),
    RegisterOp::new(0x501c, 0x10),
    RegisterOp::new(0x501d, 0x00),
    RegisterOp::new(0x501e, 0x00),
    RegisterOp::new(0x4000, 0xf3),
    RegisterOp::new(0x3503, 0x00),
    RegisterOp::new(0x3501, 0x07),
    RegisterOp::new(0x3502, 0xff),
    RegisterOp::new(0x3508, 0x00),
];

// PLL settings for both link rates live in the mode tables.
pub const LINK_720MBPS: &[RegisterOp] = &[];
pub const LINK_360MBPS: &[RegisterOp] = &[];

pub const MODE_3280X2464: &[RegisterOp] = &[
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x030f, 0x04),
    RegisterOp::new(0x3501, 0x98),
    RegisterOp::new(0x3502, 0x60),
    RegisterOp::new(0x3508, 0x02),
    RegisterOp::new(0x3700, 0x48),
    RegisterOp::new(0x3701, 0x18),
    RegisterOp::new(0x3702, 0x50),
    RegisterOp::new(0x3703, 0x32),
    RegisterOp::new(0x3704, 0x28),
    RegisterOp::new(0x3706, 0x70),
    RegisterOp::new(0x3707, 0x08),
    RegisterOp::new(0x3708, 0x48),
    RegisterOp::new(0x3709, 0x80),
    RegisterOp::new(0x370a, 0x01),
    RegisterOp::new(0x370b, 0x70),
    RegisterOp::new(0x370c, 0x07),
    RegisterOp::new(0x3718, 0x14),
    RegisterOp::new(0x3712, 0x44),
    RegisterOp::new(0x371e, 0x31),
    RegisterOp::new(0x371f, 0x7f),
    RegisterOp::new(0x3720, 0x0a),
    RegisterOp::new(0x3721, 0x0a),
    RegisterOp::new(0x3724, 0x04),
    RegisterOp::new(0x3725, 0x04),
    RegisterOp::new(0x3726, 0x0c),
    RegisterOp::new(0x3728, 0x0a),
    RegisterOp::new(0x3729, 0x03),
    RegisterOp::new(0x372a, 0x06),
    RegisterOp::new(0x372b, 0xa6),
    RegisterOp::new(0x372c, 0xa6),
    RegisterOp::new(0x372d, 0xa6),
    RegisterOp::new(0x372e, 0x0c),
    RegisterOp::new(0x372f, 0x20),
    RegisterOp::new(0x3730, 0x02),
    RegisterOp::new(0x3731, 0x0c),
    RegisterOp::new(0x3732, 0x28),
    RegisterOp::new(0x3736, 0x30),
    RegisterOp::new(0x373a, 0x04),
    RegisterOp::new(0x373b, 0x18),
    RegisterOp::new(0x373c, 0x14),
    RegisterOp::new(0x373e, 0x06),
    RegisterOp::new(0x375a, 0x0c),
    RegisterOp::new(0x375b, 0x26),
    RegisterOp::new(0x375d, 0x04),
    RegisterOp::new(0x375f, 0x28),
    RegisterOp::new(0x3767, 0x1e),
    RegisterOp::new(0x3772, 0x46),
    RegisterOp::new(0x3773, 0x04),
    RegisterOp::new(0x3774, 0x2c),
    RegisterOp::new(0x3775, 0x13),
    RegisterOp::new(0x3776, 0x10),
    RegisterOp::new(0x37a0, 0x88),
    RegisterOp::new(0x37a1, 0x7a),
    RegisterOp::new(0x37a2, 0x7a),
    RegisterOp::new(0x37a3, 0x02),
    RegisterOp::new(0x37a5, 0x09),
    RegisterOp::new(0x37a7, 0x88),
    RegisterOp::new(0x37a8, 0xb0),
    RegisterOp::new(0x37a9, 0xb0),
    RegisterOp::new(0x37aa, 0x88),
    RegisterOp::new(0x37ab, 0x5c),
    RegisterOp::new(0x37ac, 0x5c),
    RegisterOp::new(0x37ad, 0x55),
    RegisterOp::new(0x37ae, 0x19),
    RegisterOp::new(0x37af, 0x19),
    RegisterOp::new(0x37b3, 0x84),
    RegisterOp::new(0x37b4, 0x84),
    RegisterOp::new(0x37b5, 0x66),
    RegisterOp::new(0x3808, 0x0c),
    RegisterOp::new(0x3809, 0xd0),
    RegisterOp::new(0x380a, 0x09),
    RegisterOp::new(0x380b, 0xa0),
    RegisterOp::new(0x380c, 0x07),
    RegisterOp::new(0x380d, 0x90),
    RegisterOp::new(0x380e, 0x09),
    RegisterOp::new(0x380f, 0xb6),
    RegisterOp::new(0x3813, 0x02),
    RegisterOp::new(0x3814, 0x01),
    RegisterOp::new(0x3821, 0x40),
    RegisterOp::new(0x382a, 0x01),
    RegisterOp::new(0x3830, 0x04),
    RegisterOp::new(0x3836, 0x01),
    RegisterOp::new(0x3846, 0x48),
    RegisterOp::new(0x3f08, 0x16),
    RegisterOp::new(0x4001, 0x04),
    RegisterOp::new(0x4020, 0x02),
    RegisterOp::new(0x4021, 0x40),
    RegisterOp::new(0x4022, 0x03),
    RegisterOp::new(0x4023, 0x3f),
    RegisterOp::new(0x4024, 0x07),
    RegisterOp::new(0x4025, 0xc0),
    RegisterOp::new(0x4026, 0x08),
    RegisterOp::new(0x4027, 0xbf),
    RegisterOp::new(0x4500, 0x68),
    RegisterOp::new(0x4601, 0x10),
];

pub const MODE_1632X1224: &[RegisterOp] = &[
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x030f, 0x09),
    RegisterOp::new(0x3501, 0x5c),
    RegisterOp::new(0x3502, 0x00),
    RegisterOp::new(0x3508, 0x02),
    RegisterOp::new(0x3700, 0x24),
    RegisterOp::new(0x3701, 0x0c),
    RegisterOp::new(0x3702, 0x28),
    RegisterOp::new(0x3703, 0x19),
    RegisterOp::new(0x3704, 0x14),
    RegisterOp::new(0x3706, 0x38),
    RegisterOp::new(0x3707, 0x04),
    RegisterOp::new(0x3708, 0x24),
    RegisterOp::new(0x3709, 0x40),
    RegisterOp::new(0x370a, 0x00),
    RegisterOp::new(0x370b, 0xb8),
    RegisterOp::new(0x370c, 0x04),
    RegisterOp::new(0x3718, 0x12),
    RegisterOp::new(0x3712, 0x42),
    RegisterOp::new(0x371e, 0x19),
    RegisterOp::new(0x371f, 0x40),
    RegisterOp::new(0x3720, 0x05),
    RegisterOp::new(0x3721, 0x05),
    RegisterOp::new(0x3724, 0x02),
    RegisterOp::new(0x3725, 0x02),
    RegisterOp::new(0x3726, 0x06),
    RegisterOp::new(0x3728, 0x05),
    RegisterOp::new(0x3729, 0x02),
    RegisterOp::new(0x372a, 0x03),
    RegisterOp::new(0x372b, 0x53),
    RegisterOp::new(0x372c, 0xa3),
    RegisterOp::new(0x372d, 0x53),
    RegisterOp::new(0x372e, 0x06),
    RegisterOp::new(0x372f, 0x10),
    RegisterOp::new(0x3730, 0x01),
    RegisterOp::new(0x3731, 0x06),
    RegisterOp::new(0x3732, 0x14),
    RegisterOp::new(0x3736, 0x20),
    RegisterOp::new(0x373a, 0x02),
    RegisterOp::new(0x373b, 0x0c),
    RegisterOp::new(0x373c, 0x0a),
    RegisterOp::new(0x373e, 0x03),
    RegisterOp::new(0x375a, 0x06),
    RegisterOp::new(0x375b, 0x13),
    RegisterOp::new(0x375d, 0x02),
    RegisterOp::new(0x375f, 0x14),
    RegisterOp::new(0x3767, 0x1c),
    RegisterOp::new(0x3772, 0x23),
    RegisterOp::new(0x3773, 0x02),
    RegisterOp::new(0x3774, 0x16),
    RegisterOp::new(0x3775, 0x12),
    RegisterOp::new(0x3776, 0x08),
    RegisterOp::new(0x37a0, 0x44),
    RegisterOp::new(0x37a1, 0x3d),
    RegisterOp::new(0x37a2, 0x3d),
    RegisterOp::new(0x37a3, 0x01),
    RegisterOp::new(0x37a5, 0x08),
    RegisterOp::new(0x37a7, 0x44),
    RegisterOp::new(0x37a8, 0x58),
    RegisterOp::new(0x37a9, 0x58),
    RegisterOp::new(0x37aa, 0x44),
    RegisterOp::new(0x37ab, 0x2e),
    RegisterOp::new(0x37ac, 0x2e),
    RegisterOp::new(0x37ad, 0x33),
    RegisterOp::new(0x37ae, 0x0d),
    RegisterOp::new(0x37af, 0x0d),
    RegisterOp::new(0x37b3, 0x42),
    RegisterOp::new(0x37b4, 0x42),
    RegisterOp::new(0x37b5, 0x33),
    RegisterOp::new(0x3808, 0x06),
    RegisterOp::new(0x3809, 0x60),
    RegisterOp::new(0x380a, 0x04),
    RegisterOp::new(0x380b, 0xc8),
    RegisterOp::new(0x380c, 0x06),
    RegisterOp::new(0x380d, 0x42),
    RegisterOp::new(0x380e, 0x05),
    RegisterOp::new(0x380f, 0xda),
    RegisterOp::new(0x3813, 0x04),
    RegisterOp::new(0x3814, 0x03),
    RegisterOp::new(0x3821, 0x61),
    RegisterOp::new(0x382a, 0x03),
    RegisterOp::new(0x3830, 0x08),
    RegisterOp::new(0x3836, 0x02),
    RegisterOp::new(0x3846, 0x88),
    RegisterOp::new(0x3f08, 0x0b),
    RegisterOp::new(0x4001, 0x14),
    RegisterOp::new(0x4020, 0x01),
    RegisterOp::new(0x4021, 0x20),
    RegisterOp::new(0x4022, 0x01),
    RegisterOp::new(0x4023, 0x9f),
    RegisterOp::new(0x4024, 0x03),
    RegisterOp::new(0x4025, 0xe0),
    RegisterOp::new(0x4026, 0x04),
    RegisterOp::new(0x4027, 0x5f),
    RegisterOp::new(0x4500, 0x40),
    RegisterOp::new(0x4601, 0x74),
];

/// Load the module OTP into the read-out buffer. Loading only happens
/// while streaming, so the sensor is toggled around it.
pub const OTP_LOAD: &[RegisterOp] = &[
    RegisterOp::new(0x0100, 0x01),
    RegisterOp::new(0x3d84, 0x00),
    RegisterOp::new(0x3d81, 0x01),
    RegisterOp::new(0x0100, 0x00),
];
