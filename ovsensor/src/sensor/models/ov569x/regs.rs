//! OV5693/OV5695 register tables.

use crate::regs::RegisterOp;

pub const GLOBAL: &[RegisterOp] = &[
    RegisterOp::new(0x0103, 0x01),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x0300, 0x04),
    RegisterOp::new(0x0301, 0x00),
    RegisterOp::new(0x0302, 0x69),
    RegisterOp::new(0x0303, 0x00),
    RegisterOp::new(0x0304, 0x00),
    RegisterOp::new(0x0305, 0x01),
    RegisterOp::new(0x0307, 0x00),
    RegisterOp::new(0x030b, 0x00),
    RegisterOp::new(0x030c, 0x00),
    RegisterOp::new(0x030d, 0x1e),
    RegisterOp::new(0x030e, 0x04),
    RegisterOp::new(0x030f, 0x03),
    RegisterOp::new(0x0312, 0x01),
    RegisterOp::new(0x3000, 0x00),
    RegisterOp::new(0x3002, 0xa1),
    RegisterOp::new(0x3008, 0x00),
    RegisterOp::new(0x3010, 0x00),
    RegisterOp::new(0x3022, 0x51),
    RegisterOp::new(0x3106, 0x15),
    RegisterOp::new(0x3107, 0x01),
    RegisterOp::new(0x3108, 0x05),
    RegisterOp::new(0x3500, 0x00),
    RegisterOp::new(0x3501, 0x45),
    RegisterOp::new(0x3502, 0x00),
    RegisterOp::new(0x3503, 0x08),
    RegisterOp::new(0x3504, 0x03),
    RegisterOp::new(0x3505, 0x8c),
    RegisterOp::new(0x3507, 0x03),
    RegisterOp::new(0x3508, 0x00),
    RegisterOp::new(0x3509, 0x10),
    RegisterOp::new(0x350c, 0x00),
    RegisterOp::new(0x350d, 0x80),
    RegisterOp::new(0x3510, 0x00),
    RegisterOp::new(0x3511, 0x02),
    RegisterOp::new(0x3512, 0x00),
    RegisterOp::new(0x3601, 0x55),
    RegisterOp::new(0x3602, 0x58),
    RegisterOp::new(0x3614, 0x30),
    RegisterOp::new(0x3615, 0x77),
    RegisterOp::new(0x3621, 0x08),
    RegisterOp::new(0x3624, 0x40),
    RegisterOp::new(0x3633, 0x0c),
    RegisterOp::new(0x3634, 0x0c),
    RegisterOp::new(0x3635, 0x0c),
    RegisterOp::new(0x3636, 0x0c),
    RegisterOp::new(0x3638, 0x00),
    RegisterOp::new(0x3639, 0x00),
    RegisterOp::new(0x363a, 0x00),
    RegisterOp::new(0x363b, 0x00),
    RegisterOp::new(0x363c, 0xff),
    RegisterOp::new(0x363d, 0xfa),
    RegisterOp::new(0x3650, 0x44),
    RegisterOp::new(0x3651, 0x44),
    RegisterOp::new(0x3652, 0x44),
    RegisterOp::new(0x3653, 0x44),
    RegisterOp::new(0x3654, 0x44),
    RegisterOp::new(0x3655, 0x44),
    RegisterOp::new(0x3656, 0x44),
    RegisterOp::new(0x3657, 0x44),
    RegisterOp::new(0x3660, 0x00),
    RegisterOp::new(0x3661, 0x00),
    RegisterOp::new(0x3662, 0x00),
    RegisterOp::new(0x366a, 0x00),
    RegisterOp::new(0x366e, 0x0c),
    RegisterOp::new(0x3673, 0x04),
    RegisterOp::new(0x3700, 0x14),
    RegisterOp::new(0x3703, 0x0c),
    RegisterOp::new(0x3715, 0x01),
    RegisterOp::new(0x3733, 0x10),
    RegisterOp::new(0x3734, 0x40),
    RegisterOp::new(0x373f, 0xa0),
    RegisterOp::new(0x3765, 0x20),
    RegisterOp::new(0x37a1, 0x1d),
    RegisterOp::new(0x37a8, 0x26),
    RegisterOp::new(0x37ab, 0x14),
    RegisterOp::new(0x37c2, 0x04),
    RegisterOp::new(0x37cb, 0x09),
    RegisterOp::new(0x37cc, 0x13),
    RegisterOp::new(0x37cd, 0x1f),
    RegisterOp::new(0x37ce, 0x1f),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x00),
    RegisterOp::new(0x3802, 0x00),
    RegisterOp::new(0x3803, 0x00),
    RegisterOp::new(0x3804, 0x0a),
    RegisterOp::new(0x3805, 0x3f),
    RegisterOp::new(0x3806, 0x07),
    RegisterOp::new(0x3807, 0xaf),
    RegisterOp::new(0x3808, 0x05),
    RegisterOp::new(0x3809, 0x10),
    RegisterOp::new(0x380a, 0x03),
    RegisterOp::new(0x380b, 0xcc),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xa0),
    RegisterOp::new(0x380e, 0x08),
    RegisterOp::new(0x380f, 0xb8),
    RegisterOp::new(0x3810, 0x00),
    RegisterOp::new(0x3811, 0x06),
    RegisterOp::new(0x3812, 0x00),
    RegisterOp::new(0x3813, 0x06),
    RegisterOp::new(0x3814, 0x03),
    RegisterOp::new(0x3815, 0x01),
    RegisterOp::new(0x3816, 0x03),
    RegisterOp::new(0x3817, 0x01),
    RegisterOp::new(0x3818, 0x00),
    RegisterOp::new(0x3819, 0x00),
    RegisterOp::new(0x381a, 0x00),
    RegisterOp::new(0x381b, 0x01),
    RegisterOp::new(0x3820, 0x8b),
    RegisterOp::new(0x3821, 0x01),
    RegisterOp::new(0x3c80, 0x08),
    RegisterOp::new(0x3c82, 0x00),
    RegisterOp::new(0x3c83, 0x00),
    RegisterOp::new(0x3c88, 0x00),
    RegisterOp::new(0x3d85, 0x14),
    RegisterOp::new(0x3f02, 0x08),
    RegisterOp::new(0x3f03, 0x10),
    RegisterOp::new(0x4008, 0x02),
    RegisterOp::new(0x4009, 0x09),
    RegisterOp::new(0x404e, 0x20),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4502, 0x10),
    RegisterOp::new(0x4800, 0x00),
    RegisterOp::new(0x481f, 0x2a),
    RegisterOp::new(0x4837, 0x13),
    RegisterOp::new(0x5000, 0x17),
    RegisterOp::new(0x5780, 0x3e),
    RegisterOp::new(0x5781, 0x0f),
    RegisterOp::new(0x5782, 0x44),
    RegisterOp::new(0x5783, 0x02),
    RegisterOp::new(0x5784, 0x01),
    RegisterOp::new(0x5785, 0x01),
    RegisterOp::new(0x5786, 0x00),
    RegisterOp::new(0x5787, 0x04),
    RegisterOp::new(0x5788, 0x02),
    RegisterOp::new(0x5789, 0x0f),
    RegisterOp::new(0x578a, 0xfd),
    RegisterOp::new(0x578b, 0xf5),
    RegisterOp::new(0x578c, 0xf5),
    RegisterOp::new(0x578d, 0x03),
    RegisterOp::new(0x578e, 0x08),
    RegisterOp::new(0x578f, 0x0c),
    RegisterOp::new(0x5790, 0x08),
    RegisterOp::new(0x5791, 0x06),
    RegisterOp::new(0x5792, 0x00),
    RegisterOp::new(0x5793, 0x52),
    RegisterOp::new(0x5794, 0xa3),
    RegisterOp::new(0x5b00, 0x00),
    RegisterOp::new(0x5b01, 0x1c),
    RegisterOp::new(0x5b02, 0x00),
    RegisterOp::new(0x5b03, 0x7f),
    RegisterOp::new(0x5b05, 0x6c),
    RegisterOp::new(0x5e10, 0xfc),
    RegisterOp::new(0x4010, 0xf1),
    RegisterOp::new(0x3503, 0x08),
    RegisterOp::new(0x3505, 0x8c),
    RegisterOp::new(0x3507, 0x03),
    RegisterOp::new(0x3508, 0x00),
    RegisterOp::new(0x3509, 0xf8),
];

pub const MODE_2592X1944: &[RegisterOp] = &[
    RegisterOp::new(0x3501, 0x7e),
    RegisterOp::new(0x366e, 0x18),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x00),
    RegisterOp::new(0x3802, 0x00),
    RegisterOp::new(0x3803, 0x04),
    RegisterOp::new(0x3804, 0x0a),
    RegisterOp::new(0x3805, 0x3f),
    RegisterOp::new(0x3806, 0x07),
    RegisterOp::new(0x3807, 0xab),
    RegisterOp::new(0x3808, 0x0a),
    RegisterOp::new(0x3809, 0x20),
    RegisterOp::new(0x380a, 0x07),
    RegisterOp::new(0x380b, 0x98),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xe4),
    RegisterOp::new(0x380e, 0x07),
    RegisterOp::new(0x380f, 0xe8),
    RegisterOp::new(0x3811, 0x06),
    RegisterOp::new(0x3813, 0x08),
    RegisterOp::new(0x3814, 0x01),
    RegisterOp::new(0x3816, 0x01),
    RegisterOp::new(0x3817, 0x01),
    RegisterOp::new(0x3820, 0x88),
    RegisterOp::new(0x3821, 0x00),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4008, 0x04),
    RegisterOp::new(0x4009, 0x13),
];

pub const MODE_1920X1080: &[RegisterOp] = &[
    RegisterOp::new(0x3501, 0x45),
    RegisterOp::new(0x366e, 0x18),
    RegisterOp::new(0x3800, 0x01),
    RegisterOp::new(0x3801, 0x50),
    RegisterOp::new(0x3802, 0x01),
    RegisterOp::new(0x3803, 0xb8),
    RegisterOp::new(0x3804, 0x08),
    RegisterOp::new(0x3805, 0xef),
    RegisterOp::new(0x3806, 0x05),
    RegisterOp::new(0x3807, 0xf7),
    RegisterOp::new(0x3808, 0x07),
    RegisterOp::new(0x3809, 0x80),
    RegisterOp::new(0x380a, 0x04),
    RegisterOp::new(0x380b, 0x38),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xa0),
    RegisterOp::new(0x380e, 0x08),
    RegisterOp::new(0x380f, 0xb8),
    RegisterOp::new(0x3811, 0x06),
    RegisterOp::new(0x3813, 0x04),
    RegisterOp::new(0x3814, 0x01),
    RegisterOp::new(0x3816, 0x01),
    RegisterOp::new(0x3817, 0x01),
    RegisterOp::new(0x3820, 0x88),
    RegisterOp::new(0x3821, 0x00),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4008, 0x04),
    RegisterOp::new(0x4009, 0x13),
];

pub const MODE_1296X972: &[RegisterOp] = &[
    RegisterOp::new(0x0103, 0x01),
    RegisterOp::new(0x0100, 0x00),
    RegisterOp::new(0x0300, 0x04),
    RegisterOp::new(0x0301, 0x00),
    RegisterOp::new(0x0302, 0x69),
    RegisterOp::new(0x0303, 0x00),
    RegisterOp::new(0x0304, 0x00),
    RegisterOp::new(0x0305, 0x01),
    RegisterOp::new(0x0307, 0x00),
    RegisterOp::new(0x030b, 0x00),
    RegisterOp::new(0x030c, 0x00),
    RegisterOp::new(0x030d, 0x1e),
    RegisterOp::new(0x030e, 0x04),
    RegisterOp::new(0x030f, 0x03),
    RegisterOp::new(0x0312, 0x01),
    RegisterOp::new(0x3000, 0x00),
    RegisterOp::new(0x3002, 0xa1),
    RegisterOp::new(0x3008, 0x00),
    RegisterOp::new(0x3010, 0x00),
    RegisterOp::new(0x3016, 0x32),
    RegisterOp::new(0x3022, 0x51),
    RegisterOp::new(0x3106, 0x15),
    RegisterOp::new(0x3107, 0x01),
    RegisterOp::new(0x3108, 0x05),
    RegisterOp::new(0x3500, 0x00),
    RegisterOp::new(0x3501, 0x3e),
    RegisterOp::new(0x3502, 0x00),
    RegisterOp::new(0x3503, 0x08),
    RegisterOp::new(0x3504, 0x03),
    RegisterOp::new(0x3505, 0x8c),
    RegisterOp::new(0x3507, 0x03),
    RegisterOp::new(0x3508, 0x00),
    RegisterOp::new(0x3509, 0x10),
    RegisterOp::new(0x350c, 0x00),
    RegisterOp::new(0x350d, 0x80),
    RegisterOp::new(0x3510, 0x00),
    RegisterOp::new(0x3511, 0x02),
    RegisterOp::new(0x3512, 0x00),
    RegisterOp::new(0x3601, 0x55),
    RegisterOp::new(0x3602, 0x58),
    RegisterOp::new(0x3611, 0x58),
    RegisterOp::new(0x3614, 0x30),
    RegisterOp::new(0x3615, 0x77),
    RegisterOp::new(0x3621, 0x08),
    RegisterOp::new(0x3624, 0x40),
    RegisterOp::new(0x3633, 0x0c),
    RegisterOp::new(0x3634, 0x0c),
    RegisterOp::new(0x3635, 0x0c),
    RegisterOp::new(0x3636, 0x0c),
    RegisterOp::new(0x3638, 0x00),
    RegisterOp::new(0x3639, 0x00),
    RegisterOp::new(0x363a, 0x00),
    RegisterOp::new(0x363b, 0x00),
    RegisterOp::new(0x363c, 0xff),
    RegisterOp::new(0x363d, 0xfa),
    RegisterOp::new(0x3650, 0x44),
    RegisterOp::new(0x3651, 0x44),
    RegisterOp::new(0x3652, 0x44),
    RegisterOp::new(0x3653, 0x44),
    RegisterOp::new(0x3654, 0x44),
    RegisterOp::new(0x3655, 0x44),
    RegisterOp::new(0x3656, 0x44),
    RegisterOp::new(0x3657, 0x44),
    RegisterOp::new(0x3660, 0x00),
    RegisterOp::new(0x3661, 0x00),
    RegisterOp::new(0x3662, 0x00),
    RegisterOp::new(0x366a, 0x00),
    RegisterOp::new(0x366e, 0x0c),
    RegisterOp::new(0x3673, 0x04),
    RegisterOp::new(0x3700, 0x14),
    RegisterOp::new(0x3703, 0x0c),
    RegisterOp::new(0x3706, 0x24),
    RegisterOp::new(0x3714, 0x27),
    RegisterOp::new(0x3715, 0x01),
    RegisterOp::new(0x3716, 0x00),
    RegisterOp::new(0x3717, 0x02),
    RegisterOp::new(0x3733, 0x10),
    RegisterOp::new(0x3734, 0x40),
    RegisterOp::new(0x373f, 0xa0),
    RegisterOp::new(0x3765, 0x20),
    RegisterOp::new(0x37a1, 0x1d),
    RegisterOp::new(0x37a8, 0x26),
    RegisterOp::new(0x37ab, 0x14),
    RegisterOp::new(0x37c2, 0x04),
    RegisterOp::new(0x37c3, 0xf0),
    RegisterOp::new(0x37cb, 0x09),
    RegisterOp::new(0x37cc, 0x13),
    RegisterOp::new(0x37cd, 0x1f),
    RegisterOp::new(0x37ce, 0x1f),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x00),
    RegisterOp::new(0x3802, 0x00),
    RegisterOp::new(0x3803, 0x00),
    RegisterOp::new(0x3804, 0x0a),
    RegisterOp::new(0x3805, 0x3f),
    RegisterOp::new(0x3806, 0x07),
    RegisterOp::new(0x3807, 0xaf),
    RegisterOp::new(0x3808, 0x05),
    RegisterOp::new(0x3809, 0x10),
    RegisterOp::new(0x380a, 0x03),
    RegisterOp::new(0x380b, 0xcc),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xe4),
    RegisterOp::new(0x380e, 0x03),
    RegisterOp::new(0x380f, 0xf4),
    RegisterOp::new(0x3810, 0x00),
    RegisterOp::new(0x3811, 0x00),
    RegisterOp::new(0x3812, 0x00),
    RegisterOp::new(0x3813, 0x06),
    RegisterOp::new(0x3814, 0x03),
    RegisterOp::new(0x3815, 0x01),
    RegisterOp::new(0x3816, 0x03),
    RegisterOp::new(0x3817, 0x01),
    RegisterOp::new(0x3818, 0x00),
    RegisterOp::new(0x3819, 0x00),
    RegisterOp::new(0x381a, 0x00),
    RegisterOp::new(0x381b, 0x01),
    RegisterOp::new(0x3820, 0x8b),
    RegisterOp::new(0x3821, 0x01),
    RegisterOp::new(0x3c80, 0x08),
    RegisterOp::new(0x3c82, 0x00),
    RegisterOp::new(0x3c83, 0x00),
    RegisterOp::new(0x3c88, 0x00),
    RegisterOp::new(0x3d85, 0x14),
    RegisterOp::new(0x3f02, 0x08),
    RegisterOp::new(0x3f03, 0x10),
    RegisterOp::new(0x4008, 0x02),
    RegisterOp::new(0x4009, 0x09),
    RegisterOp::new(0x404e, 0x20),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4502, 0x10),
    RegisterOp::new(0x4800, 0x00),
    RegisterOp::new(0x481f, 0x2a),
    RegisterOp::new(0x4837, 0x13),
    RegisterOp::new(0x5000, 0x13),
    RegisterOp::new(0x5780, 0x3e),
    RegisterOp::new(0x5781, 0x0f),
    RegisterOp::new(0x5782, 0x44),
    RegisterOp::new(0x5783, 0x02),
    RegisterOp::new(0x5784, 0x01),
    RegisterOp::new(0x5785, 0x01),
    RegisterOp::new(0x5786, 0x00),
    RegisterOp::new(0x5787, 0x04),
    RegisterOp::new(0x5788, 0x02),
    RegisterOp::new(0x5789, 0x0f),
    RegisterOp::new(0x578a, 0xfd),
    RegisterOp::new(0x578b, 0xf5),
    RegisterOp::new(0x578c, 0xf5),
    RegisterOp::new(0x578d, 0x03),
    RegisterOp::new(0x578e, 0x08),
    RegisterOp::new(0x578f, 0x0c),
    RegisterOp::new(0x5790, 0x08),
    RegisterOp::new(0x5791, 0x06),
    RegisterOp::new(0x5792, 0x00),
    RegisterOp::new(0x5793, 0x52),
    RegisterOp::new(0x5794, 0xa3),
    RegisterOp::new(0x5b00, 0x00),
    RegisterOp::new(0x5b01, 0x1c),
    RegisterOp::new(0x5b02, 0x00),
    RegisterOp::new(0x5b03, 0x7f),
    RegisterOp::new(0x5b05, 0x6c),
    RegisterOp::new(0x5e10, 0xfc),
    RegisterOp::new(0x4010, 0xf1),
    RegisterOp::new(0x3503, 0x08),
    RegisterOp::new(0x3505, 0x8c),
    RegisterOp::new(0x3507, 0x03),
    RegisterOp::new(0x3508, 0x00),
    RegisterOp::new(0x3509, 0xf8),
    RegisterOp::new(0x0100, 0x01),
];

pub const MODE_1280X720: &[RegisterOp] = &[
    RegisterOp::new(0x3501, 0x45),
    RegisterOp::new(0x366e, 0x0c),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x00),
    RegisterOp::new(0x3802, 0x01),
    RegisterOp::new(0x3803, 0x00),
    RegisterOp::new(0x3804, 0x0a),
    RegisterOp::new(0x3805, 0x3f),
    RegisterOp::new(0x3806, 0x06),
    RegisterOp::new(0x3807, 0xaf),
    RegisterOp::new(0x3808, 0x05),
    RegisterOp::new(0x3809, 0x00),
    RegisterOp::new(0x380a, 0x02),
    RegisterOp::new(0x380b, 0xd0),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xa0),
    RegisterOp::new(0x380e, 0x08),
    RegisterOp::new(0x380f, 0xb8),
    RegisterOp::new(0x3811, 0x06),
    RegisterOp::new(0x3813, 0x02),
    RegisterOp::new(0x3814, 0x03),
    RegisterOp::new(0x3816, 0x03),
    RegisterOp::new(0x3817, 0x01),
    RegisterOp::new(0x3820, 0x8b),
    RegisterOp::new(0x3821, 0x01),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4008, 0x02),
    RegisterOp::new(0x4009, 0x09),
];

pub const MODE_640X480: &[RegisterOp] = &[
    RegisterOp::new(0x3501, 0x22),
    RegisterOp::new(0x366e, 0x0c),
    RegisterOp::new(0x3800, 0x00),
    RegisterOp::new(0x3801, 0x00),
    RegisterOp::new(0x3802, 0x00),
    RegisterOp::new(0x3803, 0x08),
    RegisterOp::new(0x3804, 0x0a),
    RegisterOp::new(0x3805, 0x3f),
    RegisterOp::new(0x3806, 0x07),
    RegisterOp::new(0x3807, 0xa7),
    RegisterOp::new(0x3808, 0x02),
    RegisterOp::new(0x3809, 0x80),
    RegisterOp::new(0x380a, 0x01),
    RegisterOp::new(0x380b, 0xe0),
    RegisterOp::new(0x380c, 0x02),
    RegisterOp::new(0x380d, 0xa0),
    RegisterOp::new(0x380e, 0x02),
    RegisterOp::new(0x380f, 0x2e),
    RegisterOp::new(0x3811, 0x06),
    RegisterOp::new(0x3813, 0x04),
    RegisterOp::new(0x3814, 0x07),
    RegisterOp::new(0x3816, 0x05),
    RegisterOp::new(0x3817, 0x03),
    RegisterOp::new(0x3820, 0x8d),
    RegisterOp::new(0x3821, 0x01),
    RegisterOp::new(0x4501, 0x00),
    RegisterOp::new(0x4008, 0x02),
    RegisterOp::new(0x4009, 0x09),
];
