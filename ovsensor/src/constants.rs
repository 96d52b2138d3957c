// ovsensor/src/constants.rs
//! Constants shared by every sensor model

/// Hardware id of the power-management companion that owns sensor GPIOs.
pub const COMPANION_HARDWARE_ID: &str = "INT3472";

/// Companion GPIO line indices, in the order the firmware declares them.
pub const COMPANION_LINE_XSHUTDOWN: usize = 0;
/// Power-down line, required.
pub const COMPANION_LINE_POWER_DOWN: usize = 1;
/// Privacy LED line, optional.
pub const COMPANION_LINE_LED: usize = 2;

/// Common OmniVision chip id register (high byte first).
pub const REG_CHIP_ID: u16 = 0x300a;

/// Mode-select register and its two values.
pub const REG_MODE_SELECT: u16 = 0x0100;
/// `REG_MODE_SELECT` value for standby.
pub const MODE_STANDBY: u8 = 0x00;
/// `REG_MODE_SELECT` value for streaming.
pub const MODE_STREAMING: u8 = 0x01;

/// Software reset register.
pub const REG_SOFTWARE_RESET: u16 = 0x0103;

/// Coarse exposure register; the low nibble holds the fractional part.
pub const REG_EXPOSURE: u16 = 0x3500;
/// Lines are shifted past the fractional nibble.
pub const EXPOSURE_FRACTION_SHIFT: u32 = 4;

/// Vertical total size register.
pub const REG_VTS: u16 = 0x380e;

/// Default 7-bit bus address shared by most OmniVision parts.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x36;
