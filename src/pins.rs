//! Pin and bus assignments for the ShowBox controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers or addresses.  Change a value here and it
//! propagates everywhere.

// ---------------------------------------------------------------------------
// Expander array geometry
// ---------------------------------------------------------------------------

/// Number of expander banks.  Each bank is one physical I²C controller on
/// the ESP32-S3 (I2C0 and I2C1), so banks can be flushed independently and
/// a wiring fault on one bus cannot stall the other.
pub const IOX_BANKS: usize = 2;

/// Expander slots per bank.  MCP23017 hardware addressing allows eight
/// devices per bus (A2..A0 straps).
pub const IOX_SLOTS: usize = 8;

/// Base I²C address of the MCP23017 family; slot `n` answers at `0x20 + n`.
pub const IOX_BASE_ADDR: u8 = 0x20;

// ---------------------------------------------------------------------------
// I²C buses
// ---------------------------------------------------------------------------

/// Bank 0 bus — I2C0.
pub const I2C0_SDA_GPIO: i32 = 14;
pub const I2C0_SCL_GPIO: i32 = 15;

/// Bank 1 bus — I2C1.
pub const I2C1_SDA_GPIO: i32 = 17;
pub const I2C1_SCL_GPIO: i32 = 18;

/// Bus clock.  The MCP23017 is rated to 1.7 MHz; 400 kHz fast-mode keeps
/// margin on the long ribbon runs behind the panel.
pub const I2C_FREQ_HZ: u32 = 400_000;
