//! Application core — pure domain logic, zero I/O.
//!
//! The sequencer consumes the outside world exclusively through the **port
//! traits** defined in [`ports`], keeping the show engine fully testable
//! without real peripherals.

pub mod ports;
