//! System configuration parameters
//!
//! All tunable parameters for the ShowBox controller.  Shipped as
//! compile-time defaults; the struct is serde-round-trippable so a future
//! provisioning channel can replace it wholesale.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pins::{IOX_BANKS, IOX_SLOTS};
use crate::shows::ShowId;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowConfig {
    /// Which authored show to play.
    pub show: ShowId,

    // --- Timing ---
    /// Sequencer poll interval (milliseconds).  Only affects how promptly a
    /// due cue becomes visible, never ordering.
    pub poll_interval_ms: u32,

    // --- Start gating ---
    /// Hold the show until the start switch closes instead of playing
    /// immediately at power-on.
    pub wait_for_start: bool,
    /// Expander input bit wired to the start switch.
    pub start_bank: u8,
    pub start_slot: u8,
    pub start_mask: u16,

    // --- Wiring ---
    /// Per-register wire inversion masks for active-low lamp wiring.  Cue
    /// tables always author the intended logical value; inversion is
    /// applied at the bus.
    pub invert: [[u16; IOX_SLOTS]; IOX_BANKS],
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            show: ShowId::MidwayNight,
            poll_interval_ms: 10, // 100 Hz, well under the coarsest cue spacing
            wait_for_start: false,
            start_bank: 0,
            start_slot: 7,
            start_mask: 0x0001,
            invert: [[0; IOX_SLOTS]; IOX_BANKS],
        }
    }
}

impl ShowConfig {
    /// Range-check the configuration.  Rejects values that would make the
    /// control loop spin or address registers outside the array.
    pub fn validate(&self) -> Result<(), Error> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll interval must be non-zero"));
        }
        if self.start_bank as usize >= IOX_BANKS || self.start_slot as usize >= IOX_SLOTS {
            return Err(Error::Config("start switch outside expander array"));
        }
        if self.wait_for_start && self.start_mask == 0 {
            return Err(Error::Config("start switch mask is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = ShowConfig::default();
        assert!(c.validate().is_ok());
        assert!(c.poll_interval_ms > 0);
        assert_eq!(c.invert, [[0; IOX_SLOTS]; IOX_BANKS]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut c = ShowConfig::default();
        c.invert[1][2] = 0x00FF;
        c.wait_for_start = true;
        let json = serde_json::to_string(&c).unwrap();
        let c2: ShowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.show, c2.show);
        assert_eq!(c.poll_interval_ms, c2.poll_interval_ms);
        assert_eq!(c.invert, c2.invert);
        assert_eq!(c.wait_for_start, c2.wait_for_start);
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let c = ShowConfig {
            poll_interval_ms: 0,
            ..ShowConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn start_switch_outside_array_rejected() {
        let c = ShowConfig {
            start_bank: IOX_BANKS as u8,
            ..ShowConfig::default()
        };
        assert!(c.validate().is_err());

        let c = ShowConfig {
            wait_for_start: true,
            start_mask: 0,
            ..ShowConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
