//! Authored cue tables.
//!
//! Shows are compile-time constants: a human writes the table, the build
//! bakes it in, nothing parses anything at runtime.  Trigger times are
//! milliseconds from show start and must be non-decreasing down the table;
//! [`ShowId::sequence`] runs the construction-time validation.
//!
//! Authoring conventions:
//! - A `wait` row re-anchors the timeline so the burst of zero-offset rows
//!   after it fires together at that moment without repeating the time.
//! - Values are the intended logical lamp states.  Active-low wiring is
//!   corrected in the driver, never in the table.

use serde::{Deserialize, Serialize};

use crate::sequencer::{Sequence, SequenceError};

mod lamp_test;
mod midway_night;

pub use lamp_test::LAMP_TEST;
pub use midway_night::MIDWAY_NIGHT;

/// Selects an authored show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowId {
    /// The full evening panel show.
    MidwayNight,
    /// Commissioning walk: every register on, then off, one at a time.
    LampTest,
}

impl ShowId {
    pub fn name(self) -> &'static str {
        match self {
            Self::MidwayNight => "midway night",
            Self::LampTest => "lamp test",
        }
    }

    /// Validate and return the selected cue table.
    pub fn sequence(self) -> Result<Sequence<'static>, SequenceError> {
        match self {
            Self::MidwayNight => Sequence::new(MIDWAY_NIGHT),
            Self::LampTest => Sequence::new(LAMP_TEST),
        }
    }
}
