//! Commissioning walk for a freshly wired panel.
//!
//! Lights every register solid for a quarter second, one slot at a time,
//! bank 0 first.  A slot that stays dark is unwired or strapped to the
//! wrong address; a slot that flashes out of turn is strapped to another
//! slot's address.

use crate::sequencer::Cue;

pub static LAMP_TEST: &[Cue] = &[
    Cue::write(0, 0, 0, 0xFFFF),
    Cue::write(250, 0, 0, 0x0000),
    Cue::write(500, 0, 1, 0xFFFF),
    Cue::write(750, 0, 1, 0x0000),
    Cue::write(1_000, 0, 2, 0xFFFF),
    Cue::write(1_250, 0, 2, 0x0000),
    Cue::write(1_500, 0, 3, 0xFFFF),
    Cue::write(1_750, 0, 3, 0x0000),
    Cue::write(2_000, 0, 4, 0xFFFF),
    Cue::write(2_250, 0, 4, 0x0000),
    Cue::write(2_500, 0, 5, 0xFFFF),
    Cue::write(2_750, 0, 5, 0x0000),
    Cue::write(3_000, 0, 6, 0xFFFF),
    Cue::write(3_250, 0, 6, 0x0000),
    Cue::write(3_500, 0, 7, 0xFFFF),
    Cue::write(3_750, 0, 7, 0x0000),
    Cue::write(4_000, 1, 0, 0xFFFF),
    Cue::write(4_250, 1, 0, 0x0000),
    Cue::write(4_500, 1, 1, 0xFFFF),
    Cue::write(4_750, 1, 1, 0x0000),
    Cue::write(5_000, 1, 2, 0xFFFF),
    Cue::write(5_250, 1, 2, 0x0000),
    Cue::write(5_500, 1, 3, 0xFFFF),
    Cue::write(5_750, 1, 3, 0x0000),
    Cue::write(6_000, 1, 4, 0xFFFF),
    Cue::write(6_250, 1, 4, 0x0000),
    Cue::write(6_500, 1, 5, 0xFFFF),
    Cue::write(6_750, 1, 5, 0x0000),
    Cue::write(7_000, 1, 6, 0xFFFF),
    Cue::write(7_250, 1, 6, 0x0000),
    Cue::write(7_500, 1, 7, 0xFFFF),
    Cue::write(7_750, 1, 7, 0x0000),
];
