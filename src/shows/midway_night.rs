//! The evening show for the carnival midway panel.
//!
//! Bank 0 carries the midway itself (marquee, booths, string lights on
//! slots 0-5, ticket booth on 6); bank 1 carries the rides (wheel, carousel,
//! swings on slots 0-3).

use crate::sequencer::Cue;

pub static MIDWAY_NIGHT: &[Cue] = &[
    // Doors open: marquee up, ticket booth lit, house strings warm.
    Cue::write(0, 0, 0, 0x1100),
    Cue::write(0, 0, 1, 0x8F00),
    Cue::write(0, 0, 6, 0xBEEE),
    // The wheel spins up at 5s, the carousel follows 10s later.
    Cue::write(5_000, 1, 1, 0xFFFF),
    Cue::write(15_000, 0, 1, 0xFFFF),
    // 20s: full blackout beat before the chase numbers start.
    Cue::wait(20_000),
    Cue::write(0, 0, 0, 0x0000),
    Cue::write(0, 0, 1, 0x0000),
    Cue::write(0, 0, 2, 0x0000),
    Cue::write(0, 0, 3, 0x0000),
    Cue::write(0, 0, 4, 0x0000),
    Cue::write(0, 0, 5, 0x0000),
    Cue::write(0, 1, 0, 0x0000),
    Cue::write(0, 1, 1, 0x0000),
    Cue::write(0, 1, 2, 0x0000),
    Cue::write(0, 1, 3, 0x0000),
    // 25s: chase, odd lamps.
    Cue::wait(25_000),
    Cue::write(0, 0, 0, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 1, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 2, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 3, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 4, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 5, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 0, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 1, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 2, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 3, 0b1010_1010_1010_1010),
    // 30s: chase, even lamps.
    Cue::wait(30_000),
    Cue::write(0, 0, 0, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 1, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 2, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 3, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 4, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 5, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 0, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 1, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 2, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 3, 0b0101_0101_0101_0101),
    // 35s: back to odd.
    Cue::wait(35_000),
    Cue::write(0, 0, 0, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 1, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 2, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 3, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 4, 0b1010_1010_1010_1010),
    Cue::write(0, 0, 5, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 0, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 1, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 2, 0b1010_1010_1010_1010),
    Cue::write(0, 1, 3, 0b1010_1010_1010_1010),
    // 40s: and even again.
    Cue::wait(40_000),
    Cue::write(0, 0, 0, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 1, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 2, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 3, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 4, 0b0101_0101_0101_0101),
    Cue::write(0, 0, 5, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 0, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 1, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 2, 0b0101_0101_0101_0101),
    Cue::write(0, 1, 3, 0b0101_0101_0101_0101),
    // 50s: closing time, everything dark.
    Cue::wait(50_000),
    Cue::write(0, 0, 0, 0x0000),
    Cue::write(0, 0, 1, 0x0000),
    Cue::write(0, 0, 2, 0x0000),
    Cue::write(0, 0, 3, 0x0000),
    Cue::write(0, 0, 4, 0x0000),
    Cue::write(0, 0, 5, 0x0000),
    Cue::write(0, 1, 0, 0x0000),
    Cue::write(0, 1, 1, 0x0000),
    Cue::write(0, 1, 2, 0x0000),
    Cue::write(0, 1, 3, 0x0000),
];
