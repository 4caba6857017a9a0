//! Property tests for the sequencer core.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32 targets.
//! On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use showbox::app::ports::{OutputSink, TimeSource};
use showbox::sequencer::{Action, Cue, Sequence, Sequencer};

// ── Test doubles ──────────────────────────────────────────────

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(u8, u8, u16)>,
}

impl OutputSink for RecordingSink {
    fn write(&mut self, bank: u8, slot: u8, value: u16) {
        self.writes.push((bank, slot, value));
    }

    fn commit(&mut self) {}
}

#[derive(Clone)]
struct ManualClock(Rc<Cell<u32>>);

impl TimeSource for ManualClock {
    fn elapsed_ms(&self) -> u32 {
        self.0.get()
    }

    fn restart(&mut self) {
        self.0.set(0);
    }
}

/// Play `cues` polling at each checkpoint time in turn; return the writes.
fn run_at(cues: &[Cue], checkpoints: &[u32]) -> Vec<(u8, u8, u16)> {
    let now = Rc::new(Cell::new(0));
    let mut seq = Sequencer::new(Sequence::new(cues).unwrap(), ManualClock(Rc::clone(&now)));
    seq.reset();
    let mut sink = RecordingSink::default();
    for &t in checkpoints {
        now.set(t);
        if !seq.advance(&mut sink) {
            break;
        }
    }
    sink.writes
}

// ── Strategies ────────────────────────────────────────────────

/// A valid table: non-decreasing trigger times, mixed write/wait rows.
fn arb_table() -> impl Strategy<Value = Vec<Cue>> {
    proptest::collection::vec(
        (0u32..500, 0u8..2, 0u8..8, any::<u16>(), any::<bool>()),
        0..40,
    )
    .prop_map(|rows| {
        let mut at_ms = 0u32;
        rows.into_iter()
            .map(|(delta, bank, slot, value, is_wait)| {
                at_ms += delta;
                if is_wait {
                    Cue::wait(at_ms)
                } else {
                    Cue::write(at_ms, bank, slot, value)
                }
            })
            .collect()
    })
}

// ── Properties ────────────────────────────────────────────────

proptest! {
    /// Draining from 0 to T in one late poll produces exactly the writes,
    /// in exactly the order, of draining in any number of smaller steps
    /// ending at T.  Polling cadence changes visibility timing only.
    #[test]
    fn split_drain_equals_single_drain(
        cues in arb_table(),
        mut steps in proptest::collection::vec(0u32..25_000, 1..12),
    ) {
        steps.sort_unstable();
        let total = *steps.last().unwrap();

        prop_assert_eq!(run_at(&cues, &[total]), run_at(&cues, &steps));
    }

    /// Once elapsed time covers the whole table, every write row has fired
    /// exactly once and wait rows never produced output.
    #[test]
    fn late_drain_fires_every_write_row(cues in arb_table()) {
        let writes = run_at(&cues, &[u32::MAX]);
        let expected: Vec<(u8, u8, u16)> = cues
            .iter()
            .filter_map(|c| match c.action {
                Action::Write { bank, slot, value } => Some((bank, slot, value)),
                Action::Wait => None,
            })
            .collect();
        prop_assert_eq!(writes, expected);
    }

    /// The cursor only ever moves forward while polling, whatever the
    /// (monotone) clock does.
    #[test]
    fn cursor_never_decreases(
        cues in arb_table(),
        mut steps in proptest::collection::vec(0u32..25_000, 1..20),
    ) {
        steps.sort_unstable();
        let now = Rc::new(Cell::new(0));
        let mut seq = Sequencer::new(
            Sequence::new(&cues).unwrap(),
            ManualClock(Rc::clone(&now)),
        );
        seq.reset();
        let mut sink = RecordingSink::default();

        let mut last_cursor = seq.cursor();
        for &t in &steps {
            now.set(t);
            let _ = seq.advance(&mut sink);
            prop_assert!(seq.cursor() >= last_cursor);
            last_cursor = seq.cursor();
        }
    }

    /// Construction accepts a table exactly when its trigger times are
    /// non-decreasing, and never panics on arbitrary ones.
    #[test]
    fn validation_matches_ordering(
        rows in proptest::collection::vec((any::<u32>(), any::<bool>()), 0..40),
    ) {
        let cues: Vec<Cue> = rows
            .iter()
            .map(|&(at_ms, is_wait)| {
                if is_wait { Cue::wait(at_ms) } else { Cue::write(at_ms, 0, 0, 0) }
            })
            .collect();
        let sorted = cues.windows(2).all(|p| p[0].at_ms <= p[1].at_ms);
        prop_assert_eq!(Sequence::new(&cues).is_ok(), sorted);
    }
}
