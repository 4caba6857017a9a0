//! Cue sequencer engine.
//!
//! A show is a chronologically ordered table of [`Cue`]s.  The main loop
//! polls [`Sequencer::advance`], which drains every cue whose trigger time
//! has elapsed — writing its value through the [`OutputSink`] — and then
//! yields until the next poll.  Polling cadence affects only how promptly a
//! due cue becomes visible, never whether or in what order it fires.
//!
//! ```text
//! ┌──────────┐   elapsed_ms()  ┌────────────────────┐  write()/commit()  ┌──────────┐
//! │TimeSource│───────────────▶│     Sequencer       │──────────────────▶│OutputSink│
//! └──────────┘                │  (cue table+cursor) │                    └──────────┘
//!                             └────────────────────┘
//! ```
//!
//! A [`Wait`](Action::Wait) cue performs no write; it exists so a burst of
//! zero-offset cues after it can share its trigger time without each row
//! re-stating the time.  The table ends when the slice ends — there is no
//! reserved end-of-table value, so no authored offset can collide with one.

use log::{debug, info};

use crate::app::ports::{OutputSink, TimeSource};

// ═══════════════════════════════════════════════════════════════
//  Cue table types
// ═══════════════════════════════════════════════════════════════

/// One scheduled effect: at `at_ms` after show start, apply `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Trigger time, milliseconds since show start.  Non-decreasing across
    /// the table; a run of equal times fires together in table order.
    pub at_ms: u32,
    /// What to do when the trigger time is reached.
    pub action: Action,
}

/// The effect a cue applies when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write `value` to the expander register at `(bank, slot)`.
    Write { bank: u8, slot: u8, value: u16 },
    /// No output.  Re-anchors the timeline for the zero-offset cues that
    /// follow.
    Wait,
}

impl Cue {
    /// A register write firing `at_ms` after show start.
    pub const fn write(at_ms: u32, bank: u8, slot: u8, value: u16) -> Self {
        Self {
            at_ms,
            action: Action::Write { bank, slot, value },
        }
    }

    /// A timeline anchor firing `at_ms` after show start.
    pub const fn wait(at_ms: u32) -> Self {
        Self {
            at_ms,
            action: Action::Wait,
        }
    }
}

/// Rejected cue tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// `cues[index]` triggers earlier than its predecessor.
    OffsetsOutOfOrder { index: usize },
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OffsetsOutOfOrder { index } => {
                write!(f, "cue {index} triggers earlier than its predecessor")
            }
        }
    }
}

impl core::error::Error for SequenceError {}

/// An ordered, validated cue table.
///
/// Construction checks that trigger times are non-decreasing, so a
/// mis-authored table is rejected before it can misbehave mid-show.  An
/// empty table is valid and plays as an immediately finished show.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a> {
    cues: &'a [Cue],
}

impl<'a> Sequence<'a> {
    /// Validate and wrap a cue table.
    pub fn new(cues: &'a [Cue]) -> Result<Self, SequenceError> {
        for (index, pair) in cues.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(SequenceError::OffsetsOutOfOrder { index: index + 1 });
            }
        }
        Ok(Self { cues })
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    fn cues(&self) -> &'a [Cue] {
        self.cues
    }
}

// ═══════════════════════════════════════════════════════════════
//  Sequencer engine
// ═══════════════════════════════════════════════════════════════

/// Whether a show still has cues ahead of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Done,
}

/// Walks a [`Sequence`] against an owned [`TimeSource`].
///
/// Each instance carries its own cursor and timer, so several shows can run
/// side by side with no shared state.  Intended for exactly one caller:
/// `reset()` once, then poll `advance()` from a single loop.
pub struct Sequencer<'a, T: TimeSource> {
    sequence: Sequence<'a>,
    timer: T,
    /// Index of the next unprocessed cue, `0 ..= sequence.len()`.
    cursor: usize,
}

impl<'a, T: TimeSource> Sequencer<'a, T> {
    /// Create a sequencer over `sequence`.  Call [`reset`](Self::reset)
    /// before the first [`advance`](Self::advance) to arm the timer.
    pub fn new(sequence: Sequence<'a>, timer: T) -> Self {
        Self {
            sequence,
            timer,
            cursor: 0,
        }
    }

    /// Rewind to the start of the table and restart the elapsed timer.
    ///
    /// Unconditional; callable at any point to replay the show from the top.
    pub fn reset(&mut self) {
        self.timer.restart();
        self.cursor = 0;
        info!("show armed ({} cues)", self.sequence.len());
    }

    /// Drain every cue whose trigger time has elapsed, in table order.
    ///
    /// Returns `true` while cues remain ahead of the cursor, including the
    /// common no-due-work poll.  Returns `false` when the cursor already
    /// sits at the end of the table; that is terminal, regardless of
    /// further elapsed time, until [`reset`](Self::reset).
    ///
    /// Each qualifying `Write` cue gets its own `commit()`: a same-time
    /// burst is not batched into one commit, so the authored order of
    /// visible effects holds even across bank and slot boundaries.  Calling
    /// late is safe: the whole backlog drains in one call, nothing skipped,
    /// nothing reordered.
    pub fn advance(&mut self, sink: &mut impl OutputSink) -> bool {
        let cues = self.sequence.cues();
        if self.cursor >= cues.len() {
            return false;
        }

        let elapsed = self.timer.elapsed_ms();
        while let Some(cue) = cues.get(self.cursor) {
            if elapsed < cue.at_ms {
                break;
            }
            match cue.action {
                Action::Write { bank, slot, value } => {
                    debug!(
                        "cue {} @{}ms: ({},{}) <- {:#06x}",
                        self.cursor, cue.at_ms, bank, slot, value
                    );
                    sink.write(bank, slot, value);
                    sink.commit();
                }
                Action::Wait => {}
            }
            self.cursor += 1;
        }

        if self.cursor >= cues.len() {
            info!("show complete ({} cues, {}ms)", cues.len(), elapsed);
        }
        true
    }

    pub fn state(&self) -> RunState {
        if self.cursor >= self.sequence.len() {
            RunState::Done
        } else {
            RunState::Running
        }
    }

    /// Index of the next unprocessed cue.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
