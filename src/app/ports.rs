//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sequencer (domain)
//! ```
//!
//! Driven adapters (the expander array, the system timer) implement these
//! traits.  The [`Sequencer`](crate::sequencer::Sequencer) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Output sink port (driven adapter: domain → panel hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the sequencer pushes lamp register values through this.
///
/// Both operations are infallible from the caller's point of view.  A bus
/// fault is the implementation's concern: it surfaces through the adapter's
/// own diagnostics (log + fault counter), never back through the sequencer,
/// which neither retries nor rolls back.
pub trait OutputSink {
    /// Store `value` into the logical register at `(bank, slot)`.
    ///
    /// The value is pending until [`commit`](Self::commit) pushes it to the
    /// physical device.
    fn write(&mut self, bank: u8, slot: u8, value: u16);

    /// Push all pending register values to the physical devices.
    fn commit(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Time source port (driven adapter: system timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic elapsed-time source.
///
/// `elapsed_ms` must be monotonically non-decreasing between calls to
/// [`restart`](Self::restart), with at least millisecond resolution.
pub trait TimeSource {
    /// Milliseconds since the last [`restart`](Self::restart).
    fn elapsed_ms(&self) -> u32;

    /// Rewind the elapsed counter to zero.
    fn restart(&mut self);
}
