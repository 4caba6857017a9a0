//! MCP23017 I/O expander array driver.
//!
//! The panel's lamps hang off up to sixteen 16-bit expanders, addressed as
//! `(bank, slot)`: bank selects the I²C controller, slot the hardware
//! address strap on that bus.  The driver keeps shadow registers for every
//! slot and pushes them to the chips on demand:
//!
//! - [`stage`](IoxArray::stage) updates a shadow word and queues the slot,
//! - [`commit`](IoxArray::commit) flushes queued slots in staging order,
//!   one output-latch write per slot,
//! - [`read_inputs`](IoxArray::read_inputs) mirrors the input ports of
//!   slots configured with input bits.
//!
//! Expanders that did not answer at [`probe`](IoxArray::probe) time are
//! skipped by every later operation, so a partially populated panel runs
//! with whatever is fitted.
//!
//! Generic over [`embedded_hal::i2c::I2c`]: the same body drives the
//! esp-idf-hal bus on target and a scripted mock in host tests.

use embedded_hal::i2c::I2c;
use log::info;

use crate::error::BusError;
use crate::pins::{IOX_BANKS, IOX_BASE_ADDR, IOX_SLOTS};

// ── MCP23017 register map (IOCON.BANK = 0, sequential) ────────

const REG_IODIRA: u8 = 0x00;
const REG_GPPUA: u8 = 0x0C;
const REG_GPIOA: u8 = 0x12;
const REG_OLATA: u8 = 0x14;

/// Upper bound on queued-but-uncommitted registers: every slot at most once.
const PENDING_CAP: usize = IOX_BANKS * IOX_SLOTS;

// ── IoxArray ──────────────────────────────────────────────────

/// Shadow-register driver for the full expander array.
pub struct IoxArray<B> {
    buses: [B; IOX_BANKS],
    installed: [[bool; IOX_SLOTS]; IOX_BANKS],
    /// Direction words, `1` bits are inputs, `0` outputs.
    direction: [[u16; IOX_SLOTS]; IOX_BANKS],
    inputs: [[u16; IOX_SLOTS]; IOX_BANKS],
    outputs: [[u16; IOX_SLOTS]; IOX_BANKS],
    /// Bits to invert on the wire for active-low lamp wiring.  Shadow
    /// registers always hold the logical (intended) value.
    invert: [[u16; IOX_SLOTS]; IOX_BANKS],
    /// Slots staged since the last commit, in staging order, deduplicated.
    pending: heapless::Vec<(u8, u8), PENDING_CAP>,
}

impl<B: I2c> IoxArray<B> {
    pub fn new(buses: [B; IOX_BANKS]) -> Self {
        Self {
            buses,
            installed: [[false; IOX_SLOTS]; IOX_BANKS],
            direction: [[0; IOX_SLOTS]; IOX_BANKS],
            inputs: [[0; IOX_SLOTS]; IOX_BANKS],
            outputs: [[0; IOX_SLOTS]; IOX_BANKS],
            invert: [[0; IOX_SLOTS]; IOX_BANKS],
            pending: heapless::Vec::new(),
        }
    }

    /// Set the active-low inversion masks for the whole array.
    pub fn set_invert(&mut self, invert: [[u16; IOX_SLOTS]; IOX_BANKS]) {
        self.invert = invert;
    }

    /// Mark `(bank, slot)` bits as inputs.  Takes effect at
    /// [`configure`](Self::configure).
    pub fn set_direction(&mut self, bank: u8, slot: u8, word: u16) {
        let (b, s) = (bank as usize, slot as usize);
        if b >= IOX_BANKS || s >= IOX_SLOTS {
            debug_assert!(false, "direction for out-of-range slot");
            return;
        }
        self.direction[b][s] = word;
    }

    /// Address every possible slot on both buses and record which answer.
    ///
    /// Returns the number of expanders found.  Absent slots are silent on
    /// the bus (address NACK) and get skipped from here on.
    pub fn probe(&mut self) -> usize {
        let mut found = 0;
        for bank in 0..IOX_BANKS {
            for slot in 0..IOX_SLOTS {
                let addr = IOX_BASE_ADDR + slot as u8;
                // A bare register-pointer write; no chip state changes.
                let present = self.buses[bank].write(addr, &[REG_IODIRA]).is_ok();
                self.installed[bank][slot] = present;
                if present {
                    found += 1;
                }
            }
        }
        info!("iox: probe found {found} expander(s)");
        found
    }

    /// Push direction and pull-up configuration to every installed slot.
    ///
    /// Output latches are left untouched; the first committed show cue
    /// defines the visible state.
    pub fn configure(&mut self) -> Result<(), BusError> {
        for bank in 0..IOX_BANKS {
            for slot in 0..IOX_SLOTS {
                if !self.installed[bank][slot] {
                    continue;
                }
                let addr = IOX_BASE_ADDR + slot as u8;
                let dir = self.direction[bank][slot].to_le_bytes();
                self.buses[bank]
                    .write(addr, &[REG_IODIRA, dir[0], dir[1]])
                    .map_err(|_| BusError::Nack {
                        bank: bank as u8,
                        slot: slot as u8,
                    })?;
                if self.direction[bank][slot] != 0 {
                    // Pull up every input bit; panel switches close to ground.
                    self.buses[bank]
                        .write(addr, &[REG_GPPUA, dir[0], dir[1]])
                        .map_err(|_| BusError::Nack {
                            bank: bank as u8,
                            slot: slot as u8,
                        })?;
                }
            }
        }
        info!("iox: array configured");
        Ok(())
    }

    /// Store `value` in the output shadow of `(bank, slot)` and queue the
    /// slot for the next [`commit`](Self::commit).
    pub fn stage(&mut self, bank: u8, slot: u8, value: u16) {
        let (b, s) = (bank as usize, slot as usize);
        if b >= IOX_BANKS || s >= IOX_SLOTS {
            debug_assert!(false, "stage for out-of-range slot");
            return;
        }
        self.outputs[b][s] = value;
        if !self.pending.contains(&(bank, slot)) {
            // Cannot overflow: capacity equals the register count and
            // entries are deduplicated.
            let _ = self.pending.push((bank, slot));
        }
    }

    /// Flush queued slots to their output latches, in staging order.
    ///
    /// Uninstalled slots are dropped silently.  On a NACK the queue is
    /// still cleared — the failed value stays in the shadow and reaches the
    /// chip with that register's next staged write.
    pub fn commit(&mut self) -> Result<(), BusError> {
        let pending = core::mem::take(&mut self.pending);
        let mut first_err = None;
        for &(bank, slot) in &pending {
            let (b, s) = (bank as usize, slot as usize);
            if !self.installed[b][s] {
                continue;
            }
            let addr = IOX_BASE_ADDR + slot;
            let wire = (self.outputs[b][s] ^ self.invert[b][s]).to_le_bytes();
            if self.buses[b]
                .write(addr, &[REG_OLATA, wire[0], wire[1]])
                .is_err()
                && first_err.is_none()
            {
                first_err = Some(BusError::Nack { bank, slot });
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Refresh the input shadow of every installed slot that has input bits.
    pub fn read_inputs(&mut self) -> Result<(), BusError> {
        for bank in 0..IOX_BANKS {
            for slot in 0..IOX_SLOTS {
                if !self.installed[bank][slot] || self.direction[bank][slot] == 0 {
                    continue;
                }
                let addr = IOX_BASE_ADDR + slot as u8;
                let mut port = [0u8; 2];
                self.buses[bank]
                    .write_read(addr, &[REG_GPIOA], &mut port)
                    .map_err(|_| BusError::Nack {
                        bank: bank as u8,
                        slot: slot as u8,
                    })?;
                self.inputs[bank][slot] = u16::from_le_bytes(port);
            }
        }
        Ok(())
    }

    pub fn is_installed(&self, bank: u8, slot: u8) -> bool {
        self.installed[bank as usize][slot as usize]
    }

    /// Last mirrored input word of `(bank, slot)`.
    pub fn input(&self, bank: u8, slot: u8) -> u16 {
        self.inputs[bank as usize][slot as usize]
    }

    /// Current output shadow of `(bank, slot)` (logical, pre-inversion).
    pub fn output(&self, bank: u8, slot: u8) -> u16 {
        self.outputs[bank as usize][slot as usize]
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
