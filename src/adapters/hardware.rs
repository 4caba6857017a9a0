//! Panel hardware adapter.
//!
//! Implements [`OutputSink`] over the [`IoxArray`] driver.  The sequencer
//! side of the port is infallible: an address outside the array or a bus
//! fault is logged and counted here instead of propagating.  The shadow
//! register keeps the intended value, so a register that NACKed once heals
//! the next time a cue touches it.

use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::OutputSink;
use crate::drivers::iox::IoxArray;
use crate::pins::{IOX_BANKS, IOX_SLOTS};

pub struct HardwareAdapter<B> {
    iox: IoxArray<B>,
    faults: u32,
}

impl<B: I2c> HardwareAdapter<B> {
    pub fn new(iox: IoxArray<B>) -> Self {
        Self { iox, faults: 0 }
    }

    /// Bus-level access, e.g. for input polling in the start gate.
    pub fn iox_mut(&mut self) -> &mut IoxArray<B> {
        &mut self.iox
    }

    /// Addressing and bus faults swallowed since construction.
    pub fn fault_count(&self) -> u32 {
        self.faults
    }
}

impl<B: I2c> OutputSink for HardwareAdapter<B> {
    fn write(&mut self, bank: u8, slot: u8, value: u16) {
        if bank as usize >= IOX_BANKS || slot as usize >= IOX_SLOTS {
            warn!("write to out-of-range register ({bank},{slot}) dropped");
            self.faults += 1;
            return;
        }
        self.iox.stage(bank, slot, value);
    }

    fn commit(&mut self) {
        if let Err(e) = self.iox.commit() {
            warn!("commit: {e}");
            self.faults += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Bus whose ack behavior the test can flip mid-run via a kept handle.
    struct FlatBus {
        ack: Rc<Cell<bool>>,
    }

    impl ErrorType for FlatBus {
        type Error = ErrorKind;
    }

    impl I2c for FlatBus {
        fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.ack.get() {
                Ok(())
            } else {
                Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
            }
        }
    }

    fn adapter() -> (HardwareAdapter<FlatBus>, Rc<Cell<bool>>) {
        let ack = Rc::new(Cell::new(true));
        let mut iox = IoxArray::new([
            FlatBus {
                ack: Rc::clone(&ack),
            },
            FlatBus {
                ack: Rc::clone(&ack),
            },
        ]);
        iox.probe();
        (HardwareAdapter::new(iox), ack)
    }

    #[test]
    fn out_of_range_write_is_dropped_and_counted() {
        let (mut hw, _ack) = adapter();
        hw.write(9, 0, 0xFFFF);
        hw.write(0, 42, 0xFFFF);
        hw.commit();
        assert_eq!(hw.fault_count(), 2);
    }

    #[test]
    fn bus_fault_is_swallowed_and_counted() {
        let (mut hw, ack) = adapter();
        // Chips answered the probe, then the bus goes dead.
        ack.set(false);
        hw.write(0, 0, 0x1234);
        hw.commit();
        assert_eq!(hw.fault_count(), 1);
        // The intended value survives in the shadow for the next touch.
        assert_eq!(hw.iox_mut().output(0, 0), 0x1234);
    }

    #[test]
    fn in_range_write_reaches_the_shadow() {
        let (mut hw, _ack) = adapter();
        hw.write(1, 3, 0x5A5A);
        hw.commit();
        assert_eq!(hw.iox_mut().output(1, 3), 0x5A5A);
        assert_eq!(hw.fault_count(), 0);
    }
}
