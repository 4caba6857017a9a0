//! ShowBox Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single polling loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │   HardwareAdapter (OutputSink)      ShowTimer (TimeSource)   │
//! │         │  IoxArray over I2C0/I2C1        │  esp_timer       │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          Sequencer (pure logic)                    │      │
//! │  │          cue table · cursor · drain                │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use embedded_hal::i2c::I2c;
use log::{info, warn};

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;

use showbox::adapters::hardware::HardwareAdapter;
use showbox::adapters::time::ShowTimer;
use showbox::config::ShowConfig;
use showbox::drivers::iox::IoxArray;
use showbox::pins;
use showbox::sequencer::Sequencer;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ShowBox v{}", env!("CARGO_PKG_VERSION"));

    let config = ShowConfig::default();
    config.validate()?;

    // ── 2. Panel bring-up ─────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c_cfg = I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ));
    // Pin choices are documented in pins.rs.
    let bus0 = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &i2c_cfg,
    )?;
    let bus1 = I2cDriver::new(
        peripherals.i2c1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        &i2c_cfg,
    )?;

    let mut iox = IoxArray::new([bus0, bus1]);
    iox.set_invert(config.invert);
    if config.wait_for_start {
        iox.set_direction(config.start_bank, config.start_slot, config.start_mask);
    }
    if iox.probe() == 0 {
        // Useful on the bench: the show still runs against the shadow
        // registers and everything is visible in the debug log.
        warn!("no expanders answered; playing into shadow registers only");
    }
    iox.configure()?;

    let mut hw = HardwareAdapter::new(iox);

    if config.wait_for_start {
        wait_for_start(&mut hw, &config);
    }

    // ── 3. Show loop ──────────────────────────────────────────
    let sequence = config.show.sequence()?;
    info!("playing '{}' ({} cues)", config.show.name(), sequence.len());

    let mut show = Sequencer::new(sequence, ShowTimer::new());
    show.reset();
    while show.advance(&mut hw) {
        thread::sleep(Duration::from_millis(u64::from(config.poll_interval_ms)));
    }

    if hw.fault_count() > 0 {
        warn!("show finished with {} sink fault(s)", hw.fault_count());
    } else {
        info!("show finished");
    }
    Ok(())
}

/// Block until the panel's start switch closes.
///
/// The switch shorts a pulled-up expander input to ground, so "pressed"
/// reads as a zero bit.
fn wait_for_start<B: I2c>(hw: &mut HardwareAdapter<B>, config: &ShowConfig) {
    info!(
        "holding for start switch at ({},{})",
        config.start_bank, config.start_slot
    );
    loop {
        match hw.iox_mut().read_inputs() {
            Err(e) => warn!("start switch poll: {e}"),
            Ok(()) => {
                let word = hw.iox_mut().input(config.start_bank, config.start_slot);
                if word & config.start_mask == 0 {
                    info!("start switch closed");
                    return;
                }
            }
        }
        thread::sleep(Duration::from_millis(50));
    }
}
