//! ESP32 time adapter.
//!
//! Restartable monotonic millisecond counter backing the show timeline.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

use crate::app::ports::TimeSource;

/// Millisecond timer for the ESP32-S3 platform.
pub struct ShowTimer {
    #[cfg(target_os = "espidf")]
    epoch_us: u64,
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for ShowTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowTimer {
    #[cfg(target_os = "espidf")]
    pub fn new() -> Self {
        Self {
            epoch_us: (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl TimeSource for ShowTimer {
    #[cfg(target_os = "espidf")]
    fn elapsed_ms(&self) -> u32 {
        let now = (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64;
        (now.saturating_sub(self.epoch_us) / 1_000) as u32
    }

    #[cfg(not(target_os = "espidf"))]
    fn elapsed_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    #[cfg(target_os = "espidf")]
    fn restart(&mut self) {
        self.epoch_us = (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64;
    }

    #[cfg(not(target_os = "espidf"))]
    fn restart(&mut self) {
        self.start = std::time::Instant::now();
    }
}
