//! # Cycle Counter
//!
//! A monotonic per-instruction tick accumulator with a configured clock
//! rate. The counter is the source of truth for cycle-accuracy assertions;
//! the clock-rate conversion exists so a host can pace execution against
//! wall time, and is advisory only - it never affects observable state.

use std::time::Duration;

/// 64-bit tick accumulator tied to a configured clock frequency.
///
/// `RESET` zeroes the counter; every retired instruction charges its full
/// cycle cost (base cost plus any page-cross or branch-taken penalty).
/// There are no overflow guards: 64 bits outlast any realistic run.
///
/// # Examples
///
/// ```rust
/// use lib65c02::CycleCounter;
///
/// let mut cycles = CycleCounter::new(1.0); // 1 MHz
/// cycles.add(4);
/// assert_eq!(cycles.get(), 4);
/// assert_eq!(cycles.elapsed().as_nanos(), 4000); // 4 ticks at 1 MHz
/// ```
#[derive(Debug, Clone)]
pub struct CycleCounter {
    ticks: u64,
    mhz: f64,
}

impl CycleCounter {
    /// Creates a zeroed counter for the given clock frequency in MHz.
    pub fn new(mhz: f64) -> Self {
        Self { ticks: 0, mhz }
    }

    /// Charges `n` ticks.
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.ticks += n;
    }

    /// Returns the ticks accumulated since the last reset.
    #[inline]
    pub fn get(&self) -> u64 {
        self.ticks
    }

    /// Zeroes the counter.
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Returns the configured clock frequency in MHz.
    pub fn clock_mhz(&self) -> f64 {
        self.mhz
    }

    /// Reconfigures the clock frequency in MHz.
    pub fn set_clock_mhz(&mut self, mhz: f64) {
        self.mhz = mhz;
    }

    /// Emulated time consumed so far: `ticks * 1000 / MHz` nanoseconds.
    ///
    /// Advisory, for external pacing only.
    pub fn elapsed(&self) -> Duration {
        let nanos = (self.ticks as f64) * 1000.0 / self.mhz;
        Duration::from_nanos(nanos as u64)
    }
}

impl Default for CycleCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut cycles = CycleCounter::new(1.0);
        assert_eq!(cycles.get(), 0);

        cycles.add(2);
        cycles.add(3);
        assert_eq!(cycles.get(), 5);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut cycles = CycleCounter::new(1.0);
        cycles.add(100);
        cycles.reset();
        assert_eq!(cycles.get(), 0);
    }

    #[test]
    fn test_elapsed_scales_with_clock() {
        let mut cycles = CycleCounter::new(2.0); // 2 MHz: 500ns per tick
        cycles.add(10);
        assert_eq!(cycles.elapsed().as_nanos(), 5000);

        let mut slow = CycleCounter::new(0.001); // 1 kHz: 1ms per tick
        slow.add(3);
        assert_eq!(slow.elapsed().as_millis(), 3);
    }
}
