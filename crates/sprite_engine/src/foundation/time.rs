//! Time management utilities
//!
//! The engine runs on a fixed tick: [`FrameClock`] paces the scene loop at a
//! constant rate, while [`Stopwatch`] measures how much of each frame the
//! simulation actually used.

use std::time::{Duration, Instant};

/// Fixed-rate frame pacer for the scene loop
pub struct FrameClock {
    period: Duration,
    deadline: Instant,
    ticks: u64,
    paced: bool,
}

impl FrameClock {
    /// Create a clock ticking at the given rate (ticks per second)
    pub fn new(ticks_per_second: u32) -> Self {
        let rate = ticks_per_second.max(1);
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(rate)),
            deadline: Instant::now(),
            ticks: 0,
            paced: true,
        }
    }

    /// Create a clock that never sleeps (headless and test runs)
    pub fn uncapped() -> Self {
        let mut clock = Self::new(u32::MAX);
        clock.paced = false;
        clock
    }

    /// Block until the next tick boundary and advance the tick counter
    pub fn tick(&mut self) {
        if self.paced {
            let now = Instant::now();
            if now < self.deadline {
                std::thread::sleep(self.deadline - now);
                self.deadline += self.period;
            } else {
                // fell behind; resync rather than bursting to catch up
                self.deadline = now + self.period;
            }
        }
        self.ticks += 1;
    }

    /// Ticks elapsed since the clock was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }

    /// Restart the stopwatch from zero
    pub fn restart(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = Duration::ZERO;
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current = self
            .start_time
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO);
        self.elapsed + current
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_clock_counts_ticks() {
        let mut clock = FrameClock::uncapped();
        assert_eq!(clock.ticks(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn test_paced_clock_waits_for_period() {
        let mut clock = FrameClock::new(1000);
        let start = Instant::now();
        for _ in 0..5 {
            clock.tick();
        }
        // five ticks at 1ms each; the first may fire immediately
        assert!(start.elapsed() >= Duration::from_millis(3));
    }

    #[test]
    fn test_stopwatch_accumulates() {
        let mut watch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(2));
        watch.stop();
        let after_stop = watch.elapsed();
        assert!(after_stop >= Duration::from_millis(2));

        std::thread::sleep(Duration::from_millis(2));
        // stopped watch does not keep counting
        assert_eq!(watch.elapsed(), after_stop);
    }
}
