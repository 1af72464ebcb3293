use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Fixed-interval ticker for the render loop.
///
/// Work done between two `wait` calls counts against the interval, so frames
/// start every `interval` unless a frame itself takes longer.
pub struct Pacer {
    interval: Duration,
    last_tick: Instant,
    last_frame: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
            last_frame: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time between the two most recent ticks.
    pub fn last_frame(&self) -> Duration {
        self.last_frame
    }

    /// Whether the previous frame ran past its deadline.
    ///
    /// A zero interval runs as fast as possible and is never behind.
    pub fn is_behind(&self) -> bool {
        !self.interval.is_zero() && self.last_frame > self.interval
    }

    /// Sleep until the next tick.
    pub fn wait(&mut self) {
        let spent = self.last_tick.elapsed();
        if let Some(left) = self.interval.checked_sub(spent) {
            sleep(left);
        }

        // late frames shift the schedule instead of shortening the next interval
        let tick = Instant::now();
        self.last_frame = tick - self.last_tick;
        self.last_tick = tick;
    }
}
