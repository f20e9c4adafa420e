use std::time::{Duration, Instant};

use super::FrameCounter;

pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Samples a [`FrameCounter`] on a fixed interval.
#[derive(Debug)]
pub struct FpsReporter {
    counter: FrameCounter,
    interval: Duration,
    last: u64,
    deadline: Instant,
}

impl FpsReporter {
    pub fn new(counter: FrameCounter, interval: Duration) -> Self {
        Self::starting_at(counter, interval, Instant::now())
    }

    /// Creates a reporter whose first deadline is `interval` after `start`.
    pub fn starting_at(counter: FrameCounter, interval: Duration, start: Instant) -> Self {
        let last = counter.get();
        Self {
            counter,
            interval,
            last,
            deadline: start + interval,
        }
    }

    /// Frames completed since the previous sample.
    pub fn sample(&mut self) -> u64 {
        let now = self.counter.get();
        let frames = now.wrapping_sub(self.last);
        self.last = now;
        frames
    }

    /// Samples once the deadline has passed and moves the deadline forward.
    ///
    /// A host that slept through several intervals gets one report covering
    /// all of them, and the next deadline is scheduled from `now`.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        if now < self.deadline {
            return None;
        }

        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
        Some(self.sample())
    }

    /// When the next report is due.
    pub fn next_deadline(&self) -> Instant {
        self.deadline
    }
}
