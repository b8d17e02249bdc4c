//! Frame pacing.

use std::time::{Duration, Instant};

/// Called once per frame by the run loop.
pub trait FramePacer {
    /// Block until the current frame's time slot is over; returns the time
    /// since the previous call.
    fn wait(&mut self) -> Duration;
}

/// Caps the frame rate by sleeping out whatever is left of each frame.
pub struct FrameLimiter {
    target: Duration,
    previous: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / fps.max(1),
            previous: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }
}

impl FramePacer for FrameLimiter {
    fn wait(&mut self) -> Duration {
        let mut delta = self.previous.elapsed();
        if delta < self.target {
            std::thread::sleep(self.target - delta);
            delta = self.previous.elapsed();
        }
        self.previous = Instant::now();
        delta
    }
}

/// Never waits. Used by headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl FramePacer for Unpaced {
    fn wait(&mut self) -> Duration {
        Duration::ZERO
    }
}
