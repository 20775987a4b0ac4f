//! Render-loop pacing and frame-rate accounting.
//!
//! The pacer owns the target interval and a bounded ring of full cycle
//! durations (draw + sleep). It is plain owned state threaded through the
//! render loop; nothing here is ambient or shared.

use std::collections::VecDeque;
use std::time::Duration;

/// Frames in the trailing window used for the instantaneous rate.
const INSTANT_WINDOW: usize = 10;

#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    history: VecDeque<Duration>,
    capacity: usize,
}

impl FramePacer {
    pub fn new(target: Duration, capacity: usize) -> Self {
        Self {
            target,
            history: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// How long to sleep after a frame body that took `elapsed`. Never
    /// negative: an over-budget frame sleeps zero and the loop carries no
    /// debt into the next frame.
    pub fn sleep_budget(&self, elapsed: Duration) -> Duration {
        self.target.saturating_sub(elapsed)
    }

    /// Record one full cycle (body + sleep), evicting the oldest once full.
    pub fn record(&mut self, cycle: Duration) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(cycle);
    }

    fn rate_over<'a>(samples: impl Iterator<Item = &'a Duration>) -> Option<f64> {
        let mut total = Duration::ZERO;
        let mut count = 0u32;
        for sample in samples {
            total += *sample;
            count += 1;
        }
        if count == 0 || total.is_zero() {
            return None;
        }
        Some(count as f64 / total.as_secs_f64())
    }

    /// Frames per second over the trailing window.
    pub fn instantaneous_fps(&self) -> Option<f64> {
        let start = self.history.len().saturating_sub(INSTANT_WINDOW);
        Self::rate_over(self.history.iter().skip(start))
    }

    /// Frames per second over the whole ring.
    pub fn average_fps(&self) -> Option<f64> {
        Self::rate_over(self.history.iter())
    }
}
