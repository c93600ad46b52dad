//! Resettable elapsed-time sources used to gate spawns and boss steps
//! independently of the frame rate.

use std::time::{Duration, Instant};

pub trait Stopwatch {
    /// Seconds since construction or the last `reset`.
    fn elapsed_secs(&self) -> f64;
    fn reset(&mut self);
}

/// Wall-clock stopwatch driven by `Instant`.
#[derive(Clone, Debug)]
pub struct RealStopwatch {
    started: Instant,
}

impl RealStopwatch {
    pub fn new() -> Self {
        RealStopwatch {
            started: Instant::now(),
        }
    }
}

impl Default for RealStopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch for RealStopwatch {
    fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn reset(&mut self) {
        self.started = Instant::now();
    }
}

/// Manually advanced stopwatch for simulated time (replays, tests).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimStopwatch {
    elapsed: Duration,
}

impl SimStopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }
}

impl Stopwatch for SimStopwatch {
    fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
