//! Delay strategies for the simulated downstream latency.
//!
//! The handler asks a strategy for a duration before every response.
//! Production uses `RandomDelay`; tests pass `NoDelay` or a closure.

use std::time::Duration;

use rand::Rng;

/// Default lower bound of the random delay, in seconds (inclusive).
pub const DEFAULT_MIN_DELAY_SECS: u64 = 1;
/// Default upper bound of the random delay, in seconds (inclusive).
pub const DEFAULT_MAX_DELAY_SECS: u64 = 3;

/// Produces the pause applied to one invocation.
pub trait DelayStrategy: Send + Sync {
    fn next_delay(&self) -> Duration;
}

impl<F> DelayStrategy for F
where
    F: Fn() -> Duration + Send + Sync,
{
    fn next_delay(&self) -> Duration {
        self()
    }
}

/// Whole-second delay drawn uniformly from `min_secs..=max_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomDelay {
    min_secs: u64,
    max_secs: u64,
}

impl RandomDelay {
    /// Creates a strategy over the inclusive range between the two bounds.
    /// The bounds may be given in either order.
    pub fn new(a: u64, b: u64) -> Self {
        RandomDelay {
            min_secs: a.min(b),
            max_secs: a.max(b),
        }
    }

    pub fn min_secs(&self) -> u64 {
        self.min_secs
    }

    pub fn max_secs(&self) -> u64 {
        self.max_secs
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_SECS, DEFAULT_MAX_DELAY_SECS)
    }
}

impl DelayStrategy for RandomDelay {
    fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }
}

/// Zero-length delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayStrategy for NoDelay {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
