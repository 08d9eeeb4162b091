//! Splash dwell state.

use std::time::{Duration, Instant};

/// How long the splash stays up before handing over.
pub const SPLASH_DWELL: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct SplashState {
    started_at: Instant,
}

impl SplashState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// True once the dwell elapsed.
    pub fn done(&self) -> bool {
        self.started_at.elapsed() >= SPLASH_DWELL
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
