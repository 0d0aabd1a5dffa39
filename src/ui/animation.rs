// SPDX-License-Identifier: MPL-2.0
//! Entrance animation timing for form cards.
//!
//! A card fades in when its screen is entered. The animation holds only a
//! start instant; progress is derived on demand, so redraws triggered by
//! the shared tick are enough to advance it.

use std::time::{Duration, Instant};

/// Duration of the fade-in.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(400);

/// Fade-in progress tracker, restarted on every screen switch.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    started_at: Instant,
}

impl Entrance {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Progress in `0.0..=1.0` at the given instant.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Current progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    /// Whether the fade has finished (no more redraws needed for it).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::new()
    }
}
