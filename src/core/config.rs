//! Game configuration types.
//!
//! The only validated input in the whole engine is the flip duration: how
//! long a pair of revealed cards stays visible before the comparison (and,
//! on a mismatch, before the auto-hide). Out-of-range or non-finite values
//! are coerced to the minimum rather than rejected; the coercion is
//! reported so the game can warn the user exactly once.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between revealing the second card and resolving the comparison,
/// and again between a detected mismatch and the auto-hide.
///
/// Always within `[MIN_MS, MAX_MS]` by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipDuration(Duration);

impl FlipDuration {
    /// Lower bound in milliseconds. Coercion target for invalid input.
    pub const MIN_MS: u64 = 350;

    /// Upper bound in milliseconds.
    pub const MAX_MS: u64 = 3000;

    /// Default used when the host doesn't configure a duration.
    pub const DEFAULT_MS: u64 = 500;

    /// Build a flip duration from milliseconds, coercing invalid input.
    ///
    /// Non-finite values (NaN, infinities) and values outside
    /// `[MIN_MS, MAX_MS]` coerce to `MIN_MS`. The returned bool is true
    /// when coercion happened; the caller is responsible for surfacing a
    /// user-visible warning in that case.
    #[must_use]
    pub fn from_millis(ms: f64) -> (Self, bool) {
        let valid = ms.is_finite() && ms >= Self::MIN_MS as f64 && ms <= Self::MAX_MS as f64;
        if valid {
            (Self(Duration::from_millis(ms as u64)), false)
        } else {
            (Self(Duration::from_millis(Self::MIN_MS)), true)
        }
    }

    /// The underlying delay.
    #[must_use]
    pub fn duration(self) -> Duration {
        self.0
    }

    /// The delay in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }
}

impl Default for FlipDuration {
    fn default() -> Self {
        Self(Duration::from_millis(Self::DEFAULT_MS))
    }
}

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Comparison/auto-hide delay.
    pub flip_duration: FlipDuration,

    /// Whether `flip_duration` was coerced from an invalid request.
    /// The game constructor emits a warning event when set.
    pub flip_duration_clamped: bool,

    /// Requested milliseconds before coercion (for the warning message).
    pub requested_ms: f64,

    /// Shuffle seed. Fixed seeds give reproducible layouts.
    pub seed: u64,
}

impl GameConfig {
    /// Create a config with the requested flip duration in milliseconds.
    ///
    /// Invalid requests are coerced per [`FlipDuration::from_millis`] and
    /// recorded so the game can warn the user.
    #[must_use]
    pub fn new(flip_duration_ms: f64) -> Self {
        let (flip_duration, clamped) = FlipDuration::from_millis(flip_duration_ms);
        Self {
            flip_duration,
            flip_duration_clamped: clamped,
            requested_ms: flip_duration_ms,
            seed: 0,
        }
    }

    /// Set the shuffle seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(FlipDuration::DEFAULT_MS as f64)
    }
}
