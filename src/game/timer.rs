//! Deferred comparison timers.
//!
//! The engine is single-threaded and cooperative: nothing blocks, and the
//! two delays in the rules (reveal-to-compare, mismatch-to-hide) are
//! expressed as timers handed to an injected [`TimerHost`]. The host's
//! event loop fires them back into
//! [`MemoryGame::on_timer_fired`](super::MemoryGame::on_timer_fired) after
//! the requested delay.
//!
//! ## Stale timers
//!
//! Hosts never cancel anything. Each timer carries the generation it was
//! scheduled under; a reset bumps the game's generation, so a timer that
//! fires after a reset no longer matches and is dropped. Without this
//! guard a pending comparison could re-match cards that were already
//! reshuffled.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Monotone token separating pre-reset timers from live ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Advance to the next generation.
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// Which suspension point a timer resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Both cards are revealed; compare them when this fires.
    CompareReveal,

    /// The revealed cards mismatched; hide them when this fires.
    HideMismatch,
}

/// A scheduled timer, opaque to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipTimer {
    /// What to do on firing.
    pub kind: TimerKind,

    /// Generation captured at schedule time.
    pub generation: Generation,
}

/// The deferral capability the game consumes.
///
/// `schedule` must return immediately; the host delivers the timer back
/// via `on_timer_fired` once `delay` has elapsed. Delivery order for
/// distinct timers must follow their deadlines, which the rules guarantee
/// never coincide (the second timer is only scheduled when the first
/// fires).
pub trait TimerHost {
    /// Request `timer` to be fired back after `delay`.
    fn schedule(&mut self, timer: FlipTimer, delay: Duration);
}

/// Host that drops every timer. Comparisons never resolve; only useful
/// where the game is driven manually.
impl TimerHost for () {
    fn schedule(&mut self, _timer: FlipTimer, _delay: Duration) {}
}

/// Collecting host: scheduled timers pile up for the test to fire by hand.
impl TimerHost for Vec<(FlipTimer, Duration)> {
    fn schedule(&mut self, timer: FlipTimer, delay: Duration) {
        self.push((timer, delay));
    }
}
