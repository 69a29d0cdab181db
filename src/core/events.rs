//! Game events and the observer seam.
//!
//! The engine never talks to the user directly. Everything a surrounding
//! UI might care about - reveals, matches, the win, the flip-duration
//! warning - is delivered as a typed event to an injected observer, so
//! the core needs no blocking dialog primitive and the win has an
//! explicit signal.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::config::FlipDuration;

/// Something observable happened in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A face-down card was flipped face up by a click.
    CardRevealed {
        /// The revealed card.
        card: CardId,
    },

    /// The two revealed cards share an identity and are now matched.
    /// They stay face-up in place; no grid rebuild happens.
    MatchFound {
        /// First revealed card of the pair.
        first: CardId,
        /// Second revealed card of the pair.
        second: CardId,
    },

    /// The two revealed cards differ. They stay visible for one more
    /// flip duration, then [`GameEvent::CardsHidden`] follows.
    MatchFailed {
        /// First revealed card.
        first: CardId,
        /// Second revealed card.
        second: CardId,
    },

    /// A mismatched pair was flipped back face down.
    CardsHidden {
        /// First hidden card.
        first: CardId,
        /// Second hidden card.
        second: CardId,
    },

    /// Every card is matched. Terminal: only a reset leaves this state.
    GameWon,

    /// The game was reset: all faces down, deck reshuffled.
    GameReset,

    /// The configured flip duration was invalid and was coerced.
    /// Emitted exactly once, during game construction.
    FlipDurationClamped {
        /// Milliseconds the host asked for.
        requested_ms: f64,
        /// Duration actually in effect.
        effective: FlipDuration,
    },
}

/// Observer for game events.
///
/// Implementations must not call back into the game from `on_event`;
/// events are notifications, not extension points.
pub trait GameObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}

/// No-op observer for headless use.
impl GameObserver for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Collecting observer, mostly useful in tests.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
