//! Card instances - one tile on the board.
//!
//! A `Card` is pure state: identity plus a face-up flag. It never talks to
//! the rendering surface; the board forwards face changes to whatever
//! surface is injected. Flip operations do no validation - the game
//! controller is responsible for the revealed/matched invariants.

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, CardId};

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable handle for this instance.
    pub id: CardId,

    /// Identity and artwork, shared with exactly one other card.
    pub face: CardFace,

    /// Is this card currently face up?
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self {
            id,
            face,
            face_up: false,
        }
    }

    /// Is this card face up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Invert the face-up flag.
    ///
    /// Pure state transition with no validation; callers hold the
    /// invariants (a matched card is never toggled, for instance).
    pub fn toggle_flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Force the card face down regardless of current state.
    ///
    /// Reset must end with every card hidden no matter how many flips it
    /// has seen. Toggling every card instead would re-reveal the ones
    /// already face down, so this sets the flag directly.
    pub fn reset_face(&mut self) {
        self.face_up = false;
    }

    /// Do this card and `other` form a pair?
    ///
    /// Identity string equality only; `face_up` plays no part.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.face.identity == other.face.identity
    }
}
