//! Card identity and face data.
//!
//! A `CardFace` is the static half of a card: the identity string that
//! matching compares, and a reference to the artwork the rendering surface
//! shows when the card is face up. A deck holds exactly two cards per face.

use serde::{Deserialize, Serialize};

/// Stable handle for one card instance within a session.
///
/// Ids survive shuffles (positions move, ids don't), so rendering surfaces
/// and click routing key on `CardId` rather than on grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static face data shared by the two cards of a pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Identity string; matching is equality on this field alone.
    pub identity: String,

    /// Artwork reference (path, URL, sprite key - opaque to the engine).
    pub image: String,
}

impl CardFace {
    /// Create a face from an identity and an image reference.
    pub fn new(identity: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(3)), "Card(3)");
    }

    #[test]
    fn test_card_face_new() {
        let face = CardFace::new("Python", "img/python.png");
        assert_eq!(face.identity, "Python");
        assert_eq!(face.image, "img/python.png");
    }

    #[test]
    fn test_card_id_serde() {
        let id = CardId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
