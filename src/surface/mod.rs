//! Rendering surface abstraction.
//!
//! The engine owns no DOM, no widgets, no globals. Whatever actually draws
//! the grid implements [`RenderSurface`] and is injected into the board at
//! construction. The surface is also responsible for delivering clicks:
//! when the user activates the tile for a `CardId`, the host forwards it to
//! [`MemoryGame::on_card_clicked`](crate::game::MemoryGame::on_card_clicked).
//!
//! ## Rebind contract
//!
//! `rebuild` replaces the whole grid. Implementations must drop any click
//! bindings from the previous build; a card re-rendered twice delivers one
//! click per user action, never two.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Render snapshot of one card, in deck order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Stable handle; surfaces key tiles on this.
    pub id: CardId,

    /// Identity string (alt text, debugging).
    pub identity: String,

    /// Artwork reference to show when face up.
    pub image: String,

    /// Current face.
    pub face_up: bool,
}

impl CardView {
    /// Snapshot a card.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        Self {
            id: card.id,
            identity: card.face.identity.clone(),
            image: card.face.image.clone(),
            face_up: card.is_face_up(),
        }
    }
}

/// The drawing capability the board consumes.
pub trait RenderSurface {
    /// Rebuild the whole grid: `columns` wide, tiles in `cards` order.
    ///
    /// Replaces any previous build, including its click bindings.
    fn rebuild(&mut self, columns: usize, cards: &[CardView]);

    /// Update a single tile's face without rebuilding the grid.
    fn set_face(&mut self, id: CardId, face_up: bool);
}

/// Surface that draws nothing. Headless games and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn rebuild(&mut self, _columns: usize, _cards: &[CardView]) {}

    fn set_face(&mut self, _id: CardId, _face_up: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFace;

    #[test]
    fn test_card_view_snapshots_state() {
        let mut card = Card::new(CardId::new(4), CardFace::new("Go", "go.png"));
        card.toggle_flip();

        let view = CardView::of(&card);
        assert_eq!(view.id, CardId::new(4));
        assert_eq!(view.identity, "Go");
        assert_eq!(view.image, "go.png");
        assert!(view.face_up);
    }
}
