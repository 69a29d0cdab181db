//! The board: deck ordering, grid presentation, face updates.
//!
//! The board owns the deck exclusively, plus the RNG that reorders it and
//! the injected surface that draws it. It knows nothing about the matching
//! rules; the game controller drives it through `set_face`, `shuffle`, and
//! `reset`.

use crate::cards::{Card, CardId, Deck};
use crate::core::GameRng;
use crate::surface::{CardView, RenderSurface};

use super::layout::column_count;

/// Deck owner and presentation mediator.
#[derive(Debug)]
pub struct Board<S> {
    deck: Deck,
    rng: GameRng,
    surface: S,
}

impl<S: RenderSurface> Board<S> {
    /// Create a board over a deck.
    ///
    /// The deck is presented as-is; call `reset` (the game constructor
    /// does) to shuffle before play.
    #[must_use]
    pub fn new(deck: Deck, rng: GameRng, surface: S) -> Self {
        Self { deck, rng, surface }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Current grid width, derived from deck size.
    #[must_use]
    pub fn column_count(&self) -> usize {
        column_count(self.deck.len())
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.card(id)
    }

    /// Cards in current display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Rebuild the surface grid from the current deck order.
    ///
    /// The surface's rebind contract guarantees the rebuild discards prior
    /// click bindings, so repeated renders never duplicate handlers.
    pub fn render(&mut self) {
        let views: Vec<CardView> = self.deck.iter().map(CardView::of).collect();
        self.surface.rebuild(column_count(self.deck.len()), &views);
    }

    /// Shuffle the deck in place, then render the new order.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(self.deck.cards_mut());
        self.render();
    }

    /// Force every card face down, then shuffle (which renders).
    pub fn reset(&mut self) {
        for card in self.deck.cards_mut() {
            card.reset_face();
        }
        self.shuffle();
    }

    /// Set one card's face and push the change to the surface.
    ///
    /// A targeted update, not a rebuild: matched cards stay face-up in
    /// place without the grid flickering through a re-render.
    pub fn set_face(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.deck.card_mut(id) {
            if card.is_face_up() != face_up {
                card.toggle_flip();
            }
            self.surface.set_face(id, face_up);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFace;
    use crate::surface::NullSurface;

    use std::cell::RefCell;
    use std::rc::Rc;

    /// Surface double that records every call.
    #[derive(Clone, Default)]
    struct Recording {
        rebuilds: Rc<RefCell<Vec<(usize, Vec<CardView>)>>>,
        faces: Rc<RefCell<Vec<(CardId, bool)>>>,
    }

    impl RenderSurface for Recording {
        fn rebuild(&mut self, columns: usize, cards: &[CardView]) {
            self.rebuilds.borrow_mut().push((columns, cards.to_vec()));
        }

        fn set_face(&mut self, id: CardId, face_up: bool) {
            self.faces.borrow_mut().push((id, face_up));
        }
    }

    fn deck(names: &[&str]) -> Deck {
        let faces: Vec<CardFace> = names
            .iter()
            .map(|n| CardFace::new(*n, format!("{n}.png")))
            .collect();
        Deck::from_faces(&faces)
    }

    #[test]
    fn test_shuffle_preserves_identity_multiset() {
        let mut board = Board::new(deck(&["a", "b", "c", "d"]), GameRng::new(3), NullSurface);

        let mut before: Vec<String> =
            board.cards().iter().map(|c| c.face.identity.clone()).collect();
        board.shuffle();
        let mut after: Vec<String> =
            board.cards().iter().map(|c| c.face.identity.clone()).collect();

        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_render_reports_columns_and_order() {
        let surface = Recording::default();
        let mut board = Board::new(deck(&["a", "b", "c"]), GameRng::new(0), surface.clone());

        board.render();

        let rebuilds = surface.rebuilds.borrow();
        assert_eq!(rebuilds.len(), 1);
        let (columns, views) = &rebuilds[0];
        assert_eq!(*columns, 2); // 6 cards -> 2 columns
        assert_eq!(views.len(), 6);
        let expected: Vec<CardId> = board.cards().iter().map(|c| c.id).collect();
        let got: Vec<CardId> = views.iter().map(|v| v.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_reset_forces_all_faces_down() {
        let surface = Recording::default();
        let mut board = Board::new(deck(&["a", "b"]), GameRng::new(1), surface);

        let id = board.cards()[0].id;
        board.set_face(id, true);
        assert!(board.card(id).unwrap().is_face_up());

        board.reset();
        assert!(board.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_set_face_updates_surface_without_rebuild() {
        let surface = Recording::default();
        let mut board = Board::new(deck(&["a"]), GameRng::new(1), surface.clone());
        let id = board.cards()[0].id;

        board.set_face(id, true);

        assert!(surface.rebuilds.borrow().is_empty());
        assert_eq!(&*surface.faces.borrow(), &[(id, true)]);
    }

    #[test]
    fn test_set_face_unknown_id_is_noop() {
        let surface = Recording::default();
        let mut board = Board::new(deck(&["a"]), GameRng::new(1), surface.clone());

        board.set_face(CardId::new(99), true);

        assert!(surface.faces.borrow().is_empty());
    }

    #[test]
    fn test_set_face_is_idempotent_on_state() {
        let mut board = Board::new(deck(&["a"]), GameRng::new(1), NullSurface);
        let id = board.cards()[0].id;

        board.set_face(id, true);
        board.set_face(id, true); // Second call must not toggle back down
        assert!(board.card(id).unwrap().is_face_up());
    }

    #[test]
    fn test_shuffle_renders() {
        let surface = Recording::default();
        let mut board = Board::new(deck(&["a", "b"]), GameRng::new(1), surface.clone());

        board.shuffle();
        assert_eq!(surface.rebuilds.borrow().len(), 1);
    }
}
