//! Deck construction and pair validation.
//!
//! A deck is the full ordered card collection for one session: even length,
//! every identity appearing exactly twice. Membership is fixed for the
//! session; only the order changes (shuffling).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;
use super::definition::{CardFace, CardId};

/// Deck validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Cards cannot pair up with an odd count.
    #[error("deck has odd length {0}; every card needs a partner")]
    OddLength(usize),

    /// An identity appeared a number of times other than two.
    #[error("identity {identity:?} appears {count} times; expected exactly 2")]
    UnpairedIdentity {
        /// The offending identity string.
        identity: String,
        /// How many cards carried it.
        count: usize,
    },
}

/// Ordered collection of paired cards for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck by duplicating each face exactly once.
    ///
    /// Every face yields two cards with the same identity and consecutive
    /// ids, so the result is a valid deck by construction. Cards start in
    /// input order; shuffle before play.
    #[must_use]
    pub fn from_faces(faces: &[CardFace]) -> Self {
        let cards = faces
            .iter()
            .enumerate()
            .flat_map(|(i, face)| {
                let first = CardId::new((i * 2) as u16);
                let second = CardId::new((i * 2 + 1) as u16);
                [Card::new(first, face.clone()), Card::new(second, face.clone())]
            })
            .collect();
        Self { cards }
    }

    /// Build a deck from pre-made cards, validating the pair invariant.
    ///
    /// ## Errors
    ///
    /// - [`DeckError::OddLength`] when the count is odd
    /// - [`DeckError::UnpairedIdentity`] when some identity does not
    ///   appear exactly twice
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() % 2 != 0 {
            return Err(DeckError::OddLength(cards.len()));
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in &cards {
            *counts.entry(card.face.identity.as_str()).or_default() += 1;
        }

        if let Some((identity, &count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(DeckError::UnpairedIdentity {
                identity: (*identity).to_string(),
                count,
            });
        }

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable view of the cards, for in-place shuffling.
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a card mutably by id.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Iterate over the cards in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
