//! Card system: faces, instances, and deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: Stable per-session handle for one card instance
//! - `CardFace`: Identity string plus artwork reference (two cards share one)
//! - `Card`: Runtime card state (face-up flag)
//! - `Deck`: Ordered collection with the exactly-two-per-identity invariant

pub mod card;
pub mod deck;
pub mod definition;

pub use card::Card;
pub use deck::{Deck, DeckError};
pub use definition::{CardFace, CardId};
