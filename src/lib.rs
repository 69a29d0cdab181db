//! # memory-pairs
//!
//! A memory-matching (card pairs) rule engine with pluggable rendering
//! surfaces. A grid of face-down cards is shuffled; the player reveals two
//! at a time; matches stay face up; mismatches re-hide after a delay.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine holds no ambient globals. Drawing,
//!    timing, and user notification are injected capabilities
//!    (`RenderSurface`, `TimerHost`, `GameObserver`).
//!
//! 2. **Cooperative, Single-Threaded**: Nothing blocks. The two delays in
//!    the rules are timers handed to the host; the host's event loop fires
//!    them back. Generation tokens make post-reset timers harmless.
//!
//! 3. **Deterministic**: Shuffling runs on a seeded ChaCha8 RNG, so a
//!    session's layout is reproducible.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, events
//! - `cards`: Card faces, instances, and deck construction
//! - `board`: Deck ordering, grid layout, surface mediation
//! - `surface`: The rendering capability the board consumes
//! - `game`: The two-card comparison state machine and its timers
//!
//! ## Quick Start
//!
//! ```
//! use memory_pairs::{CardFace, GameConfig, MemoryGame, NullSurface};
//!
//! let faces = vec![
//!     CardFace::new("Python", "img/python.png"),
//!     CardFace::new("Rust", "img/rust.png"),
//! ];
//!
//! // Headless: null surface, unit timer host and observer.
//! let mut game = MemoryGame::with_faces(
//!     &faces,
//!     &GameConfig::default().with_seed(42),
//!     NullSurface,
//!     (),
//!     (),
//! );
//!
//! let first = game.board().cards()[0].id;
//! game.on_card_clicked(first);
//! assert_eq!(game.revealed(), &[first]);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{FlipDuration, GameConfig, GameEvent, GameObserver, GameRng};

pub use crate::cards::{Card, CardFace, CardId, Deck, DeckError};

pub use crate::board::{column_count, Board};

pub use crate::surface::{CardView, NullSurface, RenderSurface};

pub use crate::game::{FlipTimer, GamePhase, Generation, MemoryGame, TimerHost, TimerKind};
