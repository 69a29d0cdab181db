//! Core engine types: RNG, configuration, events.
//!
//! Everything here is UI-agnostic. Hosts configure the engine through
//! `GameConfig` and observe it through `GameObserver`.

pub mod config;
pub mod events;
pub mod rng;

pub use config::{FlipDuration, GameConfig};
pub use events::{GameEvent, GameObserver};
pub use rng::GameRng;
