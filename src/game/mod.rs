//! Game controller: the comparison state machine and its timers.

pub mod controller;
pub mod timer;

pub use controller::{GamePhase, MemoryGame};
pub use timer::{FlipTimer, Generation, TimerHost, TimerKind};
