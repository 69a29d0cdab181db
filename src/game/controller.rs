//! The two-card comparison state machine.
//!
//! `MemoryGame` is the only stateful orchestrator: it owns the board, the
//! revealed/matched bookkeeping, and the timing rules. Everything external
//! is injected - the surface (via the board), the timer host, and the
//! event observer.
//!
//! ## States
//!
//! Observed through [`MemoryGame::phase`]:
//!
//! - `Idle`: nothing revealed; any face-down card accepts a click
//! - `OneRevealed`: one card up; a *different* face-down card accepts a click
//! - `Comparing`: two cards up, a timer pending; clicks are dropped, not
//!   queued
//! - `Won`: every card matched; terminal until reset
//!
//! ## Invariants
//!
//! - `revealed` holds at most 2 cards
//! - a matched card is never in `revealed`
//! - a card is face up iff revealed or matched, except during the mismatch
//!   window where both mismatched cards stay face up pending the auto-hide

use smallvec::SmallVec;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::cards::{CardFace, CardId, Deck};
use crate::core::{FlipDuration, GameConfig, GameEvent, GameObserver, GameRng};
use crate::surface::RenderSurface;

use super::timer::{FlipTimer, Generation, TimerHost, TimerKind};

/// Observable controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No cards revealed.
    Idle,
    /// One card revealed, waiting for its candidate partner.
    OneRevealed,
    /// Two cards revealed, comparison or auto-hide pending.
    Comparing,
    /// All cards matched.
    Won,
}

/// The memory game controller.
///
/// Type parameters are the three consumed capabilities: `S` draws
/// ([`RenderSurface`]), `T` defers ([`TimerHost`]), `O` listens
/// ([`GameObserver`]).
#[derive(Debug)]
pub struct MemoryGame<S, T, O> {
    board: Board<S>,
    timers: T,
    observer: O,
    revealed: SmallVec<[CardId; 2]>,
    matched: FxHashSet<CardId>,
    flip_duration: FlipDuration,
    generation: Generation,
}

impl<S, T, O> MemoryGame<S, T, O>
where
    S: RenderSurface,
    T: TimerHost,
    O: GameObserver,
{
    /// Create a game over an existing board.
    ///
    /// If the config's flip duration was coerced, emits
    /// [`GameEvent::FlipDurationClamped`] exactly once before anything
    /// else. Then resets the board: all faces down, shuffled, rendered.
    pub fn new(mut board: Board<S>, config: &GameConfig, timers: T, mut observer: O) -> Self {
        if config.flip_duration_clamped {
            warn!(
                requested_ms = config.requested_ms,
                effective_ms = config.flip_duration.as_millis(),
                "flip duration out of range; coerced to minimum"
            );
            observer.on_event(&GameEvent::FlipDurationClamped {
                requested_ms: config.requested_ms,
                effective: config.flip_duration,
            });
        }

        board.reset();

        Self {
            board,
            timers,
            observer,
            revealed: SmallVec::new(),
            matched: FxHashSet::default(),
            flip_duration: config.flip_duration,
            generation: Generation::default(),
        }
    }

    /// Create a game from pair faces: the deck duplicates each face once.
    ///
    /// The shuffle RNG is seeded from `config.seed`.
    pub fn with_faces(
        faces: &[CardFace],
        config: &GameConfig,
        surface: S,
        timers: T,
        observer: O,
    ) -> Self {
        let deck = Deck::from_faces(faces);
        let board = Board::new(deck, GameRng::new(config.seed), surface);
        Self::new(board, config, timers, observer)
    }

    /// Handle a click on the tile for `id`.
    ///
    /// Silent no-ops: a pending comparison (two cards up), an unknown id,
    /// and any face-up card (already revealed or matched). Otherwise the
    /// card flips up and joins `revealed`; the second reveal schedules the
    /// comparison after one flip duration.
    pub fn on_card_clicked(&mut self, id: CardId) {
        if self.revealed.len() >= 2 {
            trace!(card = %id, "click dropped: comparison pending");
            return;
        }

        let Some(card) = self.board.card(id) else {
            trace!(card = %id, "click dropped: unknown card");
            return;
        };
        if card.is_face_up() {
            trace!(card = %id, "click dropped: card already face up");
            return;
        }

        debug!(card = %id, identity = %card.face.identity, "card revealed");
        self.board.set_face(id, true);
        self.revealed.push(id);
        self.observer.on_event(&GameEvent::CardRevealed { card: id });

        if self.revealed.len() == 2 {
            self.timers.schedule(
                FlipTimer {
                    kind: TimerKind::CompareReveal,
                    generation: self.generation,
                },
                self.flip_duration.duration(),
            );
        }
    }

    /// Handle a timer delivered back by the host.
    ///
    /// A timer scheduled before the last reset carries a stale generation
    /// and is dropped; hosts never need to cancel.
    pub fn on_timer_fired(&mut self, timer: FlipTimer) {
        if timer.generation != self.generation {
            trace!(?timer, current = ?self.generation, "stale timer dropped");
            return;
        }

        match timer.kind {
            TimerKind::CompareReveal => self.check_for_match(),
            TimerKind::HideMismatch => self.hide_mismatch(),
        }
    }

    /// Reset the session: all faces down, reshuffle, clear bookkeeping.
    ///
    /// Safe in any phase. Bumping the generation first makes any pending
    /// timer stale, so a comparison in flight cannot touch the new layout.
    pub fn reset_game(&mut self) {
        self.generation.bump();
        self.board.reset();
        self.matched.clear();
        self.revealed.clear();
        info!("game reset");
        self.observer.on_event(&GameEvent::GameReset);
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_won() {
            GamePhase::Won
        } else {
            match self.revealed.len() {
                0 => GamePhase::Idle,
                1 => GamePhase::OneRevealed,
                _ => GamePhase::Comparing,
            }
        }
    }

    /// Has every card been matched?
    ///
    /// An empty board never reports a win; there is nothing to play.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.board.is_empty() && self.matched.len() == self.board.len()
    }

    /// Currently revealed, unmatched cards (0 to 2).
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    /// How many cards are confirmed matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Is this card confirmed matched?
    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    /// The effective comparison delay.
    #[must_use]
    pub fn flip_duration(&self) -> FlipDuration {
        self.flip_duration
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    /// The injected timer host.
    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Mutable access to the timer host (hosts drain their own queues).
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// The injected observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn check_for_match(&mut self) {
        // Guarded on exactly two so a timer that somehow fires twice, or
        // after the pair already resolved, does nothing.
        if self.revealed.len() != 2 {
            return;
        }
        let (first, second) = (self.revealed[0], self.revealed[1]);

        let is_match = match (self.board.card(first), self.board.card(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        if is_match {
            debug!(%first, %second, "pair matched");
            self.revealed.clear();
            self.matched.insert(first);
            self.matched.insert(second);
            // Matched cards stay face up in place; no re-render.
            self.observer.on_event(&GameEvent::MatchFound { first, second });

            if self.is_won() {
                info!(pairs = self.matched.len() / 2, "all pairs matched");
                self.observer.on_event(&GameEvent::GameWon);
            }
        } else {
            debug!(%first, %second, "pair mismatched; hiding after delay");
            self.observer.on_event(&GameEvent::MatchFailed { first, second });
            self.timers.schedule(
                FlipTimer {
                    kind: TimerKind::HideMismatch,
                    generation: self.generation,
                },
                self.flip_duration.duration(),
            );
        }
    }

    fn hide_mismatch(&mut self) {
        if self.revealed.len() != 2 {
            return;
        }
        let (first, second) = (self.revealed[0], self.revealed[1]);

        self.board.set_face(first, false);
        self.board.set_face(second, false);
        self.revealed.clear();
        self.observer.on_event(&GameEvent::CardsHidden { first, second });
    }
}
