//! Game state module - score, moves and the win/lose condition
//!
//! Two states: **Active** and **Over**. The game is over once moves run out
//! or the score reaches the target; reaching the target wins, and it takes
//! precedence when both happen on the same move.
//!
//! Events are queued in an outbox and handed to observers by whoever owns the
//! manager (see [`GameStateManager::drain_events`]).

use tracing::{info, warn};

use crate::events::GameEvent;
use crate::types::Outcome;

/// Moves and score bookkeeping for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateManager {
    score: u32,
    moves_left: u32,
    target_score: u32,
    /// Moves granted by the level, used when `reset` has no override.
    initial_moves: u32,
    outbox: Vec<GameEvent>,
}

impl GameStateManager {
    /// `moves_override` replaces `initial_moves` for this run when positive.
    pub fn new(target_score: u32, initial_moves: u32, moves_override: Option<u32>) -> Self {
        Self {
            score: 0,
            moves_left: pick_moves(initial_moves, moves_override),
            target_score,
            initial_moves,
            outbox: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn initial_moves(&self) -> u32 {
        self.initial_moves
    }

    pub fn is_game_over(&self) -> bool {
        self.moves_left == 0 || self.score >= self.target_score
    }

    pub fn has_won(&self) -> bool {
        self.score >= self.target_score
    }

    /// `Some` once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            None
        } else if self.has_won() {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Lose)
        }
    }

    /// Spend one move and bank `points`.
    ///
    /// Returns true while the game continues. Returns false, changing
    /// nothing, if the game was already over; returns false after applying
    /// the move if this move ended the game.
    pub fn try_consume_move(&mut self, points: u32) -> bool {
        if self.is_game_over() {
            warn!(points, "move attempted after game over");
            return false;
        }

        self.score = self.score.saturating_add(points);
        self.moves_left -= 1;
        self.notify_state_changed();

        match self.outcome() {
            Some(outcome) => {
                info!(score = self.score, outcome = outcome.as_str(), "game over");
                self.outbox.push(GameEvent::GameOver(outcome));
                false
            }
            None => true,
        }
    }

    /// Back to Active with a zero score.
    pub fn reset(&mut self, moves_override: Option<u32>) {
        self.moves_left = pick_moves(self.initial_moves, moves_override);
        self.score = 0;
        self.notify_state_changed();
        self.outbox.push(GameEvent::TargetScoreSet(self.target_score));
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn notify_state_changed(&mut self) {
        self.outbox.push(GameEvent::ScoreChanged(self.score));
        self.outbox.push(GameEvent::MovesChanged(self.moves_left));
    }
}

fn pick_moves(initial_moves: u32, moves_override: Option<u32>) -> u32 {
    match moves_override {
        Some(m) if m > 0 => m,
        _ => initial_moves,
    }
}
