//! Results of evaluating a guess.

use serde::{Deserialize, Serialize};

use guessr_common::SessionId;

use crate::variant::GameVariant;

/// Lifecycle of a session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Classification of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    TooHigh,
    TooLow,
    Won,
    /// Attempt budget ran out on this guess.
    Lost,
}

/// What one call to `evaluate_guess` produced.
///
/// `secret` is only populated for terminal outcomes so the caller can print
/// the final message without going back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub status: GameStatus,
    pub secret: Option<i64>,
    /// Attempts charged so far, including this guess.
    pub attempts_used: u32,
}

impl Outcome {
    pub(crate) fn new(kind: OutcomeKind, secret: i64, attempts_used: u32) -> Self {
        let (status, secret) = match kind {
            OutcomeKind::TooHigh | OutcomeKind::TooLow => (GameStatus::InProgress, None),
            OutcomeKind::Won => (GameStatus::Won, Some(secret)),
            OutcomeKind::Lost => (GameStatus::Lost, Some(secret)),
        };
        Self {
            kind,
            status,
            secret,
            attempts_used,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// End-of-game snapshot, used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: SessionId,
    pub variant: GameVariant,
    pub status: GameStatus,
    pub attempts_used: u32,
}
