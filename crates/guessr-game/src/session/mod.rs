//! A single game: the secret, the attempt budget, and where play stands.

mod evaluate;


use std::num::NonZeroU32;

use guessr_common::{GameError, SessionId};
use tracing::debug;

use crate::outcome::{GameStatus, GameSummary};
use crate::range::GuessRange;
use crate::secret::SecretSource;
use crate::variant::GameVariant;

/// Owns the state of one game. Mutated only through
/// [`GameSession::evaluate_guess`]; once the status is terminal the session
/// rejects further guesses.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    variant: GameVariant,
    range: GuessRange,
    secret: i64,
    attempt_limit: Option<NonZeroU32>,
    attempts_used: u32,
    status: GameStatus,
}

impl GameSession {
    /// Start a game, drawing the secret from `source`.
    pub fn new<S: SecretSource + ?Sized>(variant: GameVariant, source: &mut S) -> Self {
        let range = variant.range();
        let secret = range.clamp(source.pick(range));
        Self::build(variant, range, secret)
    }

    /// Start a game with a known secret. The secret must lie in the
    /// variant's range.
    pub fn with_secret(variant: GameVariant, secret: i64) -> Result<Self, GameError> {
        let range = variant.range();
        if !range.contains(secret) {
            return Err(GameError::SecretOutOfRange {
                secret,
                low: range.low(),
                high: range.high(),
            });
        }
        Ok(Self::build(variant, range, secret))
    }

    fn build(variant: GameVariant, range: GuessRange, secret: i64) -> Self {
        let session = Self {
            id: SessionId::new(),
            variant,
            range,
            secret,
            attempt_limit: variant.attempt_limit(),
            attempts_used: 0,
            status: GameStatus::InProgress,
        };
        debug!(
            session = %session.id,
            variant = %variant,
            range = %range,
            limit = ?session.attempt_limit,
            "session created"
        );
        session
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn range(&self) -> GuessRange {
        self.range
    }

    pub fn attempt_limit(&self) -> Option<NonZeroU32> {
        self.attempt_limit
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Guesses left before the game is lost, or `None` when unbounded.
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.attempt_limit
            .map(|limit| limit.get().saturating_sub(self.attempts_used))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id.clone(),
            variant: self.variant,
            status: self.status,
            attempts_used: self.attempts_used,
        }
    }
}
