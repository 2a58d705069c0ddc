//! Guess evaluation: the session's only state transition.

use std::cmp::Ordering;

use guessr_common::GameError;
use tracing::{debug, info};

use crate::outcome::{GameStatus, Outcome, OutcomeKind};

use super::GameSession;

impl GameSession {
    /// Charge one attempt for `guess` and classify it.
    ///
    /// A correct guess always wins, even on the last allowed attempt. A miss
    /// that uses up the budget is reported as [`OutcomeKind::Lost`] instead of
    /// its direction.
    pub fn evaluate_guess(&mut self, guess: i64) -> Result<Outcome, GameError> {
        if self.status.is_terminal() {
            debug!(session = %self.id, status = ?self.status, "guess on finished session");
            return Err(GameError::SessionTerminated);
        }

        self.attempts_used = self.attempts_used.saturating_add(1);

        let kind = match guess.cmp(&self.secret) {
            Ordering::Equal => OutcomeKind::Won,
            _ if self.budget_exhausted() => OutcomeKind::Lost,
            Ordering::Greater => OutcomeKind::TooHigh,
            Ordering::Less => OutcomeKind::TooLow,
        };

        let outcome = Outcome::new(kind, self.secret, self.attempts_used);
        self.status = outcome.status;

        debug!(
            session = %self.id,
            guess,
            attempt = self.attempts_used,
            outcome = ?kind,
            "guess evaluated"
        );
        if self.status != GameStatus::InProgress {
            info!(
                session = %self.id,
                status = ?self.status,
                attempts = self.attempts_used,
                "game finished"
            );
        }

        Ok(outcome)
    }

    fn budget_exhausted(&self) -> bool {
        self.attempt_limit
            .is_some_and(|limit| self.attempts_used >= limit.get())
    }
}
