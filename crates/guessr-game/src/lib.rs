//! Number-guessing game core.
//!
//! Pure decision logic: a [`GameSession`] holds a secret and an optional
//! attempt budget, and [`GameSession::evaluate_guess`] classifies each guess.
//! No I/O happens here; reading guesses and printing messages belong to the
//! caller.

pub mod outcome;
pub mod range;
pub mod secret;
pub mod session;
pub mod variant;

pub use outcome::{GameStatus, GameSummary, Outcome, OutcomeKind};
pub use range::GuessRange;
pub use secret::{FixedSecret, SecretSource, SeededSource, ThreadRngSource};
pub use session::GameSession;
pub use variant::{GameVariant, CHALLENGE_ATTEMPTS};
