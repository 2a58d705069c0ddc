//! Text for everything the game prints.

use std::num::NonZeroU32;

use guessr_game::{GuessRange, Outcome, OutcomeKind};

pub const PROMPT: &str = "New guess: ";
pub const INVALID_GUESS: &str = "Please enter a whole number.";

/// Opening line(s). The bounded game also announces its budget.
pub fn greeting(range: GuessRange, limit: Option<NonZeroU32>) -> String {
    let intro = format!(
        "I'm thinking of a number between {} and {}.",
        range.low(),
        range.high()
    );
    match limit {
        None => format!("{intro} Can you guess what it is?"),
        Some(limit) => format!("{intro}\nCan you guess what it is in {limit} tries or less?"),
    }
}

pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome.kind {
        OutcomeKind::TooHigh => "Nope, too high...".to_string(),
        OutcomeKind::TooLow => "Nope, too low...".to_string(),
        OutcomeKind::Won => "Congratulations, you got it!".to_string(),
        OutcomeKind::Lost => match outcome.secret {
            Some(secret) => format!(
                "Sorry, too many tries! Game over!\nThe secret number was {secret}!"
            ),
            None => "Sorry, too many tries! Game over!".to_string(),
        },
    }
}
