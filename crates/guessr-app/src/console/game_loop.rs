//! Prompt, read, evaluate, print, until the session is decided.

use std::io::{BufRead, Write};

use guessr_game::{GameSession, GameSummary};
use tracing::{debug, info};

use super::input::{parse_guess, read_line};
use super::render::{greeting, outcome_message, INVALID_GUESS, PROMPT};

/// Play `session` to completion over the given reader and writer.
///
/// Unparseable lines are answered with a hint and do not cost an attempt.
/// Closing the input ends the game early without an error.
pub fn play<R: BufRead, W: Write>(
    mut session: GameSession,
    mut input: R,
    mut output: W,
) -> guessr_common::Result<GameSummary> {
    writeln!(
        output,
        "{}",
        greeting(session.range(), session.attempt_limit())
    )?;

    while !session.is_terminal() {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output)?;
            info!(
                session = %session.id(),
                attempts = session.attempts_used(),
                "input closed before the game was decided"
            );
            break;
        };

        let guess = match parse_guess(&line) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(session = %session.id(), "rejected input: {e}");
                writeln!(output, "{INVALID_GUESS}")?;
                continue;
            }
        };

        let outcome = session.evaluate_guess(guess)?;
        writeln!(output, "{}", outcome_message(&outcome))?;
    }

    output.flush()?;
    Ok(session.summary())
}
