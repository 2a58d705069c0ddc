//! Reading and parsing guesses.

use std::io::{self, BufRead};

use guessr_common::InputError;

/// Parse one line of user input as a guess. Surrounding whitespace and a
/// leading sign are accepted; anything else is rejected with the original
/// text attached.
pub fn parse_guess(line: &str) -> Result<i64, InputError> {
    line.trim().parse().map_err(|_| {
        InputError::InvalidGuessFormat(line.trim_end_matches(['\r', '\n']).to_string())
    })
}

/// Read one line. `Ok(None)` means the input is closed.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}
