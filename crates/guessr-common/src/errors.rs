use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

/// Misuse of a game session. None of these are reachable from a correctly
/// wired game loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("session already finished; no further guesses are accepted")]
    SessionTerminated,

    #[error("secret {secret} is outside the range [{low}, {high}]")]
    SecretOutOfRange { secret: i64, low: i64, high: i64 },
}

/// Raised by the input side before a guess ever reaches a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("not a whole number: {0:?}")]
    InvalidGuessFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GuessrError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Game(#[from] GameError),

    /// The console loop recovers from these itself; the variant lets other
    /// front ends surface a rejected guess through the one error type.
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
