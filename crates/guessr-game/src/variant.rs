//! The two game presets.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::range::GuessRange;

/// Number of guesses the challenge variant allows.
pub const CHALLENGE_ATTEMPTS: u32 = 8;

/// Which game to play. Both use [`GuessRange::STANDARD`]; only the attempt
/// budget differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    /// Guess until correct.
    #[default]
    Classic,
    /// Guess correctly within [`CHALLENGE_ATTEMPTS`] tries or lose.
    Challenge,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Classic, GameVariant::Challenge];

    pub fn range(self) -> GuessRange {
        GuessRange::STANDARD
    }

    /// `None` means unbounded.
    pub fn attempt_limit(self) -> Option<NonZeroU32> {
        match self {
            Self::Classic => None,
            Self::Challenge => NonZeroU32::new(CHALLENGE_ATTEMPTS),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Challenge => "challenge",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "challenge" => Ok(Self::Challenge),
            other => Err(format!(
                "unknown variant '{other}' (expected 'classic' or 'challenge')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        assert_eq!(GameVariant::default(), GameVariant::Classic);
    }

    #[test]
    fn classic_is_unbounded() {
        assert!(GameVariant::Classic.attempt_limit().is_none());
    }

    #[test]
    fn challenge_allows_eight() {
        let limit = GameVariant::Challenge.attempt_limit().unwrap();
        assert_eq!(limit.get(), 8);
    }

    #[test]
    fn both_use_standard_range() {
        for variant in GameVariant::ALL {
            assert_eq!(variant.range(), GuessRange::STANDARD);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("classic".parse::<GameVariant>(), Ok(GameVariant::Classic));
        assert_eq!(" Challenge ".parse::<GameVariant>(), Ok(GameVariant::Challenge));
        let err = "hard".parse::<GameVariant>().unwrap_err();
        assert!(err.contains("unknown variant 'hard'"));
    }

    #[test]
    fn display_matches_name() {
        for variant in GameVariant::ALL {
            assert_eq!(variant.to_string(), variant.name());
            assert_eq!(variant.name().parse::<GameVariant>(), Ok(variant));
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&GameVariant::Challenge).unwrap();
        assert_eq!(json, "\"challenge\"");
        let parsed: GameVariant = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(parsed, GameVariant::Classic);
    }
}
