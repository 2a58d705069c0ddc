use std::path::PathBuf;

use clap::Parser;
use guessr_game::GameVariant;

/// guessr: guess the number between 1 and 100.
#[derive(Parser, Debug)]
#[command(name = "guessr", version, about)]
pub struct Args {
    /// Game variant: classic (guess until right) or challenge (8 tries).
    #[arg(short = 'v', long)]
    pub variant: Option<GameVariant>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. guessr=debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_all_defaults() {
        let args = Args::try_parse_from(["guessr"]).unwrap();
        assert!(args.variant.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn variant_flag_parses() {
        let args = Args::try_parse_from(["guessr", "--variant", "challenge"]).unwrap();
        assert_eq!(args.variant, Some(GameVariant::Challenge));

        let args = Args::try_parse_from(["guessr", "-v", "classic"]).unwrap();
        assert_eq!(args.variant, Some(GameVariant::Classic));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["guessr", "--variant", "impossible"]).is_err());
    }

    #[test]
    fn config_and_log_level_overrides() {
        let args = Args::try_parse_from([
            "guessr",
            "--config",
            "/tmp/guessr.toml",
            "--log-level",
            "guessr=debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/guessr.toml")));
        assert_eq!(args.log_level.as_deref(), Some("guessr=debug"));
    }
}
