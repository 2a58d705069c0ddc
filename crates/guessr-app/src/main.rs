mod cli;
mod console;

use std::path::Path;
use std::process::ExitCode;

use guessr_config::{ConfigOrigin, GuessrConfig, LoadedConfig, LogLevel};
use guessr_game::{GameSession, SeededSource, ThreadRngSource};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Build the log filter.
///
/// A non-empty `RUST_LOG` replaces the configured level as the base, so it can
/// raise or lower any target. A `--log-level` directive is layered on top of
/// either base; one that does not parse is ignored.
fn env_filter(cli_override: Option<&str>, rust_log: Option<&str>, level: LogLevel) -> EnvFilter {
    let base = match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(spec) => {
            EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(level.directive()))
        }
        None => EnvFilter::new(level.directive()),
    };

    match cli_override.map(str::parse::<Directive>) {
        Some(Ok(directive)) => base.add_directive(directive),
        _ => base,
    }
}

fn rust_log_from_env() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV).ok()
}

/// Resolve and read the config file.
fn load_config(path: Option<&Path>) -> guessr_common::Result<LoadedConfig> {
    Ok(guessr_config::load_config_from(path)?)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can shape the subscriber.
    let loaded = load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|loaded| loaded.config.logging.level)
        .unwrap_or_default();

    let rust_log = rust_log_from_env();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(
            args.log_level.as_deref(),
            rust_log.as_deref(),
            level,
        ))
        .init();

    tracing::info!("guessr v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(LoadedConfig {
            config,
            path,
            origin: ConfigOrigin::Existing,
        }) => {
            tracing::info!("loaded config from {}", path.display());
            config
        }
        Ok(LoadedConfig {
            config,
            path,
            origin: ConfigOrigin::Created,
        }) => {
            tracing::info!("no config found, created default at {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            GuessrConfig::default()
        }
    };
    tracing::debug!("effective config: {}", guessr_config::config_to_json(&config));

    let variant = args.variant.unwrap_or(config.game.variant);
    let session = match config.game.seed {
        Some(seed) => GameSession::new(variant, &mut SeededSource::new(seed)),
        None => GameSession::new(variant, &mut ThreadRngSource),
    };
    tracing::info!(session = %session.id(), variant = %variant, "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match console::play(session, stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            tracing::info!(
                session = %summary.id,
                status = ?summary.status,
                attempts = summary.attempts_used,
                "game over"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
