use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow, bail};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// The terminal belongs to the UI, so logs go to a file.
pub fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordly")
        .join("wordly.log")
}

const DEFAULT_LEVEL: &str = "info";

/// Parse the configured level. A bare word that is not a level would be
/// taken as a target name and mute everything else, so it is refused.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    if !level.contains('=') && level.parse::<LevelFilter>().is_err() {
        bail!("unknown log level {level:?}");
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log directives {level:?}"))
}

/// The configured filter, or the default level along with the reason the
/// configured one was rejected.
pub fn configured_filter(level: &str) -> (EnvFilter, Option<anyhow::Error>) {
    match level_filter(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LEVEL), Some(err)),
    }
}

/// `RUST_LOG` wins over the configured level.
pub fn init(level: &str) -> Result<PathBuf> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))?;

    if let Some(err) = rejected {
        tracing::warn!(error = %format!("{err:#}"), "bad log_level, using {DEFAULT_LEVEL}");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in_app_dir() {
        let path = log_path();
        assert!(path.ends_with("wordly/wordly.log"));
    }

    #[test]
    fn test_level_filter_accepts_levels_and_directives() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("DEBUG").is_ok());
        assert!(level_filter("wordly=debug,warn").is_ok());
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        assert!(level_filter("loud").is_err());

        let (filter, rejected) = configured_filter("loud");
        assert_eq!(filter.to_string(), EnvFilter::new("info").to_string());
        assert!(format!("{:#}", rejected.unwrap()).contains("loud"));
    }

    #[test]
    fn test_malformed_directive_falls_back_to_default() {
        let (filter, rejected) = configured_filter("wordly=loud");
        assert_eq!(filter.to_string(), EnvFilter::new("info").to_string());
        assert!(rejected.is_some());

        let (_, rejected) = configured_filter("warn");
        assert!(rejected.is_none());
    }
}
