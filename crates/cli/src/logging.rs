//! Diagnostics setup
//!
//! Everything goes to stderr: stdout carries the single result line.

use crate::cli::LogFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "semver_inc=warn";

/// Read when `--log-format` is not given
const LOG_FORMAT_ENV: &str = "SEMVER_INC_LOG_FORMAT";

/// Pick the log format: the flag wins, then the env var, then pretty.
///
/// An unreadable env value falls back to pretty instead of failing the run.
pub fn resolve_format(flag: Option<LogFormat>, env_value: Option<&str>) -> LogFormat {
    flag.or_else(|| env_value.and_then(|v| LogFormat::from_str(v.trim(), true).ok()))
        .unwrap_or_default()
}

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `semver_inc=warn`)
/// - `SEMVER_INC_LOG_FORMAT`: `pretty` or `json`, unless `--log-format` is given
pub fn init_logging(flag: Option<LogFormat>) -> Result<()> {
    let env_value = std::env::var(LOG_FORMAT_ENV).ok();
    let format = resolve_format(flag, env_value.as_deref());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("Failed to install tracing subscriber")
}
