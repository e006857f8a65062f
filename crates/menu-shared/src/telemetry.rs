//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Server telemetry: stdout plus a daily rolling file under `logs/`.
///
/// `RUST_LOG` overrides `default_filter`; `LOG_FORMAT=json` switches both
/// layers to JSON.
pub fn init_telemetry(default_filter: &str) -> Result<(), AppError> {
    let filter = env_filter(default_filter)?;
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("menu")
        .filename_suffix("log")
        .build("logs")
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    let result = match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stdout).with_target(true))
            .with(fmt::layer().json().with_writer(file_appender).with_target(true))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stdout).with_target(true))
            .with(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_ansi(false), // No colors in file
            )
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}

/// CLI telemetry: stderr only, so command output on stdout stays clean.
pub fn init_cli_telemetry(default_filter: &str) -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter)?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}

fn env_filter(default_filter: &str) -> Result<EnvFilter, AppError> {
    match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(default_filter),
    }
    .map_err(|e| AppError::TelemetryError(e.to_string()))
}
