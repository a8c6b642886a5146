use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, SignupError};

/// Initialize the logging system
///
/// Logs go to stderr in compact form. With `log_file`, JSON lines are also
/// written next to it, rotated daily (`signup.log` becomes
/// `signup.2026-10-15.log`).
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(file_appender(path)?)
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SignupError::Logging(e.to_string()))
}

fn default_directives(level: &str) -> String {
    format!("signup={}", level)
}

fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "signup".to_string());

    std::fs::create_dir_all(directory).map_err(|e| {
        SignupError::Logging(format!(
            "cannot create log directory {}: {}",
            directory.display(),
            e
        ))
    })?;

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix);
    if let Some(ext) = log_path.extension() {
        builder = builder.filename_suffix(ext.to_string_lossy().into_owned());
    }

    builder.build(directory).map_err(|e| {
        SignupError::Logging(format!(
            "cannot open log file in {}: {}",
            directory.display(),
            e
        ))
    })
}
