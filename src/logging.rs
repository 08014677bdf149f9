use std::env;
use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use crate::constants::{ENV_LOG_DISABLE, ENV_LOG_LEVEL};

/// Install the global subscriber for a CLI run.
///
/// Level comes from `TWA_LOG_LEVEL`, then `RUST_LOG`, then `verbosity`.
/// Logs always go to stderr; with `log_file` they are also appended to that
/// file. The returned guard must live until exit so buffered lines get flushed.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    if env_flag(ENV_LOG_DISABLE) {
        return None;
    }

    let filter = match env::var(ENV_LOG_LEVEL) {
        Ok(level) if !level.trim().is_empty() => EnvFilter::new(level),
        _ => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity))),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let Some(path) = log_file else {
        Registry::default().with(filter).with(stderr_layer).init();
        return None;
    };

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = match path.file_name() {
        Some(name) => name.to_owned(),
        None => {
            eprintln!("Warning: log file path {} has no file name", path.display());
            Registry::default().with(filter).with(stderr_layer).init();
            return None;
        }
    };
    if let Err(err) = fs::create_dir_all(dir) {
        eprintln!(
            "Warning: failed to create log directory {}: {}",
            dir.display(),
            err
        );
        Registry::default().with(filter).with(stderr_layer).init();
        return None;
    }

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    Registry::default()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Some(guard)
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(value) => matches!(
            value.as_str(),
            "1" | "true" | "TRUE" | "yes" | "YES" | "on" | "ON"
        ),
        Err(_) => false,
    }
}
