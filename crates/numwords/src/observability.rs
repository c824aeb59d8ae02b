//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for command
//! output. When a log file location is configured, a JSONL copy is written
//! through a non-blocking appender as well.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "NUMWORDS_LOG_PATH";
/// Log directory, rotated daily.
const LOG_DIR_ENV: &str = "NUMWORDS_LOG_DIR";
/// File name prefix used inside a log directory.
const LOG_FILE_PREFIX: &str = "numwords.jsonl";

/// Where, if anywhere, to write JSONL logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogFile {
    /// Stderr only.
    #[default]
    None,
    /// Append to exactly this file.
    Path(PathBuf),
    /// Daily-rotated files in this directory.
    Dir(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL log destination.
    pub log_file: LogFile,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// `NUMWORDS_LOG_PATH` wins over `NUMWORDS_LOG_DIR`, which wins over the
    /// configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = match (env_path, env_dir.or(config_dir)) {
            (Some(path), _) => LogFile::Path(path),
            (None, Some(dir)) => LogFile::Dir(dir),
            (None, None) => LogFile::None,
        };
        Self { log_file }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins; otherwise `-q` forces errors only and each `-v` raises
/// verbosity above the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive until
/// the program exits.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let appender = match &config.log_file {
        LogFile::None => None,
        LogFile::Path(path) => {
            let (dir, file_name) = split_log_path(path)?;
            create_log_dir(&dir)?;
            Some(tracing_appender::rolling::never(dir, file_name))
        }
        LogFile::Dir(dir) => {
            create_log_dir(dir)?;
            Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        }
    };

    let Some(appender) = appender else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, PathBuf::from(file_name)))
}

fn create_log_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
