//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. A JSON-lines copy goes to a daily-rotated
//! file when a log directory can be determined. Stdout is left alone so that
//! `--json` output and the MCP protocol stay clean.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "PLUME_LOG_PATH";
const LOG_DIR_ENV: &str = "PLUME_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "plume.jsonl";

/// Where the file log goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory of the rotated log files; `None` disables the file layer.
    pub log_dir: Option<PathBuf>,
    /// Base file name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment, then `config_log_dir`,
    /// then the platform data directory.
    ///
    /// `PLUME_LOG_PATH` names the file itself and wins over everything else.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
            plume_core::config::user_data_dir().map(|d| d.join("logs").into_std_path_buf()),
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            let file_name = path
                .file_name()
                .map_or_else(|| DEFAULT_LOG_FILE.into(), |n| n.to_string_lossy().into_owned());
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(log_dir),
                file_name,
            };
        }

        Self {
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_dir)
                .or(data_dir),
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises the level one step (debug, then trace), and the configured
/// level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(directive(quiet, verbose, config_level))
}

fn directive(quiet: bool, verbose: u8, config_level: &str) -> String {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    level.to_string()
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive until
/// the program exits. A log directory that cannot be created disables the
/// file layer with a warning rather than failing the command.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let mut dir_error = None;
    let file = config.log_dir.as_ref().and_then(|dir| {
        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, &config.file_name);
                Some(tracing_appender::non_blocking(appender))
            }
            Err(e) => {
                dir_error = Some((dir.clone(), e));
                None
            }
        }
    });
    let (file_layer, guard) = match file {
        Some((writer, guard)) => (
            Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some((dir, e)) = dir_error {
        tracing::warn!(dir = %dir.display(), error = %e, "file logging disabled");
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/plume/run.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
            None,
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/plume")));
        assert_eq!(cfg.file_name, "run.jsonl");
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("plume.log")), None, None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
        assert_eq!(cfg.file_name, "plume.log");
    }

    #[test]
    fn directory_precedence() {
        let env = Some(PathBuf::from("/tmp/env"));
        let config = Some(PathBuf::from("/tmp/config"));
        let data = Some(PathBuf::from("/tmp/data"));

        let cfg = ObservabilityConfig::resolve(None, env.clone(), config.clone(), data.clone());
        assert_eq!(cfg.log_dir, env);
        let cfg = ObservabilityConfig::resolve(None, None, config.clone(), data.clone());
        assert_eq!(cfg.log_dir, config);
        let cfg = ObservabilityConfig::resolve(None, Some(PathBuf::new()), None, data.clone());
        assert_eq!(cfg.log_dir, data);
        assert_eq!(cfg.file_name, DEFAULT_LOG_FILE);
    }

    #[test]
    fn no_directory_disables_file_logging() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None, None).log_dir,
            None
        );
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(directive(false, 0, "info"), "info");
        assert_eq!(directive(false, 0, "warn"), "warn");
        assert_eq!(directive(false, 1, "info"), "debug");
        assert_eq!(directive(false, 3, "info"), "trace");
        assert_eq!(directive(true, 2, "info"), "error");
    }
}
