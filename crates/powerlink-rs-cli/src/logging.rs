// crates/powerlink-rs-cli/src/logging.rs

//! Logger installation for the command-line binary.

use crate::error_code::CliErrorCode;
use crate::reporter::Reporter;
use crate::result::CliResult;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Write log records to this file instead of stderr.
    pub file: Option<PathBuf>,
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
            module_path: false,
        }
    }
}

impl LogConfig {
    /// Debug-level logging with module paths.
    pub fn verbose() -> Self {
        Self {
            level: LevelFilter::Debug,
            file: None,
            module_path: true,
        }
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }
}

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` still overrides the configured level.
///
/// # Errors
/// `LogFileOpenFailed` if the log file cannot be opened, or a `Failure`
/// outcome if a global logger is already installed.
pub fn init_logging(config: &LogConfig, reporter: &Reporter<'_>) -> Result<(), CliResult> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.level)
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(config.module_path)
        .parse_default_env();

    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                CliResult::with_message(
                    CliErrorCode::LogFileOpenFailed,
                    reporter.message(CliErrorCode::LogFileOpenFailed, &[&path.display(), &e]),
                )
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().map_err(|e| reporter.format_fault(&e))?;
    log::debug!("Logging initialized with level: {:?}", config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;
    use crate::registry::ErrorCodeCrossReference;

    #[test]
    fn test_unopenable_log_file() {
        let table = ErrorCodeCrossReference::new();
        let reporter = Reporter::new(&table, Language::English);
        let config = LogConfig::default().with_file(Some(PathBuf::from("no/such/dir/cli.log")));
        let err = init_logging(&config, &reporter).unwrap_err();
        assert_eq!(err.kind(), CliErrorCode::LogFileOpenFailed);
        assert!(err.message().starts_with("Unable to open log file 'no/such/dir/cli.log'"));
    }

    #[test]
    fn test_verbose_config() {
        let config = LogConfig::verbose();
        assert_eq!(config.level, LevelFilter::Debug);
        assert!(config.module_path);
    }
}
