// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

/// Env var that picks the log level: `error`, `warn`, `info`, `debug` or `trace`. When
/// it is unset, set to `off`, or can't be parsed, logging is disabled.
pub const ENV_VAR_LOG_LEVEL: &str = "KILO_LOG_LEVEL";

/// Env var that picks the log file path. Defaults to [`DEFAULT_LOG_FILE_NAME`].
pub const ENV_VAR_LOG_FILE: &str = "KILO_LOG_FILE";

pub const DEFAULT_LOG_FILE_NAME: &str = "kilo_log.txt";

/// Configure the tracing logging to suit your needs.
///
/// The editor owns the whole screen while it runs, so there is no display writer here:
/// logs either go to a file, or nowhere.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn new_disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    /// Reads [`ENV_VAR_LOG_LEVEL`] and [`ENV_VAR_LOG_FILE`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(ENV_VAR_LOG_LEVEL).ok().as_deref(),
            std::env::var(ENV_VAR_LOG_FILE).ok().as_deref(),
        )
    }

    /// Same as [`Self::from_env`], with the env var values passed in.
    #[must_use]
    pub fn from_env_values(level: Option<&str>, file: Option<&str>) -> Self {
        let level_filter = level
            .map(str::trim)
            .and_then(|it| LevelFilter::from_str(it).ok())
            .unwrap_or(LevelFilter::OFF);

        if level_filter == LevelFilter::OFF {
            return Self::new_disabled();
        }

        let file = file
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .map(ToString::to_string);

        Self::new_file(file, level_filter)
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.writer_config != WriterConfig::None && self.level_filter != LevelFilter::OFF
    }
}
