// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, WriterConfig, try_create_log_file_appender};
use crate::CommonResult;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber which is used for the whole process. Once this is set it
/// can't be unset.
///
/// Returns `Ok(false)` if the config disables logging, in which case nothing is
/// installed and every `tracing` macro is a no-op.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> CommonResult<bool> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(false);
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| miette::miette!("Could not install tracing subscriber: {err}"))?;

    Ok(true)
}

/// Thread local subscriber, which is only in effect until the returned guard is dropped.
/// Useful for tests.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> CommonResult<Option<tracing::subscriber::DefaultGuard>> {
    Ok(try_create_layers(tracing_config)?
        .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
}

/// Returns the layers. This does not initialize the tracing system. Returns `None` when
/// logging is disabled by the config.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..).map(|layers|
/// tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> CommonResult<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if !tracing_config.is_enabled() {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(tracing_log_file_path) => {
            let file = try_create_log_file_appender(tracing_log_file_path.as_str())?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;
    use serial_test::serial;

    #[test]
    fn test_disabled_config_has_no_layers() {
        let layers = try_create_layers(TracingConfig::new_disabled()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_thread_local_logging_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let guard = try_initialize_logging_thread_local(TracingConfig::new_file(
            Some(file_path_str),
            LevelFilter::INFO,
        ))
        .unwrap();
        assert!(guard.is_some());

        tracing::info!(message = "saved", bytes = 12);
        tracing::debug!(message = "filtered out");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("saved"));
        assert!(contents.contains("bytes=12"));
        assert!(!contents.contains("filtered out"));
    }

    /// This is the only test that touches the process wide subscriber.
    #[test]
    #[serial]
    fn test_global_logging_is_installed_once() {
        assert!(!try_initialize_logging_global(TracingConfig::new_disabled()).unwrap());

        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("global.log").to_str().unwrap().to_string();
        let config = TracingConfig::new_file(Some(file_path), LevelFilter::WARN);

        assert!(try_initialize_logging_global(config.clone()).unwrap());
        assert!(try_initialize_logging_global(config).is_err());
    }
}
