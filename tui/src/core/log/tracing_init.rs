// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers for `tracing_config`, or `None` if it writes nowhere. This does
/// not install anything, see [`crate::Diagnostics::open`] for that.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let Some(file_layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )?
    else {
        return Ok(None);
    };

    let layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(tracing_config.get_level_filter()), file_layer];

    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(path) => {
            let file = rolling_file_appender_impl::try_create(&path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_thread_names(true)
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
    use crate::log::test_fixtures::temp_log_path;

    #[test]
    fn test_no_layers_when_disabled() {
        assert!(try_create_layers(&TracingConfig::disabled()).unwrap().is_none());
    }

    #[test]
    fn test_file_layer_creates_file() {
        let path = temp_log_path("file_layer");
        let config = TracingConfig::new_file(&path, LevelFilter::DEBUG);

        let layers = try_create_layers(&config).unwrap().unwrap();

        assert_eq!(layers.len(), 2);
        assert!(path.exists());
    }
}
