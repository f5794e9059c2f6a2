// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, try_create_layers};
use tracing::{Dispatch, dispatcher::DefaultGuard};
use tracing_subscriber::layer::SubscriberExt as _;

/// Diagnostics collector handed explicitly to the parts of the editor that log.
///
/// No global subscriber is ever installed. Whoever wants their `tracing` events to
/// land in the log file scopes them with [`Diagnostics::enter`] (current thread) or
/// passes [`Diagnostics::dispatch`] to [`tracing::dispatcher::with_default`] (other
/// threads) or `WithSubscriber::with_subscriber` (futures).
///
/// Lifecycle: [`Diagnostics::open`] at startup, [`Diagnostics::close`] at shutdown.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    dispatch: Dispatch,
    enabled: bool,
}

impl Diagnostics {
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn open(config: &TracingConfig) -> miette::Result<Self> {
        let Some(layers) = try_create_layers(config)? else {
            return Ok(Self::disabled());
        };

        let subscriber = tracing_subscriber::registry().with(layers);
        let it = Self {
            dispatch: Dispatch::new(subscriber),
            enabled: true,
        };

        it.with(|| {
            tracing::info!(
                message = "diagnostics opened",
                writer = ?config.writer_config,
                level = %config.level_filter
            );
        });

        Ok(it)
    }

    /// Drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
            enabled: false,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.enabled }

    #[must_use]
    pub fn dispatch(&self) -> Dispatch { self.dispatch.clone() }

    /// Route events on the current thread here until the guard is dropped.
    #[must_use]
    pub fn enter(&self) -> DefaultGuard { tracing::dispatcher::set_default(&self.dispatch) }

    /// Run `f` with events routed here.
    pub fn with<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// The file appender writes synchronously, so once the last event is recorded
    /// there is nothing left to flush.
    pub fn close(self) {
        self.with(|| tracing::info!(message = "diagnostics closed"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::test_fixtures::temp_log_path;
    use tracing_core::LevelFilter;

    #[test]
    fn test_events_land_in_file_only_while_entered() {
        let path = temp_log_path("diagnostics");
        let diagnostics =
            Diagnostics::open(&TracingConfig::new_file(&path, LevelFilter::DEBUG))
                .unwrap();
        assert!(diagnostics.is_enabled());

        {
            let _guard = diagnostics.enter();
            tracing::debug!(message = "inside", answer = 42);
        }
        tracing::debug!(message = "outside-of-guard");
        diagnostics.close();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("diagnostics opened"));
        assert!(contents.contains("inside"));
        assert!(contents.contains("answer=42"));
        assert!(contents.contains("diagnostics closed"));
        assert!(!contents.contains("outside-of-guard"));
    }

    #[test]
    fn test_disabled_drops_everything() {
        let diagnostics = Diagnostics::disabled();
        assert!(!diagnostics.is_enabled());
        diagnostics.with(|| tracing::error!(message = "dropped"));
        diagnostics.close();
    }
}
