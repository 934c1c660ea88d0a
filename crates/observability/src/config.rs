//! Configuration for observability

use std::sync::Arc;

/// Sink for log lines (e.g. TUI log screen). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Default filter when neither the config nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Enable console (stderr) output
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "debug", "whosthere_theme=debug")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line.
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for log lines. Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads `WHOSTHERE_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let log_level = std::env::var("WHOSTHERE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        Self {
            log_level,
            ..Self::default()
        }
    }

    /// Filter directive that will be used.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ObservabilityConfig::new()
            .with_console(false)
            .with_log_level("debug")
            .with_log_sink(Arc::new(|_line| {}));
        assert!(!config.enable_console);
        assert_eq!(config.effective_log_level(), "debug");
        assert!(config.log_sink.is_some());
    }

    #[test]
    fn default_level_is_info() {
        let config = ObservabilityConfig::default();
        assert!(config.enable_console);
        assert_eq!(config.effective_log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn debug_hides_sink() {
        let config = ObservabilityConfig::new().with_log_sink(Arc::new(|_line| {}));
        let out = format!("{config:?}");
        assert!(out.contains("Some(LogSink)"));
    }
}
