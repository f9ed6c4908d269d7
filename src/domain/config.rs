// ============================================================================
// Diagnostics Configuration
// Selects where per-operation diagnostics of `Fixed` instances go
// ============================================================================

use crate::interfaces::{ConsoleEventHandler, EventHandler, LoggingEventHandler, NoOpEventHandler};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Environment variable consulted by [`DiagnosticsConfig::from_env`]
pub const DIAGNOSTICS_ENV_VAR: &str = "FIXED_DIAGNOSTICS";

// ============================================================================
// Sink Kind
// ============================================================================

/// Destination of diagnostic events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    /// Events are discarded
    Silent,

    /// Events go to `tracing` at debug level
    #[default]
    Tracing,

    /// One line per event on standard output (the exercise's behaviour)
    Console,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Silent => "silent",
            SinkKind::Tracing => "tracing",
            SinkKind::Console => "console",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" | "none" => Ok(SinkKind::Silent),
            "tracing" | "log" => Ok(SinkKind::Tracing),
            "console" | "stdout" => Ok(SinkKind::Console),
            other => Err(format!("Unknown diagnostics sink: {:?}", other)),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Diagnostics configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    pub sink: SinkKind,
}

impl DiagnosticsConfig {
    pub fn new(sink: SinkKind) -> Self {
        Self { sink }
    }

    /// Builder method: Set sink
    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    /// Read the sink from `FIXED_DIAGNOSTICS`; unset means the default.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var(DIAGNOSTICS_ENV_VAR) {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(std::env::VarError::NotPresent) => Self::from_env_value(None),
            Err(err) => Err(format!("{}: {}", DIAGNOSTICS_ENV_VAR, err)),
        }
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(Self::new(v.parse()?)),
            _ => Ok(Self::default()),
        }
    }

    /// Build the handler instances should be constructed with
    pub fn build_handler(&self) -> Arc<dyn EventHandler> {
        match self.sink {
            SinkKind::Silent => Arc::new(NoOpEventHandler),
            SinkKind::Tracing => Arc::new(LoggingEventHandler),
            SinkKind::Console => Arc::new(ConsoleEventHandler::stdout()),
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DiagnosticsConfig {
    /// Console output, one line per operation
    pub fn exercise() -> Self {
        Self::new(SinkKind::Console)
    }

    /// No diagnostics at all
    pub fn quiet() -> Self {
        Self::new(SinkKind::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tracing() {
        assert_eq!(DiagnosticsConfig::default().sink, SinkKind::Tracing);
    }

    #[test]
    fn test_presets() {
        assert_eq!(DiagnosticsConfig::exercise().sink, SinkKind::Console);
        assert_eq!(DiagnosticsConfig::quiet().sink, SinkKind::Silent);
        assert_eq!(
            DiagnosticsConfig::quiet().with_sink(SinkKind::Tracing),
            DiagnosticsConfig::default()
        );
    }

    #[test]
    fn test_sink_parsing() {
        assert_eq!("Console".parse::<SinkKind>(), Ok(SinkKind::Console));
        assert_eq!(" off ".parse::<SinkKind>(), Ok(SinkKind::Silent));
        assert_eq!("log".parse::<SinkKind>(), Ok(SinkKind::Tracing));
        assert!("syslog".parse::<SinkKind>().is_err());
    }

    #[test]
    fn test_sink_display_parses_back() {
        for sink in [SinkKind::Silent, SinkKind::Tracing, SinkKind::Console] {
            assert_eq!(sink.to_string().parse::<SinkKind>(), Ok(sink));
        }
    }

    #[test]
    fn test_env_value() {
        assert_eq!(
            DiagnosticsConfig::from_env_value(None),
            Ok(DiagnosticsConfig::default())
        );
        assert_eq!(
            DiagnosticsConfig::from_env_value(Some("  ")),
            Ok(DiagnosticsConfig::default())
        );
        assert_eq!(
            DiagnosticsConfig::from_env_value(Some("silent")),
            Ok(DiagnosticsConfig::quiet())
        );
        assert!(DiagnosticsConfig::from_env_value(Some("loud")).is_err());
    }

    #[test]
    fn test_build_handler_accepts_events() {
        use crate::domain::InstanceId;
        use crate::interfaces::{EventKind, FixedEvent};

        let handler = DiagnosticsConfig::quiet().build_handler();
        handler.on_event(FixedEvent::new(InstanceId::new(), EventKind::Dropped));
    }
}
