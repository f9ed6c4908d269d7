// ============================================================================
// Domain Models Module
// Contains value objects and configuration
// ============================================================================

pub mod config;
pub mod instance;

pub use config::{DiagnosticsConfig, SinkKind, DIAGNOSTICS_ENV_VAR};
pub use instance::InstanceId;
