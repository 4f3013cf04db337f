//! Telemetry module
//!
//! Diagnostics go to tracing on stderr; the report sinks carry only the
//! rendered report.

mod logging;

pub use logging::init_logging;

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level)
}
