/// Configuration management.
pub mod config;
/// Logging setup.
pub mod telemetry;
