//! cdiff - prints a patch between two texts.
//!
//! This crate wires the diff engine to configuration and telemetry. The
//! binary loads [`infrastructure::config::Settings`], installs logging and
//! prints the result of [`app::render`].

/// Rendering of the configured diff.
pub mod app;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
