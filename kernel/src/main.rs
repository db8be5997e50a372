//! cdiff entry point.

use anyhow::Context;
use cdiff::app;
use cdiff::infrastructure::{config::Settings, telemetry::TelemetryBuilder};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;

    TelemetryBuilder::new("cdiff", env!("CARGO_PKG_VERSION"))
        .with_log_level(settings.telemetry.log_level.as_str())
        .with_json(settings.telemetry.json)
        .init()
        .context("Failed to initialize telemetry")?;

    info!(
        mode = ?settings.diff.mode,
        format = ?settings.diff.format,
        "computing diff"
    );

    let output = app::render(&settings)?;
    println!("{output}");
    Ok(())
}
