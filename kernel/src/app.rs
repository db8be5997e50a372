use anyhow::{Context, Result};
use cdiff_engine::diff::Diff;
use tracing::debug;

use crate::infrastructure::config::{DiffMode, OutputFormat, Settings};

/// Computes the configured diff and renders it in the configured format.
///
/// # Errors
///
/// Returns an error if line hashing rejects a fingerprint collision or the
/// edit script cannot be serialized.
pub fn render(settings: &Settings) -> Result<String> {
    let diff = Diff::with_config(
        &settings.input.first,
        &settings.input.second,
        settings.diff.engine_config(),
    );

    let output = match (settings.diff.mode, settings.diff.format) {
        (DiffMode::Verbose, OutputFormat::Patch) => diff.verbose_diff(),
        (DiffMode::Verbose, OutputFormat::Json) => {
            serde_json::to_string_pretty(&diff.char_script().into_forward())
                .context("Failed to serialize character script")?
        }
        (DiffMode::Line, OutputFormat::Patch) => {
            diff.line_diff().context("Failed to compute line diff")?
        }
        (DiffMode::Line, OutputFormat::Json) => {
            let lines = diff.line_script().context("Failed to compute line diff")?;
            serde_json::to_string_pretty(&lines.records())
                .context("Failed to serialize line records")?
        }
    };

    debug!(bytes = output.len(), "rendered output");
    Ok(output)
}
