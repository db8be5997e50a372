//! Patch rendering.
//!
//! Both renderers walk the edit script in forward order. The verbose form
//! prefixes every changed character with `+` or `-` and concatenates the
//! tokens with no separator. The line form emits one line per operation,
//! prefixed with `+`, `-` or nothing, followed by a space and the line text.
use tracing::debug;

use crate::diff::lines::{LineFingerprint, LineLookup};
use crate::diff::EditScript;

/// Returns the exact byte length of the verbose patch for `script`.
#[must_use]
pub fn verbose_len(script: &EditScript<char>) -> usize {
    script
        .forward()
        .map(|op| usize::from(op.kind().is_change()) + op.element().len_utf8())
        .sum()
}

/// Renders a character script as `+X`, `-X` and bare `X` tokens.
#[must_use]
pub fn render_verbose(script: &EditScript<char>) -> String {
    let mut patch = String::with_capacity(verbose_len(script));
    for op in script.forward() {
        if let Some(marker) = op.kind().marker() {
            patch.push(marker);
        }
        patch.push(*op.element());
    }
    patch
}

/// Renders a line script, recovering each line's text from `lookup`.
///
/// Lines are joined by `\n` with no trailing line feed. A fingerprint missing
/// from `lookup` contributes only its prefix.
#[must_use]
pub fn render_lines(script: &EditScript<LineFingerprint>, lookup: &LineLookup<'_>) -> String {
    let last = script.len().saturating_sub(1);
    let mut patch = String::new();
    for (idx, op) in script.forward().enumerate() {
        if let Some(marker) = op.kind().marker() {
            patch.push(marker);
        }
        let Some(text) = lookup.text(*op.element()) else {
            debug!(fingerprint = %op.element(), position = op.position(), "no text for line");
            continue;
        };
        patch.push(' ');
        patch.push_str(text);
        if idx != last {
            patch.push('\n');
        }
    }
    patch
}
