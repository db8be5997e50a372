//! Property-based tests for the LCS table and rendered patches.
//!
//! Uses proptest to generate random texts and check that patches rebuild
//! both inputs, that self-diffs are all unchanged, and that the table keeps
//! its zero border and monotone growth.

use cdiff_engine::diff::{Diff, DiffOpKind, build_lcs_table};
use proptest::prelude::*;

/// Strategy for short texts over a small alphabet, so matches are common.
fn text_strategy() -> impl Strategy<Value = String> {
    "[abc\\n]{0,24}"
}

/// Strategy for texts with arbitrary characters, including multi-byte ones.
fn unicode_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

/// Splits a verbose patch back into the two texts it was built from.
fn rebuild(patch: &str) -> (String, String) {
    let (mut first, mut second) = (String::new(), String::new());
    let mut chars = patch.chars();
    while let Some(c) = chars.next() {
        match c {
            '+' => second.extend(chars.next()),
            '-' => first.extend(chars.next()),
            other => {
                first.push(other);
                second.push(other);
            }
        }
    }
    (first, second)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: unmarked plus `+` characters give the second text, unmarked
    /// plus `-` characters give the first.
    #[test]
    fn verbose_patch_rebuilds_both_texts(
        first in "[ab]{0,16}",
        second in "[ab]{0,16}",
    ) {
        let patch = Diff::new(&first, &second).verbose_diff();
        let (a, b) = rebuild(&patch);
        prop_assert_eq!(a, first);
        prop_assert_eq!(b, second);
    }

    /// Property: the character script projects onto both inputs, whatever
    /// characters they contain.
    #[test]
    fn char_script_projects_onto_inputs(
        first in unicode_strategy(),
        second in unicode_strategy(),
    ) {
        let script = Diff::new(&first, &second).char_script();
        let source: String = script
            .forward()
            .filter(|op| op.kind() != DiffOpKind::Addition)
            .map(|op| *op.element())
            .collect();
        let target: String = script
            .forward()
            .filter(|op| op.kind() != DiffOpKind::Deletion)
            .map(|op| *op.element())
            .collect();
        prop_assert_eq!(source, first);
        prop_assert_eq!(target, second);
    }

    /// Property: diffing a text against itself only yields unchanged
    /// operations, one per character and one per line.
    #[test]
    fn self_diff_is_all_unchanged(text in text_strategy()) {
        let diff = Diff::new(&text, &text);

        let chars = diff.char_script();
        prop_assert_eq!(chars.len(), text.chars().count());
        prop_assert_eq!(chars.unchanged_count(), chars.len());

        let lines = diff.line_script().unwrap();
        prop_assert_eq!(lines.script().len(), text.split('\n').count());
        prop_assert!(lines.script().forward().all(|op| op.kind() == DiffOpKind::Unchanged));
    }

    /// Property: row 0 and column 0 are zero, and cells never shrink when
    /// either prefix grows.
    #[test]
    fn table_border_and_monotonicity(
        first in text_strategy(),
        second in text_strategy(),
    ) {
        let (a, b): (Vec<char>, Vec<char>) = (first.chars().collect(), second.chars().collect());
        let table = build_lcs_table(&a, &b);

        for i in 0..table.column_count() {
            prop_assert_eq!(table.get(0, i), 0);
        }
        for j in 0..table.row_count() {
            prop_assert_eq!(table.get(j, 0), 0);
        }
        for j in 1..table.row_count() {
            for i in 1..table.column_count() {
                prop_assert!(table.get(j, i) >= table.get(j - 1, i));
                prop_assert!(table.get(j, i) >= table.get(j, i - 1));
            }
        }
    }

    /// Property: every line of a line patch carries a prefix, a space and a
    /// line of one of the inputs.
    #[test]
    fn line_patch_lines_come_from_inputs(
        first in text_strategy(),
        second in text_strategy(),
    ) {
        let patch = Diff::new(&first, &second).line_diff().unwrap();
        let known: Vec<&str> = first.split('\n').chain(second.split('\n')).collect();
        for line in patch.split('\n') {
            let body = line
                .strip_prefix("+ ")
                .or_else(|| line.strip_prefix("- "))
                .or_else(|| line.strip_prefix(' '));
            prop_assert!(body.is_some(), "unexpected line {:?}", line);
            prop_assert!(known.contains(&body.unwrap_or_default()));
        }
    }
}
