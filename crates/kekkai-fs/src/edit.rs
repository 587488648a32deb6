//! Ordered text edits with uniqueness checks and unified diff output.
//!
//! Each edit replaces exactly one occurrence of its anchor text. Anchors
//! that match zero or multiple times are rejected, and a failed edit aborts
//! the whole batch before anything is written back.

use std::path::Path;

use serde::Deserialize;
use similar::TextDiff;

use crate::error::{FsError, FsResult};
use crate::read::read_text;
use crate::write::write_text;

/// A single text replacement.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct EditOperation {
    /// Exact text to find. Must occur exactly once in the file.
    #[serde(rename = "oldText")]
    #[schemars(description = "Exact text to find (must occur exactly once)")]
    pub old_text: String,

    /// Replacement text.
    #[serde(rename = "newText")]
    #[schemars(description = "Text to replace it with")]
    pub new_text: String,
}

/// Apply `edits` to the file at `path` in order, returning a unified diff
/// of the overall change.
///
/// Each edit sees the result of the previous ones. All edits are validated
/// against the in-memory text before the file is touched, so a failure
/// partway through leaves the file exactly as it was. With `dry_run` set
/// the diff is computed but nothing is written.
pub async fn apply_edits(path: &Path, edits: &[EditOperation], dry_run: bool) -> FsResult<String> {
    let original = read_text(path).await?;
    let mut updated = original.clone();

    for edit in edits {
        let matches = updated.match_indices(edit.old_text.as_str()).count();
        if matches == 0 {
            return Err(FsError::text_not_found(&edit.old_text));
        }
        if matches > 1 {
            return Err(FsError::ambiguous_match(&edit.old_text));
        }
        updated = updated.replacen(&edit.old_text, &edit.new_text, 1);
    }

    if !dry_run {
        write_text(path, &updated).await?;
    }

    Ok(unified_diff(&original, &updated, &path.display().to_string()))
}

/// Render a unified diff between two texts, labeling both sides with the
/// same name. The header pair is emitted even when the texts are equal.
fn unified_diff(old: &str, new: &str, label: &str) -> String {
    let mut output = format!("--- {label}\n+++ {label}\n");
    let diff = TextDiff::from_lines(old, new);
    for hunk in diff.unified_diff().iter_hunks() {
        output.push_str(&hunk.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn edit(old_text: &str, new_text: &str) -> EditOperation {
        EditOperation {
            old_text: old_text.to_string(),
            new_text: new_text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_single_edit_produces_diff() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "ab\n").unwrap();

        let diff = apply_edits(&path, &[edit("ab", "x")], false).await.unwrap();
        assert!(diff.contains("---"));
        assert!(diff.contains("+++"));
        assert!(diff.contains("-ab"));
        assert!(diff.contains("+x"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[tokio::test]
    async fn test_ambiguous_anchor_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "ab ab").unwrap();

        let err = apply_edits(&path, &[edit("ab", "x")], false)
            .await
            .unwrap_err();
        assert!(matches!(err, FsError::AmbiguousMatch(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab ab");
    }

    #[tokio::test]
    async fn test_missing_anchor_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "hello\n").unwrap();

        let err = apply_edits(&path, &[edit("absent", "x")], false)
            .await
            .unwrap_err();
        assert!(matches!(err, FsError::TextNotFound(_)));
        assert!(err.to_string().contains("absent"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[tokio::test]
    async fn test_edits_apply_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "foo\n").unwrap();

        let diff = apply_edits(&path, &[edit("foo", "bar"), edit("bar", "baz")], false)
            .await
            .unwrap();
        assert!(diff.contains("+baz"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "baz\n");
    }

    #[tokio::test]
    async fn test_reversed_order_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "foo\n").unwrap();

        let err = apply_edits(&path, &[edit("bar", "baz"), edit("foo", "bar")], false)
            .await
            .unwrap_err();
        assert!(matches!(err, FsError::TextNotFound(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "foo\n");
    }

    #[tokio::test]
    async fn test_dry_run_leaves_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "foo\n").unwrap();

        let diff = apply_edits(&path, &[edit("foo", "bar")], true).await.unwrap();
        assert!(diff.contains("+bar"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "foo\n");
    }

    #[tokio::test]
    async fn test_failed_batch_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "foo\n").unwrap();

        let result = apply_edits(&path, &[edit("foo", "bar"), edit("absent", "x")], false).await;
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "foo\n");
    }

    #[tokio::test]
    async fn test_empty_edit_list_yields_headers_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "foo\n").unwrap();

        let diff = apply_edits(&path, &[], false).await.unwrap();
        assert_eq!(diff, format!("--- {p}\n+++ {p}\n", p = path.display()));
    }

    #[tokio::test]
    async fn test_empty_anchor_on_nonempty_file_is_ambiguous() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "ab").unwrap();

        let err = apply_edits(&path, &[edit("", "x")], false).await.unwrap_err();
        assert!(matches!(err, FsError::AmbiguousMatch(_)));
    }

    #[tokio::test]
    async fn test_empty_anchor_on_empty_file_inserts() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "").unwrap();

        apply_edits(&path, &[edit("", "seed")], false).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "seed");
    }

    #[tokio::test]
    async fn test_multiline_diff_carries_hunk_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        std::fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

        let diff = apply_edits(&path, &[edit("three", "drei")], false)
            .await
            .unwrap();
        assert!(diff.contains("@@"));
        assert!(diff.contains("-three"));
        assert!(diff.contains("+drei"));
    }
}
