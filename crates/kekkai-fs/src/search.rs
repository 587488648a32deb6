//! Recursive filename search with glob patterns and exclusions.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{FsError, FsResult};

/// Compile glob patterns, rejecting invalid ones with the offending
/// pattern in the error.
pub fn compile_patterns(patterns: &[String]) -> FsResult<Vec<Pattern>> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}

fn compile_pattern(pattern: &str) -> FsResult<Pattern> {
    Pattern::new(pattern).map_err(|e| FsError::invalid_pattern(format!("{pattern}: {e}")))
}

/// Recursively find files under `directory` whose name matches `pattern`.
///
/// Directories whose name matches an exclude pattern are not descended
/// into; matched files are dropped when their full path matches one.
/// Symlinked directories are never followed. Unreadable directories are
/// skipped.
pub fn search_files(
    directory: &Path,
    pattern: &str,
    exclude_patterns: &[String],
) -> FsResult<Vec<PathBuf>> {
    let pattern = compile_pattern(pattern)?;
    let exclude = compile_patterns(exclude_patterns)?;
    let mut matches = Vec::new();
    walk(directory, &pattern, &exclude, &mut matches);
    Ok(matches)
}

fn walk(directory: &Path, pattern: &Pattern, exclude: &[Pattern], matches: &mut Vec<PathBuf>) {
    let Ok(read) = std::fs::read_dir(directory) else {
        return;
    };
    let mut entries: Vec<_> = read.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if !exclude.iter().any(|p| p.matches(&name)) {
                subdirs.push(entry.path());
            }
            continue;
        }
        if file_type.is_symlink() && entry.path().is_dir() {
            continue;
        }
        if pattern.matches(&name) {
            let full = entry.path();
            if !exclude.iter().any(|p| p.matches(&full.to_string_lossy())) {
                matches.push(full);
            }
        }
    }

    for dir in subdirs {
        walk(&dir, pattern, exclude, matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn excludes(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_finds_files_recursively() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();
        std::fs::write(tmp.path().join("a.rs"), "x").unwrap();
        std::fs::write(tmp.path().join("b.txt"), "x").unwrap();
        std::fs::write(tmp.path().join("sub/c.rs"), "x").unwrap();

        let found = search_files(tmp.path(), "*.rs", &[]).unwrap();
        assert_eq!(
            found,
            [tmp.path().join("a.rs"), tmp.path().join("sub/c.rs")]
        );
    }

    #[test]
    fn test_excluded_directory_not_descended() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("node_modules")).unwrap();
        std::fs::write(tmp.path().join("node_modules/dep.rs"), "x").unwrap();
        std::fs::write(tmp.path().join("main.rs"), "x").unwrap();

        let found = search_files(tmp.path(), "*.rs", &excludes(&["node_modules"])).unwrap();
        assert_eq!(found, [tmp.path().join("main.rs")]);
    }

    #[test]
    fn test_full_path_exclusion() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("keep.rs"), "x").unwrap();
        std::fs::write(tmp.path().join("drop.rs"), "x").unwrap();

        let found = search_files(tmp.path(), "*.rs", &excludes(&["*drop*"])).unwrap();
        assert_eq!(found, [tmp.path().join("keep.rs")]);
    }

    #[test]
    fn test_no_matches() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "x").unwrap();

        assert!(search_files(tmp.path(), "*.rs", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_star_crosses_separators_in_excludes() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("a/secret")).unwrap();
        std::fs::write(tmp.path().join("a/secret/key.txt"), "x").unwrap();
        std::fs::write(tmp.path().join("a/open.txt"), "x").unwrap();

        let found = search_files(tmp.path(), "*.txt", &excludes(&["*secret*"])).unwrap();
        assert_eq!(found, [tmp.path().join("a/open.txt")]);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = search_files(Path::new("."), "[", &[]).unwrap_err();
        assert!(matches!(err, FsError::InvalidPattern(_)));
        assert!(err.to_string().contains('['));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_followed() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("real")).unwrap();
        std::fs::write(tmp.path().join("real/inner.txt"), "x").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let found = search_files(tmp.path(), "inner.txt", &[]).unwrap();
        assert_eq!(found, [tmp.path().join("real/inner.txt")]);
    }
}
