//! Recursive directory trees as JSON-serializable structures.

use std::path::Path;

use glob::Pattern;
use serde::Serialize;

/// One node in a directory tree. Directories always carry a `children`
/// array, files never do.
#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeEntry>>,
}

/// Build a tree of `directory`, skipping entries whose name matches any
/// exclude pattern. Unreadable directories yield an empty list.
pub fn build_tree(directory: &Path, exclude: &[Pattern]) -> Vec<TreeEntry> {
    let Ok(read) = std::fs::read_dir(directory) else {
        return Vec::new();
    };

    let mut names: Vec<String> = read
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut result = Vec::new();
    for name in names {
        if exclude.iter().any(|p| p.matches(&name)) {
            continue;
        }
        let entry_path = directory.join(&name);
        if entry_path.is_dir() {
            result.push(TreeEntry {
                name,
                kind: "directory",
                children: Some(build_tree(&entry_path, exclude)),
            });
        } else {
            result.push(TreeEntry {
                name,
                kind: "file",
                children: None,
            });
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tree_structure() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();
        std::fs::write(tmp.path().join("sub/inner.txt"), "x").unwrap();
        std::fs::write(tmp.path().join("top.txt"), "x").unwrap();

        let tree = build_tree(tmp.path(), &[]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "sub");
        assert_eq!(tree[0].kind, "directory");
        let children = tree[0].children.as_ref().unwrap();
        assert_eq!(children[0].name, "inner.txt");
        assert_eq!(tree[1].name, "top.txt");
        assert_eq!(tree[1].kind, "file");
        assert!(tree[1].children.is_none());
    }

    #[test]
    fn test_empty_directory_has_empty_children() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("empty")).unwrap();

        let tree = build_tree(tmp.path(), &[]);
        assert_eq!(tree[0].children.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn test_excludes_prune_by_name() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("node_modules")).unwrap();
        std::fs::write(tmp.path().join("keep.txt"), "x").unwrap();
        std::fs::write(tmp.path().join("skip.log"), "x").unwrap();

        let exclude = [
            Pattern::new("node_modules").unwrap(),
            Pattern::new("*.log").unwrap(),
        ];
        let tree = build_tree(tmp.path(), &exclude);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "keep.txt");
    }

    #[test]
    fn test_json_shape() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("only.txt"), "x").unwrap();

        let json = serde_json::to_string_pretty(&build_tree(tmp.path(), &[])).unwrap();
        assert!(json.contains("\"name\": \"only.txt\""));
        assert!(json.contains("\"type\": \"file\""));
        assert!(!json.contains("children"));
    }
}
