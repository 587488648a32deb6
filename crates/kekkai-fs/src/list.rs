//! Directory listings and human-readable sizes.

use std::path::Path;

use crate::error::FsResult;

/// Format a byte count as a human-readable size with one decimal place.
pub fn format_size(size: u64) -> String {
    let mut size = size as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} PB")
}

/// List a directory's entries sorted by name, one per line, each prefixed
/// with `[DIR]` or `[FILE]`.
pub async fn list_directory(path: &Path) -> FsResult<String> {
    let names = sorted_entry_names(path).await?;
    let lines: Vec<String> = names
        .into_iter()
        .map(|name| {
            let prefix = if path.join(&name).is_dir() {
                "[DIR]"
            } else {
                "[FILE]"
            };
            format!("{prefix} {name}")
        })
        .collect();
    Ok(lines.join("\n"))
}

/// List a directory with per-file sizes and a summary block.
///
/// `sort_by` is either `"size"` (largest first) or anything else for
/// name order. Directories show no size and are excluded from the
/// combined total.
pub async fn list_directory_with_sizes(path: &Path, sort_by: &str) -> FsResult<String> {
    let names = sorted_entry_names(path).await?;

    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let (is_directory, size) = match tokio::fs::metadata(path.join(&name)).await {
            Ok(meta) => (meta.is_dir(), meta.len()),
            Err(_) => (false, 0),
        };
        entries.push(SizedEntry {
            name,
            is_directory,
            size,
        });
    }

    if sort_by == "size" {
        entries.sort_by(|a, b| b.size.cmp(&a.size));
    }

    let mut lines: Vec<String> = entries.iter().map(SizedEntry::render).collect();

    let dir_count = entries.iter().filter(|e| e.is_directory).count();
    let file_count = entries.len() - dir_count;
    let combined: u64 = entries
        .iter()
        .filter(|e| !e.is_directory)
        .map(|e| e.size)
        .sum();

    lines.push(String::new());
    lines.push(format!("Total: {file_count} files, {dir_count} directories"));
    lines.push(format!("Combined size: {}", format_size(combined)));
    Ok(lines.join("\n"))
}

struct SizedEntry {
    name: String,
    is_directory: bool,
    size: u64,
}

impl SizedEntry {
    fn render(&self) -> String {
        let prefix = if self.is_directory { "[DIR]" } else { "[FILE]" };
        let size = if self.is_directory {
            String::new()
        } else {
            format!("{:>10}", format_size(self.size))
        };
        format!("{prefix} {:<30} {size}", self.name)
    }
}

async fn sorted_entry_names(path: &Path) -> FsResult<Vec<String>> {
    let mut dir = tokio::fs::read_dir(path).await?;
    let mut names = Vec::new();
    while let Some(entry) = dir.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
