//! File metadata collection and rendering.

use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FsResult;
use crate::list::format_size;

/// Metadata for a single file or directory.
///
/// Timestamps are fractional seconds since the Unix epoch; zero when the
/// platform cannot report them.
#[derive(Debug)]
pub struct FileInfo {
    pub size: u64,
    pub created: f64,
    pub modified: f64,
    pub accessed: f64,
    pub is_directory: bool,
    pub is_file: bool,
    pub permissions: String,
}

impl FileInfo {
    /// Render as `key: value` lines in a fixed order.
    pub fn render(&self) -> String {
        [
            format!("size: {}", format_size(self.size)),
            format!("created: {}", self.created),
            format!("modified: {}", self.modified),
            format!("accessed: {}", self.accessed),
            format!("isDirectory: {}", self.is_directory),
            format!("isFile: {}", self.is_file),
            format!("permissions: {}", self.permissions),
        ]
        .join("\n")
    }
}

/// Stat a path, following symlinks.
pub async fn stat(path: &Path) -> FsResult<FileInfo> {
    let meta = tokio::fs::metadata(path).await?;
    Ok(FileInfo {
        size: meta.len(),
        created: epoch_secs(meta.created()),
        modified: epoch_secs(meta.modified()),
        accessed: epoch_secs(meta.accessed()),
        is_directory: meta.is_dir(),
        is_file: meta.is_file(),
        permissions: permissions_octal(&meta),
    })
}

fn epoch_secs(time: io::Result<SystemTime>) -> f64 {
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

#[cfg(unix)]
fn permissions_octal(meta: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format!("{:03o}", meta.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn permissions_octal(meta: &Metadata) -> String {
    if meta.permissions().readonly() {
        "444".to_string()
    } else {
        "666".to_string()
    }
}
