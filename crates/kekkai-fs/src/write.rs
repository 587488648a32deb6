//! File writing, directory creation, and renames.

use std::path::Path;

use crate::error::FsResult;

/// Write text to a file, creating parent directories as needed.
pub async fn write_text(path: &Path, content: &str) -> FsResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Create a directory, including any missing ancestors.
///
/// Succeeds if the directory already exists.
pub async fn create_directory(path: &Path) -> FsResult<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

/// Rename a file or directory.
pub async fn move_path(source: &Path, destination: &Path) -> FsResult<()> {
    tokio::fs::rename(source, destination).await?;
    Ok(())
}
