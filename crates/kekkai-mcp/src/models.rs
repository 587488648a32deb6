//! Request models for the filesystem MCP tools.

use kekkai_fs::EditOperation;
use rmcp::schemars;
use serde::Deserialize;

fn default_sort_by() -> String {
    "name".to_string()
}

/// Request to read a text file, optionally windowed to its first or last lines
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadTextFileRequest {
    /// Path to the file to read
    #[schemars(description = "Path to the file to read")]
    pub path: String,

    /// If provided, returns only the last N lines of the file
    #[schemars(description = "If provided, returns only the last N lines of the file")]
    pub tail: Option<usize>,

    /// If provided, returns only the first N lines of the file
    #[schemars(description = "If provided, returns only the first N lines of the file")]
    pub head: Option<usize>,
}

/// Request to read a media file as base64
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadMediaFileRequest {
    /// Path to the media file
    #[schemars(description = "Path to the media file")]
    pub path: String,
}

/// Request to write a file
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WriteFileRequest {
    /// Path where the file should be written
    #[schemars(description = "Path where the file should be written")]
    pub path: String,

    /// Content to write to the file
    #[schemars(description = "Content to write to the file")]
    pub content: String,
}

/// Request to apply text edits to a file
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EditFileRequest {
    /// Path to the file to edit
    #[schemars(description = "Path to the file to edit")]
    pub path: String,

    /// Edit operations, each with 'oldText' and 'newText'
    #[schemars(description = "List of edit operations, each with 'oldText' and 'newText'")]
    pub edits: Vec<EditOperation>,

    /// If true, preview changes without applying them
    #[serde(default)]
    #[schemars(description = "If true, preview changes without applying them")]
    pub dry_run: bool,
}

/// Request to create a directory
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateDirectoryRequest {
    /// Path of the directory to create
    #[schemars(description = "Path of the directory to create")]
    pub path: String,
}

/// Request to list a directory
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListDirectoryRequest {
    /// Path to the directory to list
    #[schemars(description = "Path to the directory to list")]
    pub path: String,
}

/// Request to list a directory with entry sizes
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListDirectoryWithSizesRequest {
    /// Path to the directory to list
    #[schemars(description = "Path to the directory to list")]
    pub path: String,

    /// Sort by 'name' or 'size' (default: name)
    #[serde(default = "default_sort_by")]
    #[schemars(description = "Sort by 'name' or 'size' (default: name)")]
    pub sort_by: String,
}

/// Request for a recursive directory tree
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DirectoryTreeRequest {
    /// Root path for the tree
    #[schemars(description = "Root path for the tree")]
    pub path: String,

    /// Patterns to exclude from the tree
    #[serde(default)]
    #[schemars(description = "Patterns to exclude from the tree")]
    pub exclude_patterns: Vec<String>,
}

/// Request to move or rename a file or directory
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoveFileRequest {
    /// Source path
    #[schemars(description = "Source path")]
    pub source: String,

    /// Destination path
    #[schemars(description = "Destination path")]
    pub destination: String,
}

/// Request to search for files by name pattern
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFilesRequest {
    /// Directory to search in
    #[schemars(description = "Directory to search in")]
    pub path: String,

    /// Glob pattern to match files
    #[schemars(description = "Glob pattern to match files")]
    pub pattern: String,

    /// Patterns to exclude from search
    #[serde(default)]
    #[schemars(description = "Patterns to exclude from search")]
    pub exclude_patterns: Vec<String>,
}

/// Request for file or directory metadata
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFileInfoRequest {
    /// Path to the file or directory
    #[schemars(description = "Path to the file or directory")]
    pub path: String,
}
