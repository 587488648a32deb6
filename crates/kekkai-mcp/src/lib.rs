//! MCP server exposing sandboxed filesystem access.
//!
//! Provides read, write, edit, listing, tree, and search tools via Model
//! Context Protocol. Every caller-supplied path is validated against the
//! allowed directories before any filesystem operation runs; see
//! `kekkai-sandbox` for the containment rules.
//!
//! ## Module Structure
//!
//! - `models`: Request types for MCP tools

mod models;

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use kekkai_fs::FsError;
use kekkai_sandbox::{AllowedRoots, PathValidator};

pub use models::*;

/// MCP server over a fixed set of allowed directories.
#[derive(Clone)]
pub struct KekkaiMcp {
    validator: Arc<PathValidator>,
    tool_router: ToolRouter<Self>,
}

impl KekkaiMcp {
    /// Create a server enforcing the given root set.
    pub fn new(roots: AllowedRoots) -> Self {
        Self {
            validator: Arc::new(PathValidator::new(roots)),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl KekkaiMcp {
    // ========================================================================
    // Read Tools
    // ========================================================================

    #[tool(
        description = "Read the complete contents of a file from the file system as text. Provide head or tail to read only the first or last N lines."
    )]
    async fn read_text_file(&self, Parameters(req): Parameters<ReadTextFileRequest>) -> String {
        if req.head.is_some() && req.tail.is_some() {
            return format!("Error: {}", FsError::HeadAndTail);
        }

        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        let result = if let Some(count) = req.tail {
            kekkai_fs::tail_file(&path, count).await
        } else if let Some(count) = req.head {
            kekkai_fs::head_file(&path, count).await
        } else {
            kekkai_fs::read_text(&path).await
        };

        match result {
            Ok(text) => text,
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Read an image or audio file. Returns the base64 encoded data and MIME type.")]
    async fn read_media_file(&self, Parameters(req): Parameters<ReadMediaFileRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::read_media(&path).await {
            Ok(media) => {
                let preview: String = media.base64.chars().take(100).collect();
                format!(
                    "MIME Type: {}\n\nBase64 Data (first 100 chars):\n{}...\n\nFull length: {} characters",
                    media.mime_type,
                    preview,
                    media.base64.len()
                )
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    // ========================================================================
    // Write Tools
    // ========================================================================

    #[tool(description = "Create a new file or completely overwrite an existing file with new content.")]
    async fn write_file(&self, Parameters(req): Parameters<WriteFileRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::write_text(&path, &req.content).await {
            Ok(()) => format!("Successfully wrote to {}", req.path),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(
        description = "Make selective edits to a text file. Each operation replaces exact text that must occur exactly once. Returns a git-style diff; set dry_run to preview changes without applying them."
    )]
    async fn edit_file(&self, Parameters(req): Parameters<EditFileRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::apply_edits(&path, &req.edits, req.dry_run).await {
            Ok(diff) => diff,
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Create a new directory or ensure a directory exists.")]
    async fn create_directory(&self, Parameters(req): Parameters<CreateDirectoryRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::create_directory(&path).await {
            Ok(()) => format!("Successfully created directory {}", req.path),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Move or rename files and directories.")]
    async fn move_file(&self, Parameters(req): Parameters<MoveFileRequest>) -> String {
        let source = match self.validator.validate(&req.source) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };
        let destination = match self.validator.validate(&req.destination) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::move_path(&source, &destination).await {
            Ok(()) => format!("Successfully moved {} to {}", req.source, req.destination),
            Err(e) => format!("Error: {}", e),
        }
    }

    // ========================================================================
    // Listing Tools
    // ========================================================================

    #[tool(description = "Get a detailed listing of all files and directories in a specified path.")]
    async fn list_directory(&self, Parameters(req): Parameters<ListDirectoryRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::list_directory(&path).await {
            Ok(listing) => listing,
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(
        description = "Get a detailed listing of files and directories with sizes. Sort by 'name' or 'size'."
    )]
    async fn list_directory_with_sizes(
        &self,
        Parameters(req): Parameters<ListDirectoryWithSizesRequest>,
    ) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::list_directory_with_sizes(&path, &req.sort_by).await {
            Ok(listing) => listing,
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Get a recursive tree view of files and directories as a JSON structure.")]
    async fn directory_tree(&self, Parameters(req): Parameters<DirectoryTreeRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        let exclude = match kekkai_fs::compile_patterns(&req.exclude_patterns) {
            Ok(patterns) => patterns,
            Err(e) => return format!("Error: {}", e),
        };

        let tree = kekkai_fs::build_tree(&path, &exclude);
        match serde_json::to_string_pretty(&tree) {
            Ok(json) => json,
            Err(e) => format!("Error: {}", e),
        }
    }

    // ========================================================================
    // Search and Metadata Tools
    // ========================================================================

    #[tool(description = "Recursively search for files whose name matches a glob pattern.")]
    async fn search_files(&self, Parameters(req): Parameters<SearchFilesRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::search_files(&path, &req.pattern, &req.exclude_patterns) {
            Ok(results) if results.is_empty() => "No matches found".to_string(),
            Ok(results) => results
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Retrieve detailed metadata about a file or directory.")]
    async fn get_file_info(&self, Parameters(req): Parameters<GetFileInfoRequest>) -> String {
        let path = match self.validator.validate(&req.path) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };

        match kekkai_fs::stat(&path).await {
            Ok(info) => info.render(),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Returns the list of directories that this server is allowed to access.")]
    fn list_allowed_directories(&self) -> String {
        let roots = self.validator.roots();
        if roots.is_empty() {
            return "No allowed directories configured".to_string();
        }
        let dirs: Vec<String> = roots.iter().map(|p| p.display().to_string()).collect();
        format!("Allowed directories:\n{}", dirs.join("\n"))
    }
}

#[tool_handler]
impl ServerHandler for KekkaiMcp {
    fn get_info(&self) -> ServerInfo {
        // ServerInfo is #[non_exhaustive]; build from Default and override fields.
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "Secure filesystem MCP server. All tools operate only inside the allowed directories configured at startup; paths are resolved through symlinks before the containment check.".into()
        );
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}
