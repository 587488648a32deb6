//! Filesystem engines for kekkai.
//!
//! Reading, writing, editing, listing, tree building, and search. All
//! functions here operate on pre-validated paths; containment against the
//! allowed roots lives in `kekkai-sandbox` and must happen before any
//! engine is called.

pub mod edit;
pub mod error;
pub mod list;
pub mod read;
pub mod search;
pub mod stat;
pub mod tree;
pub mod write;

pub use edit::{EditOperation, apply_edits};
pub use error::{FsError, FsResult};
pub use list::{format_size, list_directory, list_directory_with_sizes};
pub use read::{MediaFile, head_file, read_media, read_text, read_text_strict, tail_file};
pub use search::{compile_patterns, search_files};
pub use stat::{FileInfo, stat};
pub use tree::{TreeEntry, build_tree};
pub use write::{create_directory, move_path, write_text};
