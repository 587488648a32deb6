//! Text and media file reads, with line windows and an encoding fallback.

use std::io;
use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use crate::error::FsResult;

/// Read a file as text, decoding UTF-8 with a Latin-1 fallback.
///
/// The fallback maps each byte to the code point of the same value, so it
/// cannot fail on content; only I/O errors propagate. The lossy decode is
/// noted at debug level.
pub async fn read_text(path: &Path) -> FsResult<String> {
    let bytes = tokio::fs::read(path).await?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!(path = %path.display(), "not valid UTF-8, decoding as Latin-1");
            Ok(latin1_to_string(err.as_bytes()))
        }
    }
}

/// Read a file as strict UTF-8.
pub async fn read_text_strict(path: &Path) -> FsResult<String> {
    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

/// First `count` lines of a file, line endings preserved.
pub async fn head_file(path: &Path, count: usize) -> FsResult<String> {
    let text = read_text_strict(path).await?;
    Ok(text.split_inclusive('\n').take(count).collect())
}

/// Last `count` lines of a file, line endings preserved.
pub async fn tail_file(path: &Path, count: usize) -> FsResult<String> {
    let text = read_text_strict(path).await?;
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let skip = lines.len().saturating_sub(count);
    Ok(lines[skip..].concat())
}

/// A media file read as base64, with its guessed MIME type.
#[derive(Debug)]
pub struct MediaFile {
    pub mime_type: String,
    pub base64: String,
}

/// Read a file as base64, guessing the MIME type from the extension.
pub async fn read_media(path: &Path) -> FsResult<MediaFile> {
    let bytes = tokio::fs::read(path).await?;
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_else(|| "application/octet-stream".to_string());
    Ok(MediaFile {
        mime_type,
        base64: BASE64.encode(bytes),
    })
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
