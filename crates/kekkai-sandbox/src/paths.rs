//! Path expansion and lexical normalization.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the invoking user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Absolutize against the process working directory, then normalize.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        let cwd = std::env::current_dir()?;
        Ok(normalize(&cwd.join(path)))
    }
}

/// Collapse `.` and `..` segments and redundant separators without touching
/// the filesystem. `..` at the root stays at the root; leading `..` on a
/// relative path is preserved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
