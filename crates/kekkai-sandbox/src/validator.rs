//! Allowed roots and path validation.
//!
//! Every caller-supplied path is expanded, absolutized, resolved through
//! symlinks, and checked against the allowed roots before any filesystem
//! operation touches it.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SandboxError, SandboxResult};
use crate::paths;

/// The set of directories the server may operate under.
///
/// Resolved once at startup and immutable afterwards. Every entry is an
/// absolute, symlink-free path that was an existing directory at resolve
/// time.
#[derive(Debug, Clone)]
pub struct AllowedRoots {
    roots: Vec<PathBuf>,
}

impl AllowedRoots {
    /// Resolve a list of configured directories into sandbox roots.
    ///
    /// Each entry is tilde-expanded, absolutized, and canonicalized, and
    /// must name an existing directory. Any failure is fatal to startup.
    pub fn resolve<I, S>(dirs: I) -> SandboxResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roots = Vec::new();
        for dir in dirs {
            let expanded = paths::expand_home(dir.as_ref());
            let absolute = paths::absolutize(&expanded)?;
            let resolved = match dunce::canonicalize(&absolute) {
                Ok(canonical) => canonical,
                Err(e) if e.kind() == io::ErrorKind::NotFound => absolute,
                Err(e) => return Err(SandboxError::Io(e)),
            };
            if !resolved.is_dir() {
                return Err(SandboxError::not_a_directory(resolved.display().to_string()));
            }
            roots.push(resolved);
        }
        Ok(Self { roots })
    }

    /// Whether no roots are configured.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of configured roots.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Iterate the roots in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    /// Component-wise containment check.
    ///
    /// `Path::starts_with` compares whole components, so a root `/data`
    /// never matches `/data2`.
    fn contains(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root))
    }
}

/// Validates caller-supplied paths against the allowed roots.
///
/// Stateless beyond the immutable root set; every operation revalidates its
/// inputs rather than caching results.
#[derive(Debug, Clone)]
pub struct PathValidator {
    roots: AllowedRoots,
}

impl PathValidator {
    /// Create a validator over an already-resolved root set.
    pub fn new(roots: AllowedRoots) -> Self {
        Self { roots }
    }

    /// The root set this validator enforces.
    pub fn roots(&self) -> &AllowedRoots {
        &self.roots
    }

    /// Validate a raw path string and return its canonical form.
    ///
    /// Symlinks are resolved before the containment check, so a link inside
    /// a root that points outside it fails validation. Paths that do not
    /// exist yet resolve through their nearest existing ancestor, which
    /// keeps create-new-file and nested mkdir flows working.
    pub fn validate(&self, raw: &str) -> SandboxResult<PathBuf> {
        let expanded = paths::expand_home(raw);
        let absolute = paths::absolutize(&expanded)?;
        let resolved = resolve_existing_prefix(&absolute);

        if self.roots.contains(&resolved) {
            Ok(resolved)
        } else {
            debug!(path = %resolved.display(), "containment check failed");
            Err(SandboxError::access_denied(raw))
        }
    }
}

/// Symlink hops followed while resolving a missing suffix, matching the
/// kernel's loop limit.
const MAX_LINK_HOPS: u32 = 40;

/// Canonicalize as much of the path as exists.
///
/// A missing suffix is re-appended to its nearest existing ancestor's
/// canonical form, so the parents of a not-yet-created file still get their
/// symlinks resolved. A symlink whose target is missing is dereferenced and
/// resolution restarts from the target, the way `realpath` treats dangling
/// links. A path with no resolvable ancestor is returned as-is.
fn resolve_existing_prefix(absolute: &Path) -> PathBuf {
    let mut current = absolute.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        if let Ok(canonical) = dunce::canonicalize(&current) {
            return canonical;
        }
        let Some((base, rest)) = split_at_existing(&current) else {
            return current;
        };
        let mut components = rest.components();
        let Some(first) = components.next() else {
            return base;
        };
        let candidate = base.join(first);
        let remainder = components.as_path();
        match std::fs::symlink_metadata(&candidate) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let Ok(target) = std::fs::read_link(&candidate) else {
                    return join_missing(candidate, remainder);
                };
                let target = if target.is_absolute() {
                    target
                } else {
                    base.join(target)
                };
                current = join_missing(paths::normalize(&target), remainder);
            }
            _ => return join_missing(candidate, remainder),
        }
    }
    current
}

/// Canonical form of the nearest existing ancestor plus the missing
/// remainder, or `None` if no ancestor resolves.
fn split_at_existing(path: &Path) -> Option<(PathBuf, PathBuf)> {
    for ancestor in path.ancestors().skip(1) {
        if let Ok(canonical) = dunce::canonicalize(ancestor) {
            if let Ok(rest) = path.strip_prefix(ancestor) {
                return Some((canonical, rest.to_path_buf()));
            }
        }
    }
    None
}

/// Like `Path::join` but a no-op when `rest` is empty.
fn join_missing(base: PathBuf, rest: &Path) -> PathBuf {
    if rest.as_os_str().is_empty() {
        base
    } else {
        base.join(rest)
    }
}
