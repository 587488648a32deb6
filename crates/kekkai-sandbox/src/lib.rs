//! Path sandbox for kekkai.
//!
//! Holds the allowed-root set configured at process startup and validates
//! every caller-supplied path against it. The rest of the workspace operates
//! only on paths that came out of [`PathValidator::validate`].

mod error;
mod paths;
mod validator;

pub use error::{SandboxError, SandboxResult};
pub use validator::{AllowedRoots, PathValidator};
