//! Error taxonomy for the organize pipeline
//!
//! Every error carries the path it failed on. Errors are raised at the point
//! of detection and propagate unmodified to the top level; `main` prints a
//! single `Error: <message>` line and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by scanning, grouping and copying.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The path does not exist.
    #[error("'{0}' not found")]
    NotFound(PathBuf),

    /// Expected a directory but found something else (e.g. the destination
    /// already exists as a plain file, or the source is a file).
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// A read or write access check failed for the given path.
    #[error("permission denied for '{0}'")]
    PermissionDenied(PathBuf),

    /// An I/O operation failed mid-run (copy, mkdir, traversal).
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collision resolution gave up after exhausting the attempt cap.
    #[error("could not find a free name for '{0}' (too many collisions)")]
    CollisionOverflow(PathBuf),
}

impl OrganizeError {
    /// Wrap an `std::io::Error`, attaching the failing path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OrganizeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrganizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_messages_name_the_path() {
        let err = OrganizeError::NotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(err.to_string(), "'/tmp/missing' not found");

        let err = OrganizeError::NotADirectory(PathBuf::from("dist"));
        assert_eq!(err.to_string(), "'dist' is not a directory");

        let err = OrganizeError::PermissionDenied(PathBuf::from("/root/secret"));
        assert!(err.to_string().contains("/root/secret"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = OrganizeError::io(Path::new("a/b.txt"), inner);
        let msg = err.to_string();
        assert!(msg.contains("a/b.txt"));
        assert!(msg.contains("disk full"));
    }
}
