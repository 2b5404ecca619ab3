//! Recursive directory scanning
//!
//! Walks the source tree depth-first with `walkdir` (iterative internally,
//! so deep trees never exhaust the call stack) and collects every regular
//! file. The walk fails fast: the first unreadable or vanished node aborts
//! the whole scan and no partial result is returned.
//!
//! Symlinks are never followed; symlinks and other special file types are
//! neither file nor directory for our purposes and are skipped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::{OrganizeError, Result};
use crate::core::model::FileEntry;
use crate::core::perms;

/// Collect every regular file under `root`, in a deterministic order
/// (lexicographic by file name within each directory, depth-first).
pub fn scan(root: &Path) -> Result<Vec<FileEntry>> {
    check_dir_readable(root)?;

    let mut entries = Vec::new();
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for item in walker {
        let entry = item.map_err(walk_error)?;
        if entry.depth() == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            // same preconditions as the root, re-applied before descent
            check_dir_readable(entry.path())?;
        } else if file_type.is_file() {
            let path = entry.into_path();
            if !perms::can_read(&path) {
                return Err(OrganizeError::PermissionDenied(path));
            }
            if let Some(file) = FileEntry::from_path(path) {
                entries.push(file);
            }
        }
    }

    Ok(entries)
}

/// The scan preconditions, checked in order: exists, is a directory, is
/// readable. Each failure maps to a distinct error kind.
fn check_dir_readable(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(OrganizeError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(OrganizeError::NotADirectory(path.to_path_buf()));
    }
    if !perms::can_read(path) {
        return Err(OrganizeError::PermissionDenied(path.to_path_buf()));
    }
    Ok(())
}

/// Map a walkdir error into the taxonomy, keeping the failing path.
fn walk_error(err: walkdir::Error) -> OrganizeError {
    let path: PathBuf = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.into_io_error() {
        Some(io) if io.kind() == ErrorKind::PermissionDenied => {
            OrganizeError::PermissionDenied(path)
        }
        Some(io) if io.kind() == ErrorKind::NotFound => OrganizeError::NotFound(path),
        Some(io) => OrganizeError::io(path, io),
        None => OrganizeError::io(
            path,
            std::io::Error::new(ErrorKind::Other, "directory traversal failed"),
        ),
    }
}
