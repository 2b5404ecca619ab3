//! Organize pipeline - scan, group, copy
//!
//! The orchestrator validates top-level preconditions and sequences the
//! three stages. Errors from any stage propagate unmodified; nothing is
//! retried and nothing already copied is rolled back.

pub mod copy;
pub mod group;
pub mod scan;

use std::path::Path;

use crate::core::error::{OrganizeError, Result};
use crate::core::model::CopyRecord;
use crate::core::paths::write_anchor;
use crate::core::perms;

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files_copied: usize,
    pub buckets: usize,
}

/// Organize `source` into `dest`, calling `on_copy` once per copied file
/// in copy order.
pub fn organize(
    source: &Path,
    dest: &Path,
    on_copy: &mut dyn FnMut(&CopyRecord),
) -> Result<Summary> {
    // a destination that pre-exists as a plain file can never hold buckets
    if dest.is_file() {
        return Err(OrganizeError::NotADirectory(dest.to_path_buf()));
    }

    // fail on an unwritable destination before spending time scanning
    let anchor = write_anchor(dest);
    if !perms::can_write(&anchor) {
        return Err(OrganizeError::PermissionDenied(anchor));
    }

    let files = scan::scan(source)?;
    let groups = group::group(files);
    let files_copied = copy::copy_grouped(&groups, dest, on_copy)?;

    Ok(Summary {
        files_copied,
        buckets: groups.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_organize_end_to_end() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("x.txt"), "x").unwrap();
        fs::write(src.path().join("y.TXT"), "y").unwrap();
        fs::write(src.path().join("z"), "z").unwrap();

        let mut records = Vec::new();
        let summary = organize(src.path(), dest.path(), &mut |r| records.push(r.clone())).unwrap();

        assert_eq!(
            summary,
            Summary {
                files_copied: 3,
                buckets: 3
            }
        );
        assert!(dest.path().join("txt/x.txt").exists());
        assert!(dest.path().join("TXT/y.TXT").exists());
        assert!(dest.path().join("no_extension/z").exists());
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_dest_pre_existing_as_file_aborts_before_copy() {
        let src = tempdir().unwrap();
        let holder = tempdir().unwrap();
        fs::write(src.path().join("a.txt"), "x").unwrap();
        let dest = holder.path().join("dist");
        fs::write(&dest, "i am a file").unwrap();

        let mut calls = 0;
        let result = organize(src.path(), &dest, &mut |_| calls += 1);

        assert!(matches!(
            result,
            Err(OrganizeError::NotADirectory(p)) if p == dest
        ));
        assert_eq!(calls, 0);
        // the plain file is left untouched
        assert_eq!(fs::read_to_string(&dest).unwrap(), "i am a file");
    }

    #[test]
    fn test_source_must_be_a_directory() {
        let holder = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let source = holder.path().join("notes.txt");
        fs::write(&source, "x").unwrap();

        let result = organize(&source, dest.path(), &mut |_| {});
        assert!(matches!(result, Err(OrganizeError::NotADirectory(_))));
    }

    #[test]
    fn test_missing_source_reports_not_found() {
        let holder = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let source = holder.path().join("gone");

        let result = organize(&source, dest.path(), &mut |_| {});
        assert!(matches!(result, Err(OrganizeError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_copies_nothing() {
        use std::os::unix::fs::PermissionsExt;

        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("a.txt"), "x").unwrap();
        let locked = src.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let mut calls = 0;
        let result = organize(src.path(), dest.path(), &mut |_| calls += 1);

        assert!(matches!(result, Err(OrganizeError::PermissionDenied(_))));
        assert_eq!(calls, 0);
        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
