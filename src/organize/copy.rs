//! Collision-safe copying
//!
//! Materializes one subdirectory per bucket under the destination root and
//! copies every file into its bucket. A taken destination name is resolved
//! to `<stem> Copy <n><.ext>` for the first free n. Any I/O failure aborts
//! the whole run at once: no rollback, no partial-success summary, no retry.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::core::error::{OrganizeError, Result};
use crate::core::model::{CopyRecord, ExtensionGroups, FileEntry};
use crate::core::paths::{normalize_path, write_anchor};
use crate::core::perms;

/// Collision renaming gives up after this many attempts rather than
/// looping forever on an adversarial destination.
const MAX_COLLISION_ATTEMPTS: u32 = 9_999;

/// Copy every grouped file into `dest_root/<label>/`, invoking `on_copy`
/// once per successful copy, in copy order. Returns the number of files
/// copied.
pub fn copy_grouped(
    groups: &ExtensionGroups,
    dest_root: &Path,
    on_copy: &mut dyn FnMut(&CopyRecord),
) -> Result<usize> {
    // write precondition, checked before any directory is created
    let anchor = write_anchor(dest_root);
    if !perms::can_write(&anchor) {
        return Err(OrganizeError::PermissionDenied(anchor));
    }

    let mut copied = 0;
    for bucket in groups.iter() {
        let bucket_dir = dest_root.join(&bucket.label);
        // creates dest_root and any missing parents along the way
        fs::create_dir_all(&bucket_dir).map_err(|e| OrganizeError::io(&bucket_dir, e))?;

        for file in &bucket.files {
            let dest = resolve_free_path(&bucket_dir, file)?;
            copy_file(&file.path, &dest)?;
            copied += 1;

            on_copy(&CopyRecord {
                source: normalize_path(&file.path),
                dest: normalize_path(&dest),
                label: bucket.label.clone(),
            });
        }
    }

    Ok(copied)
}

/// First free destination path for `file` inside `bucket_dir`: the original
/// name if untaken, otherwise `<stem> Copy <n><.ext>` for n = 1, 2, 3, …
fn resolve_free_path(bucket_dir: &Path, file: &FileEntry) -> Result<PathBuf> {
    let candidate = bucket_dir.join(file.file_name());
    if !candidate.exists() {
        return Ok(candidate);
    }

    for n in 1..=MAX_COLLISION_ATTEMPTS {
        let name = match &file.extension {
            Some(ext) => format!("{} Copy {}.{}", file.stem, n, ext),
            None => format!("{} Copy {}", file.stem, n),
        };
        let renamed = bucket_dir.join(name);
        if !renamed.exists() {
            return Ok(renamed);
        }
    }

    Err(OrganizeError::CollisionOverflow(candidate))
}

/// Copy bytes, then carry the source's modification time onto the copy.
fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).map_err(|e| OrganizeError::io(source, e))?;

    let meta = fs::metadata(source).map_err(|e| OrganizeError::io(source, e))?;
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_mtime(dest, mtime).map_err(|e| OrganizeError::io(dest, e))?;

    Ok(())
}
