//! Extension grouping
//!
//! Pure partitioning step between scanning and copying. Never fails and
//! never touches the filesystem.

use crate::core::model::{ExtensionGroups, FileEntry};

/// Partition entries into buckets keyed by extension label.
///
/// The label is the literal suffix after the last dot, case preserved
/// (`report.PDF` lands in bucket `PDF`, distinct from `pdf`); entries
/// without one land in the `no_extension` bucket. Every input entry ends
/// up in exactly one bucket, buckets in first-encounter order.
pub fn group(files: Vec<FileEntry>) -> ExtensionGroups {
    let mut groups = ExtensionGroups::new();
    for file in files {
        groups.insert(file);
    }
    groups
}
