//! Path helpers
//!
//! Display normalization plus the ancestor walk used for write-permission
//! preconditions.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// The directory whose write bit gates materializing `path`: the path
/// itself if it already exists, otherwise its nearest existing ancestor.
/// A bare relative name anchors at the current directory.
pub fn write_anchor(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        let probe = if ancestor.as_os_str().is_empty() {
            Path::new(".")
        } else {
            ancestor
        };
        if probe.exists() {
            return probe.to_path_buf();
        }
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_write_anchor_of_existing_dir_is_itself() {
        let temp = tempdir().unwrap();
        assert_eq!(write_anchor(temp.path()), temp.path());
    }

    #[test]
    fn test_write_anchor_walks_up_missing_components() {
        let temp = tempdir().unwrap();
        let deep = temp.path().join("a/b/c");
        assert_eq!(write_anchor(&deep), temp.path());

        fs::create_dir(temp.path().join("a")).unwrap();
        assert_eq!(write_anchor(&deep), temp.path().join("a"));
    }

    #[test]
    fn test_write_anchor_of_bare_name_is_current_dir() {
        // "dist" with no parent component anchors at "."
        let anchor = write_anchor(Path::new("this-name-should-not-exist-here"));
        assert_eq!(anchor, PathBuf::from("."));
    }
}
