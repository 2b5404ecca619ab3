//! Permission checks
//!
//! Pure queries against the filesystem's access-control state; they never
//! error and have no side effects. Callers treat `false` as a precondition
//! failure and raise `PermissionDenied` themselves.

use std::fs;
use std::path::Path;

#[cfg(unix)]
fn mode_allows(meta: &fs::Metadata, bits: u32) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & bits != 0
}

/// Whether the path is readable.
///
/// On unix this is a coarse mode-bit check (any read bit set); ACLs and
/// the root-bypasses-everything rule are not modeled, which keeps the
/// answer deterministic regardless of which user runs the process.
pub fn can_read(path: &Path) -> bool {
    #[cfg(unix)]
    {
        fs::metadata(path)
            .map(|m| mode_allows(&m, 0o444))
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        fs::metadata(path).is_ok()
    }
}

/// Whether the path is writable. Same coarse mode-bit check as `can_read`.
pub fn can_write(path: &Path) -> bool {
    #[cfg(unix)]
    {
        fs::metadata(path)
            .map(|m| mode_allows(&m, 0o222))
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        fs::metadata(path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }
}
