//! Core data model
//!
//! Everything here is ephemeral: entries and groups are built and discarded
//! within a single run. The only state a run leaves behind is the copied
//! files themselves.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Bucket label for files whose name carries no extension.
pub const NO_EXTENSION: &str = "no_extension";

/// A regular file discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the source file.
    pub path: PathBuf,
    /// File name without the final extension.
    pub stem: String,
    /// Literal suffix after the last dot, case preserved. `None` when the
    /// name has no dot (dotfiles like `.gitignore` count as extensionless).
    pub extension: Option<String>,
}

impl FileEntry {
    /// Build an entry from a path, deriving stem and extension from the
    /// file name. Returns `None` if the path has no final component.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let (stem, extension) = split_name(&name);
        Some(Self {
            path,
            stem,
            extension,
        })
    }

    /// The bucket label this entry groups under. An empty suffix (name
    /// ending in a dot) maps to the sentinel so labels stay non-empty.
    pub fn label(&self) -> &str {
        match self.extension.as_deref() {
            Some(ext) if !ext.is_empty() => ext,
            _ => NO_EXTENSION,
        }
    }

    /// Original file name (stem plus dotted extension).
    pub fn file_name(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}.{}", self.stem, ext),
            None => self.stem.clone(),
        }
    }
}

/// Split a file name into (stem, extension) on the last dot.
///
/// A leading dot alone does not start an extension: `.gitignore` has stem
/// `.gitignore` and no extension, matching `Path::file_stem` semantics.
fn split_name(name: &str) -> (String, Option<String>) {
    let skip = name.chars().next().map_or(0, |c| c.len_utf8());
    match name.get(skip..).and_then(|rest| rest.rfind('.')) {
        Some(i) => {
            let dot = skip + i;
            (name[..dot].to_string(), Some(name[dot + 1..].to_string()))
        }
        None => (name.to_string(), None),
    }
}

/// One bucket of the extension partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup {
    pub label: String,
    pub files: Vec<FileEntry>,
}

/// Ordered partition of file entries by extension label.
///
/// Bucket order is first-encounter order; file order inside a bucket is
/// input order. A `HashMap` index keeps insertion O(1) without giving up
/// the ordering guarantee.
#[derive(Debug, Default)]
pub struct ExtensionGroups {
    groups: Vec<ExtensionGroup>,
    index: HashMap<String, usize>,
}

impl ExtensionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its label's bucket, creating the bucket on first
    /// encounter.
    pub fn insert(&mut self, entry: FileEntry) {
        let label = entry.label().to_string();
        match self.index.get(&label) {
            Some(&i) => self.groups[i].files.push(entry),
            None => {
                self.index.insert(label.clone(), self.groups.len());
                self.groups.push(ExtensionGroup {
                    label,
                    files: vec![entry],
                });
            }
        }
    }

    /// Buckets in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtensionGroup> {
        self.groups.iter()
    }

    pub fn get(&self, label: &str) -> Option<&ExtensionGroup> {
        self.index.get(label).map(|&i| &self.groups[i])
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of files across all buckets.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }
}

/// One performed copy, emitted as an observable event.
#[derive(Debug, Clone, Serialize)]
pub struct CopyRecord {
    /// Source path as scanned.
    pub source: String,
    /// Resolved destination path (after collision renaming).
    pub dest: String,
    /// Bucket label the file was shelved under.
    pub label: String,
}
