//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The organize data model (FileEntry, ExtensionGroups, CopyRecord)
//! - The error taxonomy shared by every pipeline stage
//! - Permission checks used as preconditions before reads and writes
//! - Path helpers and output rendering

pub mod error;
pub mod model;
pub mod paths;
pub mod perms;
pub mod render;
