//! Include path formatting.
//!
//! This module handles:
//! - Normalizing compiler-native paths (either separator, `.` and `..` segments)
//! - Making paths relative to a prioritized list of base directories
//! - Choosing the display form of an include according to a `PathMode`

pub mod path_format;

// Re-export main types
pub use path_format::{format_path, is_windows_style, normalize_path, relative_path, PathMode};
