//! Project context: where a translation unit looks for its headers.

use crate::formatter::normalize_path;
use crate::utils::config::COMPILABLE_EXTENSIONS;
use crate::utils::error::CaptureError;
use log::debug;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Supplies the include search directories of a source file
pub trait ProjectContext {
    fn include_directories(&self, source: &Path) -> Vec<String>;
}

/// Fixed list of include directories, the same for every source file
#[derive(Debug, Clone, Default)]
pub struct StaticProjectContext {
    include_dirs: Vec<String>,
}

impl StaticProjectContext {
    pub fn new(include_dirs: Vec<String>) -> Self {
        Self { include_dirs }
    }
}

impl ProjectContext for StaticProjectContext {
    fn include_directories(&self, _source: &Path) -> Vec<String> {
        self.include_dirs.clone()
    }
}

/// Candidate base directories for formatting, own directory first
///
/// Without a source file only the context's directories are returned, taken
/// relative to an empty path.
pub fn candidate_base_dirs(source: Option<&Path>, context: &dyn ProjectContext) -> Vec<String> {
    let mut dirs = Vec::new();

    match source {
        Some(source) => {
            if let Some(own_dir) = own_directory(source) {
                dirs.push(own_dir);
            }
            dirs.extend(context.include_directories(source));
        }
        None => dirs.extend(context.include_directories(Path::new(""))),
    }

    debug!("Candidate base directories: {:?}", dirs);
    dirs
}

/// Normalized parent directory with a trailing separator
fn own_directory(source: &Path) -> Option<String> {
    let parent = source.parent()?;
    let parent: PathBuf = if parent.is_absolute() {
        parent.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(parent)
    };

    let mut dir = normalize_path(&parent.to_string_lossy());
    if !dir.ends_with(|c: char| c == '/' || c == '\\') {
        dir.push(MAIN_SEPARATOR);
    }
    Some(dir)
}

/// Check that a file exists and is a C or C++ translation unit
///
/// # Errors
/// * `CaptureError::NoActiveCompilableFile` - With the reason as message
pub fn check_compilable(source: &Path) -> Result<(), CaptureError> {
    if !source.is_file() {
        return Err(CaptureError::NoActiveCompilableFile(format!(
            "{} is not a file",
            source.display()
        )));
    }

    let extension = source
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !COMPILABLE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(CaptureError::NoActiveCompilableFile(format!(
            "{} is not a C/C++ source file",
            source.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_directory_comes_first() {
        let context = StaticProjectContext::new(vec!["/opt/include".to_string()]);
        let dirs = candidate_base_dirs(Some(Path::new("/proj/src/main.cpp")), &context);

        assert_eq!(dirs.len(), 2);
        assert!(dirs[0].starts_with("/proj/src"));
        assert!(dirs[0].ends_with(MAIN_SEPARATOR));
        assert_eq!(dirs[1], "/opt/include");
    }

    #[test]
    fn test_no_source() {
        let context = StaticProjectContext::new(vec!["/opt/include".to_string()]);
        assert_eq!(candidate_base_dirs(None, &context), vec!["/opt/include"]);
    }

    #[test]
    fn test_check_compilable() {
        let dir = tempfile::tempdir().unwrap();
        let cpp = dir.path().join("main.CPP");
        let header = dir.path().join("main.h");
        std::fs::write(&cpp, "int main() {}").unwrap();
        std::fs::write(&header, "#pragma once").unwrap();

        assert!(check_compilable(&cpp).is_ok());
        assert!(matches!(
            check_compilable(&header),
            Err(CaptureError::NoActiveCompilableFile(_))
        ));
        assert!(check_compilable(&dir.path().join("absent.cpp")).is_err());
    }
}
