//! Configuration and constants for the CLI.

use crate::formatter::PathMode;
use crate::parser::TraceDialect;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current graph file schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Notice MSVC prints for every header opened under `/showIncludes`
pub const MSVC_INCLUDE_MARKER: &str = "Note: including file:";

/// Prefix character of `-H` trace lines emitted by gcc and clang
pub const GCC_DEPTH_MARKER: char = '.';

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "include-viewer.toml";

/// Default output path for exported graphs
pub const DEFAULT_GRAPH_FILE: &str = "includes.dgml";

/// DGML document namespace
pub const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

// Extensions accepted as translation units
pub const COMPILABLE_EXTENSIONS: &[&str] = &["c", "cc", "cp", "cpp", "cxx", "c++", "m", "mm"];

/// Settings loaded from `include-viewer.toml`
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Include search directories, tried after the source file's own directory
    pub include_dirs: Vec<String>,

    /// How include paths are displayed
    pub path_mode: Option<PathMode>,

    /// Which compiler wrote the trace
    pub dialect: Option<TraceDialect>,

    /// Clamp depth jumps instead of rejecting the trace
    pub lenient: bool,
}

/// Load viewer settings from a TOML file
///
/// # Errors
/// * `ConfigError::Read` - If the file cannot be read
/// * `ConfigError::Invalid` - If the TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<ViewerConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ViewerConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Load the explicit config, or the default file if it exists, or defaults
pub fn resolve_config(explicit: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load_config(DEFAULT_CONFIG_FILE),
        None => Ok(ViewerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
include_dirs = ["C:\\sdk\\include", "/usr/include"]
path_mode = "shortest"
dialect = "gcc"
lenient = true
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.include_dirs.len(), 2);
        assert_eq!(config.include_dirs[0], "C:\\sdk\\include");
        assert_eq!(config.path_mode, Some(PathMode::Shortest));
        assert_eq!(config.dialect, Some(TraceDialect::Gcc));
        assert!(config.lenient);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "include_dirs = [\"/opt/include\"]").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.path_mode, None);
        assert!(!config.lenient);
    }

    #[test]
    fn test_load_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "path_mode = \"sideways\"").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
