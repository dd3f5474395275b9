//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a trace into an include tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Malformed trace at line {line}: include depth {depth} exceeds the deepest reachable level {max_depth}"
    )]
    MalformedTrace {
        line: usize,
        depth: usize,
        max_depth: usize,
    },
}

/// Errors that can occur while obtaining trace text from a collaborator
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Trace capture produced no output")]
    EmptyOutput,

    #[error("Compiler command failed: {0}")]
    CommandFailed(String),

    #[error("Current file can't be compiled: {0}")]
    NoActiveCompilableFile(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading the TOML configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Errors surfaced by the viewer session
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("There is no include tree to save!")]
    NoTreeToExport,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
