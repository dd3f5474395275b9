//! Output writers for include trees and graphs.
//!
//! This module handles writing data to disk in various formats:
//! - DGML directed graphs (Visual Studio graph documents)
//! - JSON graph files
//! - Graphviz DOT
//! - Indented text trees

pub mod dgml;
pub mod dot;
pub mod json;
pub mod text;

// Re-export main functions
pub use dgml::{to_dgml, write_dgml};
pub use dot::{to_dot, write_dot};
pub use json::{read_graph_file, write_graph_file, GraphFile};
pub use text::{render_summary, render_tree};

use crate::graph::GraphDocument;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialization format of an exported graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphFormat {
    #[default]
    Dgml,
    Json,
    Dot,
}

impl GraphFormat {
    /// Infer the format from a file extension, `None` if unknown
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "dgml" => Some(Self::Dgml),
            "json" => Some(Self::Json),
            "dot" | "gv" => Some(Self::Dot),
            _ => None,
        }
    }
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate the path and create missing parent directories
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Open a buffered writer for an output file
fn create_writer(path: &Path) -> Result<BufWriter<File>, OutputError> {
    prepare_output_path(path)?;
    let file = File::create(path).map_err(OutputError::WriteFailed)?;
    Ok(BufWriter::new(file))
}

/// Write text content to a file
fn write_text(content: &str, path: &Path) -> Result<(), OutputError> {
    let mut writer = create_writer(path)?;
    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write a graph in the given format
///
/// **Public** - main entry point for graph output
///
/// `translation_unit` and `num_includes` are only recorded by the JSON format.
pub fn write_graph(
    graph: &GraphDocument,
    output_path: impl AsRef<Path>,
    format: GraphFormat,
    translation_unit: Option<&str>,
    num_includes: usize,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    match format {
        GraphFormat::Dgml => write_dgml(graph, output_path),
        GraphFormat::Dot => write_dot(graph, output_path),
        GraphFormat::Json => {
            let file = GraphFile::new(graph.clone(), translation_unit, num_includes);
            write_graph_file(&file, output_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(GraphFormat::from_path(Path::new("a.dgml")), Some(GraphFormat::Dgml));
        assert_eq!(GraphFormat::from_path(Path::new("a.JSON")), Some(GraphFormat::Json));
        assert_eq!(GraphFormat::from_path(Path::new("a.gv")), Some(GraphFormat::Dot));
        assert_eq!(GraphFormat::from_path(Path::new("a.svg")), None);
        assert_eq!(GraphFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }
}
