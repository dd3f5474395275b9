//! JSON graph file writer.
//!
//! Wraps a graph document with versioning metadata so files can be validated
//! and loaded back.

use super::create_writer;
use crate::graph::GraphDocument;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Top-level structure written to JSON graph files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Source file whose includes were traced, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_unit: Option<String>,

    /// Number of include lines in the trace
    pub num_includes: usize,

    /// Timestamp when the file was generated
    pub generated_at: String,

    pub graph: GraphDocument,
}

impl GraphFile {
    pub fn new(graph: GraphDocument, translation_unit: Option<&str>, num_includes: usize) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            translation_unit: translation_unit.map(str::to_string),
            num_includes,
            generated_at: Utc::now().to_rfc3339(),
            graph,
        }
    }
}

/// Write a graph file as pretty-printed JSON
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_graph_file(file: &GraphFile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON graph to: {}", output_path.display());

    let mut writer = create_writer(output_path)?;
    serde_json::to_writer_pretty(&mut writer, file).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Read a graph file from JSON
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_graph_file(input_path: impl AsRef<Path>) -> Result<GraphFile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading graph file from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let graph_file: GraphFile =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Graph file loaded: version {}, {} nodes",
        graph_file.version,
        graph_file.graph.nodes.len()
    );

    Ok(graph_file)
}
