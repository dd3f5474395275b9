//! Graph command implementation.
//!
//! The graph command:
//! 1. Captures and parses the include trace
//! 2. Exports the include tree as a node/link document
//! 3. Writes it as DGML, JSON or DOT

use super::models::GraphArgs;
use super::utils::refresh_viewer;
use crate::output::{validate_path, write_graph};
use anyhow::{Context, Result};
use log::info;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
pub fn execute_graph(args: &GraphArgs) -> Result<()> {
    // Fail on a bad output path before running a compiler
    validate_path(&args.output).context("Invalid graph output path")?;

    let viewer = refresh_viewer(&args.input)?;
    let graph = viewer.export_graph()?;
    let num_includes = viewer.current().map_or(0, |t| t.num_includes);

    let format = args.resolved_format();
    let translation_unit = args
        .input
        .source_file
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned());

    write_graph(
        &graph,
        &args.output,
        format,
        translation_unit.as_deref(),
        num_includes,
    )
    .context("Failed to write graph")?;

    info!(
        "✓ Graph written to: {} ({} nodes, {} links, {:?})",
        args.output.display(),
        graph.nodes.len(),
        graph.links.len(),
        format
    );

    Ok(())
}
