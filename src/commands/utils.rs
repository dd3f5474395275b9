use super::models::TraceInput;
use crate::capture::{
    candidate_base_dirs, check_compilable, CompilerTraceSource, FileTraceSource,
    StaticProjectContext, TraceSource,
};
use crate::formatter::{format_path, PathMode};
use crate::output::read_graph_file;
use crate::session::IncludeViewer;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::PathBuf;

/// Validate trace input arguments
///
/// **Public** - can be called before executing a command for early validation
pub fn validate_input(input: &TraceInput) -> Result<()> {
    if !input.compiler_command.is_empty() && input.trace_file.is_some() {
        anyhow::bail!("Pass either a trace file or a compiler command, not both");
    }

    if let Some(source) = &input.source_file {
        check_compilable(source).context("Can't refresh since current file can't be compiled")?;
    }

    if let Some(dir) = &input.working_dir {
        if input.compiler_command.is_empty() {
            anyhow::bail!("A working directory only applies to a compiler command");
        }
        if !dir.is_dir() {
            anyhow::bail!("Working directory does not exist: {}", dir.display());
        }
    }

    if input.include_dirs.iter().any(|d| d.trim().is_empty()) {
        anyhow::bail!("Include directories cannot be empty");
    }

    Ok(())
}

/// Capture and parse a trace into a fresh viewer
///
/// **Public** - shared by the tree and graph commands
pub fn refresh_viewer(input: &TraceInput) -> Result<IncludeViewer> {
    let context = StaticProjectContext::new(input.include_dirs.clone());
    let base_dirs = candidate_base_dirs(input.source_file.as_deref(), &context);

    let source: Box<dyn TraceSource> = if input.compiler_command.is_empty() {
        Box::new(FileTraceSource::from_arg(input.trace_file.clone()))
    } else {
        let mut compiler = CompilerTraceSource::new(&input.compiler_command)?;
        if let Some(dir) = &input.working_dir {
            compiler = compiler.with_working_dir(dir);
        }
        Box::new(compiler)
    };

    let mut viewer = IncludeViewer::new(input.parse_options());
    viewer
        .refresh(source.as_ref(), &base_dirs)
        .context("Failed to build include tree")?;

    debug!("Options: {:?}", viewer.options());
    Ok(viewer)
}

/// Format one path and print the result
pub fn format_single_path(path: &str, mode: PathMode, include_dirs: &[String]) -> Result<()> {
    match format_path(path, mode, include_dirs) {
        Some(formatted) => println!("{}", formatted),
        None => {
            println!("{}", path);
            warn!("No include directory contains {}", path);
        }
    }
    Ok(())
}

/// Validate a JSON graph file
pub fn validate_graph_file(file_path: PathBuf) -> Result<()> {
    println!("Validating graph file: {}", file_path.display());

    let graph_file = read_graph_file(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let dangling = graph_file
        .graph
        .rooted_links()
        .filter(|(source, target)| {
            !graph_file.graph.nodes.iter().any(|n| n.id == *source)
                || !graph_file.graph.nodes.iter().any(|n| n.id == *target)
        })
        .count();
    if dangling > 0 {
        anyhow::bail!("{} links reference unknown nodes", dangling);
    }

    println!("✓ Valid graph JSON");
    println!("  Version: {}", graph_file.version);
    if let Some(tu) = &graph_file.translation_unit {
        println!("  Translation unit: {}", tu);
    }
    println!("  Includes: {}", graph_file.num_includes);
    println!("  Nodes: {}", graph_file.graph.nodes.len());
    println!("  Links: {}", graph_file.graph.links.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Include Viewer v{}", env!("CARGO_PKG_VERSION"));
    println!("Graph Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Reconstructs C/C++ include trees from compiler traces.");
}
