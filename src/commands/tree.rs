//! Tree command implementation.
//!
//! The tree command:
//! 1. Captures the include trace (file, stdin or compiler run)
//! 2. Parses it into an include tree
//! 3. Prints the tree as indented text or JSON

use super::models::TreeArgs;
use super::utils::refresh_viewer;
use crate::output::{render_summary, render_tree};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the tree command
///
/// **Public** - main entry point called from main.rs
pub fn execute_tree(args: &TreeArgs) -> Result<()> {
    let start_time = Instant::now();

    let viewer = refresh_viewer(&args.input)?;
    let tree = viewer
        .current()
        .context("Include tree missing after refresh")?;

    if args.json {
        let json = serde_json::to_string_pretty(tree).context("Failed to serialize tree")?;
        println!("{}", json);
    } else {
        print!("{}", render_tree(tree, args.show_paths));
    }

    if args.summary {
        println!("\n{}", "=".repeat(60));
        if let Some(source) = &args.input.source_file {
            println!("Translation unit: {}", source.display());
        }
        println!("{}", render_summary(tree));
        println!("{}", "=".repeat(60));
    }

    info!(
        "{} includes listed in {:.2}s",
        tree.num_includes,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
