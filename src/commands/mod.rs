//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod models;
pub mod tree;
pub mod utils;

// Re-export main command functions
pub use graph::execute_graph;
pub use models::{GraphArgs, TraceInput, TreeArgs};
pub use tree::execute_tree;
pub use utils::{
    display_version, format_single_path, refresh_viewer, validate_graph_file, validate_input,
};
