//! Include trace parsing and tree definitions.
//!
//! This module handles:
//! - Recognizing "including file" notices in raw compiler output
//! - Reconstructing include nesting from the reported indentation
//! - Defining the in-memory include tree

pub mod include_trace;
pub mod schema;

// Re-export main types
pub use include_trace::{
    parse_line, parse_trace, parse_trace_with, DepthPolicy, ParseOptions, TraceDialect,
};
pub use schema::{DepthFirst, IncludeNode, IncludeTree};
