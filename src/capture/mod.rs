//! Collaborators that feed the parser.
//!
//! This module handles:
//! - Obtaining raw trace text (from a file, stdin, or a compiler run)
//! - Supplying the include directories of a translation unit
//! - Checking that a source file can be compiled at all

pub mod project;
pub mod source;

pub use project::{candidate_base_dirs, check_compilable, ProjectContext, StaticProjectContext};
pub use source::{CompilerTraceSource, FileTraceSource, TraceSource};
