//! Include Viewer
//!
//! Reconstructs the include hierarchy of a C/C++ translation unit from the
//! trace a compiler prints when asked to report every header it opens
//! (`cl /showIncludes`, `gcc -H`), and exports it as a directed graph.
//!
//! ## Pipeline
//!
//! raw trace text → [`parser`] (using [`formatter`] for display names) →
//! include tree → [`graph`] → [`output`] (DGML, JSON, DOT)
//!
//! ```bash
//! cl /nologo /c /showIncludes main.cpp > trace.log
//! include-viewer tree --trace trace.log --source main.cpp
//! include-viewer graph --trace trace.log --source main.cpp -o includes.dgml
//! ```

pub mod capture;
pub mod commands;
pub mod formatter;
pub mod graph;
pub mod output;
pub mod parser;
pub mod session;
pub mod utils;
