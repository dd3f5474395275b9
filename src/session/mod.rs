//! Viewer session holding the current include tree.

pub mod viewer;

pub use viewer::IncludeViewer;
