//! Graph export of include trees.
//!
//! Projects an include tree onto a node/link document that the output
//! writers serialize as DGML, JSON or Graphviz DOT.

pub mod exporter;
pub mod schema;

pub use exporter::export_graph;
pub use schema::{GraphDocument, GraphLink, GraphNode};
