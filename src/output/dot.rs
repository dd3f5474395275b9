//! Graphviz DOT writer.

use super::write_text;
use crate::graph::GraphDocument;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Convert a graph to a DOT string
pub fn to_dot(graph: &GraphDocument) -> String {
    let mut lines = Vec::new();

    lines.push("digraph Includes {".to_string());
    lines.push("    rankdir=LR;".to_string());
    lines.push("    node [shape=box, fontname=\"Helvetica\", fontsize=11];".to_string());
    lines.push(String::new());

    for node in &graph.nodes {
        lines.push(format!(
            "    \"{}\" [label=\"{}\"];",
            escape_label(&node.id),
            escape_label(&node.label)
        ));
    }

    lines.push(String::new());

    for (source, target) in graph.rooted_links() {
        lines.push(format!(
            "    \"{}\" -> \"{}\";",
            escape_label(source),
            escape_label(target)
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Write a graph to a DOT file
pub fn write_dot(graph: &GraphDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing DOT graph to: {}", output_path.display());
    write_text(&to_dot(graph), output_path)
}

fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphLink, GraphNode};

    #[test]
    fn test_to_dot() {
        let graph = GraphDocument {
            nodes: vec![
                GraphNode {
                    id: "C:\\a.h".to_string(),
                    label: "a.h".to_string(),
                },
                GraphNode {
                    id: "C:\\b.h".to_string(),
                    label: "b.h".to_string(),
                },
            ],
            links: vec![
                GraphLink::new(None, "C:\\a.h"),
                GraphLink::new(Some("C:\\a.h"), "C:\\b.h"),
            ],
        };

        let dot = to_dot(&graph);
        assert!(dot.starts_with("digraph Includes {"));
        assert!(dot.contains(r#""C:\\a.h" [label="a.h"];"#));
        assert!(dot.contains(r#""C:\\a.h" -> "C:\\b.h";"#));
        assert_eq!(dot.matches("->").count(), 1);
    }
}
