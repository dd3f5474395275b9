//! DGML graph writer.
//!
//! DGML is the directed graph format understood by the Visual Studio graph
//! viewer. Links without a source (includes of the translation unit itself)
//! have no DGML representation and are left out.

use super::write_text;
use crate::graph::GraphDocument;
use crate::utils::config::DGML_NAMESPACE;
use crate::utils::error::OutputError;
use log::info;
use quick_xml::escape::escape;
use std::fmt::Write;
use std::path::Path;

/// Serialize a graph as a DGML document
pub fn to_dgml(graph: &GraphDocument) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#);
    let _ = writeln!(out, r#"<DirectedGraph xmlns="{}">"#, DGML_NAMESPACE);

    out.push_str("  <Nodes>\n");
    for node in &graph.nodes {
        let _ = writeln!(
            out,
            r#"    <Node Id="{}" Label="{}" />"#,
            escape(node.id.as_str()),
            escape(node.label.as_str())
        );
    }
    out.push_str("  </Nodes>\n");

    out.push_str("  <Links>\n");
    for (source, target) in graph.rooted_links() {
        let _ = writeln!(
            out,
            r#"    <Link Source="{}" Target="{}" />"#,
            escape(source),
            escape(target)
        );
    }
    out.push_str("  </Links>\n");

    out.push_str("</DirectedGraph>\n");
    out
}

/// Write a graph to a DGML file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty or a directory
pub fn write_dgml(graph: &GraphDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing DGML graph to: {}", output_path.display());
    write_text(&to_dgml(graph), output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphLink, GraphNode};

    #[test]
    fn test_dgml_escapes_and_skips_rootless_links() {
        let graph = GraphDocument {
            nodes: vec![
                GraphNode {
                    id: "C:\\a&b\\x.h".to_string(),
                    label: "x<1>.h".to_string(),
                },
                GraphNode {
                    id: "C:\\y.h".to_string(),
                    label: "y.h".to_string(),
                },
            ],
            links: vec![
                GraphLink::new(None, "C:\\a&b\\x.h"),
                GraphLink::new(Some("C:\\a&b\\x.h"), "C:\\y.h"),
            ],
        };

        let dgml = to_dgml(&graph);

        assert!(dgml.contains(r#"<Node Id="C:\a&amp;b\x.h" Label="x&lt;1&gt;.h" />"#));
        assert!(dgml.contains(r#"<Link Source="C:\a&amp;b\x.h" Target="C:\y.h" />"#));
        assert_eq!(dgml.matches("<Link ").count(), 1);
    }

    #[test]
    fn test_dgml_empty_graph() {
        let dgml = to_dgml(&GraphDocument::default());
        assert!(dgml.contains("<Nodes>\n  </Nodes>"));
        assert!(dgml.ends_with("</DirectedGraph>\n"));
    }
}
