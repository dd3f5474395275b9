//! Build a graph document from an include tree.
//!
//! A header can appear several times in the tree (included from different
//! files, or re-entered when it has no include guard). The export emits each
//! raw path once: the first visit creates the node and the link from its
//! parent, later visits emit nothing but are still walked, so files first
//! reached below a repeated header get linked to it.

use super::schema::{GraphDocument, GraphLink, GraphNode};
use crate::parser::IncludeNode;
use log::debug;
use std::collections::HashSet;

/// Export an include tree as a graph document
///
/// **Public** - main entry point for graph export
///
/// # Arguments
/// * `root` - Root of the include tree (the synthetic translation-unit node)
///
/// # Returns
/// One node per distinct raw path, one link per first visit. Links from the
/// root carry no source; the root itself is never a node.
pub fn export_graph(root: &IncludeNode) -> GraphDocument {
    let mut graph = GraphDocument::default();
    let mut visited: HashSet<&str> = HashSet::new();

    populate(&mut graph, root, None, &mut visited);

    debug!(
        "Exported graph with {} nodes and {} links",
        graph.nodes.len(),
        graph.links.len()
    );

    graph
}

/// Emit the children of `item`
///
/// **Private** - recursive helper for export_graph
fn populate<'a>(
    graph: &mut GraphDocument,
    item: &'a IncludeNode,
    parent_id: Option<&'a str>,
    visited: &mut HashSet<&'a str>,
) {
    for child in &item.children {
        let id = child.raw_path.as_str();

        if visited.insert(id) {
            graph.nodes.push(GraphNode {
                id: id.to_string(),
                label: child.display_name.clone(),
            });
            graph.links.push(GraphLink::new(parent_id, id));
        }

        populate(graph, child, Some(id), visited);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_nested() {
        let mut a = IncludeNode::new("/p/a.h", "a.h");
        a.children.push(IncludeNode::new("/p/b.h", "b.h"));
        let mut root = IncludeNode::root();
        root.children.push(a);

        let graph = export_graph(&root);

        assert_eq!(
            graph.nodes,
            vec![
                GraphNode {
                    id: "/p/a.h".to_string(),
                    label: "a.h".to_string()
                },
                GraphNode {
                    id: "/p/b.h".to_string(),
                    label: "b.h".to_string()
                },
            ]
        );
        assert_eq!(
            graph.links,
            vec![
                GraphLink::new(None, "/p/a.h"),
                GraphLink::new(Some("/p/a.h"), "/p/b.h"),
            ]
        );
    }

    #[test]
    fn test_export_empty_root() {
        let graph = export_graph(&IncludeNode::root());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_repeated_include_emitted_once() {
        // root -> a -> common, root -> b -> common -> extra
        let mut a = IncludeNode::new("/a.h", "a.h");
        a.children.push(IncludeNode::new("/common.h", "common.h"));
        let mut common = IncludeNode::new("/common.h", "common.h");
        common.children.push(IncludeNode::new("/extra.h", "extra.h"));
        let mut b = IncludeNode::new("/b.h", "b.h");
        b.children.push(common);
        let mut root = IncludeNode::root();
        root.children.push(a);
        root.children.push(b);

        let graph = export_graph(&root);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["/a.h", "/common.h", "/b.h", "/extra.h"]);
        assert!(!graph
            .links
            .contains(&GraphLink::new(Some("/b.h"), "/common.h")));
        assert!(graph
            .links
            .contains(&GraphLink::new(Some("/common.h"), "/extra.h")));
        assert_eq!(graph.links.len(), 4);
    }
}
