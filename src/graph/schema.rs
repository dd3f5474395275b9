//! Graph document definitions.

use serde::{Deserialize, Serialize};

/// A file in the exported graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    /// Raw include path, the file identity
    pub id: String,

    /// Display name
    pub label: String,
}

/// An include relationship
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    /// Including file, `None` for files included by the translation unit
    pub source: Option<String>,

    /// Included file
    pub target: String,
}

impl GraphLink {
    pub fn new(source: Option<&str>, target: &str) -> Self {
        Self {
            source: source.map(str::to_string),
            target: target.to_string(),
        }
    }
}

/// Node/link projection of an include tree
///
/// Built fresh for every export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphDocument {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Links that have an including file
    pub fn rooted_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .filter_map(|l| l.source.as_deref().map(|s| (s, l.target.as_str())))
    }
}
