//! Include tree definitions.
//!
//! The tree is rebuilt from scratch on every parse. Each node owns its
//! children; the root is a synthetic node standing for the translation unit.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One include event from the trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeNode {
    /// Path exactly as it appeared in the trace
    pub raw_path: String,

    /// Formatted form of the path, or `raw_path` if formatting failed
    pub display_name: String,

    /// Includes pulled in directly by this file, in trace order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IncludeNode>,
}

impl IncludeNode {
    pub fn new(raw_path: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            display_name: display_name.into(),
            children: Vec::new(),
        }
    }

    /// The synthetic translation-unit node
    pub fn root() -> Self {
        Self::new("", "")
    }

    pub fn is_root(&self) -> bool {
        self.raw_path.is_empty()
    }
}

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeTree {
    pub root: IncludeNode,

    /// Number of recognized include lines (non-root nodes)
    pub num_includes: usize,
}

impl IncludeTree {
    pub fn empty() -> Self {
        Self {
            root: IncludeNode::root(),
            num_includes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Walk all non-root nodes depth-first in trace order
    ///
    /// Yields `(depth, node)`, depth 0 being an include of the main file.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.root)
    }

    /// Deepest include level, `None` for an empty tree
    pub fn max_depth(&self) -> Option<usize> {
        self.depth_first().map(|(depth, _)| depth).max()
    }

    /// Number of distinct raw paths in the tree
    pub fn distinct_files(&self) -> usize {
        self.depth_first()
            .map(|(_, node)| node.raw_path.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Depth-first iterator over an include tree
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a IncludeNode)>,
}

impl<'a> DepthFirst<'a> {
    fn new(root: &'a IncludeNode) -> Self {
        let stack = root.children.iter().rev().map(|c| (0, c)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a IncludeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
