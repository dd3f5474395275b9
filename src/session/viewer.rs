//! Current-result holder for the include viewer.
//!
//! A refresh first drops the previous tree, then captures and parses a new
//! trace. The tree is stored only when every step succeeded, so callers never
//! see a tree from a failed run or a mix of two runs. Refreshing takes
//! `&mut self`, which keeps one refresh in flight per viewer.

use crate::capture::TraceSource;
use crate::graph::{export_graph, GraphDocument};
use crate::parser::{parse_trace_with, IncludeTree, ParseOptions};
use crate::utils::error::ViewerError;
use log::{info, warn};

#[derive(Debug, Default)]
pub struct IncludeViewer {
    options: ParseOptions,
    current: Option<IncludeTree>,
}

impl IncludeViewer {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The tree from the last successful refresh
    pub fn current(&self) -> Option<&IncludeTree> {
        self.current.as_ref()
    }

    /// Capture a new trace and rebuild the tree
    ///
    /// # Errors
    /// * `ViewerError::Capture` - The trace source failed or returned nothing
    /// * `ViewerError::Parse` - The trace is malformed
    ///
    /// On error the viewer holds no tree.
    pub fn refresh<S: AsRef<str>>(
        &mut self,
        source: &dyn TraceSource,
        base_dirs: &[S],
    ) -> Result<&IncludeTree, ViewerError> {
        self.current = None;

        let text = source.capture().map_err(|e| {
            warn!("Trace capture failed: {}", e);
            e
        })?;
        let tree = parse_trace_with(&text, base_dirs, &self.options)?;

        info!("Include tree rebuilt: {} includes", tree.num_includes);
        Ok(self.current.insert(tree))
    }

    /// Export the current tree as a graph document
    ///
    /// # Errors
    /// * `ViewerError::NoTreeToExport` - No successful refresh yet
    pub fn export_graph(&self) -> Result<GraphDocument, ViewerError> {
        let tree = self.current.as_ref().ok_or(ViewerError::NoTreeToExport)?;
        Ok(export_graph(&tree.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{CaptureError, ParseError};

    const BASES: [&str; 1] = ["/p"];

    fn good() -> Result<String, CaptureError> {
        Ok("Note: including file: /p/a.h\nNote: including file:  /p/b.h\n".to_string())
    }

    fn malformed() -> Result<String, CaptureError> {
        Ok("Note: including file:    /p/deep.h\n".to_string())
    }

    fn failing() -> Result<String, CaptureError> {
        Err(CaptureError::EmptyOutput)
    }

    #[test]
    fn test_export_without_tree() {
        let viewer = IncludeViewer::default();
        assert!(matches!(
            viewer.export_graph(),
            Err(ViewerError::NoTreeToExport)
        ));
    }

    #[test]
    fn test_refresh_then_export() {
        let mut viewer = IncludeViewer::default();
        let tree = viewer.refresh(&good, &BASES).unwrap();
        assert_eq!(tree.num_includes, 2);

        let graph = viewer.export_graph().unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[1].label, "b.h");
    }

    #[test]
    fn test_failed_parse_discards_previous_tree() {
        let mut viewer = IncludeViewer::default();
        viewer.refresh(&good, &BASES).unwrap();

        let result = viewer.refresh(&malformed, &BASES);
        assert!(matches!(
            result,
            Err(ViewerError::Parse(ParseError::MalformedTrace { .. }))
        ));
        assert!(viewer.current().is_none());
        assert!(viewer.export_graph().is_err());
    }

    #[test]
    fn test_failed_capture_discards_previous_tree() {
        let mut viewer = IncludeViewer::default();
        viewer.refresh(&good, &BASES).unwrap();

        assert!(matches!(
            viewer.refresh(&failing, &BASES),
            Err(ViewerError::Capture(CaptureError::EmptyOutput))
        ));
        assert!(viewer.current().is_none());
    }
}
