//! Text editor integration
//!
//! Opening a node in the host's text editor takes two collaborators: one that
//! knows where a node was parsed from, and one that can open a resource and
//! select a span in it. Both are traits so the diagram editor can supply its
//! own and tests can supply fakes.

use std::collections::HashMap;

use omlvp_core::{log_op_end, log_op_error, log_op_start};
use omlvp_core::{NodeId, OmlEditError, OntologyGraph, Result};
use serde::{Deserialize, Serialize};

/// Location of a node's text in a source resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Resource (file or URI) the node was parsed from
    pub resource: String,
    /// Byte offset of the node's first character
    pub offset: usize,
    pub length: usize,
}

/// Finds where a node was parsed from
pub trait LocateInSource {
    fn locate(&self, graph: &OntologyGraph, node: NodeId) -> Option<SourceLocation>;
}

/// Opens a resource in the host's text editor
pub trait TextEditorHost {
    /// Open `location.resource` and select the span
    ///
    /// # Errors
    ///
    /// Returns `EditorUnavailable` if the host cannot open the resource.
    fn open_and_select(&mut self, location: &SourceLocation) -> Result<()>;
}

/// Node-to-span table filled in by whatever parsed the graph
#[derive(Debug, Clone, Default)]
pub struct SpanIndex {
    spans: HashMap<NodeId, SourceLocation>,
}

impl SpanIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId, location: SourceLocation) {
        self.spans.insert(node, location);
    }
}

impl LocateInSource for SpanIndex {
    /// Deleted nodes have no location even if their span is still recorded
    fn locate(&self, graph: &OntologyGraph, node: NodeId) -> Option<SourceLocation> {
        if !graph.contains(node) {
            return None;
        }
        self.spans.get(&node).cloned()
    }
}

/// Open `node` in the text editor with its text selected
///
/// Always returns `node`, so the diagram can chain the call into its
/// selection. A node with no known location, or a host that fails to open it,
/// is logged and otherwise ignored.
pub fn open_text_editor(
    graph: &OntologyGraph,
    node: NodeId,
    locator: &dyn LocateInSource,
    host: &mut dyn TextEditorHost,
) -> NodeId {
    log_op_start!("open_text_editor", node = %node);
    let start = std::time::Instant::now();

    let opened = locator
        .locate(graph, node)
        .ok_or_else(|| OmlEditError::EditorUnavailable {
            reason: format!("no source location for {}", node),
        })
        .and_then(|location| host.open_and_select(&location));

    match opened {
        Ok(()) => {
            log_op_end!(
                "open_text_editor",
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "open_text_editor",
                e,
                duration_ms = start.elapsed().as_millis() as u64,
                node = %node
            );
        }
    }

    node
}
