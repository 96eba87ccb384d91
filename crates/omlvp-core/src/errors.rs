use omlvp_core_types::NodeId;
use thiserror::Error;

/// Result type alias using OmlEditError
pub type Result<T> = std::result::Result<T, OmlEditError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the host editor can match on
/// without depending on the shape of `OmlEditError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Edit rejections (non-fatal, graph untouched)
    UnknownProperty,
    UnsupportedProperty,
    UnsupportedTarget,
    UnknownRelation,

    // Handle errors
    NotFound,
    Deleted,
    InvalidTargetKind,
    MissingOwner,

    // Structural
    CycleDetected,
    IntegrityViolation,

    // Host integration
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownProperty => "ERR_UNKNOWN_PROPERTY",
            ExErrorKind::UnsupportedProperty => "ERR_UNSUPPORTED_PROPERTY",
            ExErrorKind::UnsupportedTarget => "ERR_UNSUPPORTED_TARGET",
            ExErrorKind::UnknownRelation => "ERR_UNKNOWN_RELATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Deleted => "ERR_DELETED",
            ExErrorKind::InvalidTargetKind => "ERR_INVALID_TARGET_KIND",
            ExErrorKind::MissingOwner => "ERR_MISSING_OWNER",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::IntegrityViolation => "ERR_INTEGRITY_VIOLATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }

    /// Whether the error is an edit rejection the editor can report and move past
    ///
    /// Recoverable kinds are raised before any mutation, so the graph is
    /// still in its prior state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExErrorKind::UnknownProperty
                | ExErrorKind::UnsupportedProperty
                | ExErrorKind::UnsupportedTarget
                | ExErrorKind::UnknownRelation
        )
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for the log.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node: Option<NodeId>,
    property_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node: None,
            property_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node handle context
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    /// Add abbreviated property (or relation) id context
    pub fn with_property_id(mut self, id: impl Into<String>) -> Self {
        self.property_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn property_id(&self) -> Option<&str> {
        self.property_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node) = self.node {
            write!(f, " (node: {})", node)?;
        }
        if let Some(property_id) = &self.property_id {
            write!(f, " (property_id: {})", property_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for viewpoint edit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OmlEditError {
    // ===== Edit Rejections =====
    /// Abbreviated property id does not resolve in the element's ontology
    #[error("Unknown property: {property_id}")]
    UnknownProperty { property_id: String },

    /// Resolved member is neither an annotation property nor a scalar property
    #[error("Not a scalar or annotation property: {property_id}")]
    UnsupportedProperty { property_id: String },

    /// Scalar property requested on something that cannot hold property values
    #[error("Cannot set scalar property {property_id} on {element}: not a named instance or named instance reference")]
    UnsupportedTarget {
        element: NodeId,
        property_id: String,
    },

    /// Abbreviated relation id does not resolve to a relation
    #[error("Unknown relation: {relation_id}")]
    UnknownRelation { relation_id: String },

    // ===== Handle Errors =====
    /// Handle was never issued by this graph
    #[error("Node not found: {node}")]
    NodeNotFound { node: NodeId },

    /// Handle refers to a node that has since been deleted
    #[error("Node was deleted: {node}")]
    NodeDeleted { node: NodeId },

    /// Node is not a concept instance or relation instance
    #[error("Node {node} is not a named instance")]
    NotANamedInstance { node: NodeId },

    /// Node is not a relation entity
    #[error("Node {node} is not a relation entity")]
    NotARelationEntity { node: NodeId },

    /// Node is not an ontology
    #[error("Node {node} is not an ontology")]
    NotAnOntology { node: NodeId },

    /// Node has no ontology in its owner chain
    #[error("Node {node} is not owned by any ontology")]
    NoOwningOntology { node: NodeId },

    // ===== Structural Errors =====
    /// Cascade delete would revisit a relation instance already being deleted
    #[error("Cyclic relation instance graph: deleting {instance} revisits {revisited}")]
    CyclicGraph { instance: NodeId, revisited: NodeId },

    /// A reference, link or relation instance points at a node that no longer exists
    #[error("Node {node} points at missing node {target}")]
    DanglingReference { node: NodeId, target: NodeId },

    /// More than one assertion for the same (element, property) pair
    #[error("Element {element} has more than one assertion for property {property}")]
    DuplicateAssertion { element: NodeId, property: NodeId },

    // ===== Host Integration =====
    /// The host text editor could not be opened
    #[error("Text editor unavailable: {reason}")]
    EditorUnavailable { reason: String },
}

impl From<OmlEditError> for ExError {
    fn from(err: OmlEditError) -> Self {
        match err {
            OmlEditError::UnknownProperty { property_id } => {
                ExError::new(ExErrorKind::UnknownProperty)
                    .with_property_id(property_id)
                    .with_message("Property id does not resolve")
            }

            OmlEditError::UnsupportedProperty { property_id } => {
                ExError::new(ExErrorKind::UnsupportedProperty)
                    .with_property_id(property_id)
                    .with_message("Not a scalar or annotation property")
            }

            OmlEditError::UnsupportedTarget {
                element,
                property_id,
            } => ExError::new(ExErrorKind::UnsupportedTarget)
                .with_node(element)
                .with_property_id(property_id)
                .with_message("Element cannot hold scalar property values"),

            OmlEditError::UnknownRelation { relation_id } => {
                ExError::new(ExErrorKind::UnknownRelation)
                    .with_property_id(relation_id)
                    .with_message("Relation id does not resolve")
            }

            OmlEditError::NodeNotFound { node } => ExError::new(ExErrorKind::NotFound)
                .with_node(node)
                .with_message("Node not found"),

            OmlEditError::NodeDeleted { node } => ExError::new(ExErrorKind::Deleted)
                .with_node(node)
                .with_message("Node was deleted"),

            OmlEditError::NotANamedInstance { node } => {
                ExError::new(ExErrorKind::InvalidTargetKind)
                    .with_node(node)
                    .with_message("Expected a named instance")
            }

            OmlEditError::NotARelationEntity { node } => {
                ExError::new(ExErrorKind::InvalidTargetKind)
                    .with_node(node)
                    .with_message("Expected a relation entity")
            }

            OmlEditError::NotAnOntology { node } => ExError::new(ExErrorKind::InvalidTargetKind)
                .with_node(node)
                .with_message("Expected an ontology"),

            OmlEditError::NoOwningOntology { node } => ExError::new(ExErrorKind::MissingOwner)
                .with_node(node)
                .with_message("Node is not owned by any ontology"),

            OmlEditError::CyclicGraph {
                instance,
                revisited,
            } => ExError::new(ExErrorKind::CycleDetected)
                .with_node(instance)
                .with_message(format!("Cascade revisits relation instance {}", revisited)),

            OmlEditError::DanglingReference { node, target } => {
                ExError::new(ExErrorKind::IntegrityViolation)
                    .with_node(node)
                    .with_message(format!("Points at missing node {}", target))
            }

            OmlEditError::DuplicateAssertion { element, property } => {
                ExError::new(ExErrorKind::IntegrityViolation)
                    .with_node(element)
                    .with_message(format!("Duplicate assertions for property {}", property))
            }

            OmlEditError::EditorUnavailable { reason } => {
                ExError::new(ExErrorKind::ExternalService).with_message(reason)
            }
        }
    }
}
