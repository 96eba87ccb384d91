use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use super::Literal;

/// Annotation assertion owned by an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation property
    pub property: NodeId,
    pub value: Literal,
}

/// Property value assertion owned by an instance-like node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValueAssertion {
    /// Value of a scalar property
    Scalar { property: NodeId, value: Literal },
    /// Anonymous structure instance for a structured property
    Structured {
        property: NodeId,
        values: Vec<PropertyValueAssertion>,
    },
}

impl PropertyValueAssertion {
    pub fn property(&self) -> NodeId {
        match self {
            PropertyValueAssertion::Scalar { property, .. } => *property,
            PropertyValueAssertion::Structured { property, .. } => *property,
        }
    }

    /// True if this is a scalar assertion for `property`
    pub fn is_scalar_for(&self, property: NodeId) -> bool {
        matches!(self, PropertyValueAssertion::Scalar { property: p, .. } if *p == property)
    }

    pub fn scalar_value(&self) -> Option<&Literal> {
        match self {
            PropertyValueAssertion::Scalar { value, .. } => Some(value),
            PropertyValueAssertion::Structured { .. } => None,
        }
    }
}

/// Link assertion owned by its source
///
/// The owner is the link's source; a link owned by a named instance reference
/// has the referenced instance as its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAssertion {
    /// Forward or reverse relation the link asserts
    pub relation: NodeId,
    pub target: NodeId,
}
