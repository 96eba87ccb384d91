//! Command types representing every viewpoint edit gesture
//!
//! This module defines the command inventory that the editor hands to the
//! `apply()` function.

use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use crate::model::EditValue;
use crate::ops::EndpointDirection;

/// Command enum representing all viewpoint edit operations
///
/// Commands serialize with an internal `op` tag so the host editor can queue
/// or replay them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Set or clear the single value of an annotation or scalar property
    SetProperty {
        element: NodeId,
        property_id: String,
        value: Option<EditValue>,
    },

    /// Delete a named instance with everything that depends on it
    DeleteNamedInstance { instance: NodeId },

    /// Remove the links from `source` to `target` via one relation
    DeleteLink {
        source: NodeId,
        target: NodeId,
        relation_id: String,
    },

    /// Create, rename or remove (empty name) a relation endpoint
    NameRelationEndpoint {
        entity: NodeId,
        direction: EndpointDirection,
        name: String,
    },
}

impl Command {
    /// Operation name used in logs and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::SetProperty { .. } => "set_property",
            Command::DeleteNamedInstance { .. } => "delete_named_instance",
            Command::DeleteLink { .. } => "delete_link",
            Command::NameRelationEndpoint {
                direction: EndpointDirection::Forward,
                ..
            } => "set_forward_relation_name",
            Command::NameRelationEndpoint {
                direction: EndpointDirection::Reverse,
                ..
            } => "set_reverse_relation_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_names_follow_direction() {
        let forward = Command::NameRelationEndpoint {
            entity: NodeId::new(0, 0),
            direction: EndpointDirection::Forward,
            name: "owns".to_string(),
        };
        let reverse = Command::NameRelationEndpoint {
            entity: NodeId::new(0, 0),
            direction: EndpointDirection::Reverse,
            name: "isOwnedBy".to_string(),
        };

        assert_eq!(forward.op_name(), "set_forward_relation_name");
        assert_eq!(reverse.op_name(), "set_reverse_relation_name");
    }

    #[test]
    fn test_command_json_shape() {
        let cmd = Command::DeleteNamedInstance {
            instance: NodeId::new(4, 2),
        };
        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(json["op"], "delete_named_instance");
        assert_eq!(json["instance"]["index"], 4);
    }
}
