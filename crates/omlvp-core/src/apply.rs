//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the single entry point the
//! editor uses to run an edit command against the graph.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either the command succeeds completely, or it fails
//!   and the graph is exactly as it was
//! - **No panics**: invalid handles and ids return typed errors
//! - **Checked deletes**: after a cascade delete nothing may still point at a
//!   deleted handle
//!
//! ## Example
//!
//! ```
//! use omlvp_core::{apply, CascadeAll, Command, OntologyGraph};
//! use omlvp_core::model::{ConceptInstance, NodeKind, OntologyKind};
//!
//! let mut graph = OntologyGraph::new();
//! let desc = graph.add_ontology("http://example.com/d#", "d", OntologyKind::Description);
//! let a = graph
//!     .add_member(desc, Some("a"), NodeKind::ConceptInstance(ConceptInstance::default()))
//!     .unwrap();
//!
//! let cmd = Command::DeleteNamedInstance { instance: a };
//! apply(&mut graph, cmd, &CascadeAll).unwrap();
//! assert!(!graph.contains(a));
//! ```

use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{
    instance_ops, property_ops, relation_ops, AssignOutcome, DeleteOutcome, EndpointChange,
    OntologyGraph,
};
use crate::policy::CascadePolicy;
use crate::rules::validation;

/// What an applied command changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EditOutcome {
    PropertyAssigned { outcome: AssignOutcome },
    InstanceDeleted { outcome: DeleteOutcome },
    LinksDeleted { removed: usize },
    EndpointNamed { change: EndpointChange },
}

/// Apply a command to the graph
///
/// Deletes run against a working copy that replaces the graph only once the
/// post-delete check passes. The other commands validate everything before
/// their first write, so they run in place.
///
/// # Arguments
///
/// * `graph` - Graph to edit
/// * `cmd` - Command to execute
/// * `policy` - Cycle policy for cascade deletes
///
/// # Errors
///
/// Returns the error of the underlying operation, or `DanglingReference` if
/// a delete left something pointing at a freed handle. The graph is unchanged
/// in every error case.
pub fn apply(
    graph: &mut OntologyGraph,
    cmd: Command,
    policy: &dyn CascadePolicy,
) -> Result<EditOutcome> {
    match cmd {
        Command::SetProperty {
            element,
            property_id,
            value,
        } => {
            let outcome = property_ops::set_property(graph, element, &property_id, value)?;
            Ok(EditOutcome::PropertyAssigned { outcome })
        }

        Command::DeleteNamedInstance { instance } => {
            let outcome = commit_delete(graph, instance, policy)?;
            Ok(EditOutcome::InstanceDeleted { outcome })
        }

        Command::DeleteLink {
            source,
            target,
            relation_id,
        } => {
            let removed = instance_ops::delete_link(graph, source, target, &relation_id)?;
            Ok(EditOutcome::LinksDeleted { removed })
        }

        Command::NameRelationEndpoint {
            entity,
            direction,
            name,
        } => {
            let change = relation_ops::set_endpoint_name(graph, entity, direction, &name)?;
            Ok(EditOutcome::EndpointNamed { change })
        }
    }
}

/// Cascade delete on a working copy, committed only if nothing is left
/// pointing at a deleted handle
///
/// # Errors
///
/// Returns the error of `delete_named_instance`, or `DanglingReference` if
/// the post-delete check fails. The graph is unchanged in both cases.
pub fn commit_delete(
    graph: &mut OntologyGraph,
    instance: NodeId,
    policy: &dyn CascadePolicy,
) -> Result<DeleteOutcome> {
    let mut working = graph.clone();
    let outcome = instance_ops::delete_named_instance(&mut working, instance, policy)?;
    validation::validate_deleted(&working, &outcome.deleted_instances)?;
    *graph = working;
    Ok(outcome)
}
