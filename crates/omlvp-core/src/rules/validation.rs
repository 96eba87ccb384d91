use omlvp_core_types::NodeId;

use crate::errors::{OmlEditError, Result};
use crate::ops::OntologyGraph;

use super::invariants;

/// Validate the whole graph
///
/// Runs all invariant checks in this order:
/// 1. Every named instance reference points at a live instance
/// 2. Every link targets a live node
/// 3. Every relation instance source and target is live
/// 4. At most one annotation per (element, property)
/// 5. At most one scalar value per (element, property)
///
/// # Errors
/// Returns the first violation found as `DanglingReference` or
/// `DuplicateAssertion`. For exhaustive reporting, call the individual
/// invariant functions directly.
pub fn validate_graph(graph: &OntologyGraph) -> Result<()> {
    let dangling = invariants::find_dangling_references(graph)
        .into_iter()
        .chain(invariants::find_dangling_links(graph))
        .chain(invariants::find_dangling_relation_instances(graph))
        .next();
    if let Some((node, target)) = dangling {
        return Err(OmlEditError::DanglingReference { node, target });
    }

    let duplicate = invariants::find_duplicate_annotations(graph)
        .into_iter()
        .chain(invariants::find_duplicate_scalar_values(graph))
        .next();
    if let Some((element, property)) = duplicate {
        return Err(OmlEditError::DuplicateAssertion { element, property });
    }

    Ok(())
}

/// Check that nothing in the graph still points at any of `deleted`
///
/// Narrower than `validate_graph`: only the handles a delete just freed are
/// checked, so unrelated pre-existing problems do not fail the edit.
///
/// # Errors
/// Returns `DanglingReference` for the first node still pointing at a
/// deleted handle.
pub fn validate_deleted(graph: &OntologyGraph, deleted: &[NodeId]) -> Result<()> {
    for target in deleted {
        if let Some(node) = invariants::find_pointers_to(graph, *target).first() {
            return Err(OmlEditError::DanglingReference {
                node: *node,
                target: *target,
            });
        }
    }
    Ok(())
}
