use omlvp_core::apply::commit_delete;
use omlvp_core::ops::{instance_ops, DeleteOutcome};
use omlvp_core::{log_op_end, log_op_error, log_op_start};
use omlvp_core::{CascadePolicy, NodeId, OntologyGraph, Result};

/// Delete a named instance with its references, incoming links and
/// dependent relation instances
///
/// Runs against a copy of the graph that replaces it only once nothing is
/// left pointing at a deleted handle.
///
/// ## Errors
///
/// - `NotANamedInstance`: `instance` is not a concept or relation instance
/// - `CyclicGraph`: the cascade closes a cycle and `policy` rejects it
/// - `DanglingReference`: the cascade left something behind
pub fn delete_named_instance(
    graph: &mut OntologyGraph,
    instance: NodeId,
    policy: &dyn CascadePolicy,
) -> Result<DeleteOutcome> {
    log_op_start!("delete_named_instance", instance = %instance);
    let start = std::time::Instant::now();

    let result = commit_delete(graph, instance, policy).map_err(|e| {
        log_op_error!(
            "delete_named_instance",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            instance = %instance
        );
        e
    })?;

    log_op_end!(
        "delete_named_instance",
        duration_ms = start.elapsed().as_millis() as u64,
        deleted_count = result.deleted_instances.len(),
        links_removed = result.removed_links,
        cycles = result.cycles_detected.len()
    );

    Ok(result)
}

/// Remove the links from `source` to `target` via the relation `relation_id`
///
/// ## Errors
///
/// - `UnknownRelation`: `relation_id` does not name a forward or reverse relation
/// - `NotANamedInstance`: `source` is not a concept or relation instance
pub fn delete_link(
    graph: &mut OntologyGraph,
    source: NodeId,
    target: NodeId,
    relation_id: &str,
) -> Result<usize> {
    log_op_start!(
        "delete_link",
        source = %source,
        target = %target,
        relation_id = relation_id
    );
    let start = std::time::Instant::now();

    let removed = instance_ops::delete_link(graph, source, target, relation_id).map_err(|e| {
        log_op_error!(
            "delete_link",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            relation_id = relation_id
        );
        e
    })?;

    log_op_end!(
        "delete_link",
        duration_ms = start.elapsed().as_millis() as u64,
        links_removed = removed
    );

    Ok(removed)
}
