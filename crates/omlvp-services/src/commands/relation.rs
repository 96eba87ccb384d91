use omlvp_core::ops::{relation_ops, EndpointChange, EndpointDirection};
use omlvp_core::{log_op_end, log_op_error, log_op_start};
use omlvp_core::{NodeId, OntologyGraph, Result};

/// Create, rename or remove (empty `name`) the forward relation of `entity`
///
/// ## Errors
///
/// - `NotARelationEntity`: `entity` is some other kind of node
pub fn set_forward_relation_name(
    graph: &mut OntologyGraph,
    entity: NodeId,
    name: &str,
) -> Result<EndpointChange> {
    name_endpoint(
        "set_forward_relation_name",
        graph,
        entity,
        EndpointDirection::Forward,
        name,
    )
}

/// Create, rename or remove (empty `name`) the reverse relation of `entity`
///
/// ## Errors
///
/// - `NotARelationEntity`: `entity` is some other kind of node
pub fn set_reverse_relation_name(
    graph: &mut OntologyGraph,
    entity: NodeId,
    name: &str,
) -> Result<EndpointChange> {
    name_endpoint(
        "set_reverse_relation_name",
        graph,
        entity,
        EndpointDirection::Reverse,
        name,
    )
}

fn name_endpoint(
    op: &'static str,
    graph: &mut OntologyGraph,
    entity: NodeId,
    direction: EndpointDirection,
    name: &str,
) -> Result<EndpointChange> {
    log_op_start!(op, entity = %entity, name = name);
    let start = std::time::Instant::now();

    let change = relation_ops::set_endpoint_name(graph, entity, direction, name).map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        change = ?change
    );

    Ok(change)
}
