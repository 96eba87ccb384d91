use omlvp_core::model::{EditValue, Literal};
use omlvp_core::ops::{property_ops, AssignOutcome};
use omlvp_core::{log_op_end, log_op_error, log_op_start};
use omlvp_core::{NodeId, OntologyGraph, Result};

/// Set or clear the single value of an annotation or scalar property
///
/// ## Arguments
///
/// - `element`: element receiving the assertion
/// - `property_id`: abbreviated IRI of the property, e.g. `v:weight`
/// - `value`: new value; `None` or empty text clears it
///
/// ## Errors
///
/// - `UnknownProperty`: `property_id` does not resolve
/// - `UnsupportedProperty`: not an annotation or scalar property
/// - `UnsupportedTarget`: scalar property on a node that cannot hold values
///
/// All three leave the graph untouched.
pub fn set_property(
    graph: &mut OntologyGraph,
    element: NodeId,
    property_id: &str,
    value: Option<EditValue>,
) -> Result<AssignOutcome> {
    log_op_start!("set_property", element = %element, property_id = property_id);
    let start = std::time::Instant::now();

    let outcome = property_ops::set_property(graph, element, property_id, value).map_err(|e| {
        log_op_error!(
            "set_property",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            property_id = property_id
        );
        e
    })?;

    log_op_end!(
        "set_property",
        duration_ms = start.elapsed().as_millis() as u64,
        property_id = property_id,
        outcome = ?outcome
    );

    Ok(outcome)
}

/// First annotation value on `element` for `property_id`
///
/// Read-only, so only failures are logged.
///
/// ## Errors
///
/// - `NodeNotFound` / `NodeDeleted`: stale `element`
/// - `NoOwningOntology`: `element` is not inside an ontology
pub fn get_annotation(
    graph: &OntologyGraph,
    element: NodeId,
    property_id: &str,
) -> Result<Option<Literal>> {
    property_ops::get_annotation(graph, element, property_id).map_err(|e| {
        log_op_error!(
            "get_annotation",
            e.clone(),
            duration_ms = 0u64,
            property_id = property_id
        );
        e
    })
}
