use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use super::graph::OntologyGraph;
use crate::errors::{OmlEditError, Result};
use crate::model::{Annotation, EditValue, Literal, PropertyKind, PropertyValueAssertion};
use crate::queries::find_annotation_values;

/// What a property assignment did to the element's assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOutcome {
    /// No assertion existed; one was appended
    Inserted,
    /// The first assertion was rewritten; `duplicates_removed` extra ones were dropped
    Updated { duplicates_removed: usize },
    /// Value was cleared; `removed` assertions were dropped
    Cleared { removed: usize },
}

/// Set or clear the single value of a property on an element
///
/// `property_id` is an abbreviated IRI resolved in the ontology owning
/// `element`. `None` or an empty text value clears the property.
///
/// The first existing assertion for the property is updated in place and
/// every other one is removed, so the element ends with at most one
/// assertion for the property even if it started with duplicates.
///
/// Annotation properties apply to any element. Scalar properties apply only
/// to instance-like nodes (concept instances, relation instances and named
/// instance references).
///
/// # Errors
/// * `UnknownProperty` - If `property_id` does not resolve
/// * `UnsupportedProperty` - If it resolves to something other than an annotation or scalar property
/// * `UnsupportedTarget` - If a scalar property is set on a node that cannot hold property values
/// * `NodeNotFound` / `NodeDeleted` - If `element` is stale
/// * `NoOwningOntology` - If `element` is not owned by an ontology
///
/// The graph is untouched whenever an error is returned.
pub fn set_property(
    graph: &mut OntologyGraph,
    element: NodeId,
    property_id: &str,
    value: Option<EditValue>,
) -> Result<AssignOutcome> {
    let ontology = graph.ontology_of(element)?;
    let property = graph
        .resolve_member_by_abbreviated_iri(ontology, property_id)
        .ok_or_else(|| OmlEditError::UnknownProperty {
            property_id: property_id.to_string(),
        })?;
    let kind = graph.get(property)?.kind.property_kind().ok_or_else(|| {
        OmlEditError::UnsupportedProperty {
            property_id: property_id.to_string(),
        }
    })?;

    let literal = value.and_then(EditValue::normalize).map(Literal::from);
    let node = graph.get_mut(element)?;

    let outcome = match kind {
        PropertyKind::Annotation => assign_single(
            &mut node.annotations,
            |a| a.property == property,
            |a, value| a.value = value,
            |value| Annotation { property, value },
            literal,
        ),
        PropertyKind::Scalar => {
            let host = node.kind.assertion_host_mut().ok_or_else(|| {
                OmlEditError::UnsupportedTarget {
                    element,
                    property_id: property_id.to_string(),
                }
            })?;
            assign_single(
                host.property_values_mut(),
                |pv| pv.is_scalar_for(property),
                |pv, value| {
                    if let PropertyValueAssertion::Scalar { value: v, .. } = pv {
                        *v = value;
                    }
                },
                |value| PropertyValueAssertion::Scalar { property, value },
                literal,
            )
        }
    };

    tracing::debug!(%element, property_id, ?kind, ?outcome, "property assigned");
    Ok(outcome)
}

/// First annotation value on `element` for `property_id`, if any
///
/// # Errors
///
/// Returns a handle error if `element` is stale, or `NoOwningOntology` if it
/// is not owned by an ontology. An id that does not resolve yields `Ok(None)`.
pub fn get_annotation(
    graph: &OntologyGraph,
    element: NodeId,
    property_id: &str,
) -> Result<Option<Literal>> {
    Ok(find_annotation_values(graph, element, property_id)?
        .into_iter()
        .next()
        .cloned())
}

/// Keep at most one matching item, carrying `value`
fn assign_single<T>(
    items: &mut Vec<T>,
    matches: impl Fn(&T) -> bool,
    mut update: impl FnMut(&mut T, Literal),
    create: impl FnOnce(Literal) -> T,
    value: Option<Literal>,
) -> AssignOutcome {
    let clearing = value.is_none();
    let mut pending = value;
    let mut updated = false;
    let mut removed = 0;

    items.retain_mut(|item| {
        if !matches(item) {
            return true;
        }
        if let Some(v) = pending.take() {
            update(item, v);
            updated = true;
            return true;
        }
        removed += 1;
        false
    });

    if let Some(v) = pending {
        items.push(create(v));
        return AssignOutcome::Inserted;
    }

    if clearing {
        AssignOutcome::Cleared { removed }
    } else {
        debug_assert!(updated);
        AssignOutcome::Updated {
            duplicates_removed: removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: f64) -> Literal {
        Literal::Double(v)
    }

    #[test]
    fn test_assign_single_inserts_when_absent() {
        let mut items: Vec<(u8, Literal)> = vec![(2, lit(1.0))];
        let outcome = assign_single(
            &mut items,
            |i| i.0 == 1,
            |i, v| i.1 = v,
            |v| (1, v),
            Some(lit(5.0)),
        );
        assert_eq!(outcome, AssignOutcome::Inserted);
        assert_eq!(items, vec![(2, lit(1.0)), (1, lit(5.0))]);
    }

    #[test]
    fn test_assign_single_collapses_duplicates_into_first() {
        let mut items = vec![(1, lit(1.0)), (2, lit(9.0)), (1, lit(2.0)), (1, lit(3.0))];
        let outcome = assign_single(
            &mut items,
            |i| i.0 == 1,
            |i, v| i.1 = v,
            |v| (1, v),
            Some(lit(7.0)),
        );
        assert_eq!(
            outcome,
            AssignOutcome::Updated {
                duplicates_removed: 2
            }
        );
        assert_eq!(items, vec![(1, lit(7.0)), (2, lit(9.0))]);
    }

    #[test]
    fn test_assign_single_clear_removes_all_matches() {
        let mut items = vec![(1, lit(1.0)), (2, lit(9.0)), (1, lit(2.0))];
        let outcome = assign_single(&mut items, |i| i.0 == 1, |i, v| i.1 = v, |v| (1, v), None);
        assert_eq!(outcome, AssignOutcome::Cleared { removed: 2 });
        assert_eq!(items, vec![(2, lit(9.0))]);
    }
}
