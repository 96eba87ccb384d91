use omlvp_core_types::NodeId;

use crate::errors::Result;
use crate::model::{Literal, NodeKind};
use crate::ops::OntologyGraph;

/// A link assertion located in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRef {
    /// Node whose link list holds the assertion
    pub owner: NodeId,
    /// Effective source: the owner, or the instance it references
    pub source: NodeId,
    pub relation: NodeId,
    pub target: NodeId,
}

/// Values of every annotation on `element` for the property named by `property_id`
///
/// The id is resolved in the element's ontology. Returns an empty list if it
/// does not resolve.
///
/// # Errors
///
/// Returns a handle error if `element` is stale, or `NoOwningOntology` if it
/// is not owned by an ontology.
pub fn find_annotation_values<'a>(
    graph: &'a OntologyGraph,
    element: NodeId,
    property_id: &str,
) -> Result<Vec<&'a Literal>> {
    let ontology = graph.ontology_of(element)?;
    let Some(property) = graph.resolve_member_by_abbreviated_iri(ontology, property_id) else {
        return Ok(Vec::new());
    };

    Ok(graph
        .get(element)?
        .annotations
        .iter()
        .filter(|a| a.property == property)
        .map(|a| &a.value)
        .collect())
}

/// Named instance references whose referent is `instance`
pub fn find_references_to(graph: &OntologyGraph, instance: NodeId) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|n| n.kind.referenced_instance() == Some(instance))
        .map(|n| n.id)
        .collect()
}

/// Link assertions, on any instance or reference, whose target is `target`
pub fn find_link_assertions_with_target(graph: &OntologyGraph, target: NodeId) -> Vec<LinkRef> {
    let mut found = Vec::new();

    for node in graph.nodes() {
        let Some(host) = node.kind.assertion_host() else {
            continue;
        };
        let source = node.kind.referenced_instance().unwrap_or(node.id);
        for link in host.links().iter().filter(|l| l.target == target) {
            found.push(LinkRef {
                owner: node.id,
                source,
                relation: link.relation,
                target: link.target,
            });
        }
    }

    found
}

/// Relation instances that list `instance` among their targets
pub fn find_relation_instances_with_target(graph: &OntologyGraph, instance: NodeId) -> Vec<NodeId> {
    relation_instances_where(graph, |ri| ri.targets.contains(&instance))
}

/// Relation instances that list `instance` among their sources
pub fn find_relation_instances_with_source(graph: &OntologyGraph, instance: NodeId) -> Vec<NodeId> {
    relation_instances_where(graph, |ri| ri.sources.contains(&instance))
}

fn relation_instances_where<F>(graph: &OntologyGraph, predicate: F) -> Vec<NodeId>
where
    F: Fn(&crate::model::RelationInstance) -> bool,
{
    graph
        .nodes()
        .filter(|n| match &n.kind {
            NodeKind::RelationInstance(ri) => predicate(ri),
            _ => false,
        })
        .map(|n| n.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ConceptInstance, LinkAssertion, NamedInstanceReference, OntologyKind, RelationInstance,
    };

    #[test]
    fn test_link_via_reference_reports_referenced_source() {
        let mut graph = OntologyGraph::new();
        let desc = graph.add_ontology("http://example.com/d#", "d", OntologyKind::Description);
        let a = graph
            .add_member(desc, Some("a"), NodeKind::ConceptInstance(ConceptInstance::default()))
            .unwrap();
        let b = graph
            .add_member(desc, Some("b"), NodeKind::ConceptInstance(ConceptInstance::default()))
            .unwrap();
        let relation = graph.add_member(desc, Some("r"), NodeKind::ForwardRelation).unwrap();

        let mut reference = NamedInstanceReference::new(a);
        reference.links.push(LinkAssertion {
            relation,
            target: b,
        });
        let reference_id = graph
            .add_member(desc, None, NodeKind::NamedInstanceReference(reference))
            .unwrap();

        let links = find_link_assertions_with_target(&graph, b);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].owner, reference_id);
        assert_eq!(links[0].source, a);
        assert_eq!(find_references_to(&graph, a), vec![reference_id]);
    }

    #[test]
    fn test_relation_instances_by_end() {
        let mut graph = OntologyGraph::new();
        let desc = graph.add_ontology("http://example.com/d#", "d", OntologyKind::Description);
        let a = graph
            .add_member(desc, Some("a"), NodeKind::ConceptInstance(ConceptInstance::default()))
            .unwrap();
        let b = graph
            .add_member(desc, Some("b"), NodeKind::ConceptInstance(ConceptInstance::default()))
            .unwrap();
        let ri = graph
            .add_member(
                desc,
                Some("r1"),
                NodeKind::RelationInstance(RelationInstance {
                    sources: vec![a],
                    targets: vec![b],
                    ..Default::default()
                }),
            )
            .unwrap();

        assert_eq!(find_relation_instances_with_source(&graph, a), vec![ri]);
        assert_eq!(find_relation_instances_with_target(&graph, b), vec![ri]);
        assert!(find_relation_instances_with_target(&graph, a).is_empty());
    }
}
