use std::collections::HashSet;

use omlvp_core_types::NodeId;

use crate::model::NodeKind;
use crate::ops::OntologyGraph;

/// Find named instance references whose referent no longer exists
///
/// Returns list of (reference_id, missing_instance_id) tuples
pub fn find_dangling_references(graph: &OntologyGraph) -> Vec<(NodeId, NodeId)> {
    graph
        .nodes()
        .filter_map(|n| n.kind.referenced_instance().map(|i| (n.id, i)))
        .filter(|(_, instance)| !graph.contains(*instance))
        .collect()
}

/// Find link assertions whose target no longer exists
///
/// Returns list of (owner_id, missing_target_id) tuples
pub fn find_dangling_links(graph: &OntologyGraph) -> Vec<(NodeId, NodeId)> {
    let mut dangling = Vec::new();

    for node in graph.nodes() {
        let Some(host) = node.kind.assertion_host() else {
            continue;
        };
        for link in host.links() {
            if !graph.contains(link.target) {
                dangling.push((node.id, link.target));
            }
        }
    }

    dangling
}

/// Find relation instances with a source or target that no longer exists
///
/// Returns list of (relation_instance_id, missing_end_id) tuples
pub fn find_dangling_relation_instances(graph: &OntologyGraph) -> Vec<(NodeId, NodeId)> {
    let mut dangling = Vec::new();

    for node in graph.nodes() {
        let NodeKind::RelationInstance(ri) = &node.kind else {
            continue;
        };
        for end in ri.sources.iter().chain(ri.targets.iter()) {
            if !graph.contains(*end) {
                dangling.push((node.id, *end));
            }
        }
    }

    dangling
}

/// Find elements with more than one annotation for the same property
///
/// Returns list of (element_id, property_id) tuples, one per offending pair
pub fn find_duplicate_annotations(graph: &OntologyGraph) -> Vec<(NodeId, NodeId)> {
    let mut duplicates = Vec::new();

    for node in graph.nodes() {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for annotation in &node.annotations {
            if !seen.insert(annotation.property) && reported.insert(annotation.property) {
                duplicates.push((node.id, annotation.property));
            }
        }
    }

    duplicates
}

/// Find instance-like nodes with more than one scalar value for the same property
///
/// Structured property values are not counted.
///
/// Returns list of (element_id, property_id) tuples, one per offending pair
pub fn find_duplicate_scalar_values(graph: &OntologyGraph) -> Vec<(NodeId, NodeId)> {
    let mut duplicates = Vec::new();

    for node in graph.nodes() {
        let Some(host) = node.kind.assertion_host() else {
            continue;
        };
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for value in host.property_values() {
            if value.scalar_value().is_none() {
                continue;
            }
            let property = value.property();
            if !seen.insert(property) && reported.insert(property) {
                duplicates.push((node.id, property));
            }
        }
    }

    duplicates
}

/// Find nodes anywhere in the graph that still point at `target`
///
/// Covers references, link targets and relation instance ends. Used to
/// confirm a cascade delete left nothing behind.
pub fn find_pointers_to(graph: &OntologyGraph, target: NodeId) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|n| {
            n.kind.referenced_instance() == Some(target)
                || n
                    .kind
                    .assertion_host()
                    .is_some_and(|h| h.links().iter().any(|l| l.target == target))
                || n
                    .kind
                    .as_relation_instance()
                    .is_some_and(|ri| ri.sources.contains(&target) || ri.targets.contains(&target))
        })
        .map(|n| n.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Annotation, ConceptInstance, Literal, NamedInstanceReference, OntologyKind,
        PropertyValueAssertion,
    };

    #[test]
    fn test_duplicate_annotation_reported_once() {
        let mut graph = OntologyGraph::new();
        let vocab = graph.add_ontology("http://example.com/v#", "v", OntologyKind::Vocabulary);
        let label = graph
            .add_member(vocab, Some("label"), NodeKind::AnnotationProperty)
            .unwrap();
        let concept = graph.add_member(vocab, Some("C"), NodeKind::Concept).unwrap();

        let node = graph.get_mut(concept).unwrap();
        for text in ["a", "b", "c"] {
            node.annotations.push(Annotation {
                property: label,
                value: Literal::Quoted(text.to_string()),
            });
        }

        assert_eq!(find_duplicate_annotations(&graph), vec![(concept, label)]);
    }

    #[test]
    fn test_structured_values_not_counted_as_duplicates() {
        let mut graph = OntologyGraph::new();
        let desc = graph.add_ontology("http://example.com/d#", "d", OntologyKind::Description);
        let prop = graph
            .add_member(desc, Some("dims"), NodeKind::StructuredProperty)
            .unwrap();
        let mut instance = ConceptInstance::default();
        for _ in 0..2 {
            instance.property_values.push(PropertyValueAssertion::Structured {
                property: prop,
                values: Vec::new(),
            });
        }
        graph
            .add_member(desc, Some("a"), NodeKind::ConceptInstance(instance))
            .unwrap();

        assert!(find_duplicate_scalar_values(&graph).is_empty());
    }

    #[test]
    fn test_dangling_reference_after_raw_remove() {
        let mut graph = OntologyGraph::new();
        let desc = graph.add_ontology("http://example.com/d#", "d", OntologyKind::Description);
        let a = graph
            .add_member(desc, Some("a"), NodeKind::ConceptInstance(ConceptInstance::default()))
            .unwrap();
        let reference = graph
            .add_member(
                desc,
                None,
                NodeKind::NamedInstanceReference(NamedInstanceReference::new(a)),
            )
            .unwrap();

        graph.remove_node(a).unwrap();

        assert_eq!(find_dangling_references(&graph), vec![(reference, a)]);
        assert_eq!(find_pointers_to(&graph, a), vec![reference]);
    }
}
