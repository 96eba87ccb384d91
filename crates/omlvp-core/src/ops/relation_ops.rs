use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use super::graph::OntologyGraph;
use crate::errors::{OmlEditError, Result};
use crate::model::{NodeKind, RelationEntity};

/// Which traversal direction of a relation entity is being named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointDirection {
    Forward,
    Reverse,
}

impl EndpointDirection {
    fn slot(self, entity: &RelationEntity) -> Option<NodeId> {
        match self {
            EndpointDirection::Forward => entity.forward,
            EndpointDirection::Reverse => entity.reverse,
        }
    }

    fn node_kind(self) -> NodeKind {
        match self {
            EndpointDirection::Forward => NodeKind::ForwardRelation,
            EndpointDirection::Reverse => NodeKind::ReverseRelation,
        }
    }
}

/// Transition taken by an endpoint naming call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointChange {
    /// Endpoint existed and an empty name removed it
    Removed { endpoint: NodeId, links_removed: usize },
    /// No endpoint existed; one was created with the name
    Created(NodeId),
    /// Existing endpoint was renamed in place
    Renamed(NodeId),
    /// No endpoint and no name
    Unchanged,
}

/// Create, rename or remove the forward relation of a relation entity
///
/// An empty `name` removes the endpoint.
///
/// # Errors
/// * `NodeNotFound` / `NodeDeleted` - If `entity` is stale
/// * `NotARelationEntity` - If `entity` is some other kind of node
pub fn set_forward_relation_name(
    graph: &mut OntologyGraph,
    entity: NodeId,
    name: &str,
) -> Result<EndpointChange> {
    set_endpoint_name(graph, entity, EndpointDirection::Forward, name)
}

/// Create, rename or remove the reverse relation of a relation entity
///
/// An empty `name` removes the endpoint.
///
/// # Errors
/// * `NodeNotFound` / `NodeDeleted` - If `entity` is stale
/// * `NotARelationEntity` - If `entity` is some other kind of node
pub fn set_reverse_relation_name(
    graph: &mut OntologyGraph,
    entity: NodeId,
    name: &str,
) -> Result<EndpointChange> {
    set_endpoint_name(graph, entity, EndpointDirection::Reverse, name)
}

/// Shared state machine behind the forward/reverse setters
///
/// | existing | name given | action                    |
/// |----------|------------|---------------------------|
/// | yes      | no         | delete the endpoint       |
/// | no       | yes        | create, name and attach   |
/// | yes      | yes        | rename in place           |
/// | no       | no         | nothing                   |
///
/// Removing an endpoint also drops every link asserted through it.
///
/// # Errors
/// * `NodeNotFound` / `NodeDeleted` - If `entity` is stale
/// * `NotARelationEntity` - If `entity` is some other kind of node
pub fn set_endpoint_name(
    graph: &mut OntologyGraph,
    entity: NodeId,
    direction: EndpointDirection,
    name: &str,
) -> Result<EndpointChange> {
    let existing = graph
        .get(entity)?
        .kind
        .as_relation_entity()
        .map(|e| direction.slot(e))
        .ok_or(OmlEditError::NotARelationEntity { node: entity })?;

    let change = match (existing, name.is_empty()) {
        (Some(endpoint), true) => {
            let links_removed = remove_links_via(graph, endpoint);
            graph.remove_node(endpoint)?;
            EndpointChange::Removed {
                endpoint,
                links_removed,
            }
        }
        (None, false) => {
            let endpoint = graph.alloc(Some(entity), Some(name.to_string()), direction.node_kind());
            if let NodeKind::RelationEntity(e) = &mut graph.get_mut(entity)?.kind {
                match direction {
                    EndpointDirection::Forward => e.forward = Some(endpoint),
                    EndpointDirection::Reverse => e.reverse = Some(endpoint),
                }
            }
            EndpointChange::Created(endpoint)
        }
        (Some(endpoint), false) => {
            graph.get_mut(endpoint)?.name = Some(name.to_string());
            EndpointChange::Renamed(endpoint)
        }
        (None, true) => EndpointChange::Unchanged,
    };

    tracing::debug!(%entity, ?direction, name, ?change, "relation endpoint named");
    Ok(change)
}

fn remove_links_via(graph: &mut OntologyGraph, relation: NodeId) -> usize {
    let owners: Vec<NodeId> = graph
        .nodes()
        .filter(|n| {
            n.kind
                .assertion_host()
                .is_some_and(|h| h.links().iter().any(|l| l.relation == relation))
        })
        .map(|n| n.id)
        .collect();

    let mut removed = 0;
    for owner in owners {
        if let Some(host) = graph.get_mut(owner).ok().and_then(|n| n.kind.assertion_host_mut()) {
            let before = host.links().len();
            host.links_mut().retain(|l| l.relation != relation);
            removed += before - host.links().len();
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntologyKind;

    fn entity(graph: &mut OntologyGraph) -> NodeId {
        let vocab = graph.add_ontology("http://example.com/v#", "v", OntologyKind::Vocabulary);
        graph
            .add_member(
                vocab,
                Some("Owns"),
                NodeKind::RelationEntity(RelationEntity::default()),
            )
            .unwrap()
    }

    #[test]
    fn test_directions_are_independent() {
        let mut graph = OntologyGraph::new();
        let owns = entity(&mut graph);

        set_forward_relation_name(&mut graph, owns, "owns").unwrap();
        let change = set_reverse_relation_name(&mut graph, owns, "").unwrap();

        assert_eq!(change, EndpointChange::Unchanged);
        let e = graph.get(owns).unwrap().kind.as_relation_entity().unwrap();
        assert!(e.forward.is_some());
        assert!(e.reverse.is_none());
    }

    #[test]
    fn test_non_entity_rejected() {
        let mut graph = OntologyGraph::new();
        let vocab = graph.add_ontology("http://example.com/v#", "v", OntologyKind::Vocabulary);
        let concept = graph.add_member(vocab, Some("C"), NodeKind::Concept).unwrap();

        let result = set_forward_relation_name(&mut graph, concept, "x");
        assert!(matches!(
            result,
            Err(OmlEditError::NotARelationEntity { .. })
        ));
    }
}
