use omlvp_core::model::{
    ConceptInstance, LinkAssertion, NamedInstanceReference, NodeKind, OntologyKind,
    RelationEntity, RelationInstance,
};
use omlvp_core::{NodeId, OntologyGraph};

/// Vocabulary `v` with the terms most tests need, and a description `d`
/// that imports it
#[allow(dead_code)]
pub struct Fixture {
    pub graph: OntologyGraph,
    pub vocabulary: NodeId,
    pub description: NodeId,
    /// `v:weight`, a scalar property
    pub weight: NodeId,
    /// `v:label`, an annotation property
    pub label: NodeId,
    /// `v:dimensions`, a structured property
    pub dimensions: NodeId,
    /// `v:Vehicle`, a concept
    pub vehicle: NodeId,
    /// `v:Owns`, a relation entity with forward `v:owns`
    pub owns_entity: NodeId,
    pub owns: NodeId,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let mut graph = OntologyGraph::new();
        let vocabulary =
            graph.add_ontology("http://example.com/vehicle#", "v", OntologyKind::Vocabulary);
        let weight = graph
            .add_member(vocabulary, Some("weight"), NodeKind::ScalarProperty)
            .unwrap();
        let label = graph
            .add_member(vocabulary, Some("label"), NodeKind::AnnotationProperty)
            .unwrap();
        let dimensions = graph
            .add_member(vocabulary, Some("dimensions"), NodeKind::StructuredProperty)
            .unwrap();
        let vehicle = graph
            .add_member(vocabulary, Some("Vehicle"), NodeKind::Concept)
            .unwrap();
        let owns_entity = graph
            .add_member(
                vocabulary,
                Some("Owns"),
                NodeKind::RelationEntity(RelationEntity::default()),
            )
            .unwrap();
        let owns = match omlvp_core::ops::relation_ops::set_forward_relation_name(
            &mut graph,
            owns_entity,
            "owns",
        )
        .unwrap()
        {
            omlvp_core::ops::EndpointChange::Created(id) => id,
            other => panic!("unexpected endpoint change: {:?}", other),
        };

        let description =
            graph.add_ontology("http://example.com/fleet#", "d", OntologyKind::Description);
        graph.add_import(description, vocabulary).unwrap();

        Self {
            graph,
            vocabulary,
            description,
            weight,
            label,
            dimensions,
            vehicle,
            owns_entity,
            owns,
        }
    }

    /// Add a concept instance to the description
    pub fn concept_instance(&mut self, name: &str) -> NodeId {
        self.graph
            .add_member(
                self.description,
                Some(name),
                NodeKind::ConceptInstance(ConceptInstance::default()),
            )
            .unwrap()
    }

    /// Add a relation instance to the description
    pub fn relation_instance(&mut self, name: &str, sources: &[NodeId], targets: &[NodeId]) -> NodeId {
        self.graph
            .add_member(
                self.description,
                Some(name),
                NodeKind::RelationInstance(RelationInstance {
                    sources: sources.to_vec(),
                    targets: targets.to_vec(),
                    ..Default::default()
                }),
            )
            .unwrap()
    }

    /// Add a named instance reference to `instance` in the description
    pub fn reference_to(&mut self, instance: NodeId) -> NodeId {
        self.graph
            .add_member(
                self.description,
                None,
                NodeKind::NamedInstanceReference(NamedInstanceReference::new(instance)),
            )
            .unwrap()
    }

    /// Add a link from `owner` to `target` via `relation`
    pub fn link(&mut self, owner: NodeId, relation: NodeId, target: NodeId) {
        let host = self
            .graph
            .get_mut(owner)
            .unwrap()
            .kind
            .assertion_host_mut()
            .unwrap();
        host.links_mut().push(LinkAssertion { relation, target });
    }

    /// Add a relation instance target after creation, to close cycles
    pub fn add_target(&mut self, relation_instance: NodeId, target: NodeId) {
        match &mut self.graph.get_mut(relation_instance).unwrap().kind {
            NodeKind::RelationInstance(ri) => ri.targets.push(target),
            other => panic!("not a relation instance: {:?}", other),
        }
    }
}
