use omlvp_core::model::{ConceptInstance, NodeKind, OntologyKind, RelationEntity, RelationInstance};
use omlvp_core::{NodeId, OntologyGraph};

/// Vocabulary `v` (weight, label, Owns) imported by description `d`
#[allow(dead_code)]
pub struct Workspace {
    pub graph: OntologyGraph,
    pub description: NodeId,
    pub vehicle: NodeId,
    pub owns_entity: NodeId,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let mut graph = OntologyGraph::new();
        let vocabulary =
            graph.add_ontology("http://example.com/vehicle#", "v", OntologyKind::Vocabulary);
        graph
            .add_member(vocabulary, Some("weight"), NodeKind::ScalarProperty)
            .unwrap();
        graph
            .add_member(vocabulary, Some("label"), NodeKind::AnnotationProperty)
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

        let description =
            graph.add_ontology("http://example.com/fleet#", "d", OntologyKind::Description);
        graph.add_import(description, vocabulary).unwrap();

        Self {
            graph,
            description,
            vehicle,
            owns_entity,
        }
    }

    pub fn concept_instance(&mut self, name: &str) -> NodeId {
        self.graph
            .add_member(
                self.description,
                Some(name),
                NodeKind::ConceptInstance(ConceptInstance::default()),
            )
            .unwrap()
    }

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
}
