use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use super::{Annotation, LinkAssertion, PropertyValueAssertion};

/// A node of the ontology graph
///
/// Every node can carry annotations. Instance-like kinds additionally carry
/// property values and links through their `AssertionHost` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Handle of this node
    pub id: NodeId,

    /// Containing node; `None` only for ontologies
    pub owner: Option<NodeId>,

    /// Local name within the owning ontology (prefix for ontologies)
    pub name: Option<String>,

    /// Annotation assertions, in insertion order
    pub annotations: Vec<Annotation>,

    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, owner: Option<NodeId>, name: Option<String>, kind: NodeKind) -> Self {
        Self {
            id,
            owner,
            name,
            annotations: Vec::new(),
            kind,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Node variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Ontology(Ontology),
    Aspect,
    Concept,
    RelationEntity(RelationEntity),
    ForwardRelation,
    ReverseRelation,
    AnnotationProperty,
    ScalarProperty,
    StructuredProperty,
    ConceptInstance(ConceptInstance),
    RelationInstance(RelationInstance),
    NamedInstanceReference(NamedInstanceReference),
}

/// The two property kinds an edit can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Annotation,
    Scalar,
}

impl NodeKind {
    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Ontology(_) => "ontology",
            NodeKind::Aspect => "aspect",
            NodeKind::Concept => "concept",
            NodeKind::RelationEntity(_) => "relation_entity",
            NodeKind::ForwardRelation => "forward_relation",
            NodeKind::ReverseRelation => "reverse_relation",
            NodeKind::AnnotationProperty => "annotation_property",
            NodeKind::ScalarProperty => "scalar_property",
            NodeKind::StructuredProperty => "structured_property",
            NodeKind::ConceptInstance(_) => "concept_instance",
            NodeKind::RelationInstance(_) => "relation_instance",
            NodeKind::NamedInstanceReference(_) => "named_instance_reference",
        }
    }

    /// Assignable property kind, if this node is an annotation or scalar property
    pub fn property_kind(&self) -> Option<PropertyKind> {
        match self {
            NodeKind::AnnotationProperty => Some(PropertyKind::Annotation),
            NodeKind::ScalarProperty => Some(PropertyKind::Scalar),
            _ => None,
        }
    }

    pub fn is_named_instance(&self) -> bool {
        matches!(
            self,
            NodeKind::ConceptInstance(_) | NodeKind::RelationInstance(_)
        )
    }

    /// Forward and reverse relations are the relations links can assert
    pub fn is_relation(&self) -> bool {
        matches!(self, NodeKind::ForwardRelation | NodeKind::ReverseRelation)
    }

    pub fn as_ontology(&self) -> Option<&Ontology> {
        match self {
            NodeKind::Ontology(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_relation_entity(&self) -> Option<&RelationEntity> {
        match self {
            NodeKind::RelationEntity(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_relation_instance(&self) -> Option<&RelationInstance> {
        match self {
            NodeKind::RelationInstance(r) => Some(r),
            _ => None,
        }
    }

    /// Instance a named instance reference points at
    pub fn referenced_instance(&self) -> Option<NodeId> {
        match self {
            NodeKind::NamedInstanceReference(r) => Some(r.instance),
            _ => None,
        }
    }

    pub fn assertion_host(&self) -> Option<&dyn AssertionHost> {
        match self {
            NodeKind::ConceptInstance(i) => Some(i),
            NodeKind::RelationInstance(i) => Some(i),
            NodeKind::NamedInstanceReference(r) => Some(r),
            _ => None,
        }
    }

    pub fn assertion_host_mut(&mut self) -> Option<&mut dyn AssertionHost> {
        match self {
            NodeKind::ConceptInstance(i) => Some(i),
            NodeKind::RelationInstance(i) => Some(i),
            NodeKind::NamedInstanceReference(r) => Some(r),
            _ => None,
        }
    }

    /// Nodes contained by this node, freed together with it
    pub fn owned_children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Ontology(o) => o.members.clone(),
            NodeKind::RelationEntity(r) => r.forward.iter().chain(r.reverse.iter()).copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Remove `child` from whatever slot of this node contains it
    pub(crate) fn detach_child(&mut self, child: NodeId) {
        match self {
            NodeKind::Ontology(o) => o.members.retain(|m| *m != child),
            NodeKind::RelationEntity(r) => {
                if r.forward == Some(child) {
                    r.forward = None;
                }
                if r.reverse == Some(child) {
                    r.reverse = None;
                }
            }
            _ => {}
        }
    }
}

/// Whether an ontology declares terms or describes instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OntologyKind {
    Vocabulary,
    Description,
}

/// Ontology payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ontology {
    pub namespace: String,
    pub prefix: String,
    pub kind: OntologyKind,
    /// Imported ontologies, searched when resolving abbreviated ids
    pub imports: Vec<NodeId>,
    /// Top-level statements, in declaration order
    pub members: Vec<NodeId>,
}

/// Relation entity payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationEntity {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    /// Owned forward relation endpoint
    pub forward: Option<NodeId>,
    /// Owned reverse relation endpoint
    pub reverse: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptInstance {
    pub property_values: Vec<PropertyValueAssertion>,
    pub links: Vec<LinkAssertion>,
}

/// Reified relation between named instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationInstance {
    pub sources: Vec<NodeId>,
    pub targets: Vec<NodeId>,
    pub property_values: Vec<PropertyValueAssertion>,
    pub links: Vec<LinkAssertion>,
}

/// Reference to a named instance declared in another description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInstanceReference {
    pub instance: NodeId,
    pub property_values: Vec<PropertyValueAssertion>,
    pub links: Vec<LinkAssertion>,
}

impl NamedInstanceReference {
    pub fn new(instance: NodeId) -> Self {
        Self {
            instance,
            property_values: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Capability of holding property value assertions and links
pub trait AssertionHost {
    fn property_values(&self) -> &[PropertyValueAssertion];

    fn property_values_mut(&mut self) -> &mut Vec<PropertyValueAssertion>;

    fn links(&self) -> &[LinkAssertion];

    fn links_mut(&mut self) -> &mut Vec<LinkAssertion>;
}

macro_rules! impl_assertion_host {
    ($($ty:ty),+) => {
        $(
            impl AssertionHost for $ty {
                fn property_values(&self) -> &[PropertyValueAssertion] {
                    &self.property_values
                }

                fn property_values_mut(&mut self) -> &mut Vec<PropertyValueAssertion> {
                    &mut self.property_values
                }

                fn links(&self) -> &[LinkAssertion] {
                    &self.links
                }

                fn links_mut(&mut self) -> &mut Vec<LinkAssertion> {
                    &mut self.links
                }
            }
        )+
    };
}

impl_assertion_host!(ConceptInstance, RelationInstance, NamedInstanceReference);
