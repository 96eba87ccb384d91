pub mod assertion;
pub mod literal;
pub mod node;

pub use assertion::{Annotation, LinkAssertion, PropertyValueAssertion};
pub use literal::{EditValue, Literal};
pub use node::{
    AssertionHost, ConceptInstance, NamedInstanceReference, Node, NodeKind, Ontology,
    OntologyKind, PropertyKind, RelationEntity, RelationInstance,
};
