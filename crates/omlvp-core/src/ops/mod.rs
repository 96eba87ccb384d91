pub mod graph;
pub mod instance_ops;
pub mod property_ops;
pub mod relation_ops;

pub use graph::OntologyGraph;
pub use instance_ops::DeleteOutcome;
pub use property_ops::AssignOutcome;
pub use relation_ops::{EndpointChange, EndpointDirection};
