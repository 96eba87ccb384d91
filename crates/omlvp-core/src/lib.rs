//! OML Viewpoint Core - in-memory ontology graph and edit kernel
//!
//! This crate provides the data structures and edit operations a viewpoint
//! editor runs against an ontology graph, including:
//! - An arena graph of ontology elements addressed by generational handles
//! - Single-valued property assignment over annotations and scalar property values
//! - Cascading deletion of named instances and their dependent links and references
//! - Forward/reverse relation endpoint naming
//! - Graph integrity checks used to verify the edit invariants
//!
//! Every operation takes `&mut OntologyGraph` and either mutates it completely
//! or returns a typed error without touching it.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod rules;

pub use omlvp_core_types::schema;
pub use omlvp_core_types::NodeId;

// Re-export commonly used types
pub use apply::{apply, EditOutcome};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, OmlEditError, Result};
pub use model::{EditValue, Literal, Node, NodeKind, PropertyKind};
pub use ops::OntologyGraph;
pub use policy::{CascadeAll, CascadePolicy, RejectCycles};
