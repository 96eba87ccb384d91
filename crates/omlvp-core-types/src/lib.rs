//! Core types shared across the viewpoint editing facilities
//!
//! This crate provides foundational types used by the graph, the error
//! facility and the logging facility:
//!
//! - **Handles**: `NodeId`, the generational handle into the ontology graph arena
//! - **Schema constants**: Canonical field keys and event names

pub mod handle;
pub mod schema;

pub use handle::NodeId;
