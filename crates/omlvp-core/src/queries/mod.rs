//! Read-only graph queries
//!
//! The search surface the edit operations are built on. All queries walk the
//! arena in slot order, so results are deterministic for a given graph.

pub mod search;

pub use search::{
    find_annotation_values, find_link_assertions_with_target, find_references_to,
    find_relation_instances_with_source, find_relation_instances_with_target, LinkRef,
};
