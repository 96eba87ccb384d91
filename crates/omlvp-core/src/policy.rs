//! Cascade policy trait and implementations
//!
//! This module defines the `CascadePolicy` trait, which decides what a
//! cascade delete does when the relation instances it follows form a cycle
//! through their sources and targets.

use omlvp_core_types::NodeId;

/// Policy trait for cyclic relation instance graphs during cascade delete
///
/// The cascade always terminates: a relation instance already on the
/// deletion path is never entered twice. The policy only decides whether
/// such a cycle is acceptable or aborts the delete before anything is
/// removed.
///
/// This policy is injected into `delete_named_instance` and `apply()`.
pub trait CascadePolicy {
    /// Check whether the cascade may proceed after finding a cycle
    ///
    /// # Arguments
    /// * `instance` - The instance the delete was requested for
    /// * `revisited` - Relation instance reached again while already being deleted
    ///
    /// # Returns
    /// * `true` - Delete the whole cycle along with everything else
    /// * `false` - Abort with `CyclicGraph`, leaving the graph untouched
    fn permits_cycle(&self, instance: NodeId, revisited: NodeId) -> bool;
}

/// Policy that deletes cyclic structures along with the rest of the cascade
///
/// This is the default editor behavior.
///
/// # Example
/// ```
/// use omlvp_core::policy::{CascadeAll, CascadePolicy};
/// use omlvp_core::NodeId;
///
/// let policy = CascadeAll;
/// assert!(policy.permits_cycle(NodeId::new(0, 0), NodeId::new(1, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeAll;

impl CascadePolicy for CascadeAll {
    fn permits_cycle(&self, _instance: NodeId, _revisited: NodeId) -> bool {
        true
    }
}

/// Policy that refuses to delete through a cycle
///
/// Useful when a cyclic relation instance graph indicates a modeling error
/// the user should see rather than have silently removed.
///
/// # Example
/// ```
/// use omlvp_core::policy::{CascadePolicy, RejectCycles};
/// use omlvp_core::NodeId;
///
/// let policy = RejectCycles;
/// assert!(!policy.permits_cycle(NodeId::new(0, 0), NodeId::new(1, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectCycles;

impl CascadePolicy for RejectCycles {
    fn permits_cycle(&self, _instance: NodeId, _revisited: NodeId) -> bool {
        false
    }
}
