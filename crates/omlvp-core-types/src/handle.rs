//! Generational node handles
//!
//! A `NodeId` addresses one slot of the ontology graph arena. The generation
//! half of the handle changes every time a slot is freed, so a handle kept
//! past the deletion of its node can never alias a newer node.

use serde::{Deserialize, Serialize};

/// Handle to a node in the ontology graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Create a handle from a slot index and generation
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the arena
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot at the time the handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}v{}", self.index, self.generation)
    }
}
