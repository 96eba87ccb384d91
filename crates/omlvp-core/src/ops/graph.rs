use std::collections::HashSet;

use omlvp_core_types::NodeId;

use crate::errors::{OmlEditError, Result};
use crate::model::{Node, NodeKind, Ontology, OntologyKind};

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// In-memory ontology graph
///
/// Arena of node slots addressed by generational `NodeId`s. Deleting a node
/// empties its slot and bumps the slot generation, so stale handles resolve
/// to `NodeDeleted` instead of aliasing whatever reuses the slot later.
/// Not thread-safe; the host editor owns it and hands out `&mut` for one edit
/// at a time.
#[derive(Debug, Clone, Default)]
pub struct OntologyGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl OntologyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by handle
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the handle was never issued, or `NodeDeleted`
    /// if its node has been removed.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        let slot = self
            .slots
            .get(id.index() as usize)
            .ok_or(OmlEditError::NodeNotFound { node: id })?;

        match &slot.node {
            Some(node) if slot.generation == id.generation() => Ok(node),
            _ => Err(OmlEditError::NodeDeleted { node: id }),
        }
    }

    /// Get a mutable reference to a node by handle
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the handle was never issued, or `NodeDeleted`
    /// if its node has been removed.
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        let slot = self
            .slots
            .get_mut(id.index() as usize)
            .ok_or(OmlEditError::NodeNotFound { node: id })?;

        let generation = slot.generation;
        match slot.node.as_mut() {
            Some(node) if generation == id.generation() => Ok(node),
            _ => Err(OmlEditError::NodeDeleted { node: id }),
        }
    }

    /// Check whether a handle still refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    /// Iterate over all live nodes in slot order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().filter_map(|slot| slot.node.as_ref())
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a slot for a new node
    ///
    /// Does not link the node into its owner; callers attach it.
    pub(crate) fn alloc(
        &mut self,
        owner: Option<NodeId>,
        name: Option<String>,
        kind: NodeKind,
    ) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => NodeId::new(index, self.slots[index as usize].generation),
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: None,
                });
                NodeId::new((self.slots.len() - 1) as u32, 0)
            }
        };

        self.slots[id.index() as usize].node = Some(Node::new(id, owner, name, kind));
        id
    }

    /// Add a new, empty ontology
    pub fn add_ontology(
        &mut self,
        namespace: impl Into<String>,
        prefix: impl Into<String>,
        kind: OntologyKind,
    ) -> NodeId {
        let prefix = prefix.into();
        self.alloc(
            None,
            Some(prefix.clone()),
            NodeKind::Ontology(Ontology {
                namespace: namespace.into(),
                prefix,
                kind,
                imports: Vec::new(),
                members: Vec::new(),
            }),
        )
    }

    /// Record that `ontology` imports `imported`
    ///
    /// # Errors
    ///
    /// Returns a handle error if either node is missing, or `NotAnOntology`
    /// if either node is not an ontology.
    pub fn add_import(&mut self, ontology: NodeId, imported: NodeId) -> Result<()> {
        if self.get(imported)?.kind.as_ontology().is_none() {
            return Err(OmlEditError::NotAnOntology { node: imported });
        }

        match &mut self.get_mut(ontology)?.kind {
            NodeKind::Ontology(o) => {
                if !o.imports.contains(&imported) {
                    o.imports.push(imported);
                }
                Ok(())
            }
            _ => Err(OmlEditError::NotAnOntology { node: ontology }),
        }
    }

    /// Add a top-level statement to an ontology
    ///
    /// # Errors
    ///
    /// Returns a handle error if the ontology is missing, or `NotAnOntology`
    /// if `ontology` is some other kind of node.
    pub fn add_member(
        &mut self,
        ontology: NodeId,
        name: Option<&str>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        if self.get(ontology)?.kind.as_ontology().is_none() {
            return Err(OmlEditError::NotAnOntology { node: ontology });
        }

        let id = self.alloc(Some(ontology), name.map(str::to_string), kind);

        if let NodeKind::Ontology(o) = &mut self.get_mut(ontology)?.kind {
            o.members.push(id);
        }

        Ok(id)
    }

    /// Delete a node: detach it from its owner and free it with its owned subtree
    ///
    /// Only containment is followed. Cross references held by other nodes
    /// are the caller's to clean up first.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` or `NodeDeleted` for a stale handle.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        let owner = self.get(id)?.owner;

        if let Some(owner_id) = owner {
            if let Ok(owner_node) = self.get_mut(owner_id) {
                owner_node.kind.detach_child(id);
            }
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slots.get_mut(current.index() as usize) else {
                continue;
            };
            if slot.generation != current.generation() {
                continue;
            }
            if let Some(node) = slot.node.take() {
                stack.extend(node.kind.owned_children());
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index());
                tracing::debug!(node = %current, kind = node.kind.label(), "freed node");
            }
        }

        Ok(())
    }

    /// Find the ontology that (transitively) owns a node
    ///
    /// An ontology is its own owning ontology.
    ///
    /// # Errors
    ///
    /// Returns a handle error for a stale handle, or `NoOwningOntology` if
    /// the owner chain ends without reaching an ontology.
    pub fn ontology_of(&self, id: NodeId) -> Result<NodeId> {
        let mut current = id;
        let mut seen = HashSet::new();

        loop {
            let node = self.get(current)?;
            if node.kind.as_ontology().is_some() {
                return Ok(current);
            }
            if !seen.insert(current) {
                return Err(OmlEditError::NoOwningOntology { node: id });
            }
            match node.owner {
                Some(owner) => current = owner,
                None => return Err(OmlEditError::NoOwningOntology { node: id }),
            }
        }
    }

    /// Resolve an abbreviated IRI (`prefix:name`) in the scope of an ontology
    ///
    /// The scope is the ontology and everything it imports, transitively. The
    /// prefix selects the ontology; the name selects a top-level member or a
    /// forward/reverse relation nested in one of its relation entities.
    pub fn resolve_member_by_abbreviated_iri(
        &self,
        ontology: NodeId,
        abbreviated_iri: &str,
    ) -> Option<NodeId> {
        let (prefix, name) = abbreviated_iri.split_once(':')?;
        if prefix.is_empty() || name.is_empty() {
            return None;
        }

        let scope = self.import_closure(ontology);
        let target = scope.into_iter().find(|id| {
            self.get(*id)
                .ok()
                .and_then(|n| n.kind.as_ontology())
                .is_some_and(|o| o.prefix == prefix)
        })?;

        self.find_member_by_name(target, name)
    }

    /// Ontology plus its transitive imports, nearest first
    fn import_closure(&self, ontology: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = std::collections::VecDeque::from([ontology]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(o) = self.get(id).ok().and_then(|n| n.kind.as_ontology()) {
                order.push(id);
                queue.extend(o.imports.iter().copied());
            }
        }

        order
    }

    fn find_member_by_name(&self, ontology: NodeId, name: &str) -> Option<NodeId> {
        let members = &self.get(ontology).ok()?.kind.as_ontology()?.members;

        for member_id in members {
            let Ok(member) = self.get(*member_id) else {
                continue;
            };
            if member.name() == Some(name) {
                return Some(*member_id);
            }
            if let Some(entity) = member.kind.as_relation_entity() {
                let endpoint = entity
                    .forward
                    .iter()
                    .chain(entity.reverse.iter())
                    .find(|e| self.get(**e).ok().and_then(|n| n.name()) == Some(name));
                if let Some(endpoint) = endpoint {
                    return Some(*endpoint);
                }
            }
        }

        None
    }
}
