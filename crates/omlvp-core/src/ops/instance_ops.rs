use std::collections::HashSet;

use omlvp_core_types::NodeId;
use serde::{Deserialize, Serialize};

use super::graph::OntologyGraph;
use crate::errors::{OmlEditError, Result};
use crate::policy::CascadePolicy;
use crate::queries::{
    find_link_assertions_with_target, find_references_to, find_relation_instances_with_source,
    find_relation_instances_with_target,
};

/// Everything a cascade delete removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// Deleted named instances, dependents first, the requested instance last
    pub deleted_instances: Vec<NodeId>,
    /// Deleted named instance references
    pub removed_references: Vec<NodeId>,
    /// Number of link assertions removed because their target was deleted
    pub removed_links: usize,
    /// Relation instances reached again while already being deleted
    pub cycles_detected: Vec<NodeId>,
}

/// Delete a named instance and everything that would dangle without it
///
/// For the instance, and recursively for every relation instance that has it
/// as a target or a source:
/// 1. every named instance reference to it is deleted
/// 2. every link assertion targeting it is removed
/// 3. relation instances targeting it are deleted recursively
/// 4. relation instances sourced at it are deleted recursively
/// 5. the instance itself is deleted
///
/// The cascade is planned before anything is removed. A relation instance
/// reached again while it is still being planned closes a cycle; the
/// `policy` decides whether that aborts the delete.
///
/// # Arguments
/// * `graph` - Mutable reference to the graph
/// * `instance` - Concept instance or relation instance to delete
/// * `policy` - Cycle handling policy
///
/// # Errors
/// * `NodeNotFound` / `NodeDeleted` - If `instance` is stale
/// * `NotANamedInstance` - If `instance` is not a concept or relation instance
/// * `CyclicGraph` - If the cascade closes a cycle and `policy` rejects it
pub fn delete_named_instance(
    graph: &mut OntologyGraph,
    instance: NodeId,
    policy: &dyn CascadePolicy,
) -> Result<DeleteOutcome> {
    if !graph.get(instance)?.kind.is_named_instance() {
        return Err(OmlEditError::NotANamedInstance { node: instance });
    }

    let plan = plan_cascade(graph, instance);

    if let Some(revisited) = plan
        .cycles
        .iter()
        .copied()
        .find(|r| !policy.permits_cycle(instance, *r))
    {
        return Err(OmlEditError::CyclicGraph {
            instance,
            revisited,
        });
    }
    for revisited in &plan.cycles {
        tracing::warn!(%instance, %revisited, "cascade delete closed a relation instance cycle");
    }

    let mut outcome = DeleteOutcome {
        cycles_detected: plan.cycles,
        ..Default::default()
    };

    for doomed in plan.order {
        for reference in find_references_to(graph, doomed) {
            graph.remove_node(reference)?;
            outcome.removed_references.push(reference);
        }

        outcome.removed_links += remove_links(graph, |link| link.target == doomed);

        graph.remove_node(doomed)?;
        outcome.deleted_instances.push(doomed);
        tracing::debug!(instance = %doomed, "deleted named instance");
    }

    Ok(outcome)
}

/// Remove every link owned by `source` (or by a reference to it) that
/// targets `target` through the relation named by `relation_id`
///
/// `relation_id` is an abbreviated IRI resolved in the ontology owning
/// `source`. Returns the number of links removed.
///
/// # Errors
/// * `UnknownRelation` - If `relation_id` does not resolve to a forward or reverse relation
/// * `NodeNotFound` / `NodeDeleted` - If `source` is stale
/// * `NotANamedInstance` - If `source` is not a concept or relation instance
pub fn delete_link(
    graph: &mut OntologyGraph,
    source: NodeId,
    target: NodeId,
    relation_id: &str,
) -> Result<usize> {
    if !graph.get(source)?.kind.is_named_instance() {
        return Err(OmlEditError::NotANamedInstance { node: source });
    }

    let ontology = graph.ontology_of(source)?;
    let relation = graph
        .resolve_member_by_abbreviated_iri(ontology, relation_id)
        .filter(|r| graph.get(*r).is_ok_and(|n| n.kind.is_relation()))
        .ok_or_else(|| OmlEditError::UnknownRelation {
            relation_id: relation_id.to_string(),
        })?;

    let owners: HashSet<NodeId> = find_link_assertions_with_target(graph, target)
        .into_iter()
        .filter(|l| l.relation == relation && l.source == source)
        .map(|l| l.owner)
        .collect();

    let mut removed = 0;
    for owner in owners {
        if let Some(host) = graph.get_mut(owner)?.kind.assertion_host_mut() {
            let before = host.links().len();
            host.links_mut()
                .retain(|l| !(l.relation == relation && l.target == target));
            removed += before - host.links().len();
        }
    }

    tracing::debug!(%source, %target, relation_id, removed, "deleted links");
    Ok(removed)
}

struct CascadePlan {
    /// Post-order: dependents before the instances they depend on
    order: Vec<NodeId>,
    cycles: Vec<NodeId>,
}

fn plan_cascade(graph: &OntologyGraph, root: NodeId) -> CascadePlan {
    let mut plan = CascadePlan {
        order: Vec::new(),
        cycles: Vec::new(),
    };
    let mut in_progress = HashSet::new();
    let mut done = HashSet::new();
    visit(graph, root, &mut in_progress, &mut done, &mut plan);
    plan
}

fn visit(
    graph: &OntologyGraph,
    instance: NodeId,
    in_progress: &mut HashSet<NodeId>,
    done: &mut HashSet<NodeId>,
    plan: &mut CascadePlan,
) {
    in_progress.insert(instance);

    let dependents = find_relation_instances_with_target(graph, instance)
        .into_iter()
        .chain(find_relation_instances_with_source(graph, instance));

    for relation_instance in dependents {
        if done.contains(&relation_instance) {
            continue;
        }
        if in_progress.contains(&relation_instance) {
            if !plan.cycles.contains(&relation_instance) {
                plan.cycles.push(relation_instance);
            }
            continue;
        }
        visit(graph, relation_instance, in_progress, done, plan);
    }

    in_progress.remove(&instance);
    done.insert(instance);
    plan.order.push(instance);
}

/// Remove links matching `predicate` from every assertion host
fn remove_links<F>(graph: &mut OntologyGraph, predicate: F) -> usize
where
    F: Fn(&crate::model::LinkAssertion) -> bool,
{
    let owners: Vec<NodeId> = graph
        .nodes()
        .filter(|n| {
            n.kind
                .assertion_host()
                .is_some_and(|h| h.links().iter().any(&predicate))
        })
        .map(|n| n.id)
        .collect();

    let mut removed = 0;
    for owner in owners {
        if let Ok(node) = graph.get_mut(owner) {
            if let Some(host) = node.kind.assertion_host_mut() {
                let before = host.links().len();
                host.links_mut().retain(|l| !predicate(l));
                removed += before - host.links().len();
            }
        }
    }
    removed
}
