//! Relation Endpoint Naming Tests
//!
//! One test per row of the (existing, name given) transition table, plus
//! link cleanup on removal and name resolution after renaming.

mod common;

use common::Fixture;
use omlvp_core::model::NodeKind;
use omlvp_core::ops::relation_ops::{set_forward_relation_name, set_reverse_relation_name};
use omlvp_core::ops::EndpointChange;
use omlvp_core::OmlEditError;

#[test]
fn test_existing_endpoint_removed_by_empty_name() {
    // GIVEN Owns with forward relation "owns"
    let mut fx = Fixture::new();
    let owns = fx.owns;

    // WHEN the forward name is set to ""
    let change = set_forward_relation_name(&mut fx.graph, fx.owns_entity, "").unwrap();

    // THEN the endpoint is deleted and detached
    assert_eq!(
        change,
        EndpointChange::Removed {
            endpoint: owns,
            links_removed: 0
        }
    );
    assert!(!fx.graph.contains(owns));
    let entity = fx.graph.get(fx.owns_entity).unwrap().kind.as_relation_entity().unwrap();
    assert_eq!(entity.forward, None);
}

#[test]
fn test_missing_endpoint_created_by_name() {
    // GIVEN Owns without a reverse relation
    let mut fx = Fixture::new();

    // WHEN the reverse name is set
    let change = set_reverse_relation_name(&mut fx.graph, fx.owns_entity, "isOwnedBy").unwrap();

    // THEN a reverse relation named isOwnedBy is attached and resolvable
    let EndpointChange::Created(reverse) = change else {
        panic!("expected Created, got {:?}", change);
    };
    let node = fx.graph.get(reverse).unwrap();
    assert_eq!(node.kind, NodeKind::ReverseRelation);
    assert_eq!(node.name(), Some("isOwnedBy"));
    assert_eq!(node.owner, Some(fx.owns_entity));
    let entity = fx.graph.get(fx.owns_entity).unwrap().kind.as_relation_entity().unwrap();
    assert_eq!(entity.reverse, Some(reverse));
    assert_eq!(
        fx.graph
            .resolve_member_by_abbreviated_iri(fx.description, "v:isOwnedBy"),
        Some(reverse)
    );
}

#[test]
fn test_existing_endpoint_renamed_in_place() {
    // GIVEN Owns with forward relation "owns"
    let mut fx = Fixture::new();
    let owns = fx.owns;

    // WHEN it is renamed
    let change = set_forward_relation_name(&mut fx.graph, fx.owns_entity, "possesses").unwrap();

    // THEN the same node carries the new name
    assert_eq!(change, EndpointChange::Renamed(owns));
    assert_eq!(fx.graph.get(owns).unwrap().name(), Some("possesses"));
    assert_eq!(
        fx.graph
            .resolve_member_by_abbreviated_iri(fx.description, "v:possesses"),
        Some(owns)
    );
    assert_eq!(
        fx.graph
            .resolve_member_by_abbreviated_iri(fx.description, "v:owns"),
        None
    );
}

#[test]
fn test_missing_endpoint_with_empty_name_is_noop() {
    let mut fx = Fixture::new();
    let before = fx.graph.clone();

    let change = set_reverse_relation_name(&mut fx.graph, fx.owns_entity, "").unwrap();

    assert_eq!(change, EndpointChange::Unchanged);
    assert_eq!(fx.graph.len(), before.len());
    assert_eq!(
        fx.graph.get(fx.owns_entity).unwrap(),
        before.get(fx.owns_entity).unwrap()
    );
}

#[test]
fn test_naming_is_idempotent() {
    let mut fx = Fixture::new();

    let first = set_reverse_relation_name(&mut fx.graph, fx.owns_entity, "isOwnedBy").unwrap();
    let second = set_reverse_relation_name(&mut fx.graph, fx.owns_entity, "isOwnedBy").unwrap();

    let EndpointChange::Created(reverse) = first else {
        panic!("expected Created, got {:?}", first);
    };
    assert_eq!(second, EndpointChange::Renamed(reverse));
    let entity = fx.graph.get(fx.owns_entity).unwrap().kind.as_relation_entity().unwrap();
    assert_eq!(entity.reverse, Some(reverse));
}

#[test]
fn test_removing_endpoint_drops_its_links() {
    // GIVEN a link asserted via v:owns
    let mut fx = Fixture::new();
    let a = fx.concept_instance("a");
    let b = fx.concept_instance("b");
    let owns = fx.owns;
    fx.link(a, owns, b);

    // WHEN the forward relation is removed
    let change = set_forward_relation_name(&mut fx.graph, fx.owns_entity, "").unwrap();

    // THEN the link went with it
    assert_eq!(
        change,
        EndpointChange::Removed {
            endpoint: owns,
            links_removed: 1
        }
    );
    assert!(fx
        .graph
        .get(a)
        .unwrap()
        .kind
        .assertion_host()
        .unwrap()
        .links()
        .is_empty());
}

#[test]
fn test_endpoint_on_non_entity_rejected() {
    let mut fx = Fixture::new();

    let result = set_forward_relation_name(&mut fx.graph, fx.vehicle, "drives");

    assert_eq!(
        result,
        Err(OmlEditError::NotARelationEntity { node: fx.vehicle })
    );
}
