mod fixture;

use std::collections::HashSet;

use metromap::{Distance, GraphError, RouteError, TransitNetwork};
use test_log::test;

use crate::fixture::delhi_metro;

#[test]
fn enumeration_all_routes_001() {
    // exactly two simple routes reach NSP; Botanical Garden is a dead end
    // and must not appear
    let metro = delhi_metro();

    let routes: Vec<_> = metro
        .network
        .all_routes(metro.kashmere_gate, metro.nsp)
        .unwrap()
        .collect();

    assert_eq!(routes.len(), 2);
    assert_eq!(
        routes[0].stations,
        [metro.kashmere_gate, metro.rajiv_chauk, metro.nsp]
    );
    assert_eq!(routes[0].distance, Distance::from_units(45));
    assert_eq!(routes[1].stations, [metro.kashmere_gate, metro.nsp]);
    assert_eq!(routes[1].distance, Distance::from_units(200));

    for route in &routes {
        assert!(!route.stations.contains(&metro.botanical_garden));
    }
}

#[test]
fn enumeration_all_routes_002() {
    // no enumerated route repeats a station
    let metro = delhi_metro();

    for route in metro
        .network
        .all_routes(metro.nsp, metro.botanical_garden)
        .unwrap()
    {
        let unique: HashSet<_> = route.stations.iter().collect();
        assert_eq!(unique.len(), route.stations.len());
    }
}

#[test]
fn enumeration_all_routes_003() {
    // a duplicate parallel edge yields a duplicate route and more edge visits
    let metro = delhi_metro();
    let mut routes = metro
        .network
        .all_routes(metro.kashmere_gate, metro.nsp)
        .unwrap();
    let baseline_count = routes.by_ref().count();
    let baseline_visits = routes.edges_visited();

    let mut doubled = delhi_metro();
    doubled
        .network
        .add_route(doubled.kashmere_gate, doubled.rajiv_chauk, Distance::from_units(15), true)
        .unwrap();
    let mut routes = doubled
        .network
        .all_routes(doubled.kashmere_gate, doubled.nsp)
        .unwrap();

    assert_eq!(routes.by_ref().count(), baseline_count + 1);
    assert!(routes.edges_visited() > baseline_visits);
}

#[test]
fn enumeration_all_routes_004() {
    // a disconnected pair is an empty enumeration, not an error
    let mut metro = delhi_metro();
    let isolated = metro.network.register_station("Isolated");

    let mut routes = metro.network.all_routes(metro.kashmere_gate, isolated).unwrap();
    assert!(routes.next().is_none());
}

#[test]
fn enumeration_all_routes_005() {
    let metro = delhi_metro();

    let mut other = TransitNetwork::new();
    let ghost = other.register_station("Ghost");

    assert_eq!(
        metro
            .network
            .all_routes(metro.kashmere_gate, ghost)
            .err()
            .map(|e| matches!(e, RouteError::Graph(GraphError::InvalidStation(_)))),
        Some(true)
    );
}

#[test]
fn enumeration_all_routes_006() {
    // consuming the iterator exhausts it; re-invoking starts fresh
    let metro = delhi_metro();

    let mut routes = metro
        .network
        .all_routes(metro.kashmere_gate, metro.nsp)
        .unwrap();
    assert_eq!(routes.by_ref().count(), 2);
    assert!(routes.next().is_none());

    let fresh: Vec<_> = metro
        .network
        .all_routes(metro.kashmere_gate, metro.nsp)
        .unwrap()
        .collect();
    assert_eq!(fresh.len(), 2);
}

#[test]
fn enumeration_all_routes_007() {
    // completeness on a denser graph: compare against the known simple-path set
    let mut network = TransitNetwork::new();
    let a = network.register_station("A");
    let b = network.register_station("B");
    let c = network.register_station("C");
    let d = network.register_station("D");
    network.add_route(a, b, Distance::from_units(1), true).unwrap();
    network.add_route(b, c, Distance::from_units(1), true).unwrap();
    network.add_route(c, d, Distance::from_units(1), true).unwrap();
    network.add_route(a, c, Distance::from_units(1), true).unwrap();
    network.add_route(b, d, Distance::from_units(1), true).unwrap();

    let found: HashSet<Vec<_>> = network
        .all_routes(a, d)
        .unwrap()
        .map(|route| route.stations)
        .collect();

    let expected: HashSet<Vec<_>> = [
        vec![a, b, c, d],
        vec![a, b, d],
        vec![a, c, b, d],
        vec![a, c, d],
    ]
    .into_iter()
    .collect();

    assert_eq!(found, expected);
}

#[test]
fn enumeration_all_routes_008() {
    let metro = delhi_metro();

    let routes: Vec<_> = metro.network.all_routes(metro.nsp, metro.nsp).unwrap().collect();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].stations, [metro.nsp]);
    assert_eq!(routes[0].distance, Distance::ZERO);
}
