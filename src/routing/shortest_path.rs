use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::routing::validate_endpoints;
use crate::{Distance, Route, RouteError, RouteGraph, StationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Current shortest distance from the source to this station.
    distance: Distance,
    station: StationId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way: lower station id settles first
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the minimum total-weight route from `source` to `destination`
/// with Dijkstra's algorithm.
///
/// The frontier keeps no decrease-key invariant: relaxing a station pushes a
/// new heap entry and the stale one is skipped when popped. Among equal-cost
/// routes the one settling through lower station ids wins.
///
/// `source == destination` yields the single-station route with distance zero.
pub fn shortest_path(
    graph: &RouteGraph,
    source: StationId,
    destination: StationId,
) -> Result<Route, RouteError> {
    validate_endpoints(graph, source, destination)?;
    debug!("Computing shortest path {source} -> {destination}");

    // (current) shortest distance from the source to this station
    let mut shortest_distances = FxHashMap::from_iter([(source, Distance::ZERO)]);

    // previous station (value) on the current best known route from the
    // source to this station (key)
    let mut predecessors: FxHashMap<StationId, StationId> = FxHashMap::default();

    // priority queue of discovered stations that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        station: source,
        distance: Distance::ZERO,
    }]);

    while let Some(element) = frontier.pop() {
        if element.station == destination {
            // the popped distance is final
            return Ok(Route {
                distance: element.distance,
                stations: unpack_route(&predecessors, destination),
            });
        }

        // check if we already know a cheaper way to get to this station
        let shortest_distance = *shortest_distances
            .get(&element.station)
            .unwrap_or(&Distance::MAX);
        if element.distance > shortest_distance {
            continue;
        }

        for edge in graph.neighbors(element.station)? {
            let distance = element.distance + edge.weight;

            let shortest_distance = *shortest_distances.get(&edge.to).unwrap_or(&Distance::MAX);
            // check if we can follow the current route to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(edge.to, distance);
                predecessors.insert(edge.to, element.station);
                frontier.push(HeapElement {
                    station: edge.to,
                    distance,
                });
            }
        }
    }

    Err(RouteError::NoPath(source, destination))
}

/// Unpacks the route from the destination back to the source by walking the
/// predecessor links, then reverses it into travel order.
fn unpack_route(
    predecessors: &FxHashMap<StationId, StationId>,
    destination: StationId,
) -> Vec<StationId> {
    let mut stations = vec![destination];
    let mut next = destination;

    while let Some(&station) = predecessors.get(&next) {
        next = station;
        stations.push(station);
    }

    stations.reverse();
    stations
}
