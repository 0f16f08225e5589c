use rustc_hash::FxHashSet;
use tracing::debug;

use crate::routing::validate_endpoints;
use crate::{Distance, Route, RouteError, RouteGraph, StationId};

/// One station on the path currently being explored.
#[derive(Debug, Clone, Copy)]
struct Frame {
    station: StationId,
    /// Distance from the source to this station along the current path.
    distance: Distance,
    /// Index of the next outgoing edge to try.
    next_edge: usize,
}

/// Lazy enumeration of every simple route (no repeated station) from a source
/// to a destination, created by [`all_routes`].
///
/// The traversal is depth-first over edges in insertion order, driven by an
/// explicit frame stack instead of recursion, with classic backtracking:
/// stations are marked visited on entry and unmarked on exit, so the same
/// station may reappear in a later route. A route is emitted whenever the
/// destination is entered; the traversal never descends past it.
///
/// The iterator is finite: every step strictly grows the visited set up to
/// the station count before backtracking. Consuming it exhausts it; call
/// [`all_routes`] again for a fresh enumeration.
#[derive(Debug)]
pub struct AllRoutes<'g> {
    graph: &'g RouteGraph,
    destination: StationId,
    stack: Vec<Frame>,
    /// Stations of the current path, parallel to `stack`.
    path: Vec<StationId>,
    visited: FxHashSet<StationId>,
    emit_pending: bool,
    edges_visited: usize,
}

/// Starts a depth-first enumeration of all simple routes between the two
/// stations. Fails only when an endpoint is not registered; a disconnected
/// pair yields an empty iterator rather than an error.
pub fn all_routes(
    graph: &RouteGraph,
    source: StationId,
    destination: StationId,
) -> Result<AllRoutes<'_>, RouteError> {
    validate_endpoints(graph, source, destination)?;
    debug!("Enumerating simple routes {source} -> {destination}");

    let mut routes = AllRoutes {
        graph,
        destination,
        stack: Vec::new(),
        path: Vec::new(),
        visited: FxHashSet::default(),
        emit_pending: false,
        edges_visited: 0,
    };
    routes.push_frame(source, Distance::ZERO);

    Ok(routes)
}

impl AllRoutes<'_> {
    /// Number of edges the traversal has expanded so far. Parallel edges are
    /// expanded separately, making multigraph semantics observable.
    pub fn edges_visited(&self) -> usize {
        self.edges_visited
    }

    fn push_frame(&mut self, station: StationId, distance: Distance) {
        self.visited.insert(station);
        self.path.push(station);
        self.stack.push(Frame {
            station,
            distance,
            next_edge: 0,
        });

        if station == self.destination {
            self.emit_pending = true;
        }
    }

    fn pop_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited.remove(&frame.station);
            self.path.pop();
        }
    }

    fn current_route(&self) -> Route {
        let distance = self.stack.last().map_or(Distance::ZERO, |f| f.distance);
        Route {
            distance,
            stations: self.path.clone(),
        }
    }
}

impl Iterator for AllRoutes<'_> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        loop {
            if self.emit_pending {
                self.emit_pending = false;
                return Some(self.current_route());
            }

            let graph = self.graph;
            let destination = self.destination;

            let frame = self.stack.last_mut()?;

            // an emitted destination frame is never expanded
            if frame.station == destination {
                self.pop_frame();
                continue;
            }

            let edges = graph.neighbors(frame.station).unwrap_or(&[]);
            let Some(&edge) = edges.get(frame.next_edge) else {
                // every branch under this station has been explored
                self.pop_frame();
                continue;
            };

            frame.next_edge += 1;
            let distance = frame.distance + edge.weight;

            self.edges_visited += 1;
            if !self.visited.contains(&edge.to) {
                self.push_frame(edge.to, distance);
            }
        }
    }
}
