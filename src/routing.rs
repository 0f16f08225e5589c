//! Stateless path queries over a [`RouteGraph`].
//!
//! Search state (distances, predecessors, visited markers) is allocated fresh
//! for every query and discarded with it, so a fully constructed graph can
//! serve queries from any number of callers.

use crate::{GraphError, RouteGraph, StationId};

pub mod all_paths;
pub mod shortest_path;

pub(crate) fn validate_endpoints(
    graph: &RouteGraph,
    source: StationId,
    destination: StationId,
) -> Result<(), GraphError> {
    for station in [source, destination] {
        if !graph.contains(station) {
            return Err(GraphError::InvalidStation(station));
        }
    }
    Ok(())
}
