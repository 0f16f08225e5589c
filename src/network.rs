use crate::routing::all_paths::{AllRoutes, all_routes};
use crate::routing::shortest_path::shortest_path;
use crate::{
    Distance, Fare, FareSchedule, GraphError, Route, RouteError, RouteGraph, Station, StationId,
    StationRegistry,
};

/// A transit network: named stations, weighted routes between them, and the
/// queries over them.
///
/// Keeps a [`StationRegistry`] and a [`RouteGraph`] in lockstep, so every
/// registered station has exactly one adjacency row and ids can be used
/// interchangeably across both. Construction is append-only; queries never
/// mutate the network.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    registry: StationRegistry,
    graph: RouteGraph,
    schedule: FareSchedule,
}

impl TransitNetwork {
    /// An empty network with the default fare schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: FareSchedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    /// Registers a station with the given display name. Always succeeds;
    /// a duplicate name creates a second, distinct station.
    pub fn register_station(&mut self, name: impl Into<String>) -> StationId {
        let id = self.registry.register(name);
        let graph_id = self.graph.add_station();
        debug_assert_eq!(id, graph_id);
        id
    }

    /// Adds a route of the given weight; when `bidirectional`, travel is
    /// possible both ways at the same cost.
    pub fn add_route(
        &mut self,
        u: StationId,
        v: StationId,
        weight: Distance,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        self.graph.add_edge(u, v, weight, bidirectional)
    }

    /// Stations in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.registry.stations()
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.registry.get(id)
    }

    /// Case-insensitive name lookup; the first-registered match wins.
    pub fn find_station(&self, name: &str) -> Option<&Station> {
        self.registry.find_by_name(name)
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn schedule(&self) -> FareSchedule {
        self.schedule
    }

    /// Minimum total-weight route between the two stations.
    pub fn shortest_path(
        &self,
        source: StationId,
        destination: StationId,
    ) -> Result<Route, RouteError> {
        shortest_path(&self.graph, source, destination)
    }

    /// Lazy enumeration of every simple route between the two stations.
    pub fn all_routes(
        &self,
        source: StationId,
        destination: StationId,
    ) -> Result<AllRoutes<'_>, RouteError> {
        all_routes(&self.graph, source, destination)
    }

    /// Fare for the shortest route between the two stations, per the
    /// network's [`FareSchedule`].
    pub fn fare(&self, source: StationId, destination: StationId) -> Result<Fare, RouteError> {
        let route = self.shortest_path(source, destination)?;
        Ok(self.schedule.fare(route.distance))
    }

    /// Renders a route as its station names, in travel order.
    ///
    /// Ids in a [`Route`] returned by this network are always resolvable;
    /// unknown ids (from a route computed against another network) are
    /// skipped.
    pub fn route_names<'a>(&'a self, route: &Route) -> Vec<&'a str> {
        route
            .stations
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .map(|station| station.name.as_str())
            .collect()
    }
}
