use crate::{Distance, Edge, GraphError, StationId};

/// Weighted adjacency structure over stations.
///
/// Holds one outgoing edge list per station, in edge insertion order. The
/// graph has multigraph semantics: parallel edges and self-loops are stored
/// as given, never deduplicated. A "bidirectional route" is two opposing
/// edges of equal weight, added together.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an adjacency row for the next station and returns its id.
    ///
    /// Callers pairing the graph with a [`StationRegistry`](crate::StationRegistry)
    /// must keep the two in lockstep so ids agree.
    pub fn add_station(&mut self) -> StationId {
        let id = StationId(self.adjacency.len());
        self.adjacency.push(Vec::new());
        id
    }

    pub fn contains(&self, station: StationId) -> bool {
        station.0 < self.adjacency.len()
    }

    fn validate(&self, station: StationId) -> Result<(), GraphError> {
        if self.contains(station) {
            Ok(())
        } else {
            Err(GraphError::InvalidStation(station))
        }
    }

    /// Appends the edge u→v and, when `bidirectional`, also v→u.
    ///
    /// Both endpoints are validated before either edge is inserted, so a
    /// failed call leaves the graph unchanged.
    pub fn add_edge(
        &mut self,
        u: StationId,
        v: StationId,
        weight: Distance,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        self.validate(u)?;
        self.validate(v)?;

        self.adjacency[u.0].push(Edge { to: v, weight });
        if bidirectional {
            self.adjacency[v.0].push(Edge { to: u, weight });
        }

        Ok(())
    }

    /// Outgoing edges of `u` in insertion order.
    pub fn neighbors(&self, u: StationId) -> Result<&[Edge], GraphError> {
        self.adjacency
            .get(u.0)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidStation(u))
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed arcs (a bidirectional route counts as two).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
