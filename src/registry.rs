use crate::{Station, StationId};

/// Append-only set of named stations.
///
/// Registration order is the canonical enumeration order. Duplicate names are
/// permitted and create distinct stations; name lookup resolves to the
/// first-registered match.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a station with a fresh identity and the given display name.
    pub fn register(&mut self, name: impl Into<String>) -> StationId {
        let id = StationId(self.stations.len());
        self.stations.push(Station {
            id,
            name: name.into(),
        });
        id
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    pub fn contains(&self, id: StationId) -> bool {
        id.0 < self.stations.len()
    }

    /// Case-insensitive linear scan; first-registered match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations
            .iter()
            .find(|station| station.name.eq_ignore_ascii_case(name))
    }

    /// Stations in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
