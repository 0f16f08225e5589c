use thiserror::Error;

use crate::StationId;

/// Errors raised while building the route graph.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GraphError {
    #[error("station {0} is not registered")]
    InvalidStation(StationId),
}

/// Errors raised by the path queries.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RouteError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("no path exists between {0} and {1}")]
    NoPath(StationId, StationId),
}

impl RouteError {
    /// True when the query endpoints are valid but simply not connected.
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::InvalidStation(StationId(3));
        assert_eq!(err.to_string(), "station #3 is not registered");

        let err = RouteError::NoPath(StationId(0), StationId(2));
        assert_eq!(err.to_string(), "no path exists between #0 and #2");
        assert!(err.is_no_path());
        assert!(!RouteError::from(GraphError::InvalidStation(StationId(0))).is_no_path());
    }
}
