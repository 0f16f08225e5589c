#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod network;
mod registry;
mod routing;

pub use error::{GraphError, RouteError};
pub use graph::RouteGraph;
pub use model::{Distance, Edge, Fare, FareSchedule, Route, Station, StationId};
pub use network::TransitNetwork;
pub use registry::StationRegistry;
pub use routing::all_paths::{AllRoutes, all_routes};
pub use routing::shortest_path::shortest_path;
