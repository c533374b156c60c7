//! Stations N hops away.
//!
//! Loads a list of station-to-station connections, builds an undirected
//! station graph and answers "which stations are exactly N stops from this
//! origin", where N is the minimum number of stops needed to reach them.

pub mod adjacency_lists;
pub mod data_cleaning;
pub mod error;
pub mod graph_analysis;

pub use adjacency_lists::{build, contains_station, AdjacencyMap, Connection, Station};
pub use data_cleaning::{parse_connections, parse_connections_from_reader};
pub use error::{Error, Result};
pub use graph_analysis::{
    distances_within_radius, stations_at_exact_distance, stops_n_hops_away, DistanceTable,
};
