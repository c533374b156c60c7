use std::collections::{HashMap, HashSet};

pub type Station = String;

/// A direct, undirected link between two stations.
pub type Connection = (Station, Station);

/// Station -> stations one hop away. Symmetric: if B is a neighbor of A then
/// A is a neighbor of B.
pub type AdjacencyMap = HashMap<Station, HashSet<Station>>;

/// Builds the undirected station graph from a list of connections.
///
/// Duplicate connections (in either direction) collapse into one edge. A
/// self-loop registers the station but adds no neighbor.
pub fn build<I, S>(connections: I) -> AdjacencyMap
where
    I: IntoIterator<Item = (S, S)>,
    S: Into<Station>,
{
    let mut adjacency: AdjacencyMap = HashMap::new();
    for (from, to) in connections {
        let from: Station = from.into();
        let to: Station = to.into();

        if from == to {
            adjacency.entry(from).or_default();
            continue;
        }
        adjacency.entry(from.clone()).or_default().insert(to.clone());
        adjacency.entry(to).or_default().insert(from);
    }
    adjacency
}

pub fn contains_station(adjacency: &AdjacencyMap, station: &str) -> bool {
    adjacency.contains_key(station)
}
