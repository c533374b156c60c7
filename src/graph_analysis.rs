use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::adjacency_lists::{AdjacencyMap, Station};
use crate::error::{Error, Result};

/// Station -> minimum hop count from the query origin, for every station
/// within the query's hop budget. Ordered by station name.
pub type DistanceTable = BTreeMap<Station, usize>;

/// Computes the shortest hop distance from `origin` to every station at most
/// `max_hops` away.
///
/// Breadth-first, so the first time a station is reached is along a shortest
/// path; it is never revisited. Stations farther than `max_hops`, or not
/// connected to `origin` at all, are absent from the table.
pub fn distances_within_radius(
    adjacency: &AdjacencyMap,
    origin: &str,
    max_hops: i64,
) -> Result<DistanceTable> {
    let (origin, neighbors) = adjacency
        .get_key_value(origin)
        .ok_or_else(|| Error::UnknownStation(origin.to_string()))?;
    let max_hops = usize::try_from(max_hops).map_err(|_| Error::InvalidHopCount(max_hops))?;

    let mut distances = DistanceTable::new();
    distances.insert(origin.clone(), 0);

    let mut queue: VecDeque<(&Station, usize)> = VecDeque::new();
    if max_hops > 0 {
        queue.extend(neighbors.iter().map(|n| (n, 1)));
    }

    while let Some((station, depth)) = queue.pop_front() {
        if distances.contains_key(station) {
            continue; // already reached by a path no longer than this one
        }
        distances.insert(station.clone(), depth);

        if depth < max_hops {
            if let Some(neighbors) = adjacency.get(station) {
                for neighbor in neighbors {
                    if !distances.contains_key(neighbor) {
                        queue.push_back((neighbor, depth + 1));
                    }
                }
            }
        }
    }
    Ok(distances)
}

/// Stations whose shortest distance in `distances` is exactly `hops`.
pub fn stations_at_exact_distance(distances: &DistanceTable, hops: usize) -> BTreeSet<Station> {
    distances
        .iter()
        .filter(|(_, distance)| **distance == hops)
        .map(|(station, _)| station.clone())
        .collect()
}

/// Answers "which stations are `hops` stops away from `origin`" with a fresh
/// distance table per call.
pub fn stops_n_hops_away(
    adjacency: &AdjacencyMap,
    origin: &str,
    hops: i64,
) -> Result<BTreeSet<Station>> {
    let distances = distances_within_radius(adjacency, origin, hops)?;
    // validated non-negative above
    Ok(stations_at_exact_distance(&distances, hops as usize))
}
