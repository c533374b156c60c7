use std::collections::BTreeSet;
use std::io::Write;

use tube_stops::{
    build, distances_within_radius, parse_connections, stations_at_exact_distance,
    stops_n_hops_away, Error,
};

// Helper to write a small connection file: the District line east of West Ham
// plus a loop through Canning Town.
fn setup_data() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "Tube Line,From Station,To Station\n\
         District,East Ham,West Ham\n\
         District,West Ham,Plaistow\n\
         District,Plaistow,Upton Park\n\
         District,Upton Park,East Ham\n\
         Jubilee,West Ham,Canning Town\n\
         Jubilee,Canning Town,North Greenwich\n\
         District,West Ham,East Ham\n"
    )
    .expect("write data");
    file
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_and_query() {
    let data = setup_data();
    let connections = parse_connections(data.path()).expect("data should load");
    assert_eq!(connections.len(), 7);

    let adjacency = build(connections);
    assert_eq!(adjacency.len(), 6);
    assert_eq!(adjacency["East Ham"].len(), 2, "duplicate edge should collapse");

    assert_eq!(stops_n_hops_away(&adjacency, "East Ham", 0).unwrap(), set(&["East Ham"]));
    assert_eq!(
        stops_n_hops_away(&adjacency, "East Ham", 1).unwrap(),
        set(&["Upton Park", "West Ham"])
    );
    assert_eq!(
        stops_n_hops_away(&adjacency, "East Ham", 2).unwrap(),
        set(&["Canning Town", "Plaistow"])
    );
    assert_eq!(
        stops_n_hops_away(&adjacency, "East Ham", 3).unwrap(),
        set(&["North Greenwich"])
    );
}

#[test]
fn test_every_reported_distance_is_shortest() {
    let data = setup_data();
    let adjacency = build(parse_connections(data.path()).unwrap());

    let full = distances_within_radius(&adjacency, "North Greenwich", 10).unwrap();
    assert_eq!(full.len(), adjacency.len());
    for hops in 0..=4 {
        let bounded = distances_within_radius(&adjacency, "North Greenwich", hops).unwrap();
        for (station, distance) in &bounded {
            assert_eq!(full[station], *distance);
            assert!(*distance <= hops as usize);
        }
        let expected: BTreeSet<String> = full
            .iter()
            .filter(|(_, d)| **d == hops as usize)
            .map(|(s, _)| s.clone())
            .collect();
        assert_eq!(stations_at_exact_distance(&bounded, hops as usize), expected);
    }
}

#[test]
fn test_query_errors() {
    let data = setup_data();
    let adjacency = build(parse_connections(data.path()).unwrap());

    assert!(matches!(
        stops_n_hops_away(&adjacency, "Nowhere", 1),
        Err(Error::UnknownStation(name)) if name == "Nowhere"
    ));
    assert!(matches!(
        stops_n_hops_away(&adjacency, "East Ham", -3),
        Err(Error::InvalidHopCount(-3))
    ));
}
