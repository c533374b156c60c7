use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use crate::adjacency_lists::Connection;
use crate::error::{Error, Result};

const FROM_FIELD: usize = 1;
const TO_FIELD: usize = 2;

/// Reads the connection file at `path`, skipping the header line.
///
/// Each record needs at least three fields; the endpoints are the second and
/// third (e.g. `Line,From Station,To Station`). Any further fields are ignored.
pub fn parse_connections(path: impl AsRef<Path>) -> Result<Vec<Connection>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::Csv {
        path: label.clone(),
        source: e.into(),
    })?;
    let connections = read_connections(file, &label)?;
    info!("loaded {} connections from {}", connections.len(), label);
    Ok(connections)
}

pub fn parse_connections_from_reader<R: Read>(reader: R) -> Result<Vec<Connection>> {
    read_connections(reader, "<reader>")
}

fn read_connections<R: Read>(reader: R, label: &str) -> Result<Vec<Connection>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // skips the column titles
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut connections = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| Error::Csv {
            path: label.to_string(),
            source,
        })?;
        connections.push(endpoints(&record)?);
    }
    Ok(connections)
}

fn endpoints(record: &StringRecord) -> Result<Connection> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    if record.len() <= TO_FIELD {
        return Err(Error::MalformedRecord {
            line,
            reason: format!("expected at least 3 fields, found {}", record.len()),
        });
    }

    let from = &record[FROM_FIELD];
    let to = &record[TO_FIELD];
    if from.is_empty() || to.is_empty() {
        return Err(Error::MalformedRecord {
            line,
            reason: "empty station name".to_string(),
        });
    }
    Ok((from.to_string(), to.to_string()))
}
