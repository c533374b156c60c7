//! Error types for loading connection data and querying the station graph.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown station: {0}")]
    UnknownStation(String),

    #[error("invalid hop count {0}: must be zero or greater")]
    InvalidHopCount(i64),

    #[error("failed to read connections from {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
