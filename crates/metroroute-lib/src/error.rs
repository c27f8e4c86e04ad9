use std::fmt;

use crate::line::StationId;

/// Convenient result alias for the metroroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug)]
pub enum Error {
    /// Raised when an insert or a persisted segment list would corrupt a
    /// line chain: a duplicated station, a missing anchor, a non-positive
    /// weight, a branch, or a cycle.
    InvalidTopology { message: String },

    /// Raised when a removal targets a station that is not on the line.
    StationNotFound { station: StationId },

    /// Raised when a queried station is absent from the network or no path
    /// connects the two endpoints.
    PathNotFound {
        source: StationId,
        target: StationId,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTopology { message } => {
                write!(f, "invalid line topology: {message}")
            }
            Error::StationNotFound { station } => {
                write!(f, "station {station} not found on line")
            }
            Error::PathNotFound { source, target } => {
                write!(f, "no path found between stations {source} and {target}")
            }
        }
    }
}

impl std::error::Error for Error {}
