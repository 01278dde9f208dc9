//! Graph-subsystem error type.

use thiserror::Error;

use mv_core::{CoreError, LocationId};

/// Errors produced by `mv-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The target was never reached: the two locations are in different
    /// connected components.
    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("{0} not found in graph")]
    LocationNotFound(LocationId),

    #[error("no location named {0:?}")]
    UnknownLocation(String),

    /// Strict build mode: `location` lists a neighbor that has not been
    /// inserted yet.
    #[error("location {location:?} references {neighbor:?}, which has not been inserted")]
    UnknownNeighbor { location: String, neighbor: String },

    /// Strict build mode: a location lists itself as a neighbor.
    #[error("location {0:?} lists itself as a neighbor")]
    SelfReference(String),

    /// A coordinate is NaN or infinite.
    #[error("location {location:?} has non-finite coordinates ({x}, {y})")]
    InvalidCoordinate { location: String, x: f64, y: f64 },

    /// The arena is full: every `u32` below `LocationId::INVALID` is taken.
    #[error("cannot add {0:?}: location limit reached")]
    TooManyLocations(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
