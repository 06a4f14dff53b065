use crate::grid::NodeId;
use thiserror::Error;

/// Broad classification of a [`GridError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A line or a declared value is malformed.
    Format,
    /// A data line was encountered before any section header.
    Sequencing,
    /// The grid source could not be opened or read.
    Resource,
}

/// Errors that can occur while loading, parsing or validating a grid description.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("line {line}: a {section} entry needs {expected} fields, but found {found}")]
    FieldCount {
        line: usize,
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{token}' is not a valid integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: data appears before a 'nodes' or 'links' header")]
    MissingHeader { line: usize },

    #[error("node {id} has power {power}, below the supported minimum of {min}")]
    PowerOutOfRange { id: NodeId, power: i64, min: i64 },

    #[error("node {id} is declared more than once")]
    DuplicateNode { id: NodeId },

    #[error("node {id} has zero power and is neither a producer nor a consumer")]
    ZeroPower { id: NodeId },

    #[error("link {a}-{b} references undeclared node {missing}")]
    UnknownEndpoint { a: NodeId, b: NodeId, missing: NodeId },

    #[error("link {a}-{b} duplicates an earlier link between the same nodes")]
    ParallelLink { a: NodeId, b: NodeId },

    #[error("link {a}-{b} has negative capacity {capacity}")]
    NegativeCapacity { a: NodeId, b: NodeId, capacity: i64 },

    #[error("link {a}-{b} has capacity {capacity}, above the supported maximum of {max}")]
    CapacityOutOfRange {
        a: NodeId,
        b: NodeId,
        capacity: i64,
        max: i64,
    },

    #[error("failed to read grid file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::MissingHeader { .. } => ErrorKind::Sequencing,
            GridError::Io { .. } => ErrorKind::Resource,
            GridError::FieldCount { .. }
            | GridError::InvalidInteger { .. }
            | GridError::DuplicateNode { .. }
            | GridError::ZeroPower { .. }
            | GridError::PowerOutOfRange { .. }
            | GridError::UnknownEndpoint { .. }
            | GridError::ParallelLink { .. }
            | GridError::NegativeCapacity { .. }
            | GridError::CapacityOutOfRange { .. } => ErrorKind::Format,
        }
    }
}
