// Error types
// Everything that can go wrong before or around a query: loading the dataset,
// looking up an exercise, and turning a result into JSON. The queries
// themselves cannot fail once the data is loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the workshop library
#[derive(Debug, Error)]
pub enum WorkshopError {
    /// The dataset file could not be read
    #[error("Failed to read dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or doesn't match the expected shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[source] serde_json::Error),

    /// The dataset parsed but breaks one of the data model rules
    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    /// No exercise is registered under the given identifier
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// A query result could not be converted to JSON
    #[error("Failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Shorthand result type used across the library
pub type Result<T> = std::result::Result<T, WorkshopError>;
