//! Error types for Synapse operations.
//!
//! Structured errors instead of panics. Soft not-found outcomes stay
//! `Option`/`bool` on the network itself; these types cover the hard
//! failures (dataset indexing, I/O at the snapshot seams).

use std::error::Error;
use std::fmt;

/// Result type for Synapse operations.
pub type Result<T> = std::result::Result<T, SynapseError>;

/// Errors that can occur during Synapse operations.
#[derive(Debug, Clone)]
pub enum SynapseError {
    /// Graph-related errors.
    Graph(GraphError),
    /// Dataset-related errors.
    Dataset(DatasetError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for SynapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynapseError::Graph(e) => write!(f, "Graph error: {}", e),
            SynapseError::Dataset(e) => write!(f, "Dataset error: {}", e),
            SynapseError::Io(msg) => write!(f, "I/O error: {}", msg),
            SynapseError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for SynapseError {}

impl From<std::io::Error> for SynapseError {
    fn from(e: std::io::Error) -> Self {
        SynapseError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SynapseError {
    fn from(e: serde_json::Error) -> Self {
        SynapseError::Serialization(e.to_string())
    }
}

/// Graph-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Neuron not found.
    NeuronNotFound(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NeuronNotFound(id) => write!(f, "Neuron not found: {}", id),
        }
    }
}

/// Dataset-related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    /// Sample index outside `0..size`.
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::IndexOutOfRange { index, size } => {
                write!(f, "Sample index out of range: {} (size {})", index, size)
            }
        }
    }
}

// Convenience constructors
impl SynapseError {
    pub fn neuron_not_found(id: impl Into<String>) -> Self {
        SynapseError::Graph(GraphError::NeuronNotFound(id.into()))
    }

    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        SynapseError::Dataset(DatasetError::IndexOutOfRange { index, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_input() {
        let err = SynapseError::neuron_not_found("7");
        assert_eq!(err.to_string(), "Graph error: Neuron not found: 7");

        let err = SynapseError::index_out_of_range(4, 3);
        assert_eq!(
            err.to_string(),
            "Dataset error: Sample index out of range: 4 (size 3)"
        );
    }
}
