//! Synapse Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use synapse_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Direction, Edge, Neuron, NeuronId, Payload, Relationship,
};

// Re-export the network model
pub use crate::network::Network;

// Re-export connectivity analysis
pub use crate::analysis::NetworkProjection;

// Re-export error types
pub use crate::error::{DatasetError, GraphError, Result, SynapseError};
