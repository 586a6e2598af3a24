//! # Synapse
//!
//! Associative graph modeling with pluggable co-activation training.
//!
//! Synapse models a small associative graph: neurons hold an opaque payload
//! and an activation flag, edges carry a direction, a relationship kind, and
//! a payload that trainers turn into a numeric weight. A trainer repeatedly
//! mutates that state in place — either unsupervised or pinned to the
//! labeled activation targets a dataset supplies — and evaluates the result
//! into a scalar score.
//!
//! ## Quick Start
//!
//! ```rust
//! use synapse::prelude::*;
//!
//! // Model: two neurons and one similarity edge.
//! let mut network = Network::new();
//! network.add_neuron(Neuron::with_information("dog", "a dog"));
//! network.add_neuron(Neuron::with_information("wolf", "a wolf"));
//! network.create_connection(
//!     "dog",
//!     "wolf",
//!     Direction::Bidirectional,
//!     Relationship::Similarity,
//!     None,
//! );
//!
//! // Co-activate and train one Hebbian epoch.
//! network.activate_neuron("dog");
//! network.activate_neuron("wolf");
//! let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
//! trainer.train(&mut network, 1);
//!
//! // The edge now carries a reinforced numeric weight.
//! assert!(trainer.evaluate(&network) > 0.0);
//! ```
//!
//! ## Architecture
//!
//! Synapse is organized into several crates:
//!
//! - [`synapse_core`] - The network model, shared types, connectivity analysis
//! - [`synapse_train`] - Datasets and the Base/Hebbian trainer variants
//! - [`synapse_viz`] - Read-only render snapshots for external visualizers
//!
//! ## Hebbian Learning
//!
//! "Neurons that fire together wire together."
//!
//! - Both endpoints active: weight + learning rate
//! - Exactly one active: weight - learning rate × 0.5
//! - Neither active: weight - learning rate × 0.1
//! - Weights clamp into [-1.0, 1.0]

// Re-export all subcrates
pub use synapse_core as core;
pub use synapse_train as train;
pub use synapse_viz as viz;

/// Prelude module for convenient imports.
///
/// ```rust
/// use synapse::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use synapse_core::types::{
        Direction, Edge, Neuron, NeuronId, Payload, Relationship,
    };

    // The network model and its analysis view
    pub use synapse_core::analysis::NetworkProjection;
    pub use synapse_core::network::Network;

    // Error types
    pub use synapse_core::error::{Result, SynapseError};

    // Datasets
    pub use synapse_train::dataset::{
        pattern, ActivationPattern, Dataset, InformationSample, InformationUnitDataset,
        MemoryDataset, Relation,
    };

    // Trainers
    pub use synapse_train::trainer::{
        build_trainer, BaseTrainer, HebbianTrainer, Trainer, TrainerConfig, TrainerKind,
    };

    // Training observability
    pub use synapse_train::metrics::{EpochScore, TrainingTrace};

    // Presentation snapshots
    pub use synapse_viz::{snapshot, NetworkSnapshot};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
