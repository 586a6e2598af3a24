//! # Synapse Train
//!
//! Datasets and pluggable trainers for associative networks.
//!
//! Training is a deterministic-given-its-seed update procedure over a fixed
//! graph topology: a trainer repeatedly mutates neuron activation and edge
//! payloads in place, optionally pinned to the labeled activation targets a
//! [`dataset::Dataset`] supplies. Two learning rules ship here — a baseline
//! stochastic rule and a Hebbian co-activation rule.
//!
//! ## Quick Start
//!
//! ```rust
//! use synapse_core::prelude::*;
//! use synapse_train::prelude::*;
//!
//! let mut network = Network::new();
//! network.add_neuron(Neuron::new("1"));
//! network.add_neuron(Neuron::new("2"));
//! network.create_connection("1", "2", Direction::Bidirectional, Relationship::Similarity, None);
//! network.activate_neuron("1");
//! network.activate_neuron("2");
//!
//! let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
//! trainer.train(&mut network, 1);
//! assert!(trainer.evaluate(&network) > 0.0);
//! ```

pub mod dataset;
pub mod metrics;
pub mod prelude;
pub mod trainer;
