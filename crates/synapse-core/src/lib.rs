//! # Synapse Core
//!
//! Core types and the associative network model.
//!
//! A network is a small graph of neurons — uniquely-identified nodes holding
//! an activation flag and an opaque payload — connected by edges that carry
//! a direction, a relationship kind, and their own payload. Trainers (in
//! `synapse-train`) mutate activation flags and edge payloads in place;
//! everything here is the data model and its query/mutation contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use synapse_core::prelude::*;
//!
//! let mut network = Network::new();
//! network.add_neuron(Neuron::with_information("dog", "a dog"));
//! network.add_neuron(Neuron::with_information("mammal", "a mammal"));
//!
//! assert!(network.create_connection(
//!     "dog",
//!     "mammal",
//!     Direction::Unidirectional,
//!     Relationship::Association,
//!     None,
//! ));
//! network.activate_neuron("dog");
//! assert!(network.is_activated("dog"));
//! ```

pub mod analysis;
pub mod error;
pub mod network;
pub mod prelude;
pub mod types;
