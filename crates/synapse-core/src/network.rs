//! The associative network — neurons keyed by id plus an ordered edge list.
//!
//! Neurons live in an arena keyed by their id; edges reference endpoints by
//! id and are kept in insertion order so every walk over them is
//! deterministic. Trainers mutate activation flags and edge payloads in
//! place through this type.

use crate::types::{Direction, Edge, Neuron, NeuronId, Payload, Relationship};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Graph model owning a set of neurons and a sequence of edges.
///
/// Neurons are unique by id: inserting a second neuron under an existing id
/// silently replaces the prior one (last-insert-wins, a deduplication
/// policy rather than an error). Edges already referencing that id keep
/// resolving to the replacement. There is no neuron-removal operation, so
/// an edge accepted by [`Network::create_connection`] can never dangle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    neurons: HashMap<NeuronId, Neuron>,
    /// Neuron insertion order; replacement keeps the original slot.
    order: Vec<NeuronId>,
    edges: Vec<Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the neuron keyed by its id.
    pub fn add_neuron(&mut self, neuron: Neuron) {
        if !self.neurons.contains_key(neuron.id.as_str()) {
            self.order.push(neuron.id.clone());
        }
        self.neurons.insert(neuron.id.clone(), neuron);
    }

    pub fn get_neuron(&self, id: &str) -> Option<&Neuron> {
        self.neurons.get(id)
    }

    pub fn get_neuron_mut(&mut self, id: &str) -> Option<&mut Neuron> {
        self.neurons.get_mut(id)
    }

    /// Neurons in insertion order.
    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.order.iter().filter_map(|id| self.neurons.get(id))
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    /// Append an edge unconditionally.
    ///
    /// No endpoint validation happens here; the validating entry point is
    /// [`Network::create_connection`].
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable view of the edges, for in-place payload updates.
    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge with the given neuron as either endpoint, in
    /// edge-insertion order.
    pub fn edges_for_neuron(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(id)).collect()
    }

    /// Set the named neuron's activation flag. Unknown ids are a no-op.
    pub fn set_activation(&mut self, id: &str, activated: bool) {
        if let Some(neuron) = self.neurons.get_mut(id) {
            neuron.activated = activated;
        }
    }

    pub fn activate_neuron(&mut self, id: &str) {
        self.set_activation(id, true);
    }

    pub fn deactivate_neuron(&mut self, id: &str) {
        self.set_activation(id, false);
    }

    /// Whether the named neuron is currently activated. Unknown ids read as
    /// inactive.
    pub fn is_activated(&self, id: &str) -> bool {
        self.neurons.get(id).map(|n| n.activated).unwrap_or(false)
    }

    /// Overwrite the neuron's payload. Returns whether the neuron existed.
    pub fn store_information(&mut self, id: &str, information: impl Into<Payload>) -> bool {
        match self.neurons.get_mut(id) {
            Some(neuron) => {
                neuron.information = Some(information.into());
                true
            }
            None => false,
        }
    }

    /// Create an edge between two existing neurons.
    ///
    /// The sole invariant-enforcing entry point for edge creation: if either
    /// id does not resolve, nothing changes and `false` comes back.
    pub fn create_connection(
        &mut self,
        from: &str,
        to: &str,
        direction: Direction,
        relationship: Relationship,
        information: Option<Payload>,
    ) -> bool {
        if !self.neurons.contains_key(from) || !self.neurons.contains_key(to) {
            return false;
        }
        self.edges.push(Edge {
            from: NeuronId::from(from),
            to: NeuronId::from(to),
            direction,
            relationship,
            information,
        });
        true
    }
}
