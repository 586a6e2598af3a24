//! Connectivity analysis over an associative network.
//!
//! Projects the network onto an undirected petgraph view where every edge
//! carries its numeric weight, then answers the structural questions a
//! driver or renderer asks: how many clusters exist, and which chain of
//! strong associations links two neurons.

use crate::network::Network;
use crate::types::NeuronId;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Undirected weighted projection of a [`Network`].
///
/// Direction and relationship kind are flattened away: for connectivity,
/// both endpoints reach each other. Edges whose endpoints do not resolve
/// are skipped. The projection is a point-in-time copy and does not track
/// later network mutations.
pub struct NetworkProjection {
    graph: UnGraph<NeuronId, f64>,
    index: HashMap<NeuronId, NodeIndex>,
}

impl NetworkProjection {
    pub fn from_network(network: &Network) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();

        for neuron in network.neurons() {
            let idx = graph.add_node(neuron.id.clone());
            index.insert(neuron.id.clone(), idx);
        }
        for edge in network.edges() {
            let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            graph.add_edge(from, to, edge.weight());
        }

        Self { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of connected components (isolated neurons count as their own).
    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Strongest path between two neurons.
    ///
    /// Dijkstra with inverse weight as cost, so heavily reinforced edges are
    /// "shorter". Returns the id sequence and the total cost, or `None` when
    /// either endpoint is unknown or no path exists.
    pub fn strongest_path(&self, from: &str, to: &str) -> Option<(Vec<NeuronId>, f64)> {
        let from_idx = *self.index.get(from)?;
        let to_idx = *self.index.get(to)?;

        #[derive(PartialEq)]
        struct State {
            cost: f64,
            node: NodeIndex,
        }
        impl Eq for State {}
        impl PartialOrd for State {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                other.cost.partial_cmp(&self.cost) // min-heap
            }
        }
        impl Ord for State {
            fn cmp(&self, other: &Self) -> Ordering {
                self.partial_cmp(other).unwrap_or(Ordering::Equal)
            }
        }

        let mut dist: HashMap<NodeIndex, f64> = HashMap::new();
        let mut prev: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(from_idx, 0.0);
        heap.push(State {
            cost: 0.0,
            node: from_idx,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if node == to_idx {
                let mut path = Vec::new();
                let mut current = to_idx;
                while current != from_idx {
                    path.push(self.graph[current].clone());
                    current = prev[&current];
                }
                path.push(self.graph[from_idx].clone());
                path.reverse();
                return Some((path, cost));
            }

            if cost > *dist.get(&node).unwrap_or(&f64::INFINITY) {
                continue;
            }

            for edge in self.graph.edges(node) {
                let next = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                // Cost = 1/weight so strong edges are cheap; the floor keeps
                // zero-weight edges traversable without dividing by zero.
                let edge_cost = 1.0 / edge.weight().max(0.001);
                let next_cost = cost + edge_cost;

                if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                    dist.insert(next, next_cost);
                    prev.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }
        None
    }
}
