//! Trainers — pluggable learning rules that mutate a network in place.
//!
//! Every variant shares the same surface: epoch loops over an unsupervised
//! update, dataset-driven epochs that pin activations to labeled targets,
//! and a scalar evaluation of the current network state. Nothing here
//! blocks, suspends, or prints; drivers own all output.

use crate::dataset::{ActivationPattern, Dataset};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use synapse_core::network::Network;
use synapse_core::types::{NeuronId, Payload};

/// Default learning rate shared by every trainer variant.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Probability that the baseline rule activates a neuron in one epoch.
const BASE_ACTIVATION_PROBABILITY: f64 = 0.1;

/// Shared trainer configuration: the learning rate and the random source.
///
/// Runs are deterministic given a seeded source; the default source is
/// entropy-seeded.
#[derive(Debug)]
pub struct TrainerConfig {
    pub learning_rate: f64,
    rng: StdRng,
}

impl TrainerConfig {
    pub fn new() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Seed the random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A learning strategy over a [`Network`].
pub trait Trainer {
    /// One unsupervised update pass.
    fn train_epoch(&mut self, network: &mut Network);

    /// One dataset-driven pass.
    ///
    /// Every sample is applied in dataset order — target activations copied
    /// onto neurons the network knows, unknown ids skipped — and each sample
    /// is immediately followed by a full edge-update pass. An empty dataset
    /// falls back to the unsupervised epoch.
    fn train_epoch_with_dataset(&mut self, network: &mut Network, dataset: &dyn Dataset);

    /// Score the current network state. Empty networks score exactly 0.0.
    fn evaluate(&self, network: &Network) -> f64;

    /// Run `epochs` unsupervised epochs.
    fn train(&mut self, network: &mut Network, epochs: usize) {
        for _ in 0..epochs {
            self.train_epoch(network);
        }
    }

    /// Run `epochs` dataset-driven epochs.
    fn train_with_dataset(&mut self, network: &mut Network, dataset: &dyn Dataset, epochs: usize) {
        for _ in 0..epochs {
            self.train_epoch_with_dataset(network, dataset);
        }
    }
}

/// Copy a sample's target activations onto the network. Ids the network
/// does not know are skipped.
fn apply_sample(network: &mut Network, sample: &ActivationPattern) {
    for (id, &activated) in sample {
        network.set_activation(id.as_str(), activated);
    }
}

/// Baseline stochastic trainer.
///
/// Each unsupervised epoch redraws every neuron's activation as an
/// independent Bernoulli trial; edges are never mutated. Useful as a
/// control against the Hebbian variant.
#[derive(Debug, Default)]
pub struct BaseTrainer {
    config: TrainerConfig,
}

impl BaseTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }
}

impl Trainer for BaseTrainer {
    fn train_epoch(&mut self, network: &mut Network) {
        // Stable insertion order, so a seeded source replays exactly.
        let ids: Vec<NeuronId> = network.neurons().map(|n| n.id.clone()).collect();
        for id in ids {
            let activated = self.config.rng.gen_bool(BASE_ACTIVATION_PROBABILITY);
            network.set_activation(id.as_str(), activated);
        }
    }

    fn train_epoch_with_dataset(&mut self, network: &mut Network, dataset: &dyn Dataset) {
        if dataset.is_empty() {
            self.train_epoch(network);
            return;
        }
        for index in 0..dataset.size() {
            if let Ok(sample) = dataset.sample(index) {
                apply_sample(network, sample);
            }
            // The baseline rule has no edge update.
        }
    }

    fn evaluate(&self, network: &Network) -> f64 {
        let total = network.neuron_count();
        if total == 0 {
            return 0.0;
        }
        let activated = network.neurons().filter(|n| n.activated).count();
        activated as f64 / total as f64
    }
}

/// Hebbian co-activation trainer: neurons that fire together wire together.
///
/// Every edge pass nudges the numeric payload by the co-activation of its
/// endpoints and clamps the result into `[-1.0, 1.0]`. Payloads that are
/// absent or textual count as weight 0.0 and are overwritten with a number.
/// Unsupervised epochs leave activations exactly as the caller (or a prior
/// dataset pass) set them.
#[derive(Debug, Default)]
pub struct HebbianTrainer {
    config: TrainerConfig,
}

impl HebbianTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// One full edge-update pass.
    fn update_edges(&self, network: &mut Network) {
        // Endpoint states are read up front; an endpoint that does not
        // resolve counts as inactive.
        let states: Vec<(bool, bool)> = network
            .edges()
            .iter()
            .map(|e| {
                (
                    network.is_activated(e.from.as_str()),
                    network.is_activated(e.to.as_str()),
                )
            })
            .collect();

        let rate = self.config.learning_rate;
        for (edge, (from_active, to_active)) in network.edges_mut().iter_mut().zip(states) {
            let weight = edge.weight();
            let updated = if from_active && to_active {
                weight + rate
            } else if from_active || to_active {
                weight - rate * 0.5
            } else {
                weight - rate * 0.1
            };
            edge.information = Some(Payload::Number(updated.clamp(-1.0, 1.0)));
        }
    }
}

impl Trainer for HebbianTrainer {
    fn train_epoch(&mut self, network: &mut Network) {
        self.update_edges(network);
    }

    fn train_epoch_with_dataset(&mut self, network: &mut Network, dataset: &dyn Dataset) {
        if dataset.is_empty() {
            self.train_epoch(network);
            return;
        }
        for index in 0..dataset.size() {
            if let Ok(sample) = dataset.sample(index) {
                apply_sample(network, sample);
            }
            self.update_edges(network);
        }
    }

    fn evaluate(&self, network: &Network) -> f64 {
        let mut total = 0.0;
        let mut counted = 0usize;
        for edge in network.edges() {
            if let Some(weight) = edge.information.as_ref().and_then(Payload::as_number) {
                total += weight;
                counted += 1;
            }
        }
        if counted == 0 {
            return 0.0;
        }
        total / counted as f64
    }
}

/// Closed set of trainer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerKind {
    Base,
    Hebbian,
}

/// Construct a boxed trainer of the requested kind.
pub fn build_trainer(kind: TrainerKind, config: TrainerConfig) -> Box<dyn Trainer> {
    match kind {
        TrainerKind::Base => Box::new(BaseTrainer::new(config)),
        TrainerKind::Hebbian => Box::new(HebbianTrainer::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{pattern, MemoryDataset};
    use synapse_core::types::{Direction, Edge, Neuron, Relationship};

    const EPS: f64 = 1e-9;

    fn pair_network() -> Network {
        let mut network = Network::new();
        network.add_neuron(Neuron::new("1"));
        network.add_neuron(Neuron::new("2"));
        network.create_connection(
            "1",
            "2",
            Direction::Bidirectional,
            Relationship::Similarity,
            None,
        );
        network
    }

    fn edge_weight(network: &Network) -> f64 {
        network.edges()[0]
            .information
            .as_ref()
            .and_then(Payload::as_number)
            .unwrap()
    }

    #[test]
    fn hebbian_weight_trajectory() {
        let mut network = pair_network();
        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));

        network.activate_neuron("1");
        network.activate_neuron("2");
        trainer.train_epoch(&mut network);
        assert!((edge_weight(&network) - 0.1).abs() < EPS);

        network.deactivate_neuron("2");
        trainer.train_epoch(&mut network);
        assert!((edge_weight(&network) - 0.05).abs() < EPS);

        network.deactivate_neuron("1");
        trainer.train_epoch(&mut network);
        assert!((edge_weight(&network) - 0.04).abs() < EPS);
    }

    #[test]
    fn hebbian_weights_stay_clamped() {
        let mut network = pair_network();
        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.5));

        network.activate_neuron("1");
        network.activate_neuron("2");
        trainer.train(&mut network, 10);
        assert!((edge_weight(&network) - 1.0).abs() < EPS);

        network.deactivate_neuron("1");
        network.deactivate_neuron("2");
        trainer.train(&mut network, 100);
        let weight = edge_weight(&network);
        assert!((-1.0..=1.0).contains(&weight));
        assert!((weight - (-1.0)).abs() < EPS);
    }

    #[test]
    fn hebbian_coerces_textual_payloads_to_zero() {
        let mut network = pair_network();
        network.edges_mut()[0].information = Some(Payload::from("is related to"));
        network.activate_neuron("1");

        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
        trainer.train_epoch(&mut network);

        // One active endpoint from a coerced 0.0 base.
        assert!((edge_weight(&network) - (-0.05)).abs() < EPS);
    }

    #[test]
    fn hebbian_treats_dangling_endpoints_as_inactive() {
        let mut network = Network::new();
        network.add_neuron(Neuron::new("1"));
        network.activate_neuron("1");
        network.add_edge(Edge::new(
            "1",
            "ghost",
            Direction::Unidirectional,
            Relationship::Causality,
        ));

        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
        trainer.train_epoch(&mut network);
        assert!((edge_weight(&network) - (-0.05)).abs() < EPS);
    }

    #[test]
    fn hebbian_evaluate_averages_numeric_payloads_only() {
        let mut network = pair_network();
        network.add_neuron(Neuron::new("3"));
        network.create_connection(
            "2",
            "3",
            Direction::Undirected,
            Relationship::Association,
            Some(Payload::from("textual")),
        );
        network.edges_mut()[0].information = Some(Payload::Number(0.6));

        let trainer = HebbianTrainer::default();
        assert!((trainer.evaluate(&network) - 0.6).abs() < EPS);
    }

    #[test]
    fn evaluate_guards_empty_networks() {
        let network = Network::new();
        assert_eq!(BaseTrainer::default().evaluate(&network), 0.0);
        assert_eq!(HebbianTrainer::default().evaluate(&network), 0.0);

        // Edges exist but none carry a numeric payload yet.
        let mut textual = pair_network();
        textual.edges_mut()[0].information = Some(Payload::from("seed"));
        assert_eq!(HebbianTrainer::default().evaluate(&textual), 0.0);
    }

    #[test]
    fn base_trainer_draws_activations_and_leaves_edges_alone() {
        let mut network = pair_network();
        let mut trainer = BaseTrainer::new(TrainerConfig::new().with_seed(42));
        trainer.train(&mut network, 20);

        assert_eq!(network.edges()[0].information, None);
        let score = trainer.evaluate(&network);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn base_activation_rate_is_about_one_in_ten() {
        let mut network = Network::new();
        for i in 0..1000 {
            network.add_neuron(Neuron::new(format!("n{i}")));
        }
        let mut trainer = BaseTrainer::new(TrainerConfig::new().with_seed(7));
        trainer.train_epoch(&mut network);

        let ratio = trainer.evaluate(&network);
        assert!(
            (0.05..=0.15).contains(&ratio),
            "activation ratio {ratio} far from 0.1"
        );
    }

    #[test]
    fn empty_dataset_falls_back_to_unsupervised_epochs() {
        let empty = MemoryDataset::new().with_seed(0);

        let mut with_dataset = pair_network();
        let mut without_dataset = pair_network();

        let mut trainer_a = BaseTrainer::new(TrainerConfig::new().with_seed(99));
        let mut trainer_b = BaseTrainer::new(TrainerConfig::new().with_seed(99));

        trainer_a.train_with_dataset(&mut with_dataset, &empty, 5);
        trainer_b.train(&mut without_dataset, 5);

        let a: Vec<bool> = with_dataset.neurons().map(|n| n.activated).collect();
        let b: Vec<bool> = without_dataset.neurons().map(|n| n.activated).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn dataset_epoch_runs_one_edge_pass_per_sample() {
        let mut network = pair_network();
        let mut dataset = MemoryDataset::new();
        dataset.add_sample(pattern(&[("1", true), ("2", true)]));
        dataset.add_sample(pattern(&[("1", true), ("2", true)]));

        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
        trainer.train_epoch_with_dataset(&mut network, &dataset);

        // Two samples, two full passes: 0.0 + 0.1 + 0.1.
        assert!((edge_weight(&network) - 0.2).abs() < EPS);
    }

    #[test]
    fn dataset_epoch_skips_unknown_ids() {
        let mut network = pair_network();
        let mut dataset = MemoryDataset::new();
        dataset.add_sample(pattern(&[("1", true), ("2", true), ("unknown", true)]));

        let mut trainer = HebbianTrainer::new(TrainerConfig::new().with_learning_rate(0.1));
        trainer.train_epoch_with_dataset(&mut network, &dataset);

        assert!(network.get_neuron("unknown").is_none());
        assert!((edge_weight(&network) - 0.1).abs() < EPS);
    }

    #[test]
    fn built_trainers_share_the_surface() {
        let mut network = pair_network();
        network.activate_neuron("1");
        network.activate_neuron("2");

        let mut trainer = build_trainer(
            TrainerKind::Hebbian,
            TrainerConfig::new().with_learning_rate(0.1),
        );
        trainer.train(&mut network, 1);
        assert!((trainer.evaluate(&network) - 0.1).abs() < EPS);

        let mut trainer = build_trainer(TrainerKind::Base, TrainerConfig::new().with_seed(1));
        trainer.train(&mut network, 1);
        let score = trainer.evaluate(&network);
        assert!((0.0..=1.0).contains(&score));
    }
}
