//! Datasets — labeled activation targets that drive supervised-style epochs.
//!
//! A dataset is an ordered, index-addressable sequence of samples, each one
//! mapping neuron ids to a target activation. Datasets are decoupled from
//! any particular network: nothing validates that the ids in a pattern
//! exist anywhere, which is what lets one dataset train many networks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use synapse_core::error::{Result, SynapseError};
use synapse_core::network::Network;
use synapse_core::types::{Direction, Neuron, NeuronId, Payload, Relationship};

/// Target activations for one sample: neuron id → desired flag.
pub type ActivationPattern = HashMap<NeuronId, bool>;

/// Build an activation pattern from id/flag pairs.
pub fn pattern(entries: &[(&str, bool)]) -> ActivationPattern {
    entries
        .iter()
        .map(|(id, activated)| (NeuronId::from(*id), *activated))
        .collect()
}

/// An ordered, index-addressable sequence of labeled samples.
pub trait Dataset {
    /// Sample count.
    fn size(&self) -> usize;

    /// The activation targets at `index`.
    ///
    /// Out-of-range access is a hard error — the only one on the training
    /// path.
    fn sample(&self, index: usize) -> Result<&ActivationPattern>;

    /// Defensive copy of every sample, in current order.
    fn all_samples(&self) -> Vec<ActivationPattern>;

    /// Uniformly permute the samples in place.
    ///
    /// Re-entrant: repeated shuffles only reorder; content and count are
    /// untouched.
    fn shuffle(&mut self);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

fn check_index(index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(SynapseError::index_out_of_range(index, size));
    }
    Ok(())
}

/// In-memory dataset holding bare activation patterns.
#[derive(Debug)]
pub struct MemoryDataset {
    samples: Vec<ActivationPattern>,
    rng: StdRng,
}

impl MemoryDataset {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_samples(samples: Vec<ActivationPattern>) -> Self {
        Self {
            samples,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the shuffle RNG for reproducible permutations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_sample(&mut self, sample: ActivationPattern) {
        self.samples.push(sample);
    }

    pub fn add_samples(&mut self, samples: impl IntoIterator<Item = ActivationPattern>) {
        self.samples.extend(samples);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Embedded example: four co-activation patterns over three neurons.
    pub fn example() -> Self {
        Self::from_samples(vec![
            pattern(&[("1", true), ("2", true), ("3", false)]),
            pattern(&[("1", false), ("2", true), ("3", true)]),
            pattern(&[("1", true), ("2", false), ("3", true)]),
            pattern(&[("1", true), ("2", false), ("3", false)]),
        ])
    }
}

impl Default for MemoryDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for MemoryDataset {
    fn size(&self) -> usize {
        self.samples.len()
    }

    fn sample(&self, index: usize) -> Result<&ActivationPattern> {
        check_index(index, self.samples.len())?;
        Ok(&self.samples[index])
    }

    fn all_samples(&self) -> Vec<ActivationPattern> {
        self.samples.clone()
    }

    fn shuffle(&mut self) {
        self.samples.shuffle(&mut self.rng);
    }
}

/// A relation between two information units, described in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub from: NeuronId,
    pub to: NeuronId,
    pub description: String,
}

/// A sample that pairs activation targets with the human-readable
/// information units and relations they were derived from.
///
/// Units and relations describe the sample; the numeric training rules
/// never read them. A caller can materialize them into a network with
/// [`InformationSample::seed_network`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformationSample {
    /// Descriptive text per neuron id. Ordered so seeding is deterministic.
    pub information_units: BTreeMap<NeuronId, String>,
    pub relations: Vec<Relation>,
    pub activations: ActivationPattern,
}

impl InformationSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_information_unit(&mut self, id: impl Into<NeuronId>, text: impl Into<String>) {
        self.information_units.insert(id.into(), text.into());
    }

    pub fn add_relation(
        &mut self,
        from: impl Into<NeuronId>,
        to: impl Into<NeuronId>,
        description: impl Into<String>,
    ) {
        self.relations.push(Relation {
            from: from.into(),
            to: to.into(),
            description: description.into(),
        });
    }

    pub fn set_activation(&mut self, id: impl Into<NeuronId>, activated: bool) {
        self.activations.insert(id.into(), activated);
    }

    /// Materialize the descriptive side of this sample into a network: one
    /// neuron per information unit (inserted if missing, text as payload)
    /// and one Association edge per relation, its description as the edge
    /// payload. A later training pass overwrites those edge payloads with
    /// numeric weights.
    pub fn seed_network(&self, network: &mut Network) {
        for (id, text) in &self.information_units {
            if network.get_neuron(id.as_str()).is_none() {
                network.add_neuron(Neuron::new(id.clone()));
            }
            network.store_information(id.as_str(), text.clone());
        }
        for relation in &self.relations {
            network.create_connection(
                relation.from.as_str(),
                relation.to.as_str(),
                Direction::Unidirectional,
                Relationship::Association,
                Some(Payload::from(relation.description.clone())),
            );
        }
    }
}

/// Dataset of [`InformationSample`]s.
///
/// Implements [`Dataset`] by projecting each sample onto its activation
/// pattern; the richer sample data stays reachable through
/// [`InformationUnitDataset::information_sample`].
#[derive(Debug)]
pub struct InformationUnitDataset {
    samples: Vec<InformationSample>,
    rng: StdRng,
}

impl InformationUnitDataset {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_samples(samples: Vec<InformationSample>) -> Self {
        Self {
            samples,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the shuffle RNG for reproducible permutations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_sample(&mut self, sample: InformationSample) {
        self.samples.push(sample);
    }

    pub fn add_samples(&mut self, samples: impl IntoIterator<Item = InformationSample>) {
        self.samples.extend(samples);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The full sample at `index`, including units and relations.
    pub fn information_sample(&self, index: usize) -> Result<&InformationSample> {
        check_index(index, self.samples.len())?;
        Ok(&self.samples[index])
    }

    /// Defensive copy of every full sample, in current order.
    pub fn all_information_samples(&self) -> Vec<InformationSample> {
        self.samples.clone()
    }

    /// Embedded example: three small is-a style samples (animal, plant,
    /// food) over nine neurons.
    pub fn example() -> Self {
        let mut animal = InformationSample::new();
        animal.add_information_unit("1", "dog");
        animal.add_information_unit("2", "mammal");
        animal.add_information_unit("3", "pet");
        animal.add_relation("1", "2", "is a kind of");
        animal.add_relation("1", "3", "is kept as");
        animal.set_activation("1", true);
        animal.set_activation("2", true);
        animal.set_activation("3", true);

        let mut plant = InformationSample::new();
        plant.add_information_unit("4", "rose");
        plant.add_information_unit("5", "flower");
        plant.add_information_unit("6", "plant");
        plant.add_relation("4", "5", "is a kind of");
        plant.add_relation("4", "6", "is a kind of");
        plant.set_activation("4", true);
        plant.set_activation("5", true);
        plant.set_activation("6", true);

        let mut food = InformationSample::new();
        food.add_information_unit("7", "apple");
        food.add_information_unit("8", "fruit");
        food.add_information_unit("9", "red");
        food.add_relation("7", "8", "is a kind of");
        food.add_relation("7", "9", "has color");
        food.set_activation("7", true);
        food.set_activation("8", true);
        food.set_activation("9", true);

        Self::from_samples(vec![animal, plant, food])
    }
}

impl Default for InformationUnitDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for InformationUnitDataset {
    fn size(&self) -> usize {
        self.samples.len()
    }

    fn sample(&self, index: usize) -> Result<&ActivationPattern> {
        check_index(index, self.samples.len())?;
        Ok(&self.samples[index].activations)
    }

    fn all_samples(&self) -> Vec<ActivationPattern> {
        self.samples.iter().map(|s| s.activations.clone()).collect()
    }

    fn shuffle(&mut self) {
        self.samples.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synapse_core::error::{DatasetError, SynapseError};

    /// Canonical form for multiset comparison across shuffles.
    fn canonical(samples: &[ActivationPattern]) -> Vec<Vec<(String, bool)>> {
        let mut out: Vec<Vec<(String, bool)>> = samples
            .iter()
            .map(|s| {
                let mut entries: Vec<(String, bool)> = s
                    .iter()
                    .map(|(id, &flag)| (id.as_str().to_string(), flag))
                    .collect();
                entries.sort();
                entries
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn sample_access_is_bounds_checked() {
        let dataset = MemoryDataset::example();
        for index in 0..dataset.size() {
            assert!(dataset.sample(index).is_ok());
        }
        match dataset.sample(dataset.size()) {
            Err(SynapseError::Dataset(DatasetError::IndexOutOfRange { index, size })) => {
                assert_eq!(index, 4);
                assert_eq!(size, 4);
            }
            other => panic!("expected out-of-range error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn all_samples_is_a_defensive_copy() {
        let dataset = MemoryDataset::example();
        let mut copy = dataset.all_samples();
        copy.clear();
        assert_eq!(dataset.size(), 4);
        assert!(dataset.sample(0).is_ok());
    }

    #[test]
    fn shuffle_preserves_the_sample_multiset() {
        let mut dataset = MemoryDataset::example().with_seed(42);
        let before = canonical(&dataset.all_samples());

        for _ in 0..5 {
            dataset.shuffle();
            assert_eq!(dataset.size(), 4);
            assert_eq!(canonical(&dataset.all_samples()), before);
        }
    }

    #[test]
    fn add_and_clear_mutate_the_owned_sequence() {
        let mut dataset = MemoryDataset::new();
        dataset.add_sample(pattern(&[("x", true)]));
        dataset.add_samples(vec![
            pattern(&[("y", false)]),
            pattern(&[("z", true)]),
        ]);
        assert_eq!(dataset.size(), 3);

        dataset.clear();
        assert_eq!(dataset.size(), 0);
        assert!(dataset.is_empty());
    }

    #[test]
    fn information_dataset_projects_activations() {
        let dataset = InformationUnitDataset::example();
        assert_eq!(dataset.size(), 3);

        let first = dataset.sample(0).unwrap();
        assert_eq!(first.get("1"), Some(&true));
        assert_eq!(first.get("4"), None);

        let full = dataset.information_sample(0).unwrap();
        assert_eq!(full.information_units.get("1").map(String::as_str), Some("dog"));
        assert_eq!(full.relations.len(), 2);

        assert!(dataset.information_sample(3).is_err());
    }

    #[test]
    fn seed_network_creates_neurons_and_association_edges() {
        let dataset = InformationUnitDataset::example();
        let mut network = Network::new();
        // Neuron "2" pre-exists; seeding must not duplicate it.
        network.add_neuron(Neuron::new("2"));

        dataset
            .information_sample(0)
            .unwrap()
            .seed_network(&mut network);

        assert_eq!(network.neuron_count(), 3);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(
            network.get_neuron("2").unwrap().information,
            Some(Payload::from("mammal"))
        );
        let edge = &network.edges()[0];
        assert_eq!(edge.relationship, Relationship::Association);
        assert_eq!(edge.information, Some(Payload::from("is a kind of")));
    }

    #[test]
    fn information_dataset_shuffle_keeps_full_samples() {
        let mut dataset = InformationUnitDataset::example().with_seed(7);
        let before = dataset.all_information_samples();

        dataset.shuffle();

        let after = dataset.all_information_samples();
        assert_eq!(after.len(), before.len());
        for sample in &before {
            let in_before = before.iter().filter(|s| *s == sample).count();
            let in_after = after.iter().filter(|s| *s == sample).count();
            assert_eq!(in_before, in_after);
        }
    }
}
