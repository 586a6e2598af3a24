//! Shared types used across all Synapse crates.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a neuron in the network.
///
/// Ids are caller-chosen strings, stable for the neuron's lifetime. All
/// lookups — activation, payload storage, connection creation — go through
/// the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NeuronId(pub String);

impl NeuronId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NeuronId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NeuronId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NeuronId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Opaque payload carried by neurons and edges.
///
/// Sometimes descriptive text, sometimes a number — an edge's payload becomes
/// a numeric weight once a trainer has touched it. Absence is modeled as
/// `Option<Payload>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    Number(f64),
    Text(String),
}

impl Payload {
    /// The numeric value, if this payload is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Payload::Number(n) => Some(*n),
            Payload::Text(_) => None,
        }
    }

    /// The text, if this payload is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Number(_) => None,
            Payload::Text(t) => Some(t),
        }
    }

    /// Numeric view with the fallback the learning rules use: absent or
    /// textual payloads count as weight 0.0.
    pub fn numeric_or_zero(payload: Option<&Payload>) -> f64 {
        payload.and_then(Payload::as_number).unwrap_or(0.0)
    }
}

impl From<f64> for Payload {
    fn from(n: f64) -> Self {
        Payload::Number(n)
    }
}

impl From<&str> for Payload {
    fn from(t: &str) -> Self {
        Payload::Text(t.to_string())
    }
}

impl From<String> for Payload {
    fn from(t: String) -> Self {
        Payload::Text(t)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Number(n) => write!(f, "{n}"),
            Payload::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Directionality of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Unidirectional,
    Bidirectional,
    Undirected,
}

/// The kind of relationship an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Equivalence,
    Causality,
    Similarity,
    Association,
}

/// A uniquely-identified node holding an activation flag and an opaque
/// payload.
///
/// Neurons start deactivated. Once inserted into a [`crate::network::Network`]
/// they are owned by it and addressed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    pub information: Option<Payload>,
    pub activated: bool,
}

impl Neuron {
    pub fn new(id: impl Into<NeuronId>) -> Self {
        Self {
            id: id.into(),
            information: None,
            activated: false,
        }
    }

    pub fn with_information(id: impl Into<NeuronId>, information: impl Into<Payload>) -> Self {
        Self {
            id: id.into(),
            information: Some(information.into()),
            activated: false,
        }
    }
}

/// A relationship between two neurons.
///
/// Endpoints are stored as ids, not owning handles; a rule that needs the
/// neurons themselves resolves them through the network at update time.
/// Neurons hold no back-references to their edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NeuronId,
    pub to: NeuronId,
    pub direction: Direction,
    pub relationship: Relationship,
    pub information: Option<Payload>,
}

impl Edge {
    pub fn new(
        from: impl Into<NeuronId>,
        to: impl Into<NeuronId>,
        direction: Direction,
        relationship: Relationship,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
            relationship,
            information: None,
        }
    }

    pub fn with_information(
        from: impl Into<NeuronId>,
        to: impl Into<NeuronId>,
        direction: Direction,
        relationship: Relationship,
        information: impl Into<Payload>,
    ) -> Self {
        Self {
            information: Some(information.into()),
            ..Self::new(from, to, direction, relationship)
        }
    }

    /// Numeric weight view of the payload (0.0 when absent or textual).
    pub fn weight(&self) -> f64 {
        Payload::numeric_or_zero(self.information.as_ref())
    }

    /// Whether either endpoint is the given neuron.
    pub fn touches(&self, id: &str) -> bool {
        self.from.as_str() == id || self.to.as_str() == id
    }
}
