//! # Synapse Viz
//!
//! Read-only presentation support for associative networks.
//!
//! Captures a serializable snapshot of neuron and edge state with
//! deterministic circle-layout positions, ready for a browser canvas or GUI
//! renderer to draw as circles and arrows. Nothing in this crate mutates a
//! network.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fs;
use std::path::Path;
use synapse_core::error::Result;
use synapse_core::network::Network;
use synapse_core::types::{Direction, Payload, Relationship};

/// Abstract canvas dimensions the layout targets.
const CANVAS: (f64, f64) = (800.0, 600.0);
/// Radius of the layout circle, in canvas units.
const LAYOUT_RADIUS: f64 = 200.0;

/// Positioned, render-ready view of one neuron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronView {
    pub id: String,
    /// Textual payload, when the neuron carries one.
    pub label: Option<String>,
    pub activated: bool,
    pub x: f64,
    pub y: f64,
}

/// Render-ready view of one edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub direction: Direction,
    pub relationship: Relationship,
    /// Numeric payload, when the edge carries one.
    pub weight: Option<f64>,
}

/// Snapshot metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub snapshot_id: String,
    pub neuron_count: usize,
    pub edge_count: usize,
}

/// A complete, read-only snapshot of network state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub neurons: Vec<NeuronView>,
    pub edges: Vec<EdgeView>,
    pub metadata: SnapshotMetadata,
}

impl NetworkSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Capture a snapshot of the network.
///
/// Neurons are placed evenly on a circle in network insertion order,
/// starting at twelve o'clock, so the same network always lays out the same
/// way. Edges come out in their insertion order with ids untouched; the
/// renderer resolves endpoints against the neuron views.
pub fn snapshot(network: &Network) -> NetworkSnapshot {
    let (center_x, center_y) = (CANVAS.0 / 2.0, CANVAS.1 / 2.0);
    let count = network.neuron_count();

    let neurons: Vec<NeuronView> = network
        .neurons()
        .enumerate()
        .map(|(i, neuron)| {
            let angle = TAU * i as f64 / count as f64 - TAU / 4.0;
            NeuronView {
                id: neuron.id.as_str().to_string(),
                label: neuron
                    .information
                    .as_ref()
                    .and_then(Payload::as_text)
                    .map(str::to_string),
                activated: neuron.activated,
                x: center_x + LAYOUT_RADIUS * angle.cos(),
                y: center_y + LAYOUT_RADIUS * angle.sin(),
            }
        })
        .collect();

    let edges: Vec<EdgeView> = network
        .edges()
        .iter()
        .map(|edge| EdgeView {
            from: edge.from.as_str().to_string(),
            to: edge.to.as_str().to_string(),
            direction: edge.direction,
            relationship: edge.relationship,
            weight: edge.information.as_ref().and_then(Payload::as_number),
        })
        .collect();

    NetworkSnapshot {
        metadata: SnapshotMetadata {
            snapshot_id: uuid::Uuid::new_v4().to_string(),
            neuron_count: neurons.len(),
            edge_count: edges.len(),
        },
        neurons,
        edges,
    }
}
