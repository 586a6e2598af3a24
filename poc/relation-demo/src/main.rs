//! Relation Demo: Information-Unit Dataset → Trained Hebbian Associations
//!
//! Walks the full pipeline on the embedded example data:
//! 1. Seed a network from the dataset's information units and relations
//! 2. Train with the Hebbian rule, recording evaluation scores
//! 3. Rank the strongest associations
//! 4. Check connectivity and write a render snapshot

use synapse_core::analysis::NetworkProjection;
use synapse_core::network::Network;
use synapse_train::dataset::InformationUnitDataset;
use synapse_train::metrics::TrainingTrace;
use synapse_train::trainer::{build_trainer, Trainer, TrainerConfig, TrainerKind};
use synapse_viz::snapshot;

const EPOCHS: usize = 100;
const SCORE_INTERVAL: usize = 10;

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  Relation Demo: Dataset → Hebbian Associations       ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // --- Phase 1: Seed the network ---
    let dataset = InformationUnitDataset::example();
    println!("── Phase 1: Seed Network ──────────────────────────────");
    println!("  Dataset: {} samples", dataset.all_information_samples().len());

    let mut network = Network::new();
    for sample in dataset.all_information_samples() {
        sample.seed_network(&mut network);
    }
    println!(
        "  Network: {} neurons, {} edges",
        network.neuron_count(),
        network.edge_count()
    );
    println!();

    // --- Phase 2: Train ---
    println!("── Phase 2: Hebbian Training ({EPOCHS} epochs) ────────────");
    let mut trainer = build_trainer(
        TrainerKind::Hebbian,
        TrainerConfig::new().with_learning_rate(0.1).with_seed(7),
    );

    let mut trace = TrainingTrace::new();
    trace.record(0, trainer.evaluate(&network));
    let mut epoch = 0;
    while epoch < EPOCHS {
        trainer.train_with_dataset(&mut network, &dataset, SCORE_INTERVAL);
        epoch += SCORE_INTERVAL;
        trace.record(epoch, trainer.evaluate(&network));
    }

    for score in &trace.scores {
        println!("  Epoch {:>4}: score {:.4}", score.epoch, score.score);
    }
    println!(
        "  Net change: {:+.4} (best {:.4} at epoch {})",
        trace.delta(),
        trace.best().map(|s| s.score).unwrap_or(0.0),
        trace.best().map(|s| s.epoch).unwrap_or(0),
    );
    println!();

    // --- Phase 3: Strongest associations ---
    println!("── Phase 3: Strongest Associations ────────────────────");
    let mut ranked: Vec<_> = network.edges().iter().collect();
    ranked.sort_by(|a, b| {
        b.weight()
            .partial_cmp(&a.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for edge in ranked.iter().take(6) {
        let from_label = label_for(&network, edge.from.as_str());
        let to_label = label_for(&network, edge.to.as_str());
        println!(
            "  {:.3} | {} ─ {}",
            edge.weight(),
            from_label,
            to_label
        );
    }
    println!();

    // --- Phase 4: Connectivity + snapshot ---
    println!("── Phase 4: Connectivity & Snapshot ───────────────────");
    let projection = NetworkProjection::from_network(&network);
    println!(
        "  Components: {} ({} neurons, {} edges)",
        projection.connected_components(),
        projection.node_count(),
        projection.edge_count()
    );
    if let Some((path, cost)) = projection.strongest_path("2", "3") {
        let ids: Vec<&str> = path.iter().map(|id| id.as_str()).collect();
        println!("  Strongest path 2→3: {} (cost {:.2})", ids.join(" → "), cost);
    }

    let snap = snapshot(&network);
    let out = std::path::Path::new("relation-demo-snapshot.json");
    match snap.write_json(out) {
        Ok(()) => println!("  Snapshot written to {}", out.display()),
        Err(e) => println!("  Snapshot failed: {e}"),
    }
}

fn label_for(network: &Network, id: &str) -> String {
    network
        .get_neuron(id)
        .and_then(|n| n.information.as_ref())
        .map(|p| p.to_string())
        .unwrap_or_else(|| id.to_string())
}
