//! Synapse Train Prelude — convenient imports for common usage.
//!
//! ```rust
//! use synapse_train::prelude::*;
//! ```

// Re-export dataset types
pub use crate::dataset::{
    pattern, ActivationPattern, Dataset, InformationSample, InformationUnitDataset,
    MemoryDataset, Relation,
};

// Re-export trainer types
pub use crate::trainer::{
    build_trainer, BaseTrainer, HebbianTrainer, Trainer, TrainerConfig, TrainerKind,
    DEFAULT_LEARNING_RATE,
};

// Re-export training observability
pub use crate::metrics::{EpochScore, TrainingTrace};
