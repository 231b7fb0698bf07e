//! Dataset generation: base series, per-channel series, and aggregation.
//!
//! The pipeline is a pure function of its configuration:
//!
//! 1. validate the whole config (fail fast, never a partial dataset)
//! 2. build the time spine and base demand series
//! 3. generate every channel's transform chain from demand
//! 4. fold the contributions into `sales`
//!
//! Each component draws from its own `StdRng`, seeded from the master seed
//! and a component label. Streams are independent, so channel generation
//! order (and rayon's scheduling) cannot change the output.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rayon::prelude::*;

use crate::domain::{ChannelSeries, GenerateConfig, GeneratedDataset};
use crate::error::AppError;

pub mod aggregate;
pub mod base;
pub mod channel;

/// Generate a full dataset from a validated configuration.
///
/// This is the library's single entry point; everything else in this module
/// is a stage of it.
pub fn generate(config: &GenerateConfig) -> Result<GeneratedDataset, AppError> {
    config.validate()?;

    let base = base::generate_base(config, component_seed(config.seed, "base"))?;

    // Channel names are unique (validated above), so per-channel seeds are
    // distinct and each channel's stream is reproducible in isolation.
    let channels: Vec<ChannelSeries> = config
        .channels
        .par_iter()
        .map(|spec| {
            channel::generate_channel(
                spec,
                &base.demand,
                config.adstock_window,
                component_seed(config.seed, &spec.name),
            )
        })
        .collect::<Result<_, _>>()?;

    let sales = aggregate::aggregate(&base.demand, &channels);

    Ok(GeneratedDataset {
        base,
        channels,
        sales,
    })
}

/// Derive a component-local seed from the master seed and a label.
fn component_seed(seed: u64, label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    label.hash(&mut hasher);
    hasher.finish()
}
