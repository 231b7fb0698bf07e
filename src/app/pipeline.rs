//! Shared "generate pipeline" logic used by every CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> generate -> ground truth
//!
//! The CLI commands then focus on presentation and exports.

use crate::domain::{GenerateConfig, GeneratedDataset};
use crate::error::AppError;
use crate::report::{GroundTruth, compute_ground_truth};

/// All computed outputs of a single generation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub config: GenerateConfig,
    pub dataset: GeneratedDataset,
    pub truth: GroundTruth,
}

/// Execute the full generation pipeline and return the computed outputs.
pub fn run_generate(config: GenerateConfig) -> Result<RunOutput, AppError> {
    let dataset = crate::synth::generate(&config)?;
    let truth = compute_ground_truth(&dataset);
    Ok(RunOutput {
        config,
        dataset,
        truth,
    })
}
