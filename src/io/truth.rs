//! Read/write ground-truth JSON files.
//!
//! Truth JSON is the portable "answer key" for a generated dataset:
//! - the full generating configuration (seed included, for re-generation)
//! - per-channel parameters plus realized contribution totals and shares
//!
//! The schema is defined by `domain::TruthFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{GenerateConfig, GeneratedDataset, TruthChannel, TruthFile};
use crate::error::AppError;
use crate::report::compute_ground_truth;

/// Assemble the truth record for a finished run.
pub fn build_truth(config: &GenerateConfig, dataset: &GeneratedDataset) -> TruthFile {
    let truth = compute_ground_truth(dataset);

    let channels = dataset
        .channels
        .iter()
        .zip(&truth.shares)
        .map(|(c, s)| TruthChannel {
            spec: c.spec.clone(),
            total_contribution: s.total_contribution,
            sales_share: s.sales_share,
        })
        .collect();

    TruthFile {
        tool: "mmm".to_string(),
        start_date: config.start_date,
        periods: config.periods,
        freq: config.freq,
        seed: config.seed,
        adstock_window: config.adstock_window,
        channels,
        total_sales: truth.total_sales,
        total_demand: truth.total_demand,
    }
}

/// Write a truth JSON file.
pub fn write_truth_json(
    path: &Path,
    config: &GenerateConfig,
    dataset: &GeneratedDataset,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create truth JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, &build_truth(config, dataset))
        .map_err(|e| AppError::io(format!("Failed to write truth JSON: {e}")))?;
    Ok(())
}

/// Read a truth JSON file.
pub fn read_truth_json(path: &Path) -> Result<TruthFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open truth JSON '{}': {e}", path.display()))
    })?;
    let truth: TruthFile = serde_json::from_reader(file)
        .map_err(|e| AppError::io(format!("Invalid truth JSON: {e}")))?;
    Ok(truth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelSpec, Frequency};
    use chrono::NaiveDate;

    fn config() -> GenerateConfig {
        GenerateConfig {
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            periods: 26,
            freq: Frequency::Weekly,
            seed: 42,
            adstock_window: 8,
            channels: vec![ChannelSpec {
                name: "tv".to_string(),
                spend_scalar: 10.0,
                adstock_alpha: 0.5,
                saturation_lambda: 1.5,
                beta: 350.0,
            }],
        }
    }

    #[test]
    fn truth_record_matches_the_run() {
        let config = config();
        let dataset = crate::synth::generate(&config).unwrap();
        let truth = build_truth(&config, &dataset);

        assert_eq!(truth.periods, 26);
        assert_eq!(truth.seed, 42);
        assert_eq!(truth.channels.len(), 1);
        assert_eq!(truth.channels[0].spec.name, "tv");

        let expected: f64 = dataset.channels[0].contribution.iter().sum();
        assert!((truth.channels[0].total_contribution - expected).abs() < 1e-9);
    }

    #[test]
    fn truth_json_round_trips_through_serde() {
        let config = config();
        let dataset = crate::synth::generate(&config).unwrap();
        let truth = build_truth(&config, &dataset);

        let json = serde_json::to_string(&truth).unwrap();
        let back: TruthFile = serde_json::from_str(&json).unwrap();

        assert_eq!(back.seed, truth.seed);
        assert_eq!(back.channels[0].spec, truth.channels[0].spec);
        assert!((back.total_sales - truth.total_sales).abs() < 1e-9);
    }
}
