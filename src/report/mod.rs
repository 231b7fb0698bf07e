//! Reporting utilities: ground-truth shares and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the generation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{GeneratedDataset, TruthFile};

pub mod format;

pub use format::*;

/// A channel's realized ground truth over the generated horizon.
#[derive(Debug, Clone)]
pub struct ChannelShare {
    pub name: String,
    pub total_contribution: f64,
    /// `Σ_t contribution[t] / Σ_t sales[t]`.
    pub sales_share: f64,
}

/// Aggregate ground truth for a run.
#[derive(Debug, Clone)]
pub struct GroundTruth {
    pub total_sales: f64,
    pub total_demand: f64,
    pub shares: Vec<ChannelShare>,
}

/// Compute each channel's true share of total sales.
pub fn compute_ground_truth(dataset: &GeneratedDataset) -> GroundTruth {
    let total_sales: f64 = dataset.sales.iter().sum();
    let total_demand: f64 = dataset.base.demand.iter().sum();

    let shares = dataset
        .channels
        .iter()
        .map(|c| {
            let total_contribution: f64 = c.contribution.iter().sum();
            let sales_share = if total_sales != 0.0 {
                total_contribution / total_sales
            } else {
                0.0
            };
            ChannelShare {
                name: c.spec.name.clone(),
                total_contribution,
                sales_share,
            }
        })
        .collect();

    GroundTruth {
        total_sales,
        total_demand,
        shares,
    }
}

/// Rebuild the share table from a saved truth file.
pub fn ground_truth_from_file(truth: &TruthFile) -> GroundTruth {
    GroundTruth {
        total_sales: truth.total_sales,
        total_demand: truth.total_demand,
        shares: truth
            .channels
            .iter()
            .map(|c| ChannelShare {
                name: c.spec.name.clone(),
                total_contribution: c.total_contribution,
                sales_share: c.sales_share,
            })
            .collect(),
    }
}
