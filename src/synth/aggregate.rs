//! Final aggregation: fold channel contributions into the base outcome.
//!
//! A pure reduction rather than an accumulate-in-place loop: each channel's
//! contribution is computed independently and summed here in one pass, so no
//! shared column is ever mutated during generation.

use crate::domain::ChannelSeries;

/// `sales[t] = demand[t] + Σ_c contribution_c[t]`. No randomness is added.
pub fn aggregate(demand: &[f64], channels: &[ChannelSeries]) -> Vec<f64> {
    (0..demand.len())
        .map(|t| {
            demand[t]
                + channels
                    .iter()
                    .map(|c| c.contribution[t])
                    .sum::<f64>()
        })
        .collect()
}
