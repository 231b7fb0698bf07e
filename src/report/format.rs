//! Formatted terminal output for generation runs.

use crate::domain::{GenerateConfig, GeneratedDataset};
use crate::report::GroundTruth;

/// Format the full run summary (config echo + dataset stats).
pub fn format_run_summary(config: &GenerateConfig, dataset: &GeneratedDataset) -> String {
    let mut out = String::new();

    out.push_str("=== mmm - Synthetic MMM Dataset ===\n");
    out.push_str(&format!(
        "Horizon: {} periods ({}) from {}\n",
        config.periods,
        config.freq.display_name(),
        config.start_date,
    ));
    out.push_str(&format!(
        "Seed: {} | adstock window: {}\n",
        config.seed, config.adstock_window
    ));

    out.push_str(&format!(
        "Demand: [{:.1}, {:.1}] | Sales: [{:.1}, {:.1}]\n",
        min(&dataset.base.demand),
        max(&dataset.base.demand),
        min(&dataset.sales),
        max(&dataset.sales),
    ));

    out.push_str("\nChannels (ground-truth parameters):\n");
    for c in &dataset.channels {
        out.push_str(&format!(
            "- {:<12} spend_scalar={:<6} alpha={:<5} lambda={:<5} beta={}\n",
            c.spec.name,
            c.spec.spend_scalar,
            c.spec.adstock_alpha,
            c.spec.saturation_lambda,
            c.spec.beta,
        ));
    }
    out.push('\n');

    out
}

/// Format the ground-truth contribution-share table.
pub fn format_shares(truth: &GroundTruth) -> String {
    let mut out = String::new();

    out.push_str("True contribution shares of total sales:\n");
    out.push_str(&format!("{:<14} {:>16} {:>9}\n", "channel", "contribution", "share"));
    for s in &truth.shares {
        out.push_str(&format!(
            "{:<14} {:>16.2} {:>8.2}%\n",
            s.name,
            s.total_contribution,
            s.sales_share * 100.0,
        ));
    }
    let demand_share = if truth.total_sales != 0.0 {
        truth.total_demand / truth.total_sales
    } else {
        0.0
    };
    out.push_str(&format!(
        "{:<14} {:>16.2} {:>8.2}%\n",
        "(demand)",
        truth.total_demand,
        demand_share * 100.0,
    ));
    out.push_str(&format!("{:<14} {:>16.2} {:>8.2}%\n", "total", truth.total_sales, 100.0));

    out
}

fn min(xs: &[f64]) -> f64 {
    xs.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(xs: &[f64]) -> f64 {
    xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ChannelShare;

    #[test]
    fn share_table_lists_channels_demand_and_total() {
        let truth = GroundTruth {
            total_sales: 1000.0,
            total_demand: 600.0,
            shares: vec![
                ChannelShare {
                    name: "tv".to_string(),
                    total_contribution: 300.0,
                    sales_share: 0.3,
                },
                ChannelShare {
                    name: "radio".to_string(),
                    total_contribution: 100.0,
                    sales_share: 0.1,
                },
            ],
        };
        let table = format_shares(&truth);
        assert!(table.contains("tv"));
        assert!(table.contains("radio"));
        assert!(table.contains("(demand)"));
        assert!(table.contains("30.00%"));
        assert!(table.contains("100.00%"));
    }
}
