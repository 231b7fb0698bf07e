//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during generation
//! - exported to CSV/JSON next to the generated table
//! - reloaded later to score a fitted model against ground truth

use chrono::{Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sampling interval of the generated time spine.
///
/// The seasonality constant (see [`SEASONALITY_PERIOD`]) assumes weekly steps;
/// other frequencies are supported but the seasonal cycle then no longer maps
/// to one calendar year. This mirrors the behavior of the reference pipeline
/// and is deliberately not "fixed" here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Date of the `i`-th period counting from `start` (period 0 is `start`).
    pub fn date_at(self, start: NaiveDate, i: usize) -> NaiveDate {
        match self {
            Frequency::Daily => start + chrono::Duration::days(i as i64),
            Frequency::Weekly => start + chrono::Duration::weeks(i as i64),
            Frequency::Monthly => start
                .checked_add_months(Months::new(i as u32))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// Number of steps in one seasonal cycle (weeks per year).
pub const SEASONALITY_PERIOD: f64 = 52.0;

/// Default truncation window for the carryover kernel.
pub const DEFAULT_ADSTOCK_WINDOW: usize = 8;

/// Relative noise on the demand series.
pub const DEMAND_NOISE_STD: f64 = 0.10;

/// Relative noise on the observable demand proxy.
pub const PROXY_NOISE_STD: f64 = 0.10;

/// Relative noise on per-channel raw spend.
pub const SPEND_NOISE_STD: f64 = 0.30;

/// Ground-truth parameters for one marketing channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Column-name prefix for this channel (e.g. `tv` -> `tv_spend_raw`).
    pub name: String,
    /// Raw spend magnitude relative to demand (must be > 0).
    pub spend_scalar: f64,
    /// Geometric carryover retention per period (must be in `[0, 1)`).
    pub adstock_alpha: f64,
    /// Logistic saturation rate (must be > 0; larger saturates earlier).
    pub saturation_lambda: f64,
    /// Causal weight of the saturated signal on sales.
    pub beta: f64,
}

impl ChannelSpec {
    /// Check all parameter domains; errors name the offending channel.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::invalid_channel_spec("Channel name must not be empty."));
        }
        if !(self.spend_scalar.is_finite() && self.spend_scalar > 0.0) {
            return Err(AppError::invalid_channel_spec(format!(
                "Channel '{}': spend_scalar must be > 0 (got {}).",
                self.name, self.spend_scalar
            )));
        }
        if !(self.adstock_alpha.is_finite() && (0.0..1.0).contains(&self.adstock_alpha)) {
            return Err(AppError::invalid_channel_spec(format!(
                "Channel '{}': adstock_alpha must be in [0, 1) (got {}).",
                self.name, self.adstock_alpha
            )));
        }
        if !(self.saturation_lambda.is_finite() && self.saturation_lambda > 0.0) {
            return Err(AppError::invalid_channel_spec(format!(
                "Channel '{}': saturation_lambda must be > 0 (got {}).",
                self.name, self.saturation_lambda
            )));
        }
        if !self.beta.is_finite() {
            return Err(AppError::invalid_channel_spec(format!(
                "Channel '{}': beta must be finite (got {}).",
                self.name, self.beta
            )));
        }
        Ok(())
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). Validation is eager: a
/// config either passes [`GenerateConfig::validate`] in full or no series is
/// generated at all.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub start_date: NaiveDate,
    pub periods: usize,
    pub freq: Frequency,
    /// Master seed; per-component streams are derived from it.
    pub seed: u64,
    /// Carryover truncation window (`l_max`).
    pub adstock_window: usize,
    /// Ordered channel list; order determines column order in exports.
    pub channels: Vec<ChannelSpec>,
}

impl GenerateConfig {
    /// Validate run-level parameters and every channel spec.
    ///
    /// `periods < 2` is rejected because the trend curve normalizes the time
    /// index by `periods - 1`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.periods < 2 {
            return Err(AppError::invalid_configuration(format!(
                "periods must be >= 2 (got {}).",
                self.periods
            )));
        }
        if self.adstock_window == 0 {
            return Err(AppError::invalid_configuration(
                "adstock window must be >= 1.",
            ));
        }
        for spec in &self.channels {
            spec.validate()?;
        }
        for (i, spec) in self.channels.iter().enumerate() {
            if self.channels[..i].iter().any(|other| other.name == spec.name) {
                return Err(AppError::invalid_configuration(format!(
                    "Duplicate channel name '{}'.",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}

/// The time spine plus base (non-channel) columns.
#[derive(Debug, Clone)]
pub struct BaseSeries {
    pub dates: Vec<NaiveDate>,
    pub trend: Vec<f64>,
    pub seasonality: Vec<f64>,
    /// Latent baseline demand (trend modulated by seasonality, plus noise).
    pub demand: Vec<f64>,
    /// Noisy nonnegative observable stand-in for `demand`.
    pub demand_proxy: Vec<f64>,
}

/// All per-channel intermediate artifacts, kept so a downstream consumer can
/// audit every stage of the transform chain.
#[derive(Debug, Clone)]
pub struct ChannelSeries {
    pub spec: ChannelSpec,
    pub spend_raw: Vec<f64>,
    /// Max-abs scaled spend (in `[0, 1]` since raw spend is nonnegative).
    pub spend: Vec<f64>,
    pub adstock: Vec<f64>,
    pub saturated: Vec<f64>,
    /// `saturated * beta`; this channel's true share of sales.
    pub contribution: Vec<f64>,
}

/// The complete generated table.
///
/// Invariant: `sales[t] == base.demand[t] + Σ_c channels[c].contribution[t]`
/// with no further noise added at aggregation.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub base: BaseSeries,
    pub channels: Vec<ChannelSeries>,
    pub sales: Vec<f64>,
}

impl GeneratedDataset {
    pub fn len(&self) -> usize {
        self.base.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.dates.is_empty()
    }
}

/// A saved ground-truth file (JSON).
///
/// This is the "answer key" for an MMM evaluation run: everything needed to
/// score a fitted model's recovered parameters and contribution shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthFile {
    pub tool: String,
    pub start_date: NaiveDate,
    pub periods: usize,
    pub freq: Frequency,
    pub seed: u64,
    pub adstock_window: usize,
    pub channels: Vec<TruthChannel>,
    pub total_sales: f64,
    pub total_demand: f64,
}

/// Per-channel ground truth: the generating parameters plus realized totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthChannel {
    #[serde(flatten)]
    pub spec: ChannelSpec,
    /// `Σ_t contribution[t]`.
    pub total_contribution: f64,
    /// `Σ_t contribution[t] / Σ_t sales[t]`.
    pub sales_share: f64,
}
