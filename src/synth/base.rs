//! Base series generation: time spine, trend, seasonality, demand.
//!
//! Demand is the intercept-like part of the outcome: a slowly growing
//! concave trend, modulated multiplicatively by a fixed-amplitude seasonal
//! cycle, plus Gaussian noise, scaled to a realistic sales magnitude. The
//! proxy column is the noisy observable a model is allowed to see; demand
//! itself is treated as latent ground truth.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{
    BaseSeries, DEMAND_NOISE_STD, GenerateConfig, PROXY_NOISE_STD, SEASONALITY_PERIOD,
};
use crate::error::AppError;

/// Magnitude applied to the unit-scale demand curve.
const DEMAND_SCALE: f64 = 1000.0;

/// Seasonal amplitude relative to the trend level.
const SEASONALITY_AMPLITUDE: f64 = 0.1;

/// Build the time spine and all base columns.
///
/// The caller validates `periods >= 2`; the trend formula divides by
/// `periods - 1`.
pub fn generate_base(config: &GenerateConfig, seed: u64) -> Result<BaseSeries, AppError> {
    let n = config.periods;
    let mut rng = StdRng::seed_from_u64(seed);

    let demand_noise = Normal::new(0.0, DEMAND_NOISE_STD)
        .map_err(|e| AppError::degenerate_input(format!("Noise distribution error: {e}")))?;
    let proxy_noise = Normal::new(1.0, PROXY_NOISE_STD)
        .map_err(|e| AppError::degenerate_input(format!("Noise distribution error: {e}")))?;

    let mut dates = Vec::with_capacity(n);
    let mut trend = Vec::with_capacity(n);
    let mut seasonality = Vec::with_capacity(n);
    let mut demand = Vec::with_capacity(n);
    let mut demand_proxy = Vec::with_capacity(n);

    for i in 0..n {
        dates.push(config.freq.date_at(config.start_date, i));

        let u = i as f64 / (n as f64 - 1.0);
        let tr = (20.0 * u + 5.0).powf(1.0 / 8.0) - 1.0;
        trend.push(tr);

        let se = SEASONALITY_AMPLITUDE
            * (2.0 * std::f64::consts::PI * i as f64 / SEASONALITY_PERIOD).sin();
        seasonality.push(se);

        let eps: f64 = demand_noise.sample(&mut rng);
        let d = DEMAND_SCALE * (tr * (1.0 + se) + eps);
        demand.push(d);

        let eta: f64 = proxy_noise.sample(&mut rng);
        demand_proxy.push((d * eta).abs());
    }

    Ok(BaseSeries {
        dates,
        trend,
        seasonality,
        demand,
        demand_proxy,
    })
}
