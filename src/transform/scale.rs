//! Max-absolute-value scaler.
//!
//! Fit and transform are separate steps so a scale learned on one series can
//! be reapplied to new data. The generation pipeline only uses
//! [`MaxAbsScaler::fit_transform`], but the two-step contract is part of the
//! public API.

/// Learned state: the maximum absolute value of the fitted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxAbsScaler {
    max_abs: f64,
}

impl MaxAbsScaler {
    /// Learn `max(|x|)` from a series.
    pub fn fit(x: &[f64]) -> Self {
        let max_abs = x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        Self { max_abs }
    }

    pub fn max_abs(&self) -> f64 {
        self.max_abs
    }

    /// Divide by the learned scale.
    ///
    /// A degenerate fit (`max_abs == 0`) maps everything to zero rather than
    /// producing NaNs; callers that consider an all-zero series fatal must
    /// check [`MaxAbsScaler::max_abs`] themselves.
    pub fn transform(&self, x: &[f64]) -> Vec<f64> {
        if self.max_abs == 0.0 {
            return vec![0.0; x.len()];
        }
        x.iter().map(|v| v / self.max_abs).collect()
    }

    /// Fit and transform in one pass.
    pub fn fit_transform(x: &[f64]) -> Vec<f64> {
        Self::fit(x).transform(x)
    }
}
