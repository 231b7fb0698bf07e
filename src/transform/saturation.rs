//! Logistic saturation transform (diminishing returns).
//!
//! ```text
//! y[t] = 1 - exp(-lambda * x[t])
//! ```
//!
//! For `x >= 0` the output is in `[0, 1)`, monotone increasing, and concave;
//! larger `lambda` moves the knee of diminishing returns earlier. Negative
//! inputs are well-defined (negative outputs) but the pipeline only feeds
//! nonnegative scaled spend.

/// Apply logistic saturation elementwise.
pub fn logistic_saturation(x: &[f64], lambda: f64) -> Vec<f64> {
    x.iter().map(|&v| 1.0 - (-lambda * v).exp()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_and_bounded_for_nonnegative_input() {
        let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        for &lambda in &[0.25, 1.5, 6.0] {
            let y = logistic_saturation(&x, lambda);
            for v in &y {
                assert!((0.0..1.0).contains(v), "out of range: {v}");
            }
            for w in y.windows(2) {
                assert!(w[1] >= w[0]);
            }
        }
    }

    #[test]
    fn larger_lambda_saturates_earlier() {
        let x = vec![0.5];
        let slow = logistic_saturation(&x, 0.5)[0];
        let fast = logistic_saturation(&x, 3.0)[0];
        assert!(fast > slow);
    }

    #[test]
    fn zero_input_maps_to_zero() {
        let y = logistic_saturation(&[0.0], 1.5);
        assert_eq!(y[0], 0.0);
    }
}
