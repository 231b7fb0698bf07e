//! Geometric carryover (adstock) transform.
//!
//! Marketing spend keeps influencing the outcome after the period it lands
//! in. We model that memory as a geometric-weighted moving sum:
//!
//! ```text
//! y[t] = Σ_{l=0}^{l_max-1} alpha^l * x[t-l]
//! ```
//!
//! Lags before the start of the series are dropped (no wraparound). With
//! `normalize`, the kernel is divided by its own mass `Σ alpha^l` so the
//! output stays on the scale of `x` regardless of `alpha`.

/// Apply geometric carryover with a truncated kernel.
///
/// Guarantees:
/// - `y.len() == x.len()`
/// - `alpha = 0` with `normalize` is the identity
/// - `alpha -> 1` with `normalize` approaches a windowed moving average
pub fn geometric_adstock(x: &[f64], alpha: f64, l_max: usize, normalize: bool) -> Vec<f64> {
    let mut weights = Vec::with_capacity(l_max);
    let mut mass = 0.0;
    for l in 0..l_max {
        let w = alpha.powi(l as i32);
        weights.push(w);
        mass += w;
    }
    if normalize && mass > 0.0 {
        for w in &mut weights {
            *w /= mass;
        }
    }

    let mut out = Vec::with_capacity(x.len());
    for t in 0..x.len() {
        let mut acc = 0.0;
        for (lag, &w) in weights.iter().enumerate() {
            if t >= lag {
                acc += w * x[t - lag];
            }
        }
        out.push(acc);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_alpha_is_identity() {
        let x = vec![3.0, 0.0, 1.5, 2.0, 0.25];
        let y = geometric_adstock(&x, 0.0, 8, true);
        assert_eq!(y, x);
    }

    #[test]
    fn impulse_decays_geometrically() {
        let x = vec![1.0, 0.0, 0.0, 0.0];
        let y = geometric_adstock(&x, 0.5, 4, false);
        let expected = [1.0, 0.5, 0.25, 0.125];
        for (got, want) in y.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn normalized_kernel_preserves_scale() {
        // Constant input far enough from the start should map to itself once
        // the full kernel window is available.
        let x = vec![2.0; 20];
        let y = geometric_adstock(&x, 0.7, 8, true);
        assert!((y[19] - 2.0).abs() < 1e-12);
        // Early values are attenuated because leading lags are missing.
        assert!(y[0] < 2.0);
    }

    #[test]
    fn near_unit_alpha_does_not_overflow_normalization() {
        let x = vec![1.0; 16];
        let y = geometric_adstock(&x, 0.999, 8, true);
        assert!(y.iter().all(|v| v.is_finite()));
        assert!((y[15] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn output_length_matches_input() {
        for n in [0usize, 1, 3, 11] {
            let x = vec![1.0; n];
            assert_eq!(geometric_adstock(&x, 0.4, 8, true).len(), n);
        }
    }
}
