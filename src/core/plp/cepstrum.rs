// src/core/plp/cepstrum.rs
//
// LPC -> cepstrum recursion and optional liftering.

use std::f64::consts::PI;

/// Convert predictor coefficients and gain to `order + 1` cepstral coefficients.
///
/// `c[0] = ln(1 + gain)`, which is zero for a silent frame and positive
/// otherwise. For `n >= 1`:
/// `c[n] = a[n] + sum_{k=1}^{n-1} (k / n) c[k] a[n-k]`.
pub fn lpc_to_cepstrum(coefficients: &[f64], gain: f64) -> Vec<f64> {
    let order = coefficients.len();
    let mut cep = vec![0.0; order + 1];
    cep[0] = gain.max(0.0).ln_1p();

    for n in 1..=order {
        let mut acc = coefficients[n - 1];
        for k in 1..n {
            acc += (k as f64 / n as f64) * cep[k] * coefficients[n - k - 1];
        }
        cep[n] = acc;
    }
    cep
}

/// Sinusoidal lifter weights `1 + (L / 2) sin(pi n / L)` for `n = 0..len`
pub fn lifter_weights(len: usize, lifter: f64) -> Vec<f64> {
    (0..len)
        .map(|n| {
            if n == 0 || lifter <= 0.0 {
                1.0
            } else {
                1.0 + 0.5 * lifter * (PI * n as f64 / lifter).sin()
            }
        })
        .collect()
}

/// Multiply `cep` element-wise by precomputed lifter weights
pub fn apply_lifter(cep: &mut [f64], weights: &[f64]) {
    for (c, w) in cep.iter_mut().zip(weights) {
        *c *= w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_is_zero() {
        let cep = lpc_to_cepstrum(&[0.0; 12], 0.0);
        assert_eq!(cep, vec![0.0; 13]);
    }

    #[test]
    fn test_gain_term() {
        let cep = lpc_to_cepstrum(&[0.0; 4], std::f64::consts::E - 1.0);
        assert!((cep[0] - 1.0).abs() < 1e-12);
        assert!(cep[1..].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_first_order_series() {
        // 1 / (1 - a z^-1) has cepstrum c[n] = a^n / n
        let a = 0.5;
        let mut coeffs = vec![0.0; 5];
        coeffs[0] = a;
        let cep = lpc_to_cepstrum(&coeffs, 1.0);
        for n in 1..=5 {
            let expected = a.powi(n as i32) / n as f64;
            assert!((cep[n] - expected).abs() < 1e-12, "n = {}", n);
        }
    }

    #[test]
    fn test_lifter() {
        let weights = lifter_weights(4, 0.0);
        assert_eq!(weights, vec![1.0; 4]);

        let weights = lifter_weights(23, 22.0);
        assert_eq!(weights[0], 1.0);
        assert!((weights[11] - 12.0).abs() < 1e-12);

        let mut cep = vec![1.0, 2.0, 3.0];
        apply_lifter(&mut cep, &[1.0, 0.5, 2.0]);
        assert_eq!(cep, vec![1.0, 1.0, 6.0]);
    }
}
