// src/core/plp/lpc.rs
//
// Durbin's recursion on a (pseudo-)autocorrelation sequence.

/// Linear prediction result for one frame.
///
/// Predictor convention is `x[n] ~ sum_k a[k] * x[n - k]`, i.e. the
/// inverse filter is `A(z) = 1 - sum_k a[k] z^-k`.
#[derive(Debug, Clone, PartialEq)]
pub struct LpcAnalysis {
    /// `a[1..=order]`, stored from index 0
    pub coefficients: Vec<f64>,
    /// Reflection (PARCOR) coefficient per completed order
    pub reflection: Vec<f64>,
    /// Final prediction error power
    pub gain: f64,
}

impl LpcAnalysis {
    fn silent(order: usize) -> Self {
        Self {
            coefficients: vec![0.0; order],
            reflection: vec![0.0; order],
            gain: 0.0,
        }
    }

    pub fn order(&self) -> usize {
        self.coefficients.len()
    }
}

/// Solve for `order` predictor coefficients from lags `0..=order`.
///
/// A non-positive zero-lag value (silent frame) yields all-zero
/// coefficients and zero gain. If an order would drive the error power
/// non-positive the recursion stops there; later coefficients stay zero.
pub fn durbin(autocorr: &[f64], order: usize) -> LpcAnalysis {
    let r0 = autocorr.first().copied().unwrap_or(0.0);
    if !(r0 > 0.0) {
        return LpcAnalysis::silent(order);
    }

    let order_avail = order.min(autocorr.len() - 1);
    let mut a = vec![0.0; order];
    let mut prev = vec![0.0; order];
    let mut reflection = vec![0.0; order];
    let mut err = r0;

    for i in 1..=order_avail {
        let mut acc = autocorr[i];
        for j in 1..i {
            acc -= a[j - 1] * autocorr[i - j];
        }
        let k = acc / err;
        let next_err = err * (1.0 - k * k);
        if !(next_err > 0.0) {
            break;
        }

        prev[..i - 1].copy_from_slice(&a[..i - 1]);
        for j in 1..i {
            a[j - 1] = prev[j - 1] - k * prev[i - j - 1];
        }
        a[i - 1] = k;
        reflection[i - 1] = k;
        err = next_err;
    }

    LpcAnalysis {
        coefficients: a,
        reflection,
        gain: err,
    }
}
