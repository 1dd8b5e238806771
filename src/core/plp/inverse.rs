// src/core/plp/inverse.rs
//
// Critical-band spectrum -> pseudo-autocorrelation via a real inverse DFT.

use num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner};
use std::sync::Arc;

use crate::error::{PlpError, Result};

/// Inverse transform of a mirrored band spectrum.
///
/// A spectrum of `B` bands is treated as the non-negative half of a
/// symmetric, real spectrum of period `2 (B - 1)`. The unnormalised real
/// inverse DFT of that spectrum is even and periodic, so it behaves like an
/// autocorrelation sequence. Lags past one period wrap around.
pub struct InverseTransformer {
    c2r: Arc<dyn ComplexToReal<f64>>,
    num_bands: usize,
    num_lags: usize,
}

impl InverseTransformer {
    pub fn new(num_bands: usize, order: usize) -> Result<Self> {
        if num_bands < 2 {
            return Err(PlpError::invalid(format!(
                "inverse transform needs at least 2 bands, got {}",
                num_bands
            )));
        }
        let mut planner = RealFftPlanner::<f64>::new();
        Ok(Self {
            c2r: planner.plan_fft_inverse(2 * (num_bands - 1)),
            num_bands,
            num_lags: order + 1,
        })
    }

    /// Lags `0..=order` of the pseudo-autocorrelation
    pub fn inverse(&self, bands: &[f64]) -> Result<Vec<f64>> {
        if bands.len() != self.num_bands {
            return Err(PlpError::Transform(format!(
                "expected {} bands, got {}",
                self.num_bands,
                bands.len()
            )));
        }

        let mut spectrum: Vec<Complex<f64>> = bands.iter().map(|&b| Complex::new(b, 0.0)).collect();
        let mut lags = self.c2r.make_output_vec();
        self.c2r
            .process(&mut spectrum, &mut lags)
            .map_err(|e| PlpError::Transform(e.to_string()))?;

        let period = lags.len();
        Ok((0..self.num_lags).map(|k| lags[k % period]).collect())
    }

    pub fn num_lags(&self) -> usize {
        self.num_lags
    }
}
