//! Window function implementations

use std::f64::consts::PI;

/// Window functions for spectral analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    Rectangular,
    Hann,
    #[default]
    Hamming,
}

impl WindowFunction {
    /// Generate symmetric window coefficients
    pub fn generate(&self, size: usize) -> Vec<f64> {
        // (N - 1) denominator is undefined for zero or one tap
        match size {
            0 => return Vec::new(),
            1 => return vec![1.0],
            _ => {}
        }
        match self {
            WindowFunction::Rectangular => vec![1.0; size],
            WindowFunction::Hann => cosine_window(size, 0.5, 0.5),
            WindowFunction::Hamming => cosine_window(size, 0.54, 0.46),
        }
    }
}

fn cosine_window(size: usize, a0: f64, a1: f64) -> Vec<f64> {
    let denom = (size - 1) as f64;
    (0..size)
        .map(|i| a0 - a1 * (2.0 * PI * i as f64 / denom).cos())
        .collect()
}
