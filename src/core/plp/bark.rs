// src/core/plp/bark.rs
//
// Auditory warping: power spectrum -> equal-loudness weighted,
// cube-root compressed critical-band spectrum.

use crate::error::{PlpError, Result};

/// Intensity-loudness power law exponent
pub const LOUDNESS_EXPONENT: f64 = 0.33;

/// Convert frequency (Hz) to Bark
pub fn hz_to_bark(freq: f64) -> f64 {
    6.0 * (freq / 600.0).asinh()
}

/// Convert Bark to frequency (Hz)
pub fn bark_to_hz(bark: f64) -> f64 {
    600.0 * (bark / 6.0).sinh()
}

/// Equal-loudness weight at `freq` Hz (approximates the 40 dB contour)
pub fn equal_loudness(freq: f64) -> f64 {
    let fsq = freq * freq;
    (fsq / (fsq + 1.6e5)).powi(2) * ((fsq + 1.44e6) / (fsq + 9.61e6))
}

/// Fixed bank of trapezoidal critical-band filters over `[0, Nyquist]`
#[derive(Debug, Clone)]
pub struct AuditoryWarper {
    /// One weight per FFT bin, per band
    weights: Vec<Vec<f64>>,
    /// Equal-loudness weight per band centre
    loudness: Vec<f64>,
    center_freqs: Vec<f64>,
}

impl AuditoryWarper {
    /// Build the filterbank for `fft_size`-point spectra at `sample_rate`.
    ///
    /// Band count is `ceil(bark(nyquist)) + 1` with centres evenly spaced
    /// in Bark from 0 to `bark(nyquist)`. Fails when the Nyquist frequency
    /// does not span a single complete critical band.
    pub fn new(sample_rate: u32, fft_size: usize) -> Result<Self> {
        if sample_rate == 0 || fft_size < 2 {
            return Err(PlpError::invalid(format!(
                "cannot build critical bands for {} Hz with a {}-point transform",
                sample_rate, fft_size
            )));
        }

        let nyquist = sample_rate as f64 / 2.0;
        let nyquist_bark = hz_to_bark(nyquist);
        if nyquist_bark.floor() < 1.0 {
            return Err(PlpError::invalid(format!(
                "sample rate {} Hz yields no complete critical band",
                sample_rate
            )));
        }

        let num_bands = nyquist_bark.ceil() as usize + 1;
        let step = nyquist_bark / (num_bands - 1) as f64;

        let bin_barks: Vec<f64> = (0..=fft_size / 2)
            .map(|k| hz_to_bark(k as f64 * sample_rate as f64 / fft_size as f64))
            .collect();

        let mut weights = Vec::with_capacity(num_bands);
        let mut center_freqs = Vec::with_capacity(num_bands);
        for band in 0..num_bands {
            let center = band as f64 * step;
            center_freqs.push(bark_to_hz(center));
            weights.push(
                bin_barks
                    .iter()
                    .map(|&z| {
                        let lower = z - center - 0.5;
                        let upper = z - center + 0.5;
                        10f64.powf(upper.min(-2.5 * lower).min(0.0))
                    })
                    .collect(),
            );
        }

        let loudness = center_freqs.iter().map(|&f| equal_loudness(f)).collect();

        Ok(Self {
            weights,
            loudness,
            center_freqs,
        })
    }

    /// Warp one power spectrum into the compressed critical-band spectrum
    pub fn warp(&self, power: &[f64]) -> Vec<f64> {
        let mut bands: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.loudness)
            .map(|(filter, &eql)| {
                let energy: f64 = filter.iter().zip(power).map(|(w, p)| w * p).sum();
                (eql * energy).max(0.0).powf(LOUDNESS_EXPONENT)
            })
            .collect();

        // Edge bands sit where the loudness curve degenerates; copy neighbours
        let n = bands.len();
        if n >= 3 {
            bands[0] = bands[1];
            bands[n - 1] = bands[n - 2];
        }
        bands
    }

    pub fn num_bands(&self) -> usize {
        self.weights.len()
    }

    pub fn center_freqs(&self) -> &[f64] {
        &self.center_freqs
    }

    pub fn loudness_weights(&self) -> &[f64] {
        &self.loudness
    }
}
