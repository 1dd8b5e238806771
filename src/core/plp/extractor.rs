// src/core/plp/extractor.rs
//
// PLP orchestration: framing -> spectrum -> auditory warping ->
// inverse transform -> Durbin -> cepstrum, frame-parallel.

use log::{debug, trace};
use rayon::prelude::*;

use super::bark::AuditoryWarper;
use super::cepstrum::{apply_lifter, lifter_weights, lpc_to_cepstrum};
use super::features::PlpFeatures;
use super::framing::{FrameConditioner, FrameGeometry, FrameSet};
use super::inverse::InverseTransformer;
use super::lpc::durbin;
use crate::config::{ConfigBuilder, PlpConfig};
use crate::core::dsp::{SpectralAnalyzer, WindowFunction};
use crate::error::{PlpError, Result};

/// Reusable PLP extractor.
///
/// Everything that depends only on the configuration (window, FFT plans,
/// filterbank, lifter) is built once here. The extractor is `Send + Sync`
/// and frames are processed on rayon's pool.
pub struct PlpExtractor {
    config: PlpConfig,
    geometry: FrameGeometry,
    conditioner: FrameConditioner,
    analyzer: SpectralAnalyzer,
    warper: AuditoryWarper,
    inverse: InverseTransformer,
    lifter: Option<Vec<f64>>,
}

impl PlpExtractor {
    pub fn new(config: PlpConfig) -> Result<Self> {
        config.validate()?;

        let geometry =
            FrameGeometry::new(config.sample_rate, config.window_length, config.frame_length)?;
        let analyzer = SpectralAnalyzer::new(geometry.frame_len, WindowFunction::Hamming);
        let warper = AuditoryWarper::new(config.sample_rate, analyzer.fft_size())?;
        let inverse = InverseTransformer::new(warper.num_bands(), config.plp_order)?;
        let lifter = (config.lifter > 0.0)
            .then(|| lifter_weights(config.num_coefficients(), config.lifter));

        debug!(
            "PLP extractor: {} Hz, frame {} / hop {} samples, FFT {}, {} bands, order {}",
            config.sample_rate,
            geometry.frame_len,
            geometry.hop,
            analyzer.fft_size(),
            warper.num_bands(),
            config.plp_order
        );

        Ok(Self {
            conditioner: FrameConditioner {
                remove_dc: config.remove_dc,
                pre_emphasis: config.pre_emphasis,
            },
            config,
            geometry,
            analyzer,
            warper,
            inverse,
            lifter,
        })
    }

    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// Extract features from a mono signal.
    ///
    /// `sample_rate` is the caller's claim about the signal; when given it
    /// must equal the configured rate. The check runs before any stage.
    pub fn extract(&self, signal: &[f32], sample_rate: Option<u32>) -> Result<PlpFeatures> {
        if let Some(actual) = sample_rate {
            if actual != self.config.sample_rate {
                return Err(PlpError::SampleRateMismatch {
                    expected: self.config.sample_rate,
                    actual,
                });
            }
        }
        if let Some(index) = signal.iter().position(|s| !s.is_finite()) {
            return Err(PlpError::NonFiniteSample { index });
        }

        let frames = FrameSet::new(signal, self.geometry);
        trace!("Extracting PLP from {} samples, {} frames", signal.len(), frames.len());
        if frames.is_empty() {
            return Ok(PlpFeatures::empty(self.num_coefficients()));
        }

        let rows = (0..frames.len())
            .into_par_iter()
            .map(|i| {
                let frame = frames
                    .get(i)
                    .ok_or_else(|| PlpError::Transform(format!("frame {} out of range", i)))?;
                self.process_frame(frame)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PlpFeatures::from_rows(rows, self.num_coefficients()))
    }

    /// Spectrum through cepstrum for a single frame
    pub fn process_frame(&self, frame: &[f32]) -> Result<Vec<f64>> {
        let samples = self.conditioner.apply(frame);
        let power = self.analyzer.power_spectrum(&samples);
        let bands = self.warper.warp(&power);
        let autocorr = self.inverse.inverse(&bands)?;
        let lpc = durbin(&autocorr, self.config.plp_order);
        let mut cep = lpc_to_cepstrum(&lpc.coefficients, lpc.gain);
        if let Some(weights) = &self.lifter {
            apply_lifter(&mut cep, weights);
        }
        Ok(cep)
    }

    pub fn num_frames(&self, signal_len: usize) -> usize {
        self.geometry.num_frames(signal_len)
    }

    pub fn num_coefficients(&self) -> usize {
        self.config.num_coefficients()
    }

    pub fn num_bands(&self) -> usize {
        self.warper.num_bands()
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn config(&self) -> &PlpConfig {
        &self.config
    }
}

/// Builder for PlpExtractor configuration
pub struct ExtractorBuilder {
    config: ConfigBuilder,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigBuilder::new(),
        }
    }

    pub fn sample_rate(mut self, hz: u32) -> Self {
        self.config = self.config.sample_rate(hz);
        self
    }

    pub fn window_length(mut self, seconds: f64) -> Self {
        self.config = self.config.window_length(seconds);
        self
    }

    pub fn frame_length(mut self, seconds: f64) -> Self {
        self.config = self.config.frame_length(seconds);
        self
    }

    pub fn plp_order(mut self, order: usize) -> Self {
        self.config = self.config.plp_order(order);
        self
    }

    pub fn pre_emphasis(mut self, coeff: f64) -> Self {
        self.config = self.config.pre_emphasis(coeff);
        self
    }

    pub fn remove_dc(mut self, remove: bool) -> Self {
        self.config = self.config.remove_dc(remove);
        self
    }

    pub fn lifter(mut self, lifter: f64) -> Self {
        self.config = self.config.lifter(lifter);
        self
    }

    pub fn build(self) -> Result<PlpExtractor> {
        PlpExtractor::new(self.config.build()?)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot PLP extraction with the four core parameters
pub fn plp(
    signal: &[f32],
    sample_rate: u32,
    window_length: f64,
    frame_length: f64,
    plp_order: usize,
) -> Result<PlpFeatures> {
    let extractor = ExtractorBuilder::new()
        .sample_rate(sample_rate)
        .window_length(window_length)
        .frame_length(frame_length)
        .plp_order(plp_order)
        .build()?;
    extractor.extract(signal, None)
}
