//! Perceptual Linear Prediction pipeline
//!
//! Stages, applied to every frame independently:
//!
//! 1. [`framing`] - fixed-size, fixed-hop slicing (plus optional DC removal
//!    and pre-emphasis)
//! 2. [`crate::core::dsp::SpectralAnalyzer`] - Hamming window, power spectrum
//! 3. [`bark`] - critical-band filterbank, equal loudness, cube-root compression
//! 4. [`inverse`] - inverse DFT to a pseudo-autocorrelation
//! 5. [`lpc`] - Durbin's recursion
//! 6. [`cepstrum`] - LPC to cepstrum, optional lifter

pub mod bark;
pub mod cepstrum;
pub mod extractor;
pub mod features;
pub mod framing;
pub mod inverse;
pub mod lpc;

pub use extractor::{plp, ExtractorBuilder, PlpExtractor};
pub use features::PlpFeatures;
pub use framing::{frame, FrameGeometry, FrameSet};
