//! Core feature extraction, DSP utilities and host-side audio handling

pub mod decoder;
pub mod dsp;
pub mod plp;
pub mod resample;

pub use decoder::{decode_audio, extract_mono, AudioData};
pub use dsp::{SpectralAnalyzer, WindowFunction};
pub use plp::{plp, ExtractorBuilder, PlpExtractor, PlpFeatures};
pub use resample::resample_to;
