//! plpkit - Perceptual Linear Prediction features for speech and audio
//!
//! Turns a mono signal into one PLP cepstral vector (`plp_order + 1`
//! coefficients, including the gain term) per analysis frame.
//!
//! ## Pipeline
//!
//! - Framing with round-to-nearest window/hop sizes, no padding
//! - Hamming window and FFT power spectrum
//! - Bark-scale critical-band filterbank, equal-loudness weighting,
//!   cube-root intensity-loudness compression
//! - Inverse DFT to a pseudo-autocorrelation
//! - Durbin's recursion and LPC-to-cepstrum conversion
//!
//! Frames are independent and processed in parallel.
//!
//! ## Module Structure
//!
//! - `core` - PLP pipeline, DSP utilities, decoding and resampling
//! - `cli` - Command-line interface
//! - `config` - Extraction parameters
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plpkit::{PlpConfig, PlpExtractor};
//!
//! let extractor = PlpExtractor::new(PlpConfig::default())?;
//! let features = extractor.extract(&samples, Some(16000))?;
//!
//! for row in features.rows() {
//!     println!("{:?}", row);
//! }
//! ```
//!
//! ## Defaults
//!
//! | Parameter       | Default | Meaning                    |
//! |-----------------|---------|----------------------------|
//! | `sample_rate`   | 16000   | Expected input rate (Hz)   |
//! | `window_length` | 0.025   | Analysis window (s)        |
//! | `frame_length`  | 0.010   | Hop between windows (s)    |
//! | `plp_order`     | 12      | Linear prediction order    |

// Feature extraction and DSP
pub mod core;

// Command-line interface
pub mod cli;

// Extraction parameters
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigBuilder, PlpConfig};
pub use error::{PlpError, Result};
pub use crate::core::{plp, ExtractorBuilder, PlpExtractor, PlpFeatures};
