//! Digital Signal Processing utilities

mod fft;
mod windows;

pub use fft::SpectralAnalyzer;
pub use windows::WindowFunction;
