//! FFT power spectrum with windowing

use rustfft::{Fft, FftPlanner};
use num_complex::Complex;
use std::sync::Arc;

use super::windows::WindowFunction;

/// Windowed power-spectrum computation for fixed-length frames.
///
/// The transform length is the next power of two at or above the frame
/// length; shorter input is zero-padded. The plan is shared, so one
/// analyzer can serve many threads.
pub struct SpectralAnalyzer {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    frame_len: usize,
    fft_size: usize,
}

impl SpectralAnalyzer {
    pub fn new(frame_len: usize, window_fn: WindowFunction) -> Self {
        let fft_size = frame_len.max(1).next_power_of_two();
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: window_fn.generate(frame_len),
            frame_len,
            fft_size,
        }
    }

    /// Magnitude-squared spectrum, DC through Nyquist (`fft_size / 2 + 1` bins)
    pub fn power_spectrum(&self, samples: &[f64]) -> Vec<f64> {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.frame_len)
            .zip(self.window.iter())
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();

        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));
        self.fft.process(&mut buffer);

        buffer[..self.num_bins()]
            .iter()
            .map(|c| c.norm_sqr())
            .collect()
    }

    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_transform_length() {
        let analyzer = SpectralAnalyzer::new(400, WindowFunction::Hamming);
        assert_eq!(analyzer.fft_size(), 512);
        assert_eq!(analyzer.num_bins(), 257);

        let exact = SpectralAnalyzer::new(256, WindowFunction::Hamming);
        assert_eq!(exact.fft_size(), 256);
    }

    #[test]
    fn test_peak_at_tone_bin() {
        // 1000 Hz at 16 kHz with a 512-point transform lands on bin 32
        let analyzer = SpectralAnalyzer::new(512, WindowFunction::Hamming);
        let samples: Vec<f64> = (0..512)
            .map(|i| (2.0 * PI * 1000.0 * i as f64 / 16000.0).sin())
            .collect();

        let spectrum = analyzer.power_spectrum(&samples);
        assert_eq!(spectrum.len(), 257);
        let peak = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 32);
        assert!(spectrum.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_dc_power() {
        let analyzer = SpectralAnalyzer::new(8, WindowFunction::Rectangular);
        let spectrum = analyzer.power_spectrum(&[1.0; 8]);
        assert!((spectrum[0] - 64.0).abs() < 1e-9);
        assert!(spectrum[1..].iter().all(|&p| p.abs() < 1e-9));
    }
}
