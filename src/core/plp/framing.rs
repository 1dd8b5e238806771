// src/core/plp/framing.rs
//
// Fixed-size, fixed-hop slicing of a mono signal.

use crate::error::{PlpError, Result};

/// Upper bound on window and hop, in samples (about 350 s at 48 kHz)
pub const MAX_FRAME_SAMPLES: usize = 1 << 24;

/// Frame length and hop in samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub frame_len: usize,
    pub hop: usize,
}

impl FrameGeometry {
    /// Convert window/hop durations to sample counts.
    ///
    /// Both use round-to-nearest (ties away from zero), so 0.025 s at
    /// 16 kHz is exactly 400 samples and 0.010 s is 160.
    pub fn new(sample_rate: u32, window_length: f64, frame_length: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(PlpError::invalid("sample_rate must be positive"));
        }
        let frame_len = seconds_to_samples("window_length", window_length, sample_rate)?;
        let hop = seconds_to_samples("frame_length", frame_length, sample_rate)?;
        Ok(Self { frame_len, hop })
    }

    /// `floor((len - frame_len) / hop) + 1`, or 0 when the signal is
    /// shorter than one frame. Nothing is padded.
    pub fn num_frames(&self, signal_len: usize) -> usize {
        if signal_len < self.frame_len {
            0
        } else {
            (signal_len - self.frame_len) / self.hop + 1
        }
    }
}

fn seconds_to_samples(name: &str, seconds: f64, sample_rate: u32) -> Result<usize> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(PlpError::invalid(format!("{} must be positive, got {}", name, seconds)));
    }
    let samples = (seconds * sample_rate as f64).round();
    if samples < 1.0 {
        return Err(PlpError::invalid(format!(
            "{} of {} s is shorter than one sample at {} Hz",
            name, seconds, sample_rate
        )));
    }
    if samples > MAX_FRAME_SAMPLES as f64 {
        return Err(PlpError::invalid(format!(
            "{} of {} s exceeds {} samples at {} Hz",
            name, seconds, MAX_FRAME_SAMPLES, sample_rate
        )));
    }
    Ok(samples as usize)
}

/// Borrowed view of a signal as overlapping frames
#[derive(Debug, Clone, Copy)]
pub struct FrameSet<'a> {
    signal: &'a [f32],
    geometry: FrameGeometry,
    num_frames: usize,
}

impl<'a> FrameSet<'a> {
    pub fn new(signal: &'a [f32], geometry: FrameGeometry) -> Self {
        Self {
            signal,
            geometry,
            num_frames: geometry.num_frames(signal.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.num_frames
    }

    pub fn is_empty(&self) -> bool {
        self.num_frames == 0
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Samples of frame `index`, or `None` past the last frame
    pub fn get(&self, index: usize) -> Option<&'a [f32]> {
        if index >= self.num_frames {
            return None;
        }
        let start = index * self.geometry.hop;
        self.signal.get(start..start + self.geometry.frame_len)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [f32]> + '_ {
        (0..self.num_frames).filter_map(move |i| self.get(i))
    }
}

/// Slice `signal` into frames of `window_length` seconds every `frame_length` seconds
pub fn frame(
    signal: &[f32],
    sample_rate: u32,
    window_length: f64,
    frame_length: f64,
) -> Result<FrameSet<'_>> {
    let geometry = FrameGeometry::new(sample_rate, window_length, frame_length)?;
    Ok(FrameSet::new(signal, geometry))
}

/// Per-frame conditioning applied before windowing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameConditioner {
    pub remove_dc: bool,
    pub pre_emphasis: f64,
}

impl FrameConditioner {
    /// Widen to f64, optionally remove the mean, then apply
    /// `y[n] = x[n] - k * x[n-1]` with `x[-1] = x[0]`.
    pub fn apply(&self, frame: &[f32]) -> Vec<f64> {
        let mut out: Vec<f64> = frame.iter().map(|&s| s as f64).collect();
        if out.is_empty() {
            return out;
        }

        if self.remove_dc {
            let mean = out.iter().sum::<f64>() / out.len() as f64;
            out.iter_mut().for_each(|s| *s -= mean);
        }

        if self.pre_emphasis != 0.0 {
            let k = self.pre_emphasis;
            for i in (1..out.len()).rev() {
                out[i] -= k * out[i - 1];
            }
            out[0] -= k * out[0];
        }

        out
    }
}
