// src/core/resample.rs
//
// Sample-rate conversion for decoded input that does not match the
// configured extraction rate.

use anyhow::{Context, Result};
use log::debug;
use rubato::{FftFixedIn, Resampler};

const CHUNK_SIZE: usize = 1024;
const SUB_CHUNKS: usize = 2;

/// Resample a mono signal from `from_hz` to `to_hz`.
///
/// Returns the input unchanged when the rates match. The resampler's
/// startup delay is trimmed so the output stays time-aligned and has
/// `round(len * to / from)` samples.
pub fn resample_to(samples: &[f32], from_hz: u32, to_hz: u32) -> Result<Vec<f32>> {
    if from_hz == to_hz || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let mut resampler =
        FftFixedIn::<f64>::new(from_hz as usize, to_hz as usize, CHUNK_SIZE, SUB_CHUNKS, 1)
            .with_context(|| format!("Cannot resample {} Hz -> {} Hz", from_hz, to_hz))?;

    let input: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    let expected_len =
        (samples.len() as f64 * to_hz as f64 / from_hz as f64).round() as usize;
    let delay = resampler.output_delay();
    let mut output: Vec<f64> = Vec::with_capacity(expected_len + delay + CHUNK_SIZE);

    let mut pos = 0;
    while input.len() - pos >= resampler.input_frames_next() {
        let needed = resampler.input_frames_next();
        let wave_in = [&input[pos..pos + needed]];
        let chunk = resampler
            .process(&wave_in[..], None)
            .context("Resampling failed")?;
        output.extend_from_slice(&chunk[0]);
        pos += needed;
    }

    if pos < input.len() {
        let wave_in = [&input[pos..]];
        let chunk = resampler
            .process_partial(Some(&wave_in[..]), None)
            .context("Resampling failed")?;
        output.extend_from_slice(&chunk[0]);
    }

    // Flush until the delayed tail is out
    while output.len() < expected_len + delay {
        let chunk = resampler
            .process_partial::<&[f64]>(None, None)
            .context("Resampling failed")?;
        if chunk[0].is_empty() {
            break;
        }
        output.extend_from_slice(&chunk[0]);
    }

    debug!(
        "Resampled {} samples at {} Hz to {} samples at {} Hz",
        samples.len(),
        from_hz,
        expected_len,
        to_hz
    );

    Ok(output
        .into_iter()
        .skip(delay)
        .take(expected_len)
        .map(|s| s as f32)
        .collect())
}
