#![allow(dead_code)]

use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_plpkit"))
}

pub fn run_plpkit<P: AsRef<std::ffi::OsStr>>(file_path: P) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.arg(file_path);
    cmd.env_remove("PLPKIT_CONFIG");
    cmd
}

pub fn run_json_extraction<P: AsRef<std::ffi::OsStr>>(file_path: P) -> std::process::Output {
    run_plpkit(file_path)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to execute with json format")
}

pub fn sine(freq: f32, amplitude: f32, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
        .collect()
}

pub fn silence(len: usize) -> Vec<f32> {
    vec![0.0; len]
}

/// Deterministic white-ish noise (xorshift), in [-amplitude, amplitude]
pub fn noise(amplitude: f32, len: usize, seed: u32) -> Vec<f32> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            amplitude * (state as f32 / u32::MAX as f32 * 2.0 - 1.0)
        })
        .collect()
}

/// Unique scratch directory under the system temp dir
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plpkit-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Write 16-bit PCM WAV with `channels` interleaved channels
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32, channels: u16) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(v).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}
