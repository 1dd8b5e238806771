//! Output formatting for CLI results

use chrono::{DateTime, Utc};
use colorful::Colorful;
use serde::Serialize;

use crate::config::PlpConfig;
use crate::core::PlpFeatures;

/// Everything reported for one input file
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub file_path: String,
    /// Rate of the decoded file before any resampling
    pub source_sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub resampled: bool,
    pub config: PlpConfig,
    pub num_frames: usize,
    pub num_coeffs: usize,
    pub extracted_at: DateTime<Utc>,
    pub features: Vec<Vec<f64>>,
}

impl FeatureReport {
    pub fn new(
        file_path: String,
        source_sample_rate: u32,
        channels: usize,
        duration_secs: f64,
        config: PlpConfig,
        features: PlpFeatures,
    ) -> Self {
        Self {
            file_path,
            resampled: source_sample_rate != config.sample_rate,
            source_sample_rate,
            channels,
            duration_secs,
            num_frames: features.num_frames(),
            num_coeffs: features.num_coeffs(),
            config,
            extracted_at: Utc::now(),
            features: features.into_rows(),
        }
    }

    /// Mean of each coefficient over all frames
    pub fn coefficient_means(&self) -> Vec<f64> {
        if self.features.is_empty() {
            return vec![0.0; self.num_coeffs];
        }
        let mut means = vec![0.0; self.num_coeffs];
        for row in &self.features {
            for (m, v) in means.iter_mut().zip(row) {
                *m += v;
            }
        }
        let n = self.features.len() as f64;
        means.iter_mut().for_each(|m| *m /= n);
        means
    }
}

/// Terminal summary; the full matrix only when verbose
pub fn format_text(report: &FeatureReport, verbose: bool) -> String {
    let mut output = String::new();

    let rate = if report.resampled {
        format!("{} Hz (resampled to {} Hz)", report.source_sample_rate, report.config.sample_rate)
    } else {
        format!("{} Hz", report.source_sample_rate)
    };
    output.push_str(&format!(
        "{}\n  Sample Rate: {}\n  Channels: {}\n  Duration: {:.2}s\n",
        report.file_path.as_str().bold(),
        rate,
        report.channels,
        report.duration_secs
    ));

    if report.num_frames == 0 {
        output.push_str(&format!(
            "  Frames: {}\n",
            "0 (signal shorter than one window)".yellow()
        ));
        return output;
    }

    let means: Vec<String> = report
        .coefficient_means()
        .iter()
        .map(|m| format!("{:.3}", m))
        .collect();
    output.push_str(&format!(
        "  Frames: {} x {} coefficients\n  Mean: [{}]\n",
        report.num_frames.to_string().green(),
        report.num_coeffs,
        means.join(", ")
    ));

    if verbose {
        for (i, row) in report.features.iter().enumerate() {
            output.push_str(&format!("    {:>6}: {}\n", i, format_row(row, " ")));
        }
    }

    output
}

pub fn format_json(report: &FeatureReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_csv(report: &FeatureReport) -> String {
    let mut out = String::with_capacity(report.num_frames * report.num_coeffs * 12);
    for row in &report.features {
        out.push_str(&format_row(row, ","));
        out.push('\n');
    }
    out
}

fn format_row(row: &[f64], sep: &str) -> String {
    row.iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(sep)
}
