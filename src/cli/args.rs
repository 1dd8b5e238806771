//! CLI argument parsing and configuration layering

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use std::path::PathBuf;

use crate::config::PlpConfig;

/// Output formats for extracted features
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-file summary, optionally with the matrix
    Text,
    /// Report with configuration and matrix
    Json,
    /// One row per frame, no header
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "plpkit")]
#[command(version, about = "Extract Perceptual Linear Prediction (PLP) features from audio files")]
pub struct Args {
    /// Input file or directory
    pub input: PathBuf,

    /// JSON config file (defaults to <config dir>/plpkit/config.json if present)
    #[arg(short, long, env = "PLPKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Expected sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Analysis window length in seconds
    #[arg(long)]
    pub window_length: Option<f64>,

    /// Hop length in seconds
    #[arg(long)]
    pub frame_length: Option<f64>,

    /// Linear prediction order
    #[arg(short = 'p', long)]
    pub plp_order: Option<usize>,

    /// Pre-emphasis coefficient (0 disables)
    #[arg(long)]
    pub pre_emphasis: Option<f64>,

    /// Remove each frame's DC offset
    #[arg(long)]
    pub remove_dc: bool,

    /// Cepstral lifter length (0 disables)
    #[arg(long)]
    pub lifter: Option<f64>,

    /// Resample input whose rate differs from the configured one
    #[arg(short, long)]
    pub resample: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write one output file per input into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Defaults, then config file, then explicit flags
    pub fn resolve_config(&self) -> Result<PlpConfig> {
        let mut config = match &self.config {
            Some(path) => PlpConfig::from_file(path)?,
            None => match PlpConfig::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    debug!("Using config file {}", path.display());
                    PlpConfig::from_file(&path)?
                }
                None => PlpConfig::default(),
            },
        };

        if let Some(v) = self.sample_rate {
            config.sample_rate = v;
        }
        if let Some(v) = self.window_length {
            config.window_length = v;
        }
        if let Some(v) = self.frame_length {
            config.frame_length = v;
        }
        if let Some(v) = self.plp_order {
            config.plp_order = v;
        }
        if let Some(v) = self.pre_emphasis {
            config.pre_emphasis = v;
        }
        if self.remove_dc {
            config.remove_dc = true;
        }
        if let Some(v) = self.lifter {
            config.lifter = v;
        }

        config.validate().context("Invalid PLP configuration")?;
        Ok(config)
    }
}
