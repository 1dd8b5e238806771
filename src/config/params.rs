// src/config/params.rs
//
// PLP extraction parameters with documented defaults and eager validation.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PlpError, Result};

pub const DEFAULT_SAMPLE_RATE: u32 = 16000;
pub const DEFAULT_WINDOW_LENGTH: f64 = 0.025;
pub const DEFAULT_FRAME_LENGTH: f64 = 0.010;
pub const DEFAULT_PLP_ORDER: usize = 12;

/// Complete PLP configuration
///
/// Missing keys in a JSON document fall back to the defaults, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlpConfig {
    /// Expected sample rate of the input signal (Hz)
    pub sample_rate: u32,
    /// Analysis window length in seconds
    pub window_length: f64,
    /// Hop between consecutive windows in seconds
    pub frame_length: f64,
    /// Linear prediction order; rows have `plp_order + 1` coefficients
    pub plp_order: usize,
    /// First-order pre-emphasis applied inside each frame (0.0 = off)
    pub pre_emphasis: f64,
    /// Subtract the frame mean before windowing
    pub remove_dc: bool,
    /// Sinusoidal cepstral lifter length (0.0 = off)
    pub lifter: f64,
}

impl Default for PlpConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            window_length: DEFAULT_WINDOW_LENGTH,
            frame_length: DEFAULT_FRAME_LENGTH,
            plp_order: DEFAULT_PLP_ORDER,
            pre_emphasis: 0.0,
            remove_dc: false,
            lifter: 0.0,
        }
    }
}

impl PlpConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(PlpError::invalid("sample_rate must be positive"));
        }
        check_seconds("window_length", self.window_length)?;
        check_seconds("frame_length", self.frame_length)?;
        if self.plp_order == 0 {
            return Err(PlpError::invalid("plp_order must be positive"));
        }
        if !(0.0..1.0).contains(&self.pre_emphasis) {
            return Err(PlpError::invalid(format!(
                "pre_emphasis must lie in [0, 1), got {}",
                self.pre_emphasis
            )));
        }
        if !self.lifter.is_finite() || self.lifter < 0.0 {
            return Err(PlpError::invalid(format!(
                "lifter must be non-negative, got {}",
                self.lifter
            )));
        }
        Ok(())
    }

    /// Number of cepstral coefficients per output row
    pub fn num_coefficients(&self) -> usize {
        self.plp_order + 1
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Malformed PLP config JSON")?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// `<user config dir>/plpkit/config.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("plpkit").join("config.json"))
    }
}

fn check_seconds(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlpError::invalid(format!("{} must be positive, got {}", name, value)));
    }
    Ok(())
}

/// Builder for PLP configurations
pub struct ConfigBuilder {
    config: PlpConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: PlpConfig::default(),
        }
    }

    pub fn from_config(config: PlpConfig) -> Self {
        Self { config }
    }

    pub fn sample_rate(mut self, hz: u32) -> Self {
        self.config.sample_rate = hz;
        self
    }

    pub fn window_length(mut self, seconds: f64) -> Self {
        self.config.window_length = seconds;
        self
    }

    pub fn frame_length(mut self, seconds: f64) -> Self {
        self.config.frame_length = seconds;
        self
    }

    pub fn plp_order(mut self, order: usize) -> Self {
        self.config.plp_order = order;
        self
    }

    pub fn pre_emphasis(mut self, coeff: f64) -> Self {
        self.config.pre_emphasis = coeff;
        self
    }

    pub fn remove_dc(mut self, remove: bool) -> Self {
        self.config.remove_dc = remove;
        self
    }

    pub fn lifter(mut self, lifter: f64) -> Self {
        self.config.lifter = lifter;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<PlpConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
