//! Configuration module for plpkit

mod params;

pub use params::{ConfigBuilder, PlpConfig};
