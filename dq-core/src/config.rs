//! # User Configuration Module
//!
//! The parameter set a host application persists between sessions. The
//! core only defines the shape and the fallback values; reading and
//! writing the configuration file is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::waveform::DEFAULT_BASE_FREQ;

/// User-adjustable parameters driving the waveform generator and the
/// animation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Number of samples across one base period (also the video frame count).
    pub samples: usize,
    /// Base frequency in Hz.
    pub base_freq: f64,
    /// Harmonic order of the analyzed input.
    pub harmonic_order: f64,
    /// PLL tracking order.
    pub pll_order: f64,
    /// Animation frame rate.
    pub fps: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            base_freq: DEFAULT_BASE_FREQ,
            harmonic_order: 1.0,
            pll_order: 1.0,
            fps: 30,
        }
    }
}
