// dq-core/src/lib.rs

//! The core math for the Clarke and Park transform visualizer.
//! This crate is responsible for the symmetrical-component, Clarke and
//! Park transforms, the parametrized waveform generator and the harmonic
//! sequence classifier. It is completely headless and contains no GUI,
//! animation or video-export code.

use serde::Serialize;

pub mod annotation;
pub mod config;
pub mod sequence;
pub mod transforms;
pub mod waveform;

/// The full set of waveforms computed for one parameter set.
///
/// Produced by [`waveform::generate_waveforms`] and consumed by the
/// plotting/animation layer. Every array has the same length, equal to
/// the requested sample count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformSet {
    /// Time vector spanning one base period, in seconds.
    pub time: Vec<f64>,
    /// Base angle, theta = 2*pi*base_freq*time, in radians.
    pub theta: Vec<f64>,
    /// Clarke alpha component of the harmonic input.
    pub alpha: Vec<f64>,
    /// Clarke beta component of the harmonic input.
    pub beta: Vec<f64>,
    /// Park d component in the PLL-synchronized frame.
    pub d: Vec<f64>,
    /// Park q component in the PLL-synchronized frame.
    pub q: Vec<f64>,
    /// Rotating d-axis direction resolved onto Cartesian x.
    pub d_axis_x: Vec<f64>,
    /// Rotating d-axis direction resolved onto Cartesian y.
    pub d_axis_y: Vec<f64>,
    /// Rotating q-axis direction resolved onto Cartesian x.
    pub q_axis_x: Vec<f64>,
    /// Rotating q-axis direction resolved onto Cartesian y.
    pub q_axis_y: Vec<f64>,
    /// d-vector endpoint on Cartesian x.
    pub d_vector_x: Vec<f64>,
    /// d-vector endpoint on Cartesian y.
    pub d_vector_y: Vec<f64>,
    /// q-vector endpoint on Cartesian x.
    pub q_vector_x: Vec<f64>,
    /// q-vector endpoint on Cartesian y.
    pub q_vector_y: Vec<f64>,
}

impl WaveformSet {
    /// Number of samples in each array.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
