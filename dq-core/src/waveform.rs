//! # Waveform Generator Module
//!
//! This module produces the full set of time-domain arrays driving the
//! rotating vector diagram: time and angle vectors over one base period,
//! the Clarke alpha/beta components of a balanced harmonic input, the
//! Park d/q components in the PLL-synchronized frame and the Cartesian
//! projections of the rotating axes and vectors.
//!
//! ## Features
//! - Closed-form Clarke components of an n-th harmonic cosine input
//! - Park rotation at the PLL tracking order
//! - Axis/vector projections for the vector diagram
//! - Explicit three-phase cosine synthesis for the transform primitives

use std::f64::consts::PI;

use crate::WaveformSet;

/// Fallback base frequency in Hz, substituted for a degenerate input.
pub const DEFAULT_BASE_FREQ: f64 = 50.0;

/// Evenly spaced samples from `start` to `end`, endpoint inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Generates the complete waveform set for one parameter combination.
///
/// The alpha/beta components use the closed-form identity for a balanced
/// n-th harmonic cosine input passed through the amplitude-invariant
/// Clarke transform:
/// `alpha = 2/3 * cos(n*theta) * (1 - cos(n*2*pi/3))`,
/// `beta  = 2*sqrt(3)/3 * sin(n*theta) * sin(n*2*pi/3)`.
/// This equals `transforms::clarke` applied to explicitly synthesized
/// per-phase cosines; the identity just avoids building them.
///
/// The harmonic order is sign-insensitive (absolute value taken
/// immediately). A non-finite, zero or negative base frequency is
/// silently replaced by [`DEFAULT_BASE_FREQ`] and logged at warn level.
///
/// # Arguments
/// * `samples` - Number of time points across one base period
/// * `base_freq` - Base frequency in Hz
/// * `harmonic_order` - Harmonic order of the input, sign ignored
/// * `pll_order` - PLL tracking order, sign = rotation direction
///
/// # Returns
/// * [`WaveformSet`] with 14 arrays, each exactly `samples` long
pub fn generate_waveforms(
    samples: usize,
    base_freq: f64,
    harmonic_order: f64,
    pll_order: f64,
) -> WaveformSet {
    let base_freq = if base_freq.is_finite() && base_freq > 0.0 {
        base_freq
    } else {
        log::warn!(
            "invalid base frequency {base_freq}, falling back to {DEFAULT_BASE_FREQ} Hz"
        );
        DEFAULT_BASE_FREQ
    };
    let base_period = 1.0 / base_freq;

    let harmonic_order = harmonic_order.abs();

    let time = linspace(0.0, base_period, samples);
    let theta: Vec<f64> = time.iter().map(|&t| 2.0 * PI * base_freq * t).collect();

    // phase displacement of the b/c phases seen by the n-th harmonic
    let displacement = harmonic_order * 2.0 / 3.0 * PI;
    let (disp_sin, disp_cos) = displacement.sin_cos();

    let alpha: Vec<f64> = theta
        .iter()
        .map(|&th| 2.0 / 3.0 * (harmonic_order * th).cos() * (1.0 - disp_cos))
        .collect();
    let beta: Vec<f64> = theta
        .iter()
        .map(|&th| 2.0 * 3.0_f64.sqrt() / 3.0 * (harmonic_order * th).sin() * disp_sin)
        .collect();

    let n = theta.len();
    let mut set = WaveformSet {
        time,
        theta,
        alpha,
        beta,
        d: Vec::with_capacity(n),
        q: Vec::with_capacity(n),
        d_axis_x: Vec::with_capacity(n),
        d_axis_y: Vec::with_capacity(n),
        q_axis_x: Vec::with_capacity(n),
        q_axis_y: Vec::with_capacity(n),
        d_vector_x: Vec::with_capacity(n),
        d_vector_y: Vec::with_capacity(n),
        q_vector_x: Vec::with_capacity(n),
        q_vector_y: Vec::with_capacity(n),
    };

    for i in 0..n {
        // PLL frame angle; the q axis leads the d axis by a quarter cycle
        let pll_theta = pll_order * set.theta[i];
        let (d_sin, d_cos) = pll_theta.sin_cos();
        let (q_sin, q_cos) = (pll_theta + PI / 2.0).sin_cos();

        let d = d_cos * set.alpha[i] + d_sin * set.beta[i];
        let q = -d_sin * set.alpha[i] + d_cos * set.beta[i];

        set.d.push(d);
        set.q.push(q);

        set.d_axis_x.push(d_cos);
        set.d_axis_y.push(d_sin);
        set.q_axis_x.push(q_cos);
        set.q_axis_y.push(q_sin);

        set.d_vector_x.push(d * d_cos);
        set.d_vector_y.push(d * d_sin);
        set.q_vector_x.push(q * q_cos);
        set.q_vector_y.push(q * q_sin);
    }

    set
}

/// Synthesizes an explicit three-phase cosine input at a harmonic order.
///
/// `a = mag_a*cos(n*theta)`, `b = mag_b*cos(n*(theta - 2*pi/3))`,
/// `c = mag_c*cos(n*(theta + 2*pi/3))`. Unequal magnitudes give an
/// unbalanced input, useful for exercising the sequence decompositions.
///
/// # Arguments
/// * `theta` - Base angle sequence in radians
/// * `harmonic_order` - Harmonic order n
/// * `mag_a`, `mag_b`, `mag_c` - Per-phase peak magnitudes
///
/// # Returns
/// * `(a, b, c)` arrays of the same length as `theta`
pub fn three_phase_input(
    theta: &[f64],
    harmonic_order: f64,
    mag_a: f64,
    mag_b: f64,
    mag_c: f64,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let shift = 2.0 / 3.0 * PI;
    let a = theta
        .iter()
        .map(|&th| mag_a * (harmonic_order * th).cos())
        .collect();
    let b = theta
        .iter()
        .map(|&th| mag_b * (harmonic_order * (th - shift)).cos())
        .collect();
    let c = theta
        .iter()
        .map(|&th| mag_c * (harmonic_order * (th + shift)).cos())
        .collect();
    (a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::{clarke, park};
    use approx::assert_abs_diff_eq;

    #[test]
    fn every_array_has_the_requested_length() {
        for samples in [1, 2, 200, 1001] {
            let set = generate_waveforms(samples, 50.0, 2.0, 1.0);
            for arr in [
                &set.time,
                &set.theta,
                &set.alpha,
                &set.beta,
                &set.d,
                &set.q,
                &set.d_axis_x,
                &set.d_axis_y,
                &set.q_axis_x,
                &set.q_axis_y,
                &set.d_vector_x,
                &set.d_vector_y,
                &set.q_vector_x,
                &set.q_vector_y,
            ] {
                assert_eq!(arr.len(), samples);
            }
        }
    }

    #[test]
    fn time_spans_one_base_period() {
        let set = generate_waveforms(200, 50.0, 1.0, 1.0);
        assert_abs_diff_eq!(set.time[0], 0.0);
        assert_abs_diff_eq!(set.time[199], 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(set.theta[199], 2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn closed_form_matches_clarke_of_synthesized_phases() {
        let set = generate_waveforms(257, 60.0, 2.3, 1.0);
        let (a, b, c) = three_phase_input(&set.theta, 2.3, 1.0, 1.0, 1.0);
        let (alpha, beta, _) = clarke(&a, &b, &c);

        for i in 0..set.len() {
            assert_abs_diff_eq!(set.alpha[i], alpha[i], epsilon = 1e-9);
            assert_abs_diff_eq!(set.beta[i], beta[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn d_q_match_the_park_transform() {
        let set = generate_waveforms(128, 50.0, 2.0, -1.0);
        let pll_theta: Vec<f64> = set.theta.iter().map(|&th| -1.0 * th).collect();
        let zero = vec![0.0; set.len()];

        let (d, q, _) = park(&pll_theta, &set.alpha, &set.beta, &zero).unwrap();

        for i in 0..set.len() {
            assert_abs_diff_eq!(set.d[i], d[i], epsilon = 1e-12);
            assert_abs_diff_eq!(set.q[i], q[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn harmonic_order_sign_is_ignored() {
        let pos = generate_waveforms(64, 50.0, 2.0, 1.0);
        let neg = generate_waveforms(64, 50.0, -2.0, 1.0);
        assert_eq!(pos, neg);
    }

    #[test]
    fn degenerate_base_frequency_falls_back_to_default() {
        let explicit = generate_waveforms(100, DEFAULT_BASE_FREQ, 1.0, 1.0);
        assert_eq!(generate_waveforms(100, 0.0, 1.0, 1.0), explicit);
        assert_eq!(generate_waveforms(100, -50.0, 1.0, 1.0), explicit);
        assert_eq!(generate_waveforms(100, f64::NAN, 1.0, 1.0), explicit);
    }

    #[test]
    fn identical_inputs_give_bitwise_identical_output() {
        let first = generate_waveforms(200, 50.0, 2.0, 1.0);
        let second = generate_waveforms(200, 50.0, 2.0, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn fundamental_alpha_beta_trace_the_unit_circle() {
        // h = 1: alpha = cos(theta), beta = sin(theta)
        let set = generate_waveforms(512, 50.0, 1.0, 1.0);
        for i in 0..set.len() {
            assert_abs_diff_eq!(set.alpha[i], set.theta[i].cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(set.beta[i], set.theta[i].sin(), epsilon = 1e-12);
        }
    }
}
