//! # Transform Primitives Module
//!
//! This module implements the three reference-frame transforms used in
//! three-phase power analysis: the symmetrical-component decomposition
//! (Fortescue), the amplitude-invariant Clarke transform and the Park
//! transform.
//!
//! ## Features
//! - Fortescue positive/negative/zero sequence decomposition
//! - Amplitude-invariant Clarke transform (alpha, beta, zero)
//! - DSOGI-style sequence split of the Clarke components
//! - Park rotation into the synchronous d/q frame

use std::f64::consts::PI;

use num_complex::Complex64;
use thiserror::Error;

/// The Fortescue decomposition of three phase signals.
///
/// Positive and negative sequence components are complex even for real
/// inputs; the zero sequence is shared by all three phases.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricalComponents {
    pub a_pos: Vec<Complex64>,
    pub b_pos: Vec<Complex64>,
    pub c_pos: Vec<Complex64>,
    pub a_neg: Vec<Complex64>,
    pub b_neg: Vec<Complex64>,
    pub c_neg: Vec<Complex64>,
    /// Zero sequence, identical for phases a, b and c.
    pub zero: Vec<Complex64>,
}

/// Positive/negative sequence split of the Clarke components.
#[derive(Debug, Clone, PartialEq)]
pub struct ClarkeSequences {
    pub alpha_pos: Vec<Complex64>,
    pub beta_pos: Vec<Complex64>,
    pub alpha_neg: Vec<Complex64>,
    pub beta_neg: Vec<Complex64>,
    /// Zero channel, passed through from the Clarke transform.
    pub zero: Vec<f64>,
}

/// Error returned by [`park`] when its input arrays differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "element length mismatch: theta, alpha, beta and zero must all have the same length \
     (theta = {theta}, alpha = {alpha}, beta = {beta}, zero = {zero})"
)]
pub struct LengthMismatch {
    pub theta: usize,
    pub alpha: usize,
    pub beta: usize,
    pub zero: usize,
}

/// Decomposes three phase signals into symmetrical components (Fortescue).
///
/// Uses the cube-root-of-unity rotator `alpha = e^(j*2*pi/3)`. The positive
/// sequence of phase a is `(a + alpha*b + alpha^2*c) / 3`, with cyclic
/// permutations for b and c; the negative sequence swaps the roles of
/// `alpha` and `alpha^2`. The zero sequence is `(a + b + c) / 3`.
///
/// Pure elementwise arithmetic with no validation; the output length is
/// the shortest input length.
///
/// # Arguments
/// * `a`, `b`, `c` - Per-phase signals sampled over time
///
/// # Returns
/// * [`SymmetricalComponents`] with the seven decomposed arrays
pub fn symmetrical_components(
    a: &[Complex64],
    b: &[Complex64],
    c: &[Complex64],
) -> SymmetricalComponents {
    // 120 degree rotator
    let rot = Complex64::from_polar(1.0, 2.0 / 3.0 * PI);
    let rot2 = rot * rot;

    let len = a.len().min(b.len()).min(c.len());
    let mut out = SymmetricalComponents {
        a_pos: Vec::with_capacity(len),
        b_pos: Vec::with_capacity(len),
        c_pos: Vec::with_capacity(len),
        a_neg: Vec::with_capacity(len),
        b_neg: Vec::with_capacity(len),
        c_neg: Vec::with_capacity(len),
        zero: Vec::with_capacity(len),
    };

    for i in 0..len {
        let (a, b, c) = (a[i], b[i], c[i]);

        // positive sequence
        out.a_pos.push((a + b * rot + c * rot2) / 3.0);
        out.b_pos.push((a * rot2 + b + c * rot) / 3.0);
        out.c_pos.push((a * rot + b * rot2 + c) / 3.0);

        // negative sequence
        out.a_neg.push((a + b * rot2 + c * rot) / 3.0);
        out.b_neg.push((a * rot + b + c * rot2) / 3.0);
        out.c_neg.push((a * rot2 + b * rot + c) / 3.0);

        // zero sequence
        out.zero.push((a + b + c) / 3.0);
    }

    out
}

/// Applies the amplitude-invariant Clarke transform.
///
/// A balanced three-phase sinusoidal input of peak magnitude M yields
/// alpha/beta of the same peak magnitude M (not the power-invariant
/// scaling). The zero channel is the mean of the three phases.
///
/// # Arguments
/// * `a`, `b`, `c` - Real-valued three-phase signals
///
/// # Returns
/// * `(alpha, beta, zero)` arrays, length = shortest input
pub fn clarke(a: &[f64], b: &[f64], c: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let len = a.len().min(b.len()).min(c.len());
    let mut alpha = Vec::with_capacity(len);
    let mut beta = Vec::with_capacity(len);
    let mut zero = Vec::with_capacity(len);

    let beta_gain = 2.0 / 3.0 * (3.0_f64.sqrt() / 2.0);

    for i in 0..len {
        alpha.push(2.0 / 3.0 * (a[i] - 0.5 * (b[i] + c[i])));
        beta.push(beta_gain * (b[i] - c[i]));
        zero.push((a[i] + b[i] + c[i]) / 3.0);
    }

    (alpha, beta, zero)
}

/// Splits the Clarke alpha/beta components into positive and negative
/// sequence sub-components, following the DSOGI decomposition.
///
/// The quarter-cycle rotator `quad = e^(-j*pi/2)` delays a component by
/// 90 degrees:
/// `alpha_pos = (alpha - beta*quad) / 2`, `beta_pos = (alpha*quad + beta) / 2`;
/// the negative sequence uses the conjugate combination
/// `alpha_neg = (alpha + beta*quad) / 2`, `beta_neg = (-alpha*quad + beta) / 2`.
///
/// # Arguments
/// * `a`, `b`, `c` - Real-valued three-phase signals
///
/// # Returns
/// * [`ClarkeSequences`] with complex sequence components and the real zero channel
pub fn clarke_symmetrical(a: &[f64], b: &[f64], c: &[f64]) -> ClarkeSequences {
    let quad = Complex64::from_polar(1.0, -PI / 2.0);

    let (alpha, beta, zero) = clarke(a, b, c);

    let len = alpha.len();
    let mut out = ClarkeSequences {
        alpha_pos: Vec::with_capacity(len),
        beta_pos: Vec::with_capacity(len),
        alpha_neg: Vec::with_capacity(len),
        beta_neg: Vec::with_capacity(len),
        zero,
    };

    for i in 0..len {
        let al = Complex64::from(alpha[i]);
        let be = Complex64::from(beta[i]);

        out.alpha_pos.push((al - be * quad) / 2.0);
        out.beta_pos.push((al * quad + be) / 2.0);

        out.alpha_neg.push((al + be * quad) / 2.0);
        out.beta_neg.push((-al * quad + be) / 2.0);
    }

    out
}

/// Rotates the stationary alpha/beta frame into the rotating d/q frame.
///
/// `d = cos(theta)*alpha + sin(theta)*beta`,
/// `q = -sin(theta)*alpha + cos(theta)*beta`; the zero channel passes
/// through unchanged.
///
/// # Arguments
/// * `theta` - Rotation angle sequence in radians
/// * `alpha`, `beta`, `zero` - Stationary-frame components
///
/// # Returns
/// * `Ok((d, q, zero))` on success
/// * `Err(LengthMismatch)` when the four inputs differ in length
pub fn park(
    theta: &[f64],
    alpha: &[f64],
    beta: &[f64],
    zero: &[f64],
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), LengthMismatch> {
    if alpha.len() != theta.len() || beta.len() != theta.len() || zero.len() != theta.len() {
        return Err(LengthMismatch {
            theta: theta.len(),
            alpha: alpha.len(),
            beta: beta.len(),
            zero: zero.len(),
        });
    }

    let mut d = Vec::with_capacity(theta.len());
    let mut q = Vec::with_capacity(theta.len());

    for i in 0..theta.len() {
        let (sin, cos) = theta[i].sin_cos();
        d.push(cos * alpha[i] + sin * beta[i]);
        q.push(-sin * alpha[i] + cos * beta[i]);
    }

    Ok((d, q, zero.to_vec()))
}
