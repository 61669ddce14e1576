//! # Sequence Classifier Module
//!
//! This module classifies a harmonic order into its symmetrical sequence
//! (zero, positive, negative or interharmonic) and derives the display
//! metadata the annotation layer draws: descriptive frequency strings for
//! the harmonic input and the Clarke/Park outputs, the Clarke and Park
//! periods, and the PLL rotation direction.
//!
//! ## Features
//! - Sequence classification by harmonic order modulo 3
//! - Interharmonic detection via an explicit integrality check
//! - Clarke/Park frequency and period derivation with zero-division guards
//! - PLL rotation direction description
//!
//! Invalid classification inputs (a zero-sequence harmonic order, an
//! undefined PLL sign) return a typed [`SequenceError`] instead of
//! terminating the process; the caller decides how to surface it.

use serde::Serialize;
use thiserror::Error;

/// Tolerance for deciding whether a harmonic order is an integer.
const INTEGER_EPS: f64 = 1e-9;

/// Errors for inputs that have no valid sequence representation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SequenceError {
    /// The harmonic order is an integer multiple of 3: its alpha, beta,
    /// d and q components are identically zero, so there is nothing to
    /// classify or draw.
    #[error(
        "harmonic order {order} is a zero sequence; its alpha, beta, d and q are identically zero"
    )]
    ZeroSequence { order: f64 },
    /// The PLL order compares as neither positive, negative nor zero
    /// (NaN), so no rotation direction is defined.
    #[error("PLL order {order} has no defined rotation direction")]
    UndefinedPllDirection { order: f64 },
}

/// Symmetrical sequence of a harmonic order, by its remainder modulo 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sequence {
    /// Order = 3k: phases in step, no rotating component.
    Zero,
    /// Order = 3k + 1: rotates anti-clockwise, alpha leads beta.
    Positive,
    /// Order = 3k + 2: rotates clockwise, alpha lags beta.
    Negative,
    /// Non-integer order: no fixed phase relationship.
    Interharmonic,
}

/// Classification result plus the derived display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceInfo {
    /// Sequence of the (absolute) harmonic order.
    pub sequence: Sequence,
    /// Annotation text describing the harmonic input frequency.
    pub harmonic_label: String,
    /// Annotation text describing the Clarke output frequency.
    pub clarke_label: String,
    /// Annotation text describing the Park output frequency.
    pub park_label: String,
    /// Clarke output period in seconds; 0 when no period is defined.
    pub clarke_period: f64,
    /// Park output period in seconds; 0 when the PLL is locked on.
    pub park_period: f64,
}

/// Classifies a harmonic order into its symmetrical sequence.
///
/// Two explicit checks: integrality within [`INTEGER_EPS`] (a non-integer
/// order, NaN included, is an interharmonic), then the remainder of the
/// rounded order modulo 3.
pub fn classify(harmonic_order: f64) -> Sequence {
    let order = harmonic_order.abs();
    let nearest = order.round();
    if order.is_nan() || (order - nearest).abs() > INTEGER_EPS {
        return Sequence::Interharmonic;
    }
    match nearest as i64 % 3 {
        0 => Sequence::Zero,
        1 => Sequence::Positive,
        _ => Sequence::Negative,
    }
}

/// Derives the sequence classification and Clarke/Park display metadata.
///
/// The harmonic order is taken as absolute. The Clarke transform keeps
/// the input frequency, so its period is `1 / (order * base_freq)`. The
/// Park frequency is the relative rotation between the harmonic and the
/// PLL frame: `order - pll_order` for a positive sequence,
/// `order + pll_order` for a negative one; a zero difference means the
/// PLL is locked on and d/q are DC, reported with period 0. Both periods
/// are absolute values. For an interharmonic order no phase-relationship
/// claim is made and the Park line reads "interharmonic".
///
/// # Arguments
/// * `base_freq` - Base frequency in Hz
/// * `harmonic_order` - Harmonic order, sign ignored
/// * `pll_order` - PLL tracking order, sign significant
///
/// # Returns
/// * `Ok(SequenceInfo)` for positive, negative and interharmonic orders
/// * `Err(SequenceError::ZeroSequence)` for an order = 3k
pub fn find_sequences(
    base_freq: f64,
    harmonic_order: f64,
    pll_order: f64,
) -> Result<SequenceInfo, SequenceError> {
    let order = harmonic_order.abs();
    let sequence = classify(order);

    log::info!("harmonic order = {order}, classified as {sequence:?}");

    // Clarke keeps the input frequency; guard the degenerate order
    let clarke_period = if order != 0.0 {
        1.0 / (order * base_freq).abs()
    } else {
        0.0
    };

    let (harmonic_label, clarke_label, park_label, park_period) = match sequence {
        Sequence::Zero => {
            log::error!(
                "harmonic order {order} is a zero sequence; alpha, beta, d, q are all zero"
            );
            return Err(SequenceError::ZeroSequence { order });
        }
        Sequence::Positive => {
            let harmonic_label = format!(
                "f_harmonic = {order} x {base_freq} Hz\n\
                 positive sequence,\nanti-clockwise rotating,\ni.e., positively rotating"
            );
            let clarke_label = format!(
                "f_alpha_beta = {order} x {base_freq} Hz\nalpha is leading beta by 90 deg"
            );
            // Park shifts the frequency by the PLL order; Clarke does not
            let diff = order - pll_order;
            let park_freq = diff.abs();
            let park_label = if diff > 0.0 {
                format!("f_dq = {park_freq} x {base_freq} Hz\nd is leading q by 90 deg")
            } else if diff < 0.0 {
                format!("f_dq = {park_freq} x {base_freq} Hz\nd is lagging q by 90 deg")
            } else {
                format!("f_dq = {park_freq} x {base_freq} Hz\nPLL locked on, d and q are DC")
            };
            let park_period = if diff == 0.0 {
                0.0
            } else {
                1.0 / (park_freq * base_freq).abs()
            };
            (harmonic_label, clarke_label, park_label, park_period)
        }
        Sequence::Negative => {
            let harmonic_label = format!(
                "f_harmonic = {order} x {base_freq} Hz\n\
                 negative sequence,\nclockwise rotating,\ni.e., negatively rotating"
            );
            let clarke_label = format!(
                "f_alpha_beta = {order} x {base_freq} Hz\nalpha is lagging beta by 90 deg"
            );
            let sum = order + pll_order;
            let park_freq = sum.abs();
            let park_label = if sum > 0.0 {
                format!("f_dq = {park_freq} x {base_freq} Hz\nd is lagging q by 90 deg")
            } else if sum < 0.0 {
                format!("f_dq = {park_freq} x {base_freq} Hz\nd is leading q by 90 deg")
            } else {
                format!("f_dq = {park_freq} x {base_freq} Hz\nPLL locked on, d and q are DC")
            };
            let park_period = if sum == 0.0 {
                0.0
            } else {
                1.0 / (park_freq * base_freq).abs()
            };
            (harmonic_label, clarke_label, park_label, park_period)
        }
        Sequence::Interharmonic => {
            let harmonic_label =
                format!("f_harmonic = {order} x {base_freq} Hz\ninterharmonic");
            let clarke_label = format!("f_alpha_beta = {order} x {base_freq} Hz");
            // no fixed phase relationship; the Park frequency is not reported numerically
            let park_label = "f_dq: interharmonic".to_string();
            (harmonic_label, clarke_label, park_label, 0.0)
        }
    };

    Ok(SequenceInfo {
        sequence,
        harmonic_label,
        clarke_label,
        park_label,
        clarke_period,
        park_period,
    })
}

/// Describes the PLL rotation direction from the sign of its order.
///
/// # Arguments
/// * `base_freq` - Base frequency in Hz
/// * `pll_order` - PLL tracking order
///
/// # Returns
/// * `Ok(label)` describing forward, reverse or stationary rotation
/// * `Err(SequenceError::UndefinedPllDirection)` for a NaN order
pub fn find_pll_direction(base_freq: f64, pll_order: f64) -> Result<String, SequenceError> {
    let label = if pll_order > 0.0 {
        format!(
            "f_PLL = {pll_order} x {base_freq} Hz\n\
             anti-clockwise rotating,\ni.e., positively rotating"
        )
    } else if pll_order < 0.0 {
        format!(
            "f_PLL = {pll_order} x {base_freq} Hz\n\
             clockwise rotating,\ni.e., negatively rotating"
        )
    } else if pll_order == 0.0 {
        format!("f_PLL = {pll_order} x {base_freq} Hz\nnot rotating")
    } else {
        log::error!("PLL order {pll_order} has no defined rotation direction");
        return Err(SequenceError::UndefinedPllDirection { order: pll_order });
    };
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn classification_by_remainder() {
        assert_eq!(classify(1.0), Sequence::Positive);
        assert_eq!(classify(2.0), Sequence::Negative);
        assert_eq!(classify(3.0), Sequence::Zero);
        assert_eq!(classify(4.0), Sequence::Positive);
        assert_eq!(classify(0.0), Sequence::Zero);
        assert_eq!(classify(2.3), Sequence::Interharmonic);
        assert_eq!(classify(f64::NAN), Sequence::Interharmonic);
        // sign-insensitive
        assert_eq!(classify(-2.0), Sequence::Negative);
        // integrality tolerance
        assert_eq!(classify(4.0 + 1e-12), Sequence::Positive);
    }

    #[test]
    fn locked_on_fundamental_gives_dc() {
        let info = find_sequences(50.0, 1.0, 1.0).unwrap();
        assert_eq!(info.sequence, Sequence::Positive);
        assert_abs_diff_eq!(info.park_period, 0.0);
        assert_abs_diff_eq!(info.clarke_period, 0.02, epsilon = 1e-12);
        assert!(info.park_label.contains("locked on"));
        assert!(info.clarke_label.contains("alpha is leading beta"));
    }

    #[test]
    fn second_harmonic_is_negative_sequence() {
        let info = find_sequences(50.0, 2.0, 1.0).unwrap();
        assert_eq!(info.sequence, Sequence::Negative);
        // |2 + 1| * 50 Hz
        assert_abs_diff_eq!(info.park_period, 1.0 / 150.0, epsilon = 1e-12);
        assert!(info.park_label.contains("d is lagging q"));
        assert!(info.clarke_label.contains("alpha is lagging beta"));
    }

    #[test]
    fn fourth_harmonic_d_leads_q() {
        let info = find_sequences(50.0, 4.0, 1.0).unwrap();
        assert_eq!(info.sequence, Sequence::Positive);
        // |4 - 1| * 50 Hz
        assert_abs_diff_eq!(info.park_period, 1.0 / 150.0, epsilon = 1e-12);
        assert!(info.park_label.contains("d is leading q"));
    }

    #[test]
    fn negative_sequence_locks_on_a_reverse_pll() {
        let info = find_sequences(50.0, 2.0, -2.0).unwrap();
        assert_eq!(info.sequence, Sequence::Negative);
        assert_abs_diff_eq!(info.park_period, 0.0);
        assert!(info.park_label.contains("locked on"));
    }

    #[test]
    fn zero_sequence_is_an_error() {
        for order in [3.0, 6.0, -9.0, 0.0] {
            let err = find_sequences(50.0, order, 1.0).unwrap_err();
            assert_eq!(
                err,
                SequenceError::ZeroSequence {
                    order: order.abs()
                }
            );
        }
    }

    #[test]
    fn interharmonic_makes_no_phase_claims() {
        let info = find_sequences(50.0, 2.3, 1.0).unwrap();
        assert_eq!(info.sequence, Sequence::Interharmonic);
        assert_abs_diff_eq!(info.park_period, 0.0);
        assert_abs_diff_eq!(info.clarke_period, 1.0 / 115.0, epsilon = 1e-12);
        assert!(info.park_label.contains("interharmonic"));
        assert!(!info.clarke_label.contains("90 deg"));
    }

    #[test]
    fn harmonic_order_sign_is_ignored() {
        let pos = find_sequences(50.0, 2.0, 1.0).unwrap();
        let neg = find_sequences(50.0, -2.0, 1.0).unwrap();
        assert_eq!(pos, neg);
    }

    #[test]
    fn pll_direction_descriptions() {
        assert!(find_pll_direction(50.0, 1.0)
            .unwrap()
            .contains("anti-clockwise"));
        assert!(find_pll_direction(50.0, -1.0)
            .unwrap()
            .contains("clockwise rotating"));
        assert!(find_pll_direction(50.0, 0.0).unwrap().contains("not rotating"));
    }

    #[test]
    fn nan_pll_order_is_an_error() {
        let err = find_pll_direction(50.0, f64::NAN).unwrap_err();
        assert!(matches!(err, SequenceError::UndefinedPllDirection { .. }));
    }
}
