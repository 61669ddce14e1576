//! # Annotation Scaling Module
//!
//! Display heuristics for the period annotations drawn next to the
//! time-domain plots. Higher harmonic orders squeeze more period markers
//! into one base period, so the text shrinks with the order and is hidden
//! entirely once it could no longer be read.

/// Harmonic order above which the period text is hidden.
const HIDE_THRESHOLD: f64 = 15.0;

/// Effectively invisible font size used instead of removing the text.
const HIDDEN_FONT_SIZE: f64 = 1.0e-6;

/// Font size for the period annotations of a given harmonic order.
///
/// Decreases linearly with the order (`-0.5 * |h| + 11`), clamped to
/// [4, 10]; above |h| = 15 the text is hidden.
///
/// # Arguments
/// * `harmonic_order` - Harmonic order, sign ignored
///
/// # Returns
/// * Font size in points
pub fn font_size(harmonic_order: f64) -> f64 {
    let order = harmonic_order.abs();

    if order > HIDE_THRESHOLD {
        return HIDDEN_FONT_SIZE;
    }

    (-0.5 * order + 11.0).clamp(4.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn clamps_and_hides() {
        assert_abs_diff_eq!(font_size(2.0), 10.0);
        assert_abs_diff_eq!(font_size(8.0), 7.0);
        assert_abs_diff_eq!(font_size(15.0), 4.0);
        assert_abs_diff_eq!(font_size(16.0), 1.0e-6);
        // sign-insensitive
        assert_abs_diff_eq!(font_size(-2.0), 10.0);
    }
}
