/// Converts a length or position to the number the language sees.
///
/// ## Example
/// ```
/// use pindscript::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(3), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Interprets `value` as an array or string index.
///
/// Only finite, non-negative whole numbers are indices. Values beyond
/// `usize::MAX` saturate, so they are out of range for every array.
///
/// ## Example
/// ```
/// use pindscript::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.0), Some(2));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(1.5), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    Some(value as usize)
}

/// Clamps a string position into `0..=len`, truncating any fraction.
///
/// `NaN` counts as `0`.
///
/// ## Example
/// ```
/// use pindscript::util::num::clamp_position;
///
/// assert_eq!(clamp_position(2.7, 5), 2);
/// assert_eq!(clamp_position(-3.0, 5), 0);
/// assert_eq!(clamp_position(f64::INFINITY, 5), 5);
/// assert_eq!(clamp_position(f64::NAN, 5), 0);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn clamp_position(value: f64, len: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value.trunc() as usize).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_rejects_non_integers() {
        assert_eq!(f64_to_index(f64::NAN), None);
        assert_eq!(f64_to_index(f64::INFINITY), None);
        assert_eq!(f64_to_index(0.0), Some(0));
        assert_eq!(f64_to_index(-0.0), Some(0));
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(f64_to_index(1e300), Some(usize::MAX));
    }
}
