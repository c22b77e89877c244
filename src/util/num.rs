/// `2^63`, the first real past the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` if the value is finite, integral and within
/// range.
///
/// ## Returns
/// - `Some(i64)`: The integer the real denotes exactly.
/// - `None`: If the value is non-finite, fractional or out of range.
///
/// ## Example
/// ```
/// use semset::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(2f64.powi(60)), Some(1 << 60));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// assert_eq!(f64_to_i64_exact(i64::MAX as f64), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // i64::MIN is -2^63 and exact; i64::MAX rounds up to 2^63.
    if value < -I64_BOUND || value >= I64_BOUND {
        return None;
    }
    Some(value as i64)
}

/// Returns `true` if an integer and a real denote the same number.
///
/// The comparison is exact: the real must be integral and convert to the
/// same `i64`. No rounding takes place, which keeps the relation transitive
/// across mixed comparisons.
///
/// ## Example
/// ```
/// use semset::util::num::integer_equals_real;
///
/// assert!(integer_equals_real(3, 3.0));
/// assert!(!integer_equals_real(3, 3.5));
/// assert!(integer_equals_real(1 << 60, 2f64.powi(60)));
/// assert!(!integer_equals_real(i64::MAX, i64::MAX as f64));
/// ```
#[must_use]
pub fn integer_equals_real(integer: i64, real: f64) -> bool {
    f64_to_i64_exact(real) == Some(integer)
}
