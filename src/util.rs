/// Numeric conversion helpers.
///
/// This module provides lossless conversions between integer and
/// floating-point values, used wherever an `Integer` and a `Real` value have
/// to be compared without silent rounding.
pub mod num;
