/// Runtime errors.
///
/// Contains the error type raised when a dynamic value operation receives an
/// operand of the wrong type, such as a set operation with a non-set operand
/// or an edit distance between values that are not sequences.
pub mod runtime_error;

pub use runtime_error::RuntimeError;

/// Result type of every fallible operation on dynamic values.
pub type EvalResult<T> = Result<T, RuntimeError>;
