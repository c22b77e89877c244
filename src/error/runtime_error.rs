#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while operating on dynamic values.
pub enum RuntimeError {
    /// An operation received an operand of a type it cannot work with.
    InvalidArgumentType {
        /// The operation that rejected the operand.
        operation: &'static str,
        /// The type the operation requires.
        expected:  &'static str,
        /// The type that was actually supplied.
        found:     &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgumentType { operation,
                                        expected,
                                        found, } => write!(f,
                                                           "Invalid argument type for {operation}: expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
