//! Core error type definitions

/// Result type alias for pipekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the runtime-checked pipeline
///
/// The typed pipeline never fails: adjacent operators that disagree on a type
/// are rejected by the compiler. Only the erased fallback, which checks each
/// step with a downcast, can produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operator received a value of a different type than it declared
    OperatorInputMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// The erased value could not be read back as the declared output type
    OutputMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Zero-based position of the operator that rejected its input, if any
    pub fn operator_index(&self) -> Option<usize> {
        match self {
            Error::OperatorInputMismatch { index, .. } => Some(*index),
            _ => None,
        }
    }
}
