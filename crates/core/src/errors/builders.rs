//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an operator input mismatch error
    #[must_use]
    pub fn operator_input_mismatch(
        index: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Error::OperatorInputMismatch {
            index,
            expected,
            found,
        }
    }

    /// Create an output mismatch error
    #[must_use]
    pub fn output_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::OutputMismatch { expected, found }
    }
}
