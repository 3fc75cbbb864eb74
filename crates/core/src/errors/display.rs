//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OperatorInputMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "operator #{index} expects input of type '{expected}' but received '{found}'"
                )
            }
            Error::OutputMismatch { expected, found } => {
                write!(
                    f,
                    "pipeline output has type '{found}', not the declared '{expected}'"
                )
            }
        }
    }
}
