//! Typed left-to-right pipelines
//!
//! This module provides the `pipe` family: a fixed value threaded through a
//! flat sequence of unary operators, with every intermediate type checked by
//! the compiler for up to twenty operators and by a downcast beyond that.

pub mod arity;
pub mod composition;
pub mod erased;
pub mod operator;

// Re-export commonly used traits and utilities
pub use erased::{run_erased, ErasedOperator, ErasedValue, Untyped};
pub use operator::{pipe, LastOperatorReturn, Operator, Operators};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::erased::Untyped;
    pub use super::operator::{LastOperatorReturn, Operator, Operators};
    // Brings in both the `pipe!` macro and the tuple-form `pipe` function
    pub use crate::pipe;
}
