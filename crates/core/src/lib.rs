//! Statically typed value pipelines.
//!
//! A pipeline threads one value through a flat list of unary operators, left
//! to right, and evaluates to whatever the last operator returns. For up to
//! [`MAX_TYPED_OPERATORS`] operators the compiler infers every intermediate
//! type, so closures need no annotations and an operator that cannot accept
//! the previous output is a compile error. Longer pipelines still run, but
//! each step is checked at runtime instead.
//!
//! ```
//! use pipekit_core::pipe;
//!
//! let label = pipe!(
//!     "  Ada Lovelace ",
//!     |s| s.trim(),
//!     |s| s.split_whitespace().count(),
//!     |n| format!("{n} names"),
//! );
//! assert_eq!(label, "2 names");
//! ```
//!
//! ## Key Components
//!
//! - **`functional::arity`**: `pipe0` through `pipe20`, one typed signature
//!   per operator count.
//! - **`functional::composition`**: the `pipe!` macro that picks a signature
//!   by counting operators.
//! - **`functional::operator`**: the `Operator` and `Operators` traits, the
//!   tuple form `pipe(value, (op, ..))` and `LastOperatorReturn`.
//! - **`functional::erased`**: the runtime-checked fallback for longer lists.
//! - **`errors`**: the `Error` enum reported by the fallback.

pub mod constants;
pub mod errors;
pub mod functional;

#[cfg(test)]
pub(crate) mod testing;

pub use self::{
    constants::MAX_TYPED_OPERATORS,
    errors::{Error, Result},
    functional::{pipe, LastOperatorReturn, Operator, Operators},
};
