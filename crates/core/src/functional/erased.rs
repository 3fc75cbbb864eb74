//! Runtime-checked pipelines for operator lists past the typed arities
//!
//! Once a pipeline is longer than
//! [`MAX_TYPED_OPERATORS`](crate::constants::MAX_TYPED_OPERATORS), each step
//! is typed independently: an operator's input is not tied to the previous
//! output at compile time, so closure parameters need annotations and a
//! mismatch surfaces as an [`Error`] when the pipeline runs. Values must be
//! `'static` because they travel through [`Any`].

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::constants::LOG_TARGET;
use crate::errors::{Error, Result};

/// A value whose static type has been erased, tagged with its type name
pub struct ErasedValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ErasedValue {
    /// Erase the type of `value`
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the erased type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the erased value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Recover the value as a `T`, handing it back unchanged on mismatch
    pub fn downcast<T: Any>(self) -> std::result::Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErasedValue({})", self.type_name)
    }
}

// Runs one operator against an erased input.
fn step<A, B, F>(input: ErasedValue, index: usize, op: F) -> Result<ErasedValue>
where
    A: Any,
    B: Any,
    F: FnOnce(A) -> B,
{
    let found = input.type_name();
    match input.downcast::<A>() {
        Ok(value) => {
            trace!(
                target: LOG_TARGET,
                index,
                input = found,
                output = type_name::<B>(),
                "applying erased operator"
            );
            Ok(ErasedValue::new(op(value)))
        }
        Err(_) => {
            debug!(
                target: LOG_TARGET,
                index,
                expected = type_name::<A>(),
                found,
                "erased operator rejected its input"
            );
            Err(Error::operator_input_mismatch(index, type_name::<A>(), found))
        }
    }
}

type ErasedCall = Box<dyn FnOnce(ErasedValue, usize) -> Result<ErasedValue>>;

/// A boxed operator whose input type is checked when it runs
pub struct ErasedOperator {
    input: &'static str,
    output: &'static str,
    call: ErasedCall,
}

impl ErasedOperator {
    /// Box `op`, remembering its declared input and output types
    pub fn new<A, B, F>(op: F) -> Self
    where
        A: Any,
        B: Any,
        F: FnOnce(A) -> B + 'static,
    {
        Self {
            input: type_name::<A>(),
            output: type_name::<B>(),
            call: Box::new(move |input, index| step(input, index, op)),
        }
    }

    /// Name of the type the operator accepts
    pub fn input_type(&self) -> &'static str {
        self.input
    }

    /// Name of the type the operator produces
    pub fn output_type(&self) -> &'static str {
        self.output
    }

    /// Run the operator as the `index`-th step of a pipeline
    pub fn apply(self, input: ErasedValue, index: usize) -> Result<ErasedValue> {
        (self.call)(input, index)
    }
}

impl fmt::Debug for ErasedOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedOperator")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}

/// Fold `value` through a list of erased operators
///
/// Stops at the first operator that rejects its input; the operators after it
/// are dropped without being called.
pub fn run_erased<I>(value: ErasedValue, operators: I) -> Result<ErasedValue>
where
    I: IntoIterator<Item = ErasedOperator>,
{
    operators
        .into_iter()
        .enumerate()
        .try_fold(value, |acc, (index, op)| op.apply(acc, index))
}

/// Builder for a pipeline checked one step at a time
///
/// `R` is the declared output type of the most recently appended operator,
/// which is what [`Untyped::finish`] returns. Operators run as soon as they
/// are appended; after the first failure, later operators are never called.
///
/// ```
/// use pipekit_core::functional::erased::Untyped;
///
/// let out = Untyped::new(2)
///     .then(|v: i32| v * 21)
///     .then(|v: i32| v.to_string())
///     .finish();
/// assert_eq!(out.as_deref(), Ok("42"));
///
/// let err = Untyped::new(2).then(|s: String| s.len()).finish();
/// assert!(err.is_err());
/// ```
pub struct Untyped<R> {
    state: Result<ErasedValue>,
    len: usize,
    _output: PhantomData<fn() -> R>,
}

impl<V: Any> Untyped<V> {
    /// Start a pipeline from `value`
    pub fn new(value: V) -> Self {
        Self {
            state: Ok(ErasedValue::new(value)),
            len: 0,
            _output: PhantomData,
        }
    }
}

impl<R: Any> Untyped<R> {
    /// Append and run an operator taking an `A`
    ///
    /// `A` is independent of `R`; a disagreement is recorded as an
    /// [`Error::OperatorInputMismatch`] instead of a compile error.
    pub fn then<A, B, F>(self, op: F) -> Untyped<B>
    where
        A: Any,
        B: Any,
        F: FnOnce(A) -> B,
    {
        let index = self.len;
        Untyped {
            state: self.state.and_then(|value| step(value, index, op)),
            len: index + 1,
            _output: PhantomData,
        }
    }

    /// Number of operators appended so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no operator has been appended yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every operator so far accepted its input
    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Result of the last operator, or the first mismatch encountered
    pub fn finish(self) -> Result<R> {
        let value = self.state?;
        let found = value.type_name();
        value
            .downcast::<R>()
            .map_err(|_| Error::output_mismatch(type_name::<R>(), found))
    }
}

impl<R> fmt::Debug for Untyped<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Untyped")
            .field("state", &self.state)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_erased_value_roundtrip() {
        let value = ErasedValue::new(7u16);
        assert!(value.is::<u16>());
        assert!(!value.is::<u32>());
        assert_eq!(value.type_name(), "u16");
        assert_eq!(value.downcast::<u16>().ok(), Some(7));
    }

    #[test]
    fn test_erased_value_downcast_mismatch_keeps_value() {
        let value = ErasedValue::new(String::from("kept"));
        let value = value.downcast::<i32>().unwrap_err();
        assert_eq!(value.downcast::<String>().ok().as_deref(), Some("kept"));
    }

    #[test]
    fn test_untyped_without_operators_returns_value() {
        let pipeline = Untyped::new("start");
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.finish(), Ok("start"));
    }

    #[test]
    fn test_untyped_runs_in_order() {
        let out = Untyped::new(5)
            .then(|v: i32| v - 1)
            .then(|v: i32| vec![v; 2])
            .then(|v: Vec<i32>| v.iter().sum::<i32>())
            .finish();
        assert_eq!(out, Ok(8));
    }

    #[test]
    fn test_untyped_reports_first_mismatch() {
        let later_calls = Cell::new(0);
        let pipeline = Untyped::new(1u8)
            .then(|v: u8| v + 1)
            .then(|v: u32| v * 2)
            .then(|v: u32| {
                later_calls.set(later_calls.get() + 1);
                v
            });

        assert_eq!(pipeline.len(), 3);
        assert!(!pipeline.is_ok());
        assert_eq!(
            pipeline.finish(),
            Err(Error::operator_input_mismatch(1, "u32", "u8"))
        );
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn test_erased_operator_types() {
        let op = ErasedOperator::new(|s: String| s.len());
        assert_eq!(op.input_type(), "alloc::string::String");
        assert_eq!(op.output_type(), "usize");
    }

    #[test]
    fn test_run_erased_folds_operators() {
        let ops = vec![
            ErasedOperator::new(|v: i64| v * 3),
            ErasedOperator::new(|v: i64| format!("{v:03}")),
        ];
        let out = run_erased(ErasedValue::new(4i64), ops).unwrap();
        assert_eq!(out.downcast::<String>().ok().as_deref(), Some("012"));
    }

    #[test]
    fn test_run_erased_stops_at_mismatch() {
        let ops = vec![
            ErasedOperator::new(|v: i64| v.to_string()),
            ErasedOperator::new(|v: i64| v + 1),
        ];
        let err = run_erased(ErasedValue::new(4i64), ops).unwrap_err();
        assert_eq!(err.operator_index(), Some(1));
    }
}
