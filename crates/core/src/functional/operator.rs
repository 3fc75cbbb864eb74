//! Unary operators and flat operator lists
//!
//! [`Operator`] is the building block: anything callable once with a single
//! argument. [`Operators`] chains a tuple of them, and is implemented only for
//! tuples whose adjacent operators agree on the type handed between them, so a
//! mismatched list is rejected by the compiler rather than at runtime.

use tracing::trace;

use crate::constants::LOG_TARGET;

/// A unary transformation from `A` to [`Operator::Output`]
///
/// Every `FnOnce(A) -> B` is an operator, which covers closures, fn items and
/// fn pointers.
pub trait Operator<A> {
    /// Value produced by the operator
    type Output;

    /// Consume the operator and transform `input`
    fn apply(self, input: A) -> Self::Output;
}

impl<A, B, F> Operator<A> for F
where
    F: FnOnce(A) -> B,
{
    type Output = B;

    #[inline]
    fn apply(self, input: A) -> B {
        self(input)
    }
}

/// An ordered list of operators fed by a value of type `V`
///
/// Implemented for tuples of up to [`MAX_TYPED_OPERATORS`] operators. Each
/// operator's input must be the previous operator's output, with the first
/// one taking `V`.
///
/// [`MAX_TYPED_OPERATORS`]: crate::constants::MAX_TYPED_OPERATORS
pub trait Operators<V> {
    /// Return type of the last operator, or `V` for an empty list
    type Output;

    /// Number of operators in the list
    const LEN: usize;

    /// Apply every operator left to right, starting from `value`
    fn run(self, value: V) -> Self::Output;
}

/// Return type of the last operator in `Ops` when fed a `V`
///
/// ```
/// use pipekit_core::LastOperatorReturn;
///
/// type Steps = (fn(&'static str) -> usize, fn(usize) -> String);
///
/// let out: LastOperatorReturn<&'static str, Steps> = String::from("3 bytes");
/// assert_eq!(out, "3 bytes");
/// ```
pub type LastOperatorReturn<V, Ops> = <Ops as Operators<V>>::Output;

impl<V> Operators<V> for () {
    type Output = V;
    const LEN: usize = 0;

    #[inline]
    fn run(self, value: V) -> V {
        value
    }
}

macro_rules! impl_operators {
    ($len:expr => $last:ident; $($op:ident : $input:ident -> $output:ident = $idx:tt),+) => {
        impl<V, $($op, $output),+> Operators<V> for ($($op,)+)
        where
            $($op: Operator<$input, Output = $output>,)+
        {
            type Output = $last;
            const LEN: usize = $len;

            #[inline]
            fn run(self, value: V) -> Self::Output {
                let acc = value;
                $(let acc = self.$idx.apply(acc);)+
                acc
            }
        }
    };
}

impl_operators!(1 => T01; O01: V -> T01 = 0);
impl_operators!(2 => T02; O01: V -> T01 = 0, O02: T01 -> T02 = 1);
impl_operators!(3 => T03; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2);
impl_operators!(4 => T04; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3);
impl_operators!(5 => T05; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4);
impl_operators!(6 => T06; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5);
impl_operators!(7 => T07; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6);
impl_operators!(8 => T08; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7);
impl_operators!(9 => T09; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8);
impl_operators!(10 => T10; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9);
impl_operators!(11 => T11; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10);
impl_operators!(12 => T12; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11);
impl_operators!(13 => T13; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12);
impl_operators!(14 => T14; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13);
impl_operators!(15 => T15; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14);
impl_operators!(16 => T16; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14, O16: T15 -> T16 = 15);
impl_operators!(17 => T17; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14, O16: T15 -> T16 = 15, O17: T16 -> T17 = 16);
impl_operators!(18 => T18; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14, O16: T15 -> T16 = 15, O17: T16 -> T17 = 16, O18: T17 -> T18 = 17);
impl_operators!(19 => T19; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14, O16: T15 -> T16 = 15, O17: T16 -> T17 = 16, O18: T17 -> T18 = 17, O19: T18 -> T19 = 18);
impl_operators!(20 => T20; O01: V -> T01 = 0, O02: T01 -> T02 = 1, O03: T02 -> T03 = 2, O04: T03 -> T04 = 3, O05: T04 -> T05 = 4, O06: T05 -> T06 = 5, O07: T06 -> T07 = 6, O08: T07 -> T08 = 7, O09: T08 -> T09 = 8, O10: T09 -> T10 = 9, O11: T10 -> T11 = 10, O12: T11 -> T12 = 11, O13: T12 -> T13 = 12, O14: T13 -> T14 = 13, O15: T14 -> T15 = 14, O16: T15 -> T16 = 15, O17: T16 -> T17 = 16, O18: T17 -> T18 = 17, O19: T18 -> T19 = 18, O20: T19 -> T20 = 19);

/// Pipe `value` through a tuple of operators
///
/// The tuple form needs each closure's parameter type to be known up front,
/// so annotate closure parameters or pass fn items. The [`pipe!`] macro infers
/// them instead.
///
/// ```
/// use pipekit_core::pipe;
///
/// fn double(n: i32) -> i32 { n * 2 }
///
/// let out = pipe(4, (double, |n: i32| n + 1, |n: i32| n.to_string()));
/// assert_eq!(out, "9");
/// ```
///
/// Operators that disagree on the handed-over type do not compile:
///
/// ```compile_fail
/// use pipekit_core::pipe;
///
/// let out = pipe(4, (|n: i32| n.to_string(), |n: i32| n + 1));
/// ```
///
/// [`pipe!`]: crate::pipe!
#[inline]
pub fn pipe<V, Ops>(value: V, operators: Ops) -> LastOperatorReturn<V, Ops>
where
    Ops: Operators<V>,
{
    trace!(target: LOG_TARGET, operators = Ops::LEN, "piping value through operator list");
    operators.run(value)
}
