//! The `pipe!` front end
//!
//! Counts the operators it is given and forwards to the matching typed
//! function in [`arity`](super::arity). Anything longer than
//! [`MAX_TYPED_OPERATORS`](crate::constants::MAX_TYPED_OPERATORS) goes through
//! [`Untyped`](super::erased::Untyped) instead and yields a `Result`.

/// Pipe a value through a sequence of unary operators, left to right
///
/// With up to twenty operators every closure parameter type is inferred from
/// the previous step and the expression evaluates to the last operator's
/// return value:
///
/// ```
/// use pipekit_core::pipe;
///
/// let result = pipe!(
///     1_i32,
///     |v| v + 1,
///     |v| v * 2,
///     |v| v.to_string(),
/// );
/// assert_eq!(result, "4");
/// assert_eq!(pipe!("untouched"), "untouched");
/// ```
///
/// An operator that cannot accept the previous output is a compile error:
///
/// ```compile_fail
/// use pipekit_core::pipe;
///
/// let result = pipe!(1_i32, |v| v.to_string(), |v: i32| v + 1);
/// ```
///
/// Twenty operators are still checked by the compiler, up to the last one:
///
/// ```compile_fail
/// use pipekit_core::pipe;
///
/// let result = pipe!(
///     0_i32,
///     |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1,
///     |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1,
///     |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1,
///     |v| v + 1, |v| v + 1, |v| v + 1, |v| v + 1,
///     |v: String| v.len(),
/// );
/// ```
///
/// Past twenty operators each parameter must be annotated, mismatches are
/// caught at runtime, and the expression is a
/// [`Result`](crate::errors::Result) of the last operator's return type.
/// Either way the value and every operator expression are evaluated, left to
/// right, before the first operator runs.
#[macro_export]
macro_rules! pipe {
    (@bind $value:ident [$($bound:ident)*] $op:expr $(, $rest:expr)*) => {{
        let op = $op;
        $crate::pipe!(@bind $value [$($bound)* op] $($rest),*)
    }};
    (@bind $value:ident [$($bound:ident)+]) => {
        $crate::functional::erased::Untyped::new($value)
            $(.then($bound))+
            .finish()
    };
    ($value:expr $(,)?) => {
        $crate::functional::arity::pipe0($value)
    };
    ($value:expr, $o01:expr $(,)?) => {
        $crate::functional::arity::pipe1($value, $o01)
    };
    ($value:expr, $o01:expr, $o02:expr $(,)?) => {
        $crate::functional::arity::pipe2($value, $o01, $o02)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr $(,)?) => {
        $crate::functional::arity::pipe3($value, $o01, $o02, $o03)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr $(,)?) => {
        $crate::functional::arity::pipe4($value, $o01, $o02, $o03, $o04)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr $(,)?) => {
        $crate::functional::arity::pipe5($value, $o01, $o02, $o03, $o04, $o05)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr $(,)?) => {
        $crate::functional::arity::pipe6($value, $o01, $o02, $o03, $o04, $o05, $o06)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr $(,)?) => {
        $crate::functional::arity::pipe7($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr $(,)?) => {
        $crate::functional::arity::pipe8($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr $(,)?) => {
        $crate::functional::arity::pipe9($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr $(,)?) => {
        $crate::functional::arity::pipe10($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr $(,)?) => {
        $crate::functional::arity::pipe11($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr $(,)?) => {
        $crate::functional::arity::pipe12($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr $(,)?) => {
        $crate::functional::arity::pipe13($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr $(,)?) => {
        $crate::functional::arity::pipe14($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr $(,)?) => {
        $crate::functional::arity::pipe15($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr, $o16:expr $(,)?) => {
        $crate::functional::arity::pipe16($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15, $o16)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr, $o16:expr, $o17:expr $(,)?) => {
        $crate::functional::arity::pipe17($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15, $o16, $o17)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr, $o16:expr, $o17:expr, $o18:expr $(,)?) => {
        $crate::functional::arity::pipe18($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15, $o16, $o17, $o18)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr, $o16:expr, $o17:expr, $o18:expr, $o19:expr $(,)?) => {
        $crate::functional::arity::pipe19($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15, $o16, $o17, $o18, $o19)
    };
    ($value:expr, $o01:expr, $o02:expr, $o03:expr, $o04:expr, $o05:expr, $o06:expr, $o07:expr, $o08:expr, $o09:expr, $o10:expr, $o11:expr, $o12:expr, $o13:expr, $o14:expr, $o15:expr, $o16:expr, $o17:expr, $o18:expr, $o19:expr, $o20:expr $(,)?) => {
        $crate::functional::arity::pipe20($value, $o01, $o02, $o03, $o04, $o05, $o06, $o07, $o08, $o09, $o10, $o11, $o12, $o13, $o14, $o15, $o16, $o17, $o18, $o19, $o20)
    };
    ($value:expr, $($op:expr),+ $(,)?) => {{
        let value = $value;
        $crate::pipe!(@bind value [] $($op),+)
    }};
}
