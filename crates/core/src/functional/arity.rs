//! Fixed-arity typed pipelines
//!
//! One function per operator count from zero to
//! [`MAX_TYPED_OPERATORS`](crate::constants::MAX_TYPED_OPERATORS). Each
//! operator parameter is declared as taking the previous step's output type,
//! so the compiler infers closure parameter types left to right and rejects an
//! operator whose input disagrees with what it is handed. These are what the
//! [`pipe!`](crate::pipe!) macro expands to; calling them directly is fine too.
//!
//! ```
//! use pipekit_core::functional::arity::pipe3;
//!
//! let out = pipe3(1_i32, |v| v + 1, |v| v * 2, |v| v.to_string());
//! assert_eq!(out, "4");
//! ```

use tracing::trace;

use crate::constants::LOG_TARGET;

macro_rules! typed_pipe {
    ($name:ident, $len:expr => $out:ident $(; $($op:ident : $input:ident -> $output:ident),+)?) => {
        #[doc = concat!("Pipe `value` through ", stringify!($len), " operator(s), left to right.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name<V $($(, $output)+)?>(
            value: V,
            $($($op: impl FnOnce($input) -> $output,)+)?
        ) -> $out {
            trace!(target: LOG_TARGET, operators = $len, "piping value");
            let acc = value;
            $($(let acc = $op(acc);)+)?
            acc
        }
    };
}

typed_pipe!(pipe0, 0 => V);
typed_pipe!(pipe1, 1 => T01; o01: V -> T01);
typed_pipe!(pipe2, 2 => T02; o01: V -> T01, o02: T01 -> T02);
typed_pipe!(pipe3, 3 => T03; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03);
typed_pipe!(pipe4, 4 => T04; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04);
typed_pipe!(pipe5, 5 => T05; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05);
typed_pipe!(pipe6, 6 => T06; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06);
typed_pipe!(pipe7, 7 => T07; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07);
typed_pipe!(pipe8, 8 => T08; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08);
typed_pipe!(pipe9, 9 => T09; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09);
typed_pipe!(pipe10, 10 => T10; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10);
typed_pipe!(pipe11, 11 => T11; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11);
typed_pipe!(pipe12, 12 => T12; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12);
typed_pipe!(pipe13, 13 => T13; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13);
typed_pipe!(pipe14, 14 => T14; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14);
typed_pipe!(pipe15, 15 => T15; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15);
typed_pipe!(pipe16, 16 => T16; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15, o16: T15 -> T16);
typed_pipe!(pipe17, 17 => T17; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15, o16: T15 -> T16, o17: T16 -> T17);
typed_pipe!(pipe18, 18 => T18; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15, o16: T15 -> T16, o17: T16 -> T17, o18: T17 -> T18);
typed_pipe!(pipe19, 19 => T19; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15, o16: T15 -> T16, o17: T16 -> T17, o18: T17 -> T18, o19: T18 -> T19);
typed_pipe!(pipe20, 20 => T20; o01: V -> T01, o02: T01 -> T02, o03: T02 -> T03, o04: T03 -> T04, o05: T04 -> T05, o06: T05 -> T06, o07: T06 -> T07, o08: T07 -> T08, o09: T08 -> T09, o10: T09 -> T10, o11: T10 -> T11, o12: T11 -> T12, o13: T12 -> T13, o14: T13 -> T14, o15: T14 -> T15, o16: T15 -> T16, o17: T16 -> T17, o18: T17 -> T18, o19: T18 -> T19, o20: T19 -> T20);
