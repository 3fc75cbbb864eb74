//! Property-based tests and shared helpers for the pipeline functions
//!
//! The generators produce operator chains as plain data so the same chain can
//! be run through the typed, tuple and erased paths and compared.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once, filtered by `PIPEKIT_LOG`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Another test may already have installed one.
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// Property-based test generators
pub mod generators {
    use proptest::prelude::*;

    /// An integer step applied by an operator
    #[derive(Debug, Clone, Copy)]
    pub enum Step {
        Add(i64),
        Mul(i64),
        Neg,
    }

    impl Step {
        pub fn apply(self, value: i64) -> i64 {
            match self {
                Step::Add(n) => value.wrapping_add(n),
                Step::Mul(n) => value.wrapping_mul(n),
                Step::Neg => value.wrapping_neg(),
            }
        }
    }

    /// Generate a single step
    pub fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (-1000i64..1000).prop_map(Step::Add),
            (-16i64..16).prop_map(Step::Mul),
            Just(Step::Neg),
        ]
    }

    /// Generate chains that overflow the typed arities
    pub fn long_chain() -> impl Strategy<Value = Vec<Step>> {
        proptest::collection::vec(step(), 21..64)
    }
}

mod property_tests {
    use super::generators::*;
    use super::init_tracing;
    use crate::errors::Error;
    use crate::functional::arity::pipe3;
    use crate::functional::erased::{run_erased, ErasedOperator, ErasedValue, Untyped};
    use crate::functional::operator::pipe;
    use proptest::prelude::*;

    proptest! {
        /// The macro, the tuple form and the erased builder agree on three steps
        #[test]
        fn typed_and_tuple_forms_agree(x in any::<i64>(), a in step(), b in step(), c in step()) {
            init_tracing();
            let by_macro = crate::pipe!(x, |v| a.apply(v), |v| b.apply(v), |v| c.apply(v));
            let by_arity = pipe3(x, |v| a.apply(v), |v| b.apply(v), |v| c.apply(v));
            let by_tuple = pipe(x, (|v: i64| a.apply(v), |v: i64| b.apply(v), |v: i64| c.apply(v)));
            let by_untyped = Untyped::new(x)
                .then(|v: i64| a.apply(v))
                .then(|v: i64| b.apply(v))
                .then(|v: i64| c.apply(v))
                .finish();

            prop_assert_eq!(by_macro, by_arity);
            prop_assert_eq!(by_macro, by_tuple);
            prop_assert_eq!(Ok(by_macro), by_untyped);
        }

        /// Zero operators hand the value back untouched
        #[test]
        fn empty_pipeline_is_identity(s in ".*") {
            prop_assert_eq!(crate::pipe!(s.clone()), s.clone());
            prop_assert_eq!(pipe(s.clone(), ()), s);
        }

        /// Long erased chains compute the same fold as a plain loop
        #[test]
        fn erased_chain_matches_fold(x in any::<i64>(), steps in long_chain()) {
            let expected = steps.iter().fold(x, |acc, s| s.apply(acc));
            let ops = steps
                .iter()
                .map(|&s| ErasedOperator::new(move |v: i64| s.apply(v)));

            let out = run_erased(ErasedValue::new(x), ops).unwrap();
            prop_assert_eq!(out.downcast::<i64>().ok(), Some(expected));
        }

        /// A wrongly typed operator is reported at its own position
        #[test]
        fn erased_mismatch_reports_position(steps in long_chain(), at in 0usize..21) {
            let ops = steps.iter().enumerate().map(|(index, &s)| {
                if index == at {
                    ErasedOperator::new(|v: u32| v)
                } else {
                    ErasedOperator::new(move |v: i64| s.apply(v))
                }
            });

            let err = run_erased(ErasedValue::new(0i64), ops).unwrap_err();
            prop_assert_eq!(err, Error::operator_input_mismatch(at, "u32", "i64"));
        }
    }
}
