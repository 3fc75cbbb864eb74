//! Inference behavior of the typed pipeline as seen by a downstream crate

use pipekit_core::functional::arity::{pipe1, pipe5};
use pipekit_core::{pipe, LastOperatorReturn, Operators};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    lines: Vec<(String, u32)>,
}

fn total_quantity(order: &Order) -> u32 {
    order.lines.iter().map(|(_, qty)| qty).sum()
}

#[test]
fn test_intermediate_types_change_every_step() {
    let order = Order {
        id: 7,
        lines: vec![("apple".into(), 3), ("pear".into(), 4)],
    };

    let summary = pipe!(
        &order,
        total_quantity,
        |qty| (qty, qty > 5),
        |(qty, bulk)| if bulk { Some(qty) } else { None },
        |bulk| bulk.map(|qty| format!("bulk:{qty}")),
        |label| label.unwrap_or_default(),
    );

    assert_eq!(summary, "bulk:7");
}

#[test]
fn test_fn_items_and_method_paths_are_operators() {
    let len = pipe!("pipeline", str::len, u64::try_from, Result::ok);
    assert_eq!(len, Some(8u64));
}

#[test]
fn test_borrowed_values_flow_through() {
    let words = vec!["b", "a", "c"];
    let first = pipe!(
        &words,
        |w| w.iter().copied().min(),
        |w| w.unwrap_or("none"),
    );
    assert_eq!(first, "a");
}

#[test]
fn test_collections_are_inferred() {
    let counts = pipe!(
        "a b a c b a",
        |s| s.split(' '),
        |parts| {
            parts.fold(BTreeMap::new(), |mut acc, word| {
                *acc.entry(word).or_insert(0u32) += 1;
                acc
            })
        },
        |map| map.into_iter().max_by_key(|(_, n)| *n),
    );
    assert_eq!(counts, Some(("a", 3)));
}

#[test]
fn test_direct_arity_calls() {
    assert_eq!(pipe1(2_u8, |v| v.pow(3)), 8);

    let out = pipe5(
        Order {
            id: 1,
            lines: Vec::new(),
        },
        |mut o| {
            o.lines.push(("fig".into(), 2));
            o
        },
        |o| o.lines,
        |lines| lines.len(),
        |n| n == 1,
        |single| if single { "single" } else { "many" },
    );
    assert_eq!(out, "single");
}

#[test]
fn test_tuple_form_with_annotated_closures() {
    let out = pipe(
        Order {
            id: 9,
            lines: vec![("kiwi".into(), 1)],
        },
        (|o: Order| o.id, |id: u32| id * 2, |id: u32| format!("#{id}")),
    );
    assert_eq!(out, "#18");
}

#[test]
fn test_last_operator_return_names_the_result() {
    type Steps = (fn(u32) -> u32, fn(u32) -> Vec<u32>);

    fn double(n: u32) -> u32 {
        n * 2
    }
    fn spread(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    let steps: Steps = (double, spread);
    let out: LastOperatorReturn<u32, Steps> = steps.run(2);
    assert_eq!(out, vec![0, 1, 2, 3]);
    assert_eq!(<Steps as Operators<u32>>::LEN, 2);
}
