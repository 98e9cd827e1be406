//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use binomial_heap::{BinomialHeap, HeapError, MinHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    FindMinimum,
    DeleteMinimum,
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-100i32..100).prop_map(Op::Insert),
        2 => Just(Op::FindMinimum),
        3 => Just(Op::DeleteMinimum),
        1 => (-100i32..100).prop_map(Op::Remove),
    ]
}

/// Test that find_minimum always reports the smallest key present
fn test_minimum_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32> = BinomialHeap::new();
    let mut inserted: Vec<i32> = Vec::new();

    for (should_delete, value) in ops {
        if should_delete && !heap.is_empty() {
            let removed = heap.delete_minimum().unwrap();
            let pos = inserted.iter().position(|&k| k == removed);
            prop_assert!(pos.is_some(), "deleted key {} was never inserted", removed);
            inserted.swap_remove(pos.unwrap());
        } else {
            heap.insert(value);
            inserted.push(value);
        }

        match inserted.iter().min() {
            Some(expected) => {
                prop_assert_eq!(heap.find_minimum(), Ok(expected));
            }
            None => {
                prop_assert_eq!(heap.find_minimum(), Err(HeapError::EmptyHeap));
            }
        }
    }

    Ok(())
}

/// Test that all deleted keys come out in non-decreasing order
fn test_delete_order_invariant(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32> = BinomialHeap::new();
    for &val in &values {
        heap.insert(val);
    }

    let mut last = i32::MIN;
    let mut count = 0;
    while let Ok(key) = heap.delete_minimum() {
        prop_assert!(key >= last, "deleted key {} is less than previous {}", key, last);
        last = key;
        count += 1;
    }
    prop_assert_eq!(count, values.len());

    Ok(())
}

/// Test that the forest stays well formed after every operation
fn test_structure_invariant(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32> = BinomialHeap::new();
    let mut reference: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(key) => {
                heap.insert(key);
                reference.push(key);
            }
            Op::FindMinimum => {
                prop_assert_eq!(heap.find_minimum().ok(), reference.iter().min());
            }
            Op::DeleteMinimum => {
                let expected = reference.iter().min().copied();
                prop_assert_eq!(heap.delete_minimum().ok(), expected);
                if let Some(min) = expected {
                    let pos = reference.iter().position(|&k| k == min).unwrap();
                    reference.swap_remove(pos);
                }
            }
            Op::Remove(key) => {
                let pos = reference.iter().position(|&k| k == key);
                prop_assert_eq!(heap.remove(&key), pos.is_some());
                if let Some(pos) = pos {
                    reference.swap_remove(pos);
                }
            }
        }

        prop_assert!(heap.verify_structure());
        prop_assert_eq!(heap.len(), reference.len());
        prop_assert_eq!(heap.is_empty(), reference.is_empty());
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_binomial_minimum_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_minimum_invariant(ops)?;
    }

    #[test]
    fn test_binomial_delete_order_invariant(values in prop::collection::vec(any::<i32>(), 0..200)) {
        test_delete_order_invariant(values)?;
    }

    #[test]
    fn test_binomial_structure_invariant(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_structure_invariant(ops)?;
    }

    #[test]
    fn test_binomial_sorted_vec_matches_sort(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let heap: BinomialHeap<i32> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_binomial_iter_yields_every_key(values in prop::collection::vec(-50i32..50, 0..100)) {
        let heap: BinomialHeap<i32> = values.iter().copied().collect();
        let mut seen: Vec<i32> = heap.iter().copied().collect();
        let mut expected = values;
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}
