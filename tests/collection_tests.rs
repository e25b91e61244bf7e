//! Integration tests for the collection facade.
//!
//! These tests drive complete pipelines through the public API: sources,
//! combinators, iteration in both directions and materialization.

use std::cell::Cell;
use std::collections::{BTreeSet, LinkedList, VecDeque};

use rstest::rstest;
use seqview::prelude::*;
use seqview::{AlreadyConsumedError, BoxedView};

/// A move-only element type.
#[derive(Debug, PartialEq, Eq)]
struct Ticket {
    number: u32,
}

fn tickets(numbers: &[u32]) -> Vec<Ticket> {
    numbers.iter().map(|&number| Ticket { number }).collect()
}

// =============================================================================
// Ranges
// =============================================================================

#[rstest]
#[case(2, 10, 3, vec![2, 5, 8])]
#[case(10, 2, 3, vec![])]
#[case(10, 2, -3, vec![10, 7, 4])]
#[case(0, 10, 5, vec![0, 5])]
#[case(0, 11, 5, vec![0, 5, 10])]
#[case(-5, 5, 4, vec![-5, -1, 3])]
#[case(3, 3, 1, vec![])]
fn test_range_by_boundaries(
    #[case] start: i32,
    #[case] finish: i32,
    #[case] step: i32,
    #[case] expected: Vec<i32>,
) {
    let collection = range_by(start, finish, step).unwrap();
    assert_eq!(collection.to::<Vec<i32>>(), expected);
    assert_eq!(collection.len(), Some(expected.len()));
}

#[rstest]
fn test_range_counts_from_zero() {
    assert_eq!(range(5).to::<Vec<i32>>(), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_range_between_unit_step() {
    assert_eq!(range_between(-2_i8, 2).to::<Vec<i8>>(), vec![-2, -1, 0, 1]);
}

#[rstest]
fn test_range_by_zero_step_is_rejected() {
    let result = range_by(0_u32, 5, 0);
    assert_eq!(result.unwrap_err(), ViewError::ZeroStep);
}

#[rstest]
fn test_range_backward_traversal() {
    let collection = range_by(1_u64, 20, 6).unwrap();
    assert_eq!(collection.iter_rev().collect::<Vec<_>>(), vec![19, 13, 7, 1]);
}

#[rstest]
fn test_range_reaching_type_limits() {
    let collection = range_between(u8::MAX - 2, u8::MAX);
    assert_eq!(collection.to::<Vec<u8>>(), vec![253, 254]);
    let descending = range_by(i16::MIN + 3, i16::MIN, -1).unwrap();
    assert_eq!(
        descending.to::<Vec<i16>>(),
        vec![i16::MIN + 3, i16::MIN + 2, i16::MIN + 1]
    );
}

// =============================================================================
// Borrowed containers
// =============================================================================

#[rstest]
fn test_vec_forward_and_backward() {
    let numbers = vec![1, 2, 3];
    let collection = from_container(&numbers);
    assert_eq!(collection.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    assert_eq!(collection.iter_rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
}

#[rstest]
fn test_slice_and_array_sources() {
    let array = [4, 5, 6, 7];
    let from_array: Vec<i32> = from_container(&array).reverse().to();
    let from_slice: Vec<i32> = from_container(&array[1..3]).to();
    assert_eq!(from_array, vec![7, 6, 5, 4]);
    assert_eq!(from_slice, vec![5, 6]);
}

#[rstest]
fn test_list_and_forward_only_containers_match_indexable_ones() {
    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let vector_result: Vec<i32> = from_container(&values)
        .filter(|value| **value > 2)
        .reverse()
        .to();

    let list: LinkedList<i32> = values.iter().copied().collect();
    let list_result: Vec<i32> = from_container(&list)
        .filter(|value| **value > 2)
        .reverse()
        .to();

    let deque: VecDeque<i32> = values.iter().copied().collect();
    let deque_result: Vec<i32> = forward_only(&deque)
        .filter(|value| **value > 2)
        .reverse()
        .to();

    assert_eq!(vector_result, vec![6, 9, 5, 4, 3]);
    assert_eq!(list_result, vector_result);
    assert_eq!(deque_result, vector_result);
}

#[rstest]
fn test_sorted_set_backward() {
    let set: BTreeSet<&str> = ["pear", "apple", "fig"].into_iter().collect();
    let backward: Vec<&str> = from_container(&set).iter_rev().copied().collect();
    assert_eq!(backward, vec!["pear", "fig", "apple"]);
}

#[rstest]
fn test_borrowed_materialization_clones() {
    let words = vec![String::from("alpha"), String::from("beta")];
    let copied: Vec<String> = from_container(&words).to();
    assert_eq!(copied, words);
    // The source is untouched and can be traversed again.
    assert_eq!(from_container(&words).iter().count(), 2);
}

#[rstest]
fn test_borrowed_collection_is_reusable() {
    let numbers = vec![10, 20, 30];
    let collection = from_container(&numbers).filter(|value| **value != 20);
    let first: Vec<i32> = collection.to();
    let second: Vec<i32> = collection.to();
    assert_eq!(first, second);
}

// =============================================================================
// Owning views
// =============================================================================

#[rstest]
fn test_owning_move_only_elements_are_moved_out_once() {
    let collection = from_owned(tickets(&[1, 2, 3, 4]));
    let even = collection.filter(|ticket| ticket.number % 2 == 0);
    let moved: Vec<Ticket> = even.to();
    assert_eq!(moved, tickets(&[2, 4]));

    let again = collection.try_iter();
    assert_eq!(
        again.err(),
        Some(ViewError::AlreadyConsumed(AlreadyConsumedError {
            view_name: "OwnedView",
            method_name: "open",
        }))
    );
}

#[rstest]
fn test_owning_source_is_untouched_until_traversal() {
    let produced = Cell::new(0);
    let source = (0..3).map(|number| {
        produced.set(produced.get() + 1);
        Ticket { number }
    });
    let pipeline = from_owned(source)
        .filter(|ticket| ticket.number > 0)
        .reverse();
    assert_eq!(produced.get(), 0);

    let numbers: Vec<u32> = pipeline.iter().map(|ticket| ticket.number).collect();
    assert_eq!(numbers, vec![2, 1]);
    assert_eq!(produced.get(), 3);
}

#[rstest]
fn test_owning_backward_traversal() {
    let collection = from_owned(tickets(&[7, 8, 9]));
    let numbers: Vec<u32> = collection.iter_rev().map(|ticket| ticket.number).collect();
    assert_eq!(numbers, vec![9, 8, 7]);
}

#[rstest]
fn test_owning_from_any_into_iterator() {
    let collection = from_owned((1..=3).map(|value| value * 100));
    assert_eq!(collection.len(), Some(3));
    assert_eq!(collection.to::<Vec<i32>>(), vec![100, 200, 300]);
}

#[rstest]
fn test_owning_consumer_by_hand() {
    let collection = from_owned(vec![Box::new('a'), Box::new('b')]);
    let mut consumer = collection.consumer();
    assert!(consumer.move_last());
    assert_eq!(*consumer.current(), 'b');
    assert!(consumer.move_prev());
    assert_eq!(*consumer.current(), 'a');
    assert!(!consumer.move_prev());
}

#[rstest]
#[should_panic(expected = "current called twice")]
fn test_owning_double_retrieval_panics() {
    let collection = from_owned(tickets(&[1]));
    let mut consumer = collection.consumer();
    assert!(consumer.move_first());
    let _ = consumer.current();
    let _ = consumer.current();
}

// =============================================================================
// Empty sources
// =============================================================================

#[rstest]
fn test_empty_sources_yield_nothing() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(from_container(&empty).iter().next(), None);
    assert_eq!(from_container(&empty).iter_rev().next(), None);
    assert_eq!(from_owned(Vec::<Ticket>::new()).iter().next(), None);
    assert_eq!(range(0_u8).iter_rev().next(), None);
    assert_eq!(repeat("x", 0).iter().next(), None);
}

#[rstest]
fn test_empty_source_consumer_never_positions() {
    let empty: LinkedList<u8> = LinkedList::new();
    let mut consumer = from_container(&empty).reverse().consumer();
    assert!(!consumer.move_first());
    assert!(!consumer.move_last());
}

// =============================================================================
// Filter and predicate evaluation
// =============================================================================

#[rstest]
fn test_predicate_runs_once_per_candidate_in_each_direction() {
    let calls = Cell::new(0);
    let collection = range(12_u32).filter(|value| {
        calls.set(calls.get() + 1);
        value % 5 == 0
    });

    assert_eq!(collection.to::<Vec<u32>>(), vec![0, 5, 10]);
    assert_eq!(calls.get(), 12);

    calls.set(0);
    assert_eq!(collection.iter_rev().collect::<Vec<_>>(), vec![10, 5, 0]);
    assert_eq!(calls.get(), 12);
}

#[rstest]
fn test_nothing_is_computed_before_traversal() {
    let calls = Cell::new(0);
    let collection = range(100_i32).filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    let _reversed = collection.reverse();
    assert_eq!(calls.get(), 0);

    let first = collection.iter().next();
    assert_eq!(first, Some(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_chained_filters() {
    let collection = range(30_i32)
        .filter(|value| value % 2 == 0)
        .filter(|value| value % 3 == 0);
    assert_eq!(collection.to::<Vec<i32>>(), vec![0, 6, 12, 18, 24]);
}

// =============================================================================
// Repetition and type erasure
// =============================================================================

#[rstest]
fn test_repeat_in_pipeline() {
    let collection = repeat(String::from("echo"), 3).reverse();
    assert_eq!(collection.len(), Some(3));
    let items: Vec<String> = collection.to();
    assert_eq!(items, vec!["echo"; 3]);
}

#[rstest]
fn test_boxed_pipelines_match_concrete_ones() {
    let numbers = vec![5, 3, 8, 1];
    let concrete = from_container(&numbers).filter(|value| **value > 2).reverse();
    let boxed: Collection<BoxedView<'_, &i32, Borrowed>> = concrete.boxed();
    assert_eq!(boxed.to::<Vec<i32>>(), concrete.to::<Vec<i32>>());
    assert_eq!(
        boxed.iter_rev().collect::<Vec<_>>(),
        concrete.iter_rev().collect::<Vec<_>>()
    );
}

#[rstest]
fn test_boxed_owning_view_stays_single_use() {
    let boxed = from_owned(tickets(&[1, 2])).boxed();
    assert_eq!(boxed.iter().count(), 2);
    assert!(boxed.try_to::<Vec<Ticket>>().is_err());
}

// =============================================================================
// Iterator adaptation
// =============================================================================

#[rstest]
fn test_iterator_is_fused_after_exhaustion() {
    let mut iter = range(2_i32).iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[rstest]
fn test_iterator_composes_with_std_adapters() {
    let numbers = vec![1, 2, 3, 4];
    let sum: i32 = from_container(&numbers)
        .reverse()
        .iter()
        .take(2)
        .sum();
    assert_eq!(sum, 7);
}

#[rstest]
fn test_for_loop_over_collection_reference() {
    let collection = range_between(1_usize, 4);
    let mut product = 1;
    for value in &collection {
        product *= value;
    }
    assert_eq!(product, 6);
}
