//! Identity preservation and in-place mutation of caller objects.

mod common;

use common::{ids, ranges, TestRange};
use range_normalizer::{
    normalize, GapPolicy, Interval, NormalizeOptions, Normalizer, OverlapPolicy,
};
use std::collections::HashSet;

#[test]
fn test_output_contains_only_input_objects() {
    let mut input = ranges(&[(1, 4), (2, 6), (7, 9)]);
    let input_ids: HashSet<usize> = input.iter().map(|r| r.id).collect();
    let addresses: HashSet<*const TestRange<i32>> = input.iter().map(|r| r as *const _).collect();

    let result = Normalizer::default().normalize(input.iter_mut());

    assert_eq!(result.len(), 3);
    for range in &result {
        assert!(input_ids.contains(&range.id));
        assert!(addresses.contains(&(&**range as *const _)));
    }
}

#[test]
fn test_kept_ranges_mutated_in_place() {
    let mut input = ranges(&[(5, 7), (1, 3), (2, 4)]);
    let options = NormalizeOptions::new().with_gap_policy(GapPolicy::ExpandLeft);

    let result = normalize(input.iter_mut(), &options);
    assert_eq!(result.len(), 3);
    drop(result);

    // [1,3) untouched, [2,4) trimmed to [3,4), [5,7) grown back to [4,7)
    assert_eq!((input[1].from, input[1].to), (1, 3));
    assert_eq!((input[2].from, input[2].to), (3, 4));
    assert_eq!((input[0].from, input[0].to), (4, 7));
}

#[test]
fn test_dropped_ranges_left_untouched_by_sweep() {
    let mut input = ranges(&[(0, 10), (2, 3), (4, 4), (8, 6)]);

    let result = Normalizer::default().normalize(input.iter_mut());
    assert_eq!(result.len(), 1);
    drop(result);

    assert_eq!((input[1].from, input[1].to), (2, 3));
    assert_eq!((input[2].from, input[2].to), (4, 4));
    assert_eq!((input[3].from, input[3].to), (8, 6));
}

#[test]
fn test_second_pass_returns_same_objects() {
    let mut input = ranges(&[(5, 7), (1, 3)]);
    let first_id = input[1].id;
    let second_id = input[0].id;
    let normalizer = Normalizer::default();

    let first = normalizer.normalize(input.iter_mut());
    assert_eq!(ids(&first), vec![first_id, second_id]);

    let second = normalizer.normalize(first);
    assert_eq!(ids(&second), vec![first_id, second_id]);
}

#[test]
fn test_first_duplicate_in_input_order_survives() {
    let mut input = ranges(&[(3, 4), (1, 2), (1, 2), (1, 2)]);
    let expected = input[1].id;

    let result = Normalizer::default().normalize(input.iter_mut());

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, expected);
}

#[test]
fn test_unsized_handles() {
    // Trait objects work as handles too
    trait Span: range_normalizer::Endpoints<Value = i64> {}
    impl Span for Interval<i64> {}

    let mut a = Interval::new(0i64, 5);
    let mut b = Interval::new(3i64, 8);
    let handles: Vec<&mut dyn Span> = vec![&mut a, &mut b];

    let options = NormalizeOptions::new().with_overlap_policy(OverlapPolicy::KeepRightChunk);
    let result = normalize(handles, &options);
    assert_eq!(result.len(), 2);
    drop(result);

    assert_eq!(a, Interval::new(0, 3));
    assert_eq!(b, Interval::new(3, 8));
}
