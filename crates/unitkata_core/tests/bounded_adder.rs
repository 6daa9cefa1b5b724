//! Bounded adder behavior, written Given / When / Then.

use proptest::prelude::*;
use unitkata_core::{AdderError, BoundedAdder, SUM_CEILING, SUM_FLOOR};

#[test]
fn adds_two_small_operands() {
    // Given
    let adder = BoundedAdder::new(1, 1);

    // When
    let result = adder.compute();

    // Then
    assert_eq!(result, Ok(2));
}

#[test]
fn adds_a_second_pair_to_rule_out_a_hard_coded_result() {
    // Given
    let adder = BoundedAdder::new(1, 50);

    // When
    let result = adder.compute();

    // Then
    assert_eq!(result, Ok(51));
}

#[test]
fn accepts_sums_on_and_next_to_the_boundaries() {
    assert_eq!(BoundedAdder::new(0, 0).compute(), Ok(0));
    assert_eq!(BoundedAdder::new(0, 1).compute(), Ok(1));
    assert_eq!(BoundedAdder::new(99, 1).compute(), Ok(100));
    assert_eq!(BoundedAdder::new(-5, 5).compute(), Ok(SUM_FLOOR));
    assert_eq!(BoundedAdder::new(150, -50).compute(), Ok(SUM_CEILING));
}

#[test]
fn sum_below_zero_is_under_limit() {
    let err = BoundedAdder::new(0, -1)
        .compute()
        .expect_err("negative sum must be rejected");

    assert_eq!(err, AdderError::UnderLimitResult { sum: -1 });
}

#[test]
fn sum_above_one_hundred_is_over_limit() {
    let err = BoundedAdder::new(100, 1)
        .compute()
        .expect_err("sum over 100 must be rejected");

    assert_eq!(err, AdderError::OverLimitResult { sum: 101 });
}

#[test]
fn operands_are_only_checked_when_computing() {
    let adder = BoundedAdder::new(-40, 500);

    assert_eq!(adder.augend(), -40);
    assert_eq!(adder.addend(), 500);
    assert!(matches!(
        adder.compute(),
        Err(AdderError::OverLimitResult { sum: 460 })
    ));
}

#[test]
fn compute_is_repeatable() {
    let adder = BoundedAdder::new(30, 12);

    assert_eq!(adder.compute(), adder.compute());
    assert_eq!(
        BoundedAdder::new(-3, 0).compute(),
        BoundedAdder::new(-3, 0).compute()
    );
}

proptest! {
    #[test]
    fn in_range_sums_are_returned_unchanged(sum in 0i32..=100, augend in -10_000i32..=10_000) {
        let addend = sum - augend;
        prop_assert_eq!(BoundedAdder::new(augend, addend).compute(), Ok(sum));
    }

    #[test]
    fn negative_sums_are_under_limit(deficit in 1i32..=10_000, augend in -10_000i32..=10_000) {
        let addend = -deficit - augend;
        let is_under_limit = matches!(
            BoundedAdder::new(augend, addend).compute(),
            Err(AdderError::UnderLimitResult { .. })
        );
        prop_assert!(is_under_limit);
    }

    #[test]
    fn sums_over_one_hundred_are_over_limit(excess in 1i32..=10_000, augend in -10_000i32..=10_000) {
        let addend = 100 + excess - augend;
        let is_over_limit = matches!(
            BoundedAdder::new(augend, addend).compute(),
            Err(AdderError::OverLimitResult { .. })
        );
        prop_assert!(is_over_limit);
    }
}
