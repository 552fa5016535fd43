//! Property-based tests for Functor and Monad laws.
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//! - **Left Identity**: `wrap(a).chain(f) == f(a)`
//! - **Right Identity**: `m.chain(wrap) == m`
//! - **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`

#![cfg(feature = "control")]

use fpkit::control::Either;
use fpkit::typeclass::{Functor, Identity, Monad};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{0,8}".prop_map(Either::Left),
    ]
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value: i32) {
        prop_assert_eq!(Identity::new(value).map(|x| x), Identity::new(value));
    }

    #[test]
    fn prop_identity_composition_law(value: i32) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Identity::new(value).map(function1).map(function2);
        let right = Identity::new(value).map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_string_composition_law(value in "[a-z]{0,16}") {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = Identity::new(value.clone()).map(function1).map(function2);
        let right = Identity::new(value).map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_left_identity(value: i32) {
        let function = |n: i32| -> Either<String, i32> {
            if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("odd: {n}")) }
        };
        prop_assert_eq!(Either::Right(value).chain(function), function(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().chain(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let function1 = |n: i32| -> Either<String, i32> {
            if n > 0 { Either::Right(n.wrapping_sub(1)) } else { Either::Left("non-positive".to_string()) }
        };
        let function2 = |n: i32| -> Either<String, i32> { Either::Right(n.wrapping_mul(3)) };

        let left = value.clone().chain(function1).chain(function2);
        let right = value.chain(|x| function1(x).chain(function2));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_right_map_fold_applies_success_branch(value: i32) {
        let function = |n: i32| i64::from(n) * 2;
        let result = Either::<String, i32>::Right(value)
            .map(function)
            .fold(|_| i64::MIN, |x| x);
        prop_assert_eq!(result, function(value));
    }
}
