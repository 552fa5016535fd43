//! Integration tests for Display implementations.

#![cfg(all(feature = "typeclass", feature = "control"))]

use fpkit::control::{Either, try_catch};
use fpkit::nested;
use fpkit::typeclass::{
    All, Any, Average, Flatten, Identity, Max, Min, Nested, Product, Semigroup, Sum,
};
use rstest::rstest;

#[rstest]
#[case(Sum::new(15).to_string(), "Sum(15)")]
#[case(Product::new(120).to_string(), "Product(120)")]
#[case(Max::new(5).to_string(), "Max(5)")]
#[case(Min::new(-2).to_string(), "Min(-2)")]
#[case(All::new(false).to_string(), "All(false)")]
#[case(Any::new(true).to_string(), "Any(true)")]
#[case(Identity::new(3.5).to_string(), "Identity(3.5)")]
fn display_newtypes(#[case] rendered: String, #[case] expected: &str) {
    assert_eq!(rendered, expected);
}

#[rstest]
fn display_average_shows_sum_and_count() {
    let average = [1, 2, 3, 4, 5]
        .into_iter()
        .map(Average::new)
        .reduce(Average::concat)
        .unwrap();
    assert_eq!(average.to_string(), "Average(sum=15, count=5)");
}

#[rstest]
fn display_flatten_shows_elements() {
    assert_eq!(Flatten::new(vec![0, 1, 3, 8]).to_string(), "Flatten([0, 1, 3, 8])");
}

#[rstest]
fn display_nested_uses_brackets() {
    let nested = Nested::List(nested![[0, [1]], 3]);
    assert_eq!(nested.to_string(), "[[0, [1]], 3]");
}

#[rstest]
fn display_either() {
    assert_eq!(Either::<String, i32>::Right(6).to_string(), "Right(6)");
    assert_eq!(Either::<&str, i32>::Left("Whoops").to_string(), "Left(Whoops)");
}

#[rstest]
fn display_captured_panic() {
    let result = try_catch(|| -> i32 { panic!("disk full") });
    assert_eq!(result.to_string(), "Left(computation panicked: disk full)");
}
