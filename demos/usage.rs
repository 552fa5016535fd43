//! Walkthrough of the folding and chaining utilities.
//!
//! Run with `RUST_LOG=fpkit=trace cargo run --example usage` to see the
//! fold and panic-capture events.

use fpkit::nested;
use fpkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let nested = nested![[0, [1]], [3, [[[8]]]], [4, [10, 6, [7]]]];
    let numbers = vec![1, 2, 3, 4, 5];
    let flags = vec![false, true, false, true];
    let bad: Option<i32> = None;

    println!("{}", fold::<Sum<i32>, _>(numbers.clone()));
    println!("{}", fold::<Product<i32>, _>(numbers.clone()));
    println!("{}", fold::<Max<i32>, _>(numbers.clone()));
    println!("{}", fold::<Average<i32>, _>(numbers));
    println!("{}", fold::<All<bool>, _>(flags.clone()));
    println!("{}", fold::<Any<bool>, _>(flags));
    println!("{:?}", flatten(nested.clone()));
    println!("{}", flat_fold::<Sum<i32>, _>(nested.clone()));
    println!("{}", flat_fold::<Product<i32>, _>(nested.clone()));
    println!("{}", flat_fold::<Max<i32>, _>(nested.clone()));
    println!("{}", flat_fold::<Average<i32>, _>(nested.clone()));
    println!(
        "{:?}",
        flat_map(
            |values: Vec<i32>| values.into_iter().map(|x| x + 1).collect::<Vec<_>>(),
            nested,
        )
        .into_inner()
    );

    println!(
        "{}",
        Identity::new(3)
            .map(|x| x + 4)
            .map(|x| x * 5)
            .fold(|x| f64::from(x) / 10.0)
    );

    println!(
        "{}",
        try_catch(|| 1 + 1).fold(|_| "Whoops".to_string(), |x| x.to_string())
    );

    println!(
        "{}",
        try_catch(|| -> i32 { panic!("division failed") })
            .fold(|error| format!("Whoops: {}", error.message()), |x| x.to_string())
    );

    println!(
        "{}",
        from_nullable(bad)
            .map(|x| x + 1)
            .fold(|()| "Whoops".to_string(), |x| x.to_string())
    );
}
