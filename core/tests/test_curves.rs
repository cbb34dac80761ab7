//! Tests for weighting curves
//!
//! Front and back curves bias the sample mean to roughly 1/3 and 2/3; the
//! curve wrapper shares the stream of the generator it was derived from.

use seeded_rng_core_rs::{Curve, Generator};

fn sample_mean(amount: usize, mut draw: impl FnMut() -> f64) -> f64 {
    let mut mean = 0.0;
    for _ in 0..amount {
        mean += draw() / amount as f64;
    }
    mean
}

#[test]
fn test_front_curve_biases_low() {
    let mut rng = Generator::new(12345).weighted_front();
    let mean = sample_mean(10_000, || rng.random());

    assert!(
        (mean - 1.0 / 3.0).abs() < 0.05,
        "Front-weighted mean {} too far from 1/3",
        mean
    );
}

#[test]
fn test_back_curve_biases_high() {
    let mut rng = Generator::new(12345).weighted_back();
    let mean = sample_mean(10_000, || rng.random());

    assert!(
        (mean - 2.0 / 3.0).abs() < 0.05,
        "Back-weighted mean {} too far from 2/3",
        mean
    );
}

#[test]
fn test_curved_draws_stay_in_range() {
    let mut front = Generator::new(555).weighted_front();
    let mut back = Generator::new(555).weighted_back();

    for _ in 0..1000 {
        let low = front.random();
        let high = back.random();
        assert!(low >= 0.0 && low < 1.0);
        assert!(high >= 0.0 && high < 1.0);
    }
}

#[test]
fn test_custom_curve_applies_transform() {
    // A constant curve pins every draw, making derived operations predictable
    let mut rng = Generator::new(12345).with_curve(Curve::custom(|_| 0.25));

    assert_eq!(rng.random(), 0.25);
    assert_eq!(rng.random_int(4), Ok(1));
    assert_eq!(rng.random_range(0, 100), Ok(25));
}

#[test]
fn test_curve_wrapper_shares_stream() {
    // The wrapper draws from the same stream as the generator it came from:
    // its first draw is the curve applied to the stream's second raw value
    let mut plain = Generator::new(4242);
    let mut front = plain.weighted_front();

    let mut replay = Generator::new(4242);
    let first_raw = replay.random();
    let second_raw = replay.random();

    assert_eq!(plain.random(), first_raw);
    assert_eq!(front.random(), second_raw * second_raw);
}

#[test]
fn test_with_curve_bypasses_receiver_curve() {
    // Re-wrapping replaces the curve; it does not compose with the old one
    let front = Generator::new(777).weighted_front();
    let mut unbiased = front.with_curve(Curve::identity());

    let mut replay = Generator::new(777);
    assert_eq!(unbiased.random(), replay.random());
}

#[test]
fn test_escaping_curve_keeps_collection_ops_total() {
    // A curve outside [0, 1) voids the range guarantees but must not panic
    let mut rng = Generator::new(12345).with_curve(Curve::custom(|n| n * 2.0 - 0.5));
    let items = ["a", "b", "c"];

    for _ in 0..100 {
        let picked = rng.choose(&items).unwrap();
        assert!(items.contains(picked));
    }

    let mut deck = vec![1, 2, 3, 4, 5];
    rng.shuffle_in_place(&mut deck);
    let mut sorted = deck.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
}
