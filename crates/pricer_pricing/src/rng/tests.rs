//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - PRNG seed reproducibility
//! - Stream derivation for parallel work
//! - Distribution properties (uniform range, normal moments)
//! - Statistical properties via property-based testing

use super::*;
use proptest::prelude::*;

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = PricerRng::from_seed(12345);
    let mut rng2 = PricerRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }

    let mut rng3 = PricerRng::from_seed(12345);
    let mut rng4 = PricerRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng3.gen_normal(), rng4.gen_normal());
    }
}

/// Verifies that different seeds diverge.
#[test]
fn test_different_seeds_differ() {
    let mut rng1 = PricerRng::from_seed(1);
    let mut rng2 = PricerRng::from_seed(2);

    let a: Vec<f64> = (0..10).map(|_| rng1.gen_uniform()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.gen_uniform()).collect();
    assert_ne!(a, b);
}

/// Verifies that uniform values are in the correct range [0, 1).
#[test]
fn test_uniform_range() {
    let mut rng = PricerRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

/// Verifies that bounded uniforms stay in their half-open interval.
#[test]
fn test_uniform_range_bounds() {
    let mut rng = PricerRng::from_seed(7);
    let (lower, upper) = (0.999, 1.0);

    for _ in 0..10_000 {
        let value = rng.gen_uniform_range(lower, upper);
        assert!(value >= lower && value < upper, "value {} escaped", value);
    }

    let mut buffer = vec![0.0; 1000];
    rng.fill_uniform_range(&mut buffer, 0.0, 0.001);
    assert!(buffer.iter().all(|&v| (0.0..0.001).contains(&v)));
}

/// Verifies that batch fill operations work correctly.
#[test]
fn test_fill_uniform() {
    let mut rng = PricerRng::from_seed(42);
    let mut buffer = vec![0.0; 1000];

    rng.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert!((0.0..1.0).contains(&value));
    }
}

/// Verifies that batch and single draws consume the same sequence.
#[test]
fn test_fill_normal_matches_single_draws() {
    let mut batch_rng = PricerRng::from_seed(99);
    let mut single_rng = PricerRng::from_seed(99);

    let mut buffer = vec![0.0; 64];
    batch_rng.fill_normal(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single_rng.gen_normal());
    }
}

/// Verifies that empty buffers are handled gracefully.
#[test]
fn test_empty_buffer() {
    let mut rng = PricerRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];

    rng.fill_uniform(&mut empty);
    rng.fill_normal(&mut empty);
    assert!(empty.is_empty());
}

/// Verifies the first two moments of the normal generator.
#[test]
fn test_normal_moments() {
    let mut rng = PricerRng::from_seed(2024);
    let n = 100_000;
    let mut buffer = vec![0.0; n];
    rng.fill_normal(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / n as f64;
    let variance = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    // Five standard errors of the sample mean
    assert!(mean.abs() < 5.0 / (n as f64).sqrt(), "mean {}", mean);
    assert!((variance - 1.0).abs() < 0.03, "variance {}", variance);
}

/// Verifies stream derivation is deterministic and separates streams.
#[test]
fn test_for_stream() {
    let mut s0 = PricerRng::for_stream(42, 0);
    let mut s0_again = PricerRng::for_stream(42, 0);
    let mut s1 = PricerRng::for_stream(42, 1);

    assert_eq!(s0.seed(), s0_again.seed());
    assert_ne!(s0.seed(), s1.seed());
    assert_ne!(s0.seed(), PricerRng::for_stream(43, 0).seed());

    for _ in 0..10 {
        assert_eq!(s0.gen_normal(), s0_again.gen_normal());
    }
    assert_ne!(s0.gen_uniform(), s1.gen_uniform());
}

/// Verifies that cloning forks the sequence at the current position.
#[test]
fn test_clone_forks_sequence() {
    let mut rng = PricerRng::from_seed(5);
    rng.gen_uniform();

    let mut fork = rng.clone();
    assert_eq!(rng.gen_uniform(), fork.gen_uniform());
    assert_eq!(fork.seed(), 5);
}

proptest! {
    #[test]
    fn prop_uniform_range_respects_bounds(
        seed in any::<u64>(),
        lower in 0.0_f64..0.99,
        width in 1e-6_f64..0.01,
    ) {
        let mut rng = PricerRng::from_seed(seed);
        let upper = lower + width;
        for _ in 0..100 {
            let v = rng.gen_uniform_range(lower, upper);
            prop_assert!(v >= lower && v < upper);
        }
    }

    #[test]
    fn prop_stream_seeds_distinct(seed in any::<u64>(), a in 0_u64..1000, b in 0_u64..1000) {
        prop_assume!(a != b);
        prop_assert_ne!(
            PricerRng::for_stream(seed, a).seed(),
            PricerRng::for_stream(seed, b).seed()
        );
    }
}
