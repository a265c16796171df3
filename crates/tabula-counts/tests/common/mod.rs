//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-12;

/// Assert two proportion vectors are equal within tolerance
pub fn assert_vectors_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {}", context);

    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON);
    }
}

/// Deterministic integer codes cycling through `[low, low + modulus)`
pub fn generate_codes(len: usize, low: i32, modulus: i32) -> Vec<i32> {
    (0..len as i32).map(|i| low + (i * 7 + 3) % modulus).collect()
}

/// Deterministic positive weights
pub fn generate_weights(len: usize) -> Vec<f64> {
    (0..len).map(|i| 0.1 + (i as f64 * 0.01).cos().abs()).collect()
}
