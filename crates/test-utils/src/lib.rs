//! Shared test utilities for the profile-imager workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic sample and mesh generators
//! - Small hand-checkable fixtures
//! - Float comparison macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, three_point_samples};
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Approximate floating-point equality.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(92.08, 92.0800001, 1e-6); // passes
/// assert_approx_eq!(1.1, 1.0, 0.001);         // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality of two RGBA pixels, channel by channel.
///
/// ```ignore
/// assert_rgba_near!([10, 20, 30, 255], [11, 20, 29, 255], 1);
/// ```
#[macro_export]
macro_rules! assert_rgba_near {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left: [u8; 4] = $left;
        let right: [u8; 4] = $right;
        let tolerance: i32 = $tolerance;
        for channel in 0..4 {
            let diff = (left[channel] as i32 - right[channel] as i32).abs();
            if diff > tolerance {
                panic!(
                    "assertion failed: pixels differ in channel {}\n  left: `{:?}`,\n right: `{:?}`",
                    channel, left, right
                );
            }
        }
    }};
}
