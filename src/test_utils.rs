// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;
