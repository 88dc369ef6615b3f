// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array and LCP array construction for byte strings.
//!
//! Suffix arrays are built with prefix doubling over two stable counting sorts, which runs in
//! *O*(*n* log *n*). The LCP array is derived from a finished suffix array with Kasai's algorithm
//! in *O*(*n*).
//!
//! # Examples
//!
//! ```
//! let data = b"banana";
//! let suffix_array = sufsort::suffix_array(data);
//! let lcp = sufsort::lcp_array(data, &suffix_array);
//!
//! assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
//! assert_eq!(lcp, [0, 1, 3, 0, 0, 2]);
//! ```

mod doubling;
mod kasai;
mod search;
mod suffix_array;

pub use search::{equal_range, lower_bound};
pub use suffix_array::SuffixArray;

/// Computes the suffix array of `data`.
///
/// Entry `k` of the result is the starting offset of the `k`-th smallest suffix of `data`. No
/// sentinel is required, and a suffix that is a proper prefix of another sorts first.
///
/// This operation is *O*(*n* log *n*).
///
/// # Panics
///
/// Panics if `data.len() > u32::MAX`.
#[must_use]
pub fn suffix_array(data: &[u8]) -> Vec<u32> {
    doubling::doubling(data)
}

/// Computes the LCP array of `data` from its suffix array.
///
/// Entry 0 of the result is always 0. Entry `k` for `k >= 1` is the length of the longest common
/// prefix of the suffixes at ranks `k - 1` and `k`.
///
/// This operation is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array.len() != data.len()` or if `suffix_array` is not a permutation of
/// `0..data.len()`.
#[must_use]
pub fn lcp_array(data: &[u8], suffix_array: &[u32]) -> Vec<u32> {
    kasai::kasai(data, suffix_array)
}
