// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cmp, ops::Range};

/// Returns the range of ranks whose suffixes start with `pattern`.
///
/// Each suffix is truncated to `pattern.len()` bytes before it is compared, so a suffix shorter
/// than `pattern` is simply unequal to it. The range is found with two binary searches: the
/// leftmost rank whose truncated suffix is `>= pattern`, and the leftmost rank whose truncated
/// suffix is `> pattern`.
///
/// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
///
/// # Examples
///
/// ```
/// let data = b"banana";
/// let suffix_array = sufsort::suffix_array(data);
/// let range = sufsort::equal_range(data, &suffix_array, b"ana");
///
/// assert_eq!(range, 1..3);
/// assert_eq!(&suffix_array[range], &[3, 1]);
/// ```
#[must_use]
pub fn equal_range(data: &[u8], suffix_array: &[u32], pattern: &[u8]) -> Range<usize> {
    let start = lower_bound(data, suffix_array, pattern);
    let end = start
        + suffix_array[start..]
            .partition_point(|&suffix| truncated(data, suffix, pattern.len()) <= pattern);

    start..end
}

/// Returns the leftmost rank whose suffix, truncated to `key.len()` bytes, is not less than `key`.
///
/// If `key` is itself a suffix of `data`, this is that suffix's rank.
#[must_use]
pub fn lower_bound(data: &[u8], suffix_array: &[u32], key: &[u8]) -> usize {
    suffix_array.partition_point(|&suffix| truncated(data, suffix, key.len()) < key)
}

fn truncated(data: &[u8], suffix: u32, len: usize) -> &[u8] {
    let start = suffix as usize;
    &data[start..cmp::min(start + len, data.len())]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::doubling::doubling;

    #[test]
    fn banana_ranges() {
        let data = b"banana";
        let suffix_array = doubling(data);

        assert_eq!(equal_range(data, &suffix_array, b"a"), 0..3);
        assert_eq!(equal_range(data, &suffix_array, b"na"), 4..6);
        assert_eq!(equal_range(data, &suffix_array, b"banana"), 3..4);
    }

    #[test]
    fn missing_pattern_is_empty() {
        let data = b"banana";
        let suffix_array = doubling(data);

        assert!(equal_range(data, &suffix_array, b"xyz").is_empty());
        assert!(equal_range(data, &suffix_array, b"bananas").is_empty());
        assert!(equal_range(data, &suffix_array, b"nab").is_empty());
    }

    #[test]
    fn empty_data() {
        assert!(equal_range(b"", &[], b"a").is_empty());
    }

    #[test]
    fn lower_bound_finds_own_rank() {
        let data = b"mississippi";
        let suffix_array = doubling(data);

        for (rank, &suffix) in suffix_array.iter().enumerate() {
            assert_eq!(lower_bound(data, &suffix_array, &data[suffix as usize..]), rank);
        }
    }

    proptest! {
        #[test]
        fn count_matches_brute_force(
            data in prop::collection::vec(0u8..3, 0..200),
            pattern in prop::collection::vec(0u8..3, 1..5),
        ) {
            let suffix_array = doubling(&data);
            let range = equal_range(&data, &suffix_array, &pattern);

            let expected = data.windows(pattern.len()).filter(|w| *w == pattern.as_slice()).count();
            prop_assert_eq!(range.len(), expected);
            for &suffix in &suffix_array[range] {
                prop_assert!(data[suffix as usize..].starts_with(&pattern));
            }
        }
    }
}
