// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cmp, mem};

// Ranks and offsets are stored as u32s and cast to usizes for indexing, so reject targets where
// that cast could truncate.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Target pointer width must be at least 32 bits");

/// The size of the alphabet
const ALPHABET_SIZE: usize = 256;

/// Computes the suffix array of `data` by prefix doubling.
///
/// After the round with step `d`, suffixes are ordered by their first `2d` bytes. Each round is a
/// two-key radix sort done as two stable passes: the candidate order is produced already sorted
/// by the second key (the rank at offset `d`), then counting-sorted by the first key. The loop
/// ends as soon as every suffix has a distinct rank or `d` reaches the data length, so it runs at
/// most log(*n*) rounds of *O*(*n*) work each.
///
/// # Panics
///
/// Panics if `data.len() > u32::MAX`.
pub(crate) fn doubling(data: &[u8]) -> Vec<u32> {
    assert!(
        u32::try_from(data.len()).is_ok(),
        "data must not be longer than u32::MAX bytes",
    );

    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let mut suffix_array = vec![0; n];
    let mut rank: Vec<u32> = data.iter().map(|&b| u32::from(b)).collect();
    let mut next_rank = vec![0; n];
    let mut order: Vec<u32> = (0..n as u32).collect();
    let mut count = vec![0; cmp::max(ALPHABET_SIZE, n)];

    // Order by the first byte alone
    counting_sort(&order, &rank, &mut count, &mut suffix_array);

    let mut step = 1;
    while step < n {
        // Suffixes without a second half sort lowest by the second key, and the rest follow in the
        // order of the suffix `step` bytes ahead of them
        let mut filled = 0;
        for i in n - step..n {
            order[filled] = i as u32;
            filled += 1;
        }
        for &suffix in &suffix_array {
            if suffix as usize >= step {
                order[filled] = suffix - step as u32;
                filled += 1;
            }
        }
        assert_eq!(filled, n, "candidate order must cover every suffix");

        counting_sort(&order, &rank, &mut count, &mut suffix_array);

        let mut max_rank = 0;
        next_rank[suffix_array[0] as usize] = 0;
        for k in 1..n {
            let current = suffix_array[k] as usize;
            let previous = suffix_array[k - 1] as usize;
            if rank_pair(&rank, current, step) != rank_pair(&rank, previous, step) {
                max_rank += 1;
            }
            next_rank[current] = max_rank;
        }
        mem::swap(&mut rank, &mut next_rank);

        if max_rank as usize == n - 1 {
            break;
        }

        step *= 2;
    }

    suffix_array
}

/// Stably sorts the positions in `order` by `keys` into `out`.
///
/// `count` must have room for every key value.
fn counting_sort(order: &[u32], keys: &[u32], count: &mut [u32], out: &mut [u32]) {
    count.fill(0);
    for &key in keys {
        count[key as usize] += 1;
    }

    // Calculate bucket ends
    let mut sum = 0;
    for x in count.iter_mut() {
        sum += *x;
        *x = sum;
    }

    // Walking backwards from the bucket ends keeps equal keys in their `order` order
    for &i in order.iter().rev() {
        let key = keys[i as usize] as usize;
        count[key] -= 1;
        out[count[key] as usize] = i;
    }
}

/// The sort key of the suffix at `i` for the round with step `step`.
///
/// A second half past the end of the data is `None`, which orders before every rank.
fn rank_pair(rank: &[u32], i: usize, step: usize) -> (u32, Option<u32>) {
    (rank[i], rank.get(i + step).copied())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn naive(data: &[u8]) -> Vec<u32> {
        let mut suffix_array: Vec<u32> = (0..data.len() as u32).collect();
        suffix_array.sort_by_key(|&i| &data[i as usize..]);
        suffix_array
    }

    #[test]
    fn banana() {
        assert_eq!(doubling(b"banana"), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn hello_world() {
        let text = "Hello, world!";
        let suffix_array = doubling(text.as_bytes());

        assert_eq!(
            &suffix_array,
            &[6, 12, 5, 0, 11, 1, 10, 2, 3, 4, 8, 9, 7],
        );
    }

    #[test]
    fn empty_string() {
        assert!(doubling(b"").is_empty());
    }

    #[test]
    fn single_byte() {
        assert_eq!(doubling(b"x"), [0]);
    }

    #[test]
    fn repeated_byte() {
        assert_eq!(doubling(b"aaaa"), [3, 2, 1, 0]);
        assert_eq!(doubling(&[0; 9]), [8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn full_byte_range() {
        let data: Vec<u8> = (0..=255).rev().chain(0..=255).collect();

        assert_eq!(doubling(&data), naive(&data));
    }

    #[test]
    fn longer_than_alphabet() {
        let data: Vec<u8> = b"mississippi".iter().copied().cycle().take(1000).collect();

        assert_eq!(doubling(&data), naive(&data));
    }

    proptest! {
        #[test]
        fn is_sorted_permutation(data in prop::collection::vec(any::<u8>(), 0..300)) {
            let suffix_array = doubling(&data);

            let mut seen = vec![false; data.len()];
            for &i in &suffix_array {
                prop_assert!(!seen[i as usize], "offset {} appears twice", i);
                seen[i as usize] = true;
            }
            prop_assert_eq!(suffix_array.len(), data.len());

            for k in 1..suffix_array.len() {
                prop_assert!(
                    data[suffix_array[k - 1] as usize..] < data[suffix_array[k] as usize..],
                    "ranks {} and {} are out of order",
                    k - 1,
                    k,
                );
            }
        }

        #[test]
        fn small_alphabet_matches_naive(data in prop::collection::vec(0u8..3, 0..200)) {
            prop_assert_eq!(doubling(&data), naive(&data));
        }
    }
}
