// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the LCP array of `data` with Kasai's algorithm.
///
/// Suffixes are visited in text order rather than rank order. If the suffix at `i` shares `h`
/// bytes with its rank predecessor, the suffix at `i + 1` shares at least `h - 1` with its own, so
/// the running match length is only ever decremented by one between positions and the total
/// number of byte comparisons is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array.len() != data.len()` or if an entry of `suffix_array` is out of bounds.
pub(crate) fn kasai(data: &[u8], suffix_array: &[u32]) -> Vec<u32> {
    let n = data.len();
    assert_eq!(
        suffix_array.len(),
        n,
        "suffix array length must match data length",
    );

    let mut rank = vec![0; n];
    for (k, &suffix) in suffix_array.iter().enumerate() {
        rank[suffix as usize] = k;
    }

    let mut lcp = vec![0; n];
    let mut h = 0;
    for i in 0..n {
        let r = rank[i];
        if r > 0 {
            let j = suffix_array[r - 1] as usize;
            while i + h < n && j + h < n && data[i + h] == data[j + h] {
                h += 1;
            }
            lcp[r] = h as u32;
            h = h.saturating_sub(1);
        }
    }

    lcp
}
