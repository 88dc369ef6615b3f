// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    cmp::Ordering::{Greater, Less},
    error::Error,
    fmt::{self, Display, Formatter},
};

use log::debug;

use crate::TextIndex;

/// The separator used by [`longest_common_substring()`]
pub const DEFAULT_SEPARATOR: u8 = b'#';

/// An error indicating that a longest common substring query was rejected.
///
/// The two texts are joined around a separator byte which must not occur in either of them,
/// otherwise a match could run across the boundary.
///
/// # Examples
///
/// ```
/// use kasa::LcsError;
///
/// let result = kasa::longest_common_substring(b"a#b", b"ab");
///
/// assert!(matches!(result, Err(LcsError::SeparatorInFirst(b'#'))));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LcsError {
    /// The separator occurs in the first text
    SeparatorInFirst(u8),
    /// The separator occurs in the second text
    SeparatorInSecond(u8),
}

impl Display for LcsError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LcsError::SeparatorInFirst(separator) => {
                write!(f, "separator {separator:#04x} occurs in the first text")
            }
            LcsError::SeparatorInSecond(separator) => {
                write!(f, "separator {separator:#04x} occurs in the second text")
            }
        }
    }
}

impl Error for LcsError {}

/// Finds the longest substring common to `first` and `second`, joining them with
/// [`DEFAULT_SEPARATOR`].
///
/// This is a shorthand for [`longest_common_substring_with_separator()`].
///
/// # Errors
///
/// Returns an error if either text contains `#`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), kasa::LcsError> {
/// let lcs = kasa::longest_common_substring(b"canada", b"ananas")?;
///
/// assert_eq!(lcs, b"ana");
/// # Ok(())
/// # }
/// ```
pub fn longest_common_substring<'a>(first: &'a [u8], second: &[u8]) -> Result<&'a [u8], LcsError> {
    longest_common_substring_with_separator(first, second, DEFAULT_SEPARATOR)
}

/// Finds the longest substring common to `first` and `second`.
///
/// A generalized suffix array is built over `first`, `separator`, and `second` concatenated, and
/// its LCP array is scanned for the largest value between two adjacent suffixes that start on
/// opposite sides of the separator. The returned slice points into `first`. If several common
/// substrings share the maximum length, the one between the lowest-ranked such pair wins.
///
/// Returns an empty slice if the texts have no byte in common.
///
/// This operation is *O*(*n* log *n*), where `n` is the combined length of both texts.
///
/// # Errors
///
/// Returns an error if `separator` occurs in either text. The check happens before any index is
/// built.
pub fn longest_common_substring_with_separator<'a>(
    first: &'a [u8],
    second: &[u8],
    separator: u8,
) -> Result<&'a [u8], LcsError> {
    if first.contains(&separator) {
        return Err(LcsError::SeparatorInFirst(separator));
    }
    if second.contains(&separator) {
        return Err(LcsError::SeparatorInSecond(separator));
    }

    let mut joined = Vec::with_capacity(first.len() + 1 + second.len());
    joined.extend_from_slice(first);
    joined.push(separator);
    joined.extend_from_slice(second);
    let index = TextIndex::new(joined);

    // Suffixes starting before the separator belong to `first`, after it to `second`
    let boundary = first.len();
    let side = |suffix: u32| (suffix as usize).cmp(&boundary);

    let suffix_array = index.suffix_array();
    let mut best_len = 0;
    let mut best_start = 0;
    for (k, &lcp) in index.lcp_array().iter().enumerate().skip(1) {
        let (a, b) = (suffix_array[k - 1], suffix_array[k]);
        let crosses = matches!((side(a), side(b)), (Less, Greater) | (Greater, Less));
        if crosses && lcp as usize > best_len {
            best_len = lcp as usize;
            best_start = a.min(b) as usize;
        }
    }

    debug!("longest common substring is {best_len} bytes at offset {best_start}");

    Ok(&first[best_start..best_start + best_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_len(first: &[u8], second: &[u8]) -> usize {
        let mut best = 0;
        for i in 0..first.len() {
            for j in 0..second.len() {
                let len = first[i..]
                    .iter()
                    .zip(&second[j..])
                    .take_while(|(a, b)| a == b)
                    .count();
                best = best.max(len);
            }
        }
        best
    }

    #[test]
    fn canada_ananas() {
        assert_eq!(longest_common_substring(b"canada", b"ananas"), Ok(&b"ana"[..]));
    }

    #[test]
    fn no_common_bytes() {
        assert_eq!(longest_common_substring(b"abc", b"xyz"), Ok(&b""[..]));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(longest_common_substring(b"", b"abc"), Ok(&b""[..]));
        assert_eq!(longest_common_substring(b"abc", b""), Ok(&b""[..]));
        assert_eq!(longest_common_substring(b"", b""), Ok(&b""[..]));
    }

    #[test]
    fn whole_text_in_common() {
        assert_eq!(
            longest_common_substring(b"needle", b"haystack with a needle in it"),
            Ok(&b"needle"[..]),
        );
    }

    #[test]
    fn match_within_one_text_is_ignored() {
        // "xxxx" repeats inside the first text only
        assert_eq!(
            longest_common_substring(b"xxxxaxxxx", b"xa"),
            Ok(&b"xa"[..]),
        );
    }

    #[test]
    fn separator_in_first() {
        assert_eq!(
            longest_common_substring(b"ab#c", b"abc"),
            Err(LcsError::SeparatorInFirst(b'#')),
        );
    }

    #[test]
    fn separator_in_second() {
        assert_eq!(
            longest_common_substring_with_separator(b"abc", b"a\0c", 0),
            Err(LcsError::SeparatorInSecond(0)),
        );
    }

    #[test]
    fn custom_separator() {
        assert_eq!(
            longest_common_substring_with_separator(b"x#yz#", b"#yz#w", b'|'),
            Ok(&b"#yz#"[..]),
        );
    }

    #[test]
    fn agrees_with_brute_force() {
        let texts: [&[u8]; 5] = [b"mississippi", b"sippin", b"abababab", b"babba", b"zzz"];
        for first in texts {
            for second in texts {
                let lcs = longest_common_substring(first, second).unwrap();

                assert_eq!(lcs.len(), brute_force_len(first, second));
                assert!(lcs.is_empty() || second.windows(lcs.len()).any(|w| w == lcs));
            }
        }
    }
}
