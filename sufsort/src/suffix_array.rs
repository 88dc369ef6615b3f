// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::ops::Range;

use crate::{doubling, kasai, search};

/// A suffix array for a borrowed byte string.
///
/// This is the lightweight form for short-lived indices over data the caller already owns, such as
/// a text being compressed or a concatenation built for a single query.
#[derive(Clone, Debug)]
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<u32>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// This operation is *O*(*n* log *n*).
    ///
    /// # Panics
    ///
    /// Panics if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        let inner = doubling::doubling(data);

        Self { data, inner }
    }

    /// Returns the data this suffix array was built over.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the suffix array itself, in rank order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the number of suffixes, which is also the length of the data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Computes the LCP array for this suffix array.
    ///
    /// This operation is *O*(*n*).
    #[must_use]
    pub fn lcp_array(&self) -> Vec<u32> {
        kasai::kasai(self.data, &self.inner)
    }

    /// Returns `true` if and only if `pattern` is contained in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data);
    /// assert!(sa.contains(b"world"));
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        !self.equal_range(pattern).is_empty()
    }

    /// Returns the number of positions at which `pattern` occurs in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    #[must_use]
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.equal_range(pattern).len()
    }

    /// Returns the positions at which `pattern` occurs, in suffix rank order.
    ///
    /// The positions are a sub-slice of the suffix array, so they are ordered lexicographically by
    /// the suffix starting at each one rather than numerically.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"banana");
    /// assert_eq!(sa.positions(b"ana"), &[3, 1]);
    /// ```
    #[must_use]
    pub fn positions(&self, pattern: &[u8]) -> &[u32] {
        &self.inner[self.equal_range(pattern)]
    }

    /// Returns the range of ranks whose suffixes start with `pattern`.
    ///
    /// See [`equal_range()`](crate::equal_range).
    #[must_use]
    pub fn equal_range(&self, pattern: &[u8]) -> Range<usize> {
        search::equal_range(self.data, &self.inner, pattern)
    }

    /// Returns the leftmost rank whose truncated suffix is not less than `key`.
    ///
    /// See [`lower_bound()`](crate::lower_bound).
    #[must_use]
    pub fn lower_bound(&self, key: &[u8]) -> usize {
        search::lower_bound(self.data, &self.inner, key)
    }
}
