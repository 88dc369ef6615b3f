// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use log::debug;

/// A text together with its suffix array and LCP array.
///
/// Both arrays are built eagerly when the index is created and rebuilt from scratch after every
/// mutation, so they always describe the current text exactly. Each mutation therefore costs
/// *O*(*n* log *n*).
///
/// # Examples
///
/// ```
/// use kasa::TextIndex;
///
/// let index = TextIndex::new("banana");
///
/// assert_eq!(index.suffix_array(), &[5, 3, 1, 0, 4, 2]);
/// assert_eq!(index.lcp_array(), &[0, 1, 3, 0, 0, 2]);
/// assert_eq!(index.count_occurrences(b"ana"), 2);
/// assert!(!index.exists(b"xyz"));
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TextIndex {
    text: Vec<u8>,
    suffix_array: Vec<u32>,
    lcp: Vec<u32>,
}

impl TextIndex {
    /// Builds an index over `text`.
    ///
    /// Any text is accepted, including the empty one.
    ///
    /// # Panics
    ///
    /// Panics if the text is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let mut index = Self {
            text: text.into(),
            suffix_array: Vec::new(),
            lcp: Vec::new(),
        };
        index.rebuild();

        index
    }

    /// Returns the indexed text.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Returns the suffix array, mapping each rank to the offset of the suffix at that rank.
    #[must_use]
    pub fn suffix_array(&self) -> &[u32] {
        &self.suffix_array
    }

    /// Returns the LCP array.
    ///
    /// Entry 0 is always 0, and entry `k` is the length of the longest common prefix of the
    /// suffixes at ranks `k - 1` and `k`.
    #[must_use]
    pub fn lcp_array(&self) -> &[u32] {
        &self.lcp
    }

    /// Returns the length of the indexed text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the indexed text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if `pattern` occurs anywhere in the text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    #[must_use]
    pub fn exists(&self, pattern: &[u8]) -> bool {
        !self.range(pattern).is_empty()
    }

    /// Returns the number of offsets at which `pattern` occurs in the text.
    ///
    /// Overlapping occurrences are counted separately. The empty pattern occurs at every offset.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    #[must_use]
    pub fn count_occurrences(&self, pattern: &[u8]) -> usize {
        self.range(pattern).len()
    }

    /// Returns the offsets at which `pattern` occurs in the text.
    ///
    /// The offsets are returned in suffix rank order, i.e., ordered by the suffix starting at each
    /// offset, not by the offsets' numeric values. Sort the result if text order is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use kasa::TextIndex;
    ///
    /// let index = TextIndex::new("banana");
    ///
    /// assert_eq!(index.list_occurrences(b"ana"), &[3, 1]);
    /// ```
    #[must_use]
    pub fn list_occurrences(&self, pattern: &[u8]) -> &[u32] {
        &self.suffix_array[self.range(pattern)]
    }

    /// Returns an iterator over `(offset, suffix)` pairs in rank order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kasa::TextIndex;
    ///
    /// let index = TextIndex::new("aba");
    /// let suffixes: Vec<_> = index.suffixes().collect();
    ///
    /// assert_eq!(suffixes, [(2, &b"a"[..]), (0, &b"aba"[..]), (1, &b"ba"[..])]);
    /// ```
    pub fn suffixes(&self) -> impl ExactSizeIterator<Item = (u32, &[u8])> + '_ {
        self.suffix_array
            .iter()
            .map(|&offset| (offset, &self.text[offset as usize..]))
    }

    /// Returns the rank of the suffix starting at `offset`, or `None` if `offset` is out of bounds.
    ///
    /// No inverse suffix array is kept, so this operation is *O*(*n*).
    #[must_use]
    pub fn rank_of(&self, offset: usize) -> Option<usize> {
        self.suffix_array
            .iter()
            .position(|&suffix| suffix as usize == offset)
    }

    /// Appends `text` to the indexed text and rebuilds both arrays.
    ///
    /// # Panics
    ///
    /// Panics if the resulting text is longer than `u32::MAX` bytes.
    pub fn insert(&mut self, text: &[u8]) {
        self.text.extend_from_slice(text);
        self.rebuild();
    }

    /// Removes the first occurrence of `substring` from the text and rebuilds both arrays.
    ///
    /// Returns `false` without touching the index if `substring` does not occur in the text. The
    /// empty substring always occurs at offset 0 and removes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use kasa::TextIndex;
    ///
    /// let mut index = TextIndex::new("banana");
    ///
    /// assert!(index.delete(b"na"));
    /// assert_eq!(index.text(), b"bana");
    /// assert!(!index.delete(b"xyz"));
    /// ```
    pub fn delete(&mut self, substring: &[u8]) -> bool {
        let first = if substring.is_empty() {
            Some(0)
        } else {
            self.list_occurrences(substring).iter().copied().min()
        };

        match first {
            Some(start) => {
                let start = start as usize;
                self.text.drain(start..start + substring.len());
                self.rebuild();

                true
            }
            None => {
                debug!("{} byte substring not found, index unchanged", substring.len());

                false
            }
        }
    }

    fn range(&self, pattern: &[u8]) -> std::ops::Range<usize> {
        sufsort::equal_range(&self.text, &self.suffix_array, pattern)
    }

    fn rebuild(&mut self) {
        self.suffix_array = sufsort::suffix_array(&self.text);
        self.lcp = sufsort::lcp_array(&self.text, &self.suffix_array);

        debug!("rebuilt index over {} bytes", self.text.len());
    }
}

impl From<Vec<u8>> for TextIndex {
    fn from(text: Vec<u8>) -> Self {
        Self::new(text)
    }
}

impl From<&[u8]> for TextIndex {
    fn from(text: &[u8]) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextIndex {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextIndex {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
