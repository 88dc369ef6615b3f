// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::cmp;

use log::trace;
use sufsort::SuffixArray;

/// How many ranks on either side of the current suffix are checked for a match
const NEIGHBORHOOD: usize = 1;

/// A single step of LZ77-compressed text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// A byte with no back-reference
    Literal(u8),
    /// A copy of earlier output followed by an optional byte
    Reference {
        /// How far behind the current end of output the copy starts
        offset: usize,
        /// The number of bytes to copy
        len: usize,
        /// The byte following the copy, or `None` if the copy reaches the end of the text
        next: Option<u8>,
    },
}

impl Token {
    /// Returns the number of text bytes this token expands to.
    #[must_use]
    pub fn expanded_len(&self) -> usize {
        match *self {
            Token::Literal(_) => 1,
            Token::Reference { len, next, .. } => len + usize::from(next.is_some()),
        }
    }
}

/// An iterator producing the LZ77 tokens of a text.
///
/// At each position the suffix starting there is located in the text's suffix array by binary
/// search, and only the suffixes at the neighboring ranks are tried as match sources. Suffixes
/// adjacent in rank share the longest prefixes, so this finds long matches cheaply, but it is a
/// heuristic: a longer match further away in rank order, or one ranked next to a suffix that
/// starts later in the text, is not found.
pub struct Encoder<'a> {
    text: &'a [u8],
    index: SuffixArray<'a>,
    pos: usize,
}

impl<'a> Encoder<'a> {
    /// Creates a new `Encoder` for `text`.
    ///
    /// This builds the suffix array of `text`, which is *O*(*n* log *n*).
    #[must_use]
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            index: SuffixArray::new(text),
            pos: 0,
        }
    }

    /// Finds the longest match for the suffix at `self.pos` among the ranks near it.
    ///
    /// Only suffixes starting before `self.pos` are eligible. Returns `(start, len)`.
    fn best_match(&self) -> Option<(usize, usize)> {
        let current = &self.text[self.pos..];
        let rank = self.index.lower_bound(current);
        let suffixes = self.index.as_slice();
        let first = rank.saturating_sub(NEIGHBORHOOD);
        let last = cmp::min(rank + NEIGHBORHOOD + 1, suffixes.len());

        let mut best = None;
        let mut best_len = 0;
        for &start in &suffixes[first..last] {
            let start = start as usize;
            if start >= self.pos {
                continue;
            }

            let len = common_prefix_len(&self.text[start..], current);
            if len > best_len {
                best_len = len;
                best = Some((start, len));
            }
        }

        best
    }
}

impl Iterator for Encoder<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let token = match self.best_match() {
            Some((start, len)) => Token::Reference {
                offset: self.pos - start,
                len,
                next: self.text.get(self.pos + len).copied(),
            },
            None => Token::Literal(self.text[self.pos]),
        };
        trace!("position {}: {token:?}", self.pos);

        self.pos += token.expanded_len();

        Some(token)
    }
}

/// Compresses `text` into a sequence of LZ77 tokens.
///
/// The result can be expanded back into `text` with [`decode()`].
///
/// # Examples
///
/// ```
/// use kasa::Token;
///
/// let tokens = kasa::encode(b"abab");
///
/// assert_eq!(
///     tokens,
///     [
///         Token::Literal(b'a'),
///         Token::Literal(b'b'),
///         Token::Reference { offset: 2, len: 2, next: None },
///     ],
/// );
/// assert_eq!(kasa::decode(&tokens), b"abab");
/// ```
#[must_use]
pub fn encode(text: &[u8]) -> Vec<Token> {
    Encoder::new(text).collect()
}

/// Expands a sequence of LZ77 tokens back into text.
///
/// A reference may overlap the bytes it produces, e.g., a reference with offset 1 and length 4
/// repeats the previous byte four times.
///
/// # Panics
///
/// Panics if a reference with a nonzero length points before the start of the output or has an
/// offset of 0. [`encode()`] never produces such tokens.
#[must_use]
pub fn decode(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.iter().map(Token::expanded_len).sum());
    for &token in tokens {
        expand(&mut out, token);
    }

    out
}

/// Appends the expansion of `token` to `out`.
pub(crate) fn expand(out: &mut Vec<u8>, token: Token) {
    match token {
        Token::Literal(byte) => out.push(byte),
        Token::Reference { offset, len, next } => {
            if len > 0 {
                assert!(
                    offset > 0 && offset <= out.len(),
                    "reference offset {offset} is outside the {} bytes of output",
                    out.len(),
                );

                // Copy byte by byte since the source may overlap what is being written
                let start = out.len() - offset;
                for i in start..start + len {
                    out.push(out[i]);
                }
            }
            if let Some(byte) = next {
                out.push(byte);
            }
        }
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
