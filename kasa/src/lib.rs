// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! A suffix array text index with pattern search, LZ77 compression, and longest common substring
//! queries.
//!
//! [`TextIndex`] owns a text together with its suffix array and LCP array. It answers existence,
//! counting, and listing queries for patterns in *O*(*m* log *n*) and rebuilds both arrays from
//! scratch whenever its text is modified.
//!
//! The same suffix array machinery drives an LZ77 compressor ([`encode()`] and [`decode()`]) and
//! a cross-text [`longest_common_substring()`] query over a generalized suffix array.
//!
//! # Examples
//!
//! Searching a text:
//!
//! ```
//! use kasa::TextIndex;
//!
//! let mut index = TextIndex::new("banana");
//! assert_eq!(index.count_occurrences(b"ana"), 2);
//!
//! index.insert(b"rama");
//! assert!(index.exists(b"anar"));
//! ```
//!
//! Compressing a file to a token stream and restoring it:
//!
//! ```no_run
//! use std::fs::{self, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = fs::read("book.txt")?;
//! let mut compressed = File::create("book.kasa")?;
//!
//! kasa::compress(&text, &mut compressed)?;
//!
//! let compressed = File::open("book.kasa")?;
//! let mut restored = File::create("book-restored.txt")?;
//!
//! kasa::decompress(compressed, &mut restored)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "stream")]
mod compress;
#[cfg(feature = "stream")]
mod decompress;
#[cfg(feature = "stream")]
mod header;
mod index;
mod lcs;
mod lz;

#[cfg(feature = "stream")]
pub use compress::{StreamConfig, compress, write_tokens, write_tokens_with_config};
#[cfg(feature = "stream")]
pub use decompress::{StreamError, TokenReader, decompress, read_tokens};
pub use index::TextIndex;
pub use lcs::{
    DEFAULT_SEPARATOR, LcsError, longest_common_substring, longest_common_substring_with_separator,
};
pub use lz::{Encoder, Token, decode, encode};
