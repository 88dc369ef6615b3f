// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufReader, ErrorKind, Read, Write},
};

use byteorder::{LittleEndian, ReadBytesExt};
use integer_encoding::VarIntReader;
use zstd::Decoder;

use crate::{
    header::{MAGIC, VERSION},
    lz::{self, Token},
};

/// A reader that yields the tokens of a token stream
///
/// Because the tokens are decoded lazily, a stream can be consumed while it is still arriving,
/// e.g., over the network.
pub struct TokenReader<'a, R>
where
    R: Read,
{
    stream: Decoder<'a, BufReader<R>>,
    done: bool,
}

/// An error indicating that reading a token stream failed.
///
/// # Examples
///
/// ```
/// use kasa::{StreamError, TokenReader};
///
/// // Garbage data
/// let stream: &[u8] = &[0, 0, 0, 0];
/// let reader = TokenReader::new(stream);
///
/// assert!(matches!(reader, Err(StreamError::BadMagic(_))));
/// ```
#[derive(Debug)]
pub enum StreamError {
    /// An I/O error occurred
    Io(io::Error),
    /// The stream magic is invalid
    BadMagic(u32),
    /// The stream version is unsupported
    UnsupportedVersion(u32),
    /// A token's fields are out of range
    InvalidToken,
    /// A reference points outside the text decoded so far
    BadReference {
        /// The offset of the reference
        offset: usize,
        /// The number of bytes decoded before the reference
        available: usize,
    },
}

impl Display for StreamError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {e}"),
            StreamError::BadMagic(magic) => {
                write!(f, "bad magic: expected {MAGIC:x}, found {magic:x}")
            }
            StreamError::UnsupportedVersion(version) => {
                write!(
                    f,
                    "unsupported version: found {version}, supported versions are [{VERSION}]",
                )
            }
            StreamError::InvalidToken => write!(f, "invalid token"),
            StreamError::BadReference { offset, available } => {
                write!(
                    f,
                    "bad reference: offset {offset} with only {available} bytes decoded",
                )
            }
        }
    }
}

impl Error for StreamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StreamError::Io(e) => e.source(),
            _ => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(value: io::Error) -> Self {
        StreamError::Io(value)
    }
}

impl<'a, R> TokenReader<'a, R>
where
    R: Read,
{
    /// Creates a new `TokenReader` for `stream`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs while reading the stream header or if the header is
    /// invalid.
    pub fn new(mut stream: R) -> Result<Self, StreamError> {
        let magic = stream.read_u32::<LittleEndian>()?;
        if magic != MAGIC {
            return Err(StreamError::BadMagic(magic));
        }

        let version = stream.read_u32::<LittleEndian>()?;
        if version != VERSION {
            return Err(StreamError::UnsupportedVersion(version));
        }

        let token_decoder = Decoder::new(stream)?;

        Ok(Self {
            stream: token_decoder,
            done: false,
        })
    }

    fn read_token(&mut self) -> Result<Option<Token>, StreamError> {
        // A clean end of the stream can only happen before the first field of a token
        let offset: usize = match self.stream.read_varint() {
            Ok(offset) => offset,
            Err(e) => match e.kind() {
                ErrorKind::UnexpectedEof => return Ok(None),
                _ => return Err(e.into()),
            },
        };
        let len: usize = self.stream.read_varint()?;
        let next: u16 = self.stream.read_varint()?;

        let next = match next {
            0 => None,
            1..=256 => Some((next - 1) as u8),
            _ => return Err(StreamError::InvalidToken),
        };

        let token = match (offset, len, next) {
            (0, 0, Some(byte)) => Token::Literal(byte),
            (_, 0, None) => return Err(StreamError::InvalidToken),
            (offset, len, next) => Token::Reference { offset, len, next },
        };

        Ok(Some(token))
    }
}

impl<R> Iterator for TokenReader<'_, R>
where
    R: Read,
{
    type Item = Result<Token, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.read_token().transpose();
        if !matches!(token, Some(Ok(_))) {
            self.done = true;
        }

        token
    }
}

/// Reads tokens from `stream` until it ends.
///
/// # Errors
///
/// Returns an error if the stream cannot be read or is malformed.
pub fn read_tokens<R>(stream: R) -> Result<Vec<Token>, StreamError>
where
    R: Read,
{
    TokenReader::new(stream)?.collect()
}

/// Reconstructs text from a token stream
///
/// This is a convenience method for creating a [`TokenReader`] and expanding every token it yields.
/// Unlike [`decode()`](crate::decode), every reference is checked against the text decoded so far,
/// so untrusted streams cannot cause a panic. If successful, returns the number of bytes written to
/// `out`.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while reading the stream or writing the text, or if
/// the stream is malformed.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut compressed = Vec::new();
/// kasa::compress(b"abracadabra", &mut compressed)?;
///
/// let mut text = Vec::new();
/// kasa::decompress(compressed.as_slice(), &mut text)?;
///
/// assert_eq!(text, b"abracadabra");
/// # Ok(())
/// # }
/// ```
pub fn decompress<R, W>(stream: R, out: &mut W) -> Result<u64, StreamError>
where
    R: Read,
    W: Write + ?Sized,
{
    let mut text = Vec::new();
    for token in TokenReader::new(stream)? {
        let token = token?;
        if let Token::Reference { offset, len, .. } = token {
            if len > 0 && (offset == 0 || offset > text.len()) {
                return Err(StreamError::BadReference {
                    offset,
                    available: text.len(),
                });
            }
        }

        lz::expand(&mut text, token);
    }

    out.write_all(&text)?;

    Ok(text.len() as u64)
}
