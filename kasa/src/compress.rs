// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use integer_encoding::VarIntWriter;
use zstd::Encoder as ZstdEncoder;

use crate::{
    header::{MAGIC, VERSION},
    lz::{Encoder, Token},
};

/// Compresses `text` and writes the resulting token stream with default options
///
/// The stream can later be expanded back into `text` with [`decompress()`](crate::decompress).
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the stream.
///
/// # Examples
///
/// ```
/// # fn main() -> std::io::Result<()> {
/// let mut compressed = Vec::new();
///
/// kasa::compress(b"abracadabra", &mut compressed)?;
///
/// # Ok(())
/// # }
/// ```
pub fn compress<W>(text: &[u8], out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_token_iter(Encoder::new(text), out, &StreamConfig::default())
}

/// Writes `tokens` as a token stream with default options
///
/// This function is a shorthand for [`write_tokens_with_config()`] called with the default
/// options.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the stream.
pub fn write_tokens<W>(tokens: &[Token], out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_tokens_with_config(tokens, out, &StreamConfig::default())
}

/// Writes `tokens` as a token stream
///
/// The stream starts with a fixed header followed by a zstd frame holding three varints per token:
/// the offset, the length, and the trailing byte plus one (0 meaning no trailing byte). A literal
/// is written as offset 0 and length 0.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the stream.
///
/// # Examples
///
/// ```
/// # fn main() -> std::io::Result<()> {
/// use kasa::StreamConfig;
///
/// let tokens = kasa::encode(b"abababab");
/// let mut stream = Vec::new();
///
/// let config = *StreamConfig::new().compression_threads(0).compression_level(3);
///
/// kasa::write_tokens_with_config(&tokens, &mut stream, &config)?;
///
/// # Ok(())
/// # }
/// ```
pub fn write_tokens_with_config<W>(
    tokens: &[Token],
    out: &mut W,
    options: &StreamConfig,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_token_iter(tokens.iter().copied(), out, options)
}

fn write_token_iter<I, W>(tokens: I, out: &mut W, options: &StreamConfig) -> io::Result<()>
where
    I: IntoIterator<Item = Token>,
    W: Write + ?Sized,
{
    // Write the header
    out.write_u32::<LittleEndian>(MAGIC)?;
    out.write_u32::<LittleEndian>(VERSION)?;

    // Create a compressor for the token data
    let mut token_encoder = ZstdEncoder::new(out, options.compression_level)?;
    token_encoder.multithread(options.compression_threads)?;

    for token in tokens {
        let (offset, len, next) = match token {
            Token::Literal(byte) => (0, 0, Some(byte)),
            Token::Reference { offset, len, next } => (offset, len, next),
        };

        token_encoder.write_varint(offset)?;
        token_encoder.write_varint(len)?;
        token_encoder.write_varint(next.map_or(0, |byte| u16::from(byte) + 1))?;
    }

    token_encoder.finish()?;

    Ok(())
}

/// Configuration for writing a token stream.
///
/// The defaults favor a small stream over writing speed, which suits text that is compressed once
/// and stored.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct StreamConfig {
    compression_threads: u32,
    compression_level: i32,
}

impl StreamConfig {
    /// Creates a new configuration for writing token streams
    ///
    /// This configuration can be reused across writes.
    pub const fn new() -> Self {
        Self {
            compression_threads: Self::DEFAULT_COMPRESSION_THREADS,
            compression_level: Self::DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the number of threads to use for compressing the token data.
    ///
    /// A value above 0 moves compression off the thread doing I/O. A value of 0 runs compression
    /// on the same thread as I/O, which is slower but uses slightly less memory.
    pub fn compression_threads(&mut self, threads: u32) -> &mut Self {
        self.compression_threads = threads;
        self
    }

    /// Sets the compression level to use for compressing the token data.
    ///
    /// The compression level can be set to any value between -7 and 22 inclusive, trading speed
    /// for ratio as it increases. Values outside of this range are clamped.
    pub fn compression_level(&mut self, level: i32) -> &mut Self {
        self.compression_level = level;
        self
    }

    /// The default number of compression threads to create
    pub const DEFAULT_COMPRESSION_THREADS: u32 = 1;

    /// The default compression level to use
    ///
    /// This is the highest level that avoids the memory cost of levels 20 and above.
    pub const DEFAULT_COMPRESSION_LEVEL: i32 = 19;
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new()
    }
}
