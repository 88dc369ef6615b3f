// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use kasa::{StreamConfig, TextIndex};
use log::info;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array and LCP array of a file
    Index { input: PathBuf },
    /// Count the occurrences of a pattern in a file
    Count { input: PathBuf, pattern: String },
    /// List the offsets of a pattern in a file, in suffix rank order
    Find { input: PathBuf, pattern: String },
    /// Print a file with the first occurrence of a substring removed
    Delete { input: PathBuf, substring: String },
    /// Find the longest substring two files have in common
    Lcs {
        first: PathBuf,
        second: PathBuf,
        #[arg(long, default_value_t = '#')]
        separator: char,
    },
    /// Compress a file into a token stream
    Compress {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = StreamConfig::DEFAULT_COMPRESSION_LEVEL)]
        level: i32,
    },
    /// Restore a file from a token stream
    Decompress { input: PathBuf, output: PathBuf },
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match args.command {
        Command::Index { input } => {
            let index = TextIndex::new(read(&input)?);

            writeln!(stdout, "rank\tsuffix\tlcp\ttext")?;
            for (rank, ((offset, suffix), lcp)) in
                index.suffixes().zip(index.lcp_array()).enumerate()
            {
                writeln!(
                    stdout,
                    "{rank}\t{offset}\t{lcp}\t{}",
                    String::from_utf8_lossy(suffix).escape_debug(),
                )?;
            }
        }
        Command::Count { input, pattern } => {
            let index = TextIndex::new(read(&input)?);

            writeln!(stdout, "{}", index.count_occurrences(pattern.as_bytes()))?;
        }
        Command::Find { input, pattern } => {
            let index = TextIndex::new(read(&input)?);

            for offset in index.list_occurrences(pattern.as_bytes()) {
                writeln!(stdout, "{offset}")?;
            }
        }
        Command::Delete { input, substring } => {
            let mut index = TextIndex::new(read(&input)?);

            if !index.delete(substring.as_bytes()) {
                bail!("Substring '{substring}' not found in '{}'", input.display());
            }
            stdout.write_all(index.text())?;
        }
        Command::Lcs {
            first,
            second,
            separator,
        } => {
            let separator = u8::try_from(separator)
                .with_context(|| format!("Separator '{separator}' is not a single byte"))?;
            let first_data = read(&first)?;
            let second_data = read(&second)?;

            let lcs =
                kasa::longest_common_substring_with_separator(&first_data, &second_data, separator)
                    .context("Failed to compare files")?;
            info!("longest common substring is {} bytes", lcs.len());

            stdout.write_all(lcs)?;
            writeln!(stdout)?;
        }
        Command::Compress {
            input,
            output,
            level,
        } => {
            let text = read(&input)?;
            let tokens = kasa::encode(&text);
            info!("encoded {} bytes as {} tokens", text.len(), tokens.len());

            let mut output_file = BufWriter::new(
                File::create(&output).with_context(|| {
                    format!("Failed to create output file '{}'", output.display())
                })?,
            );
            kasa::write_tokens_with_config(
                &tokens,
                &mut output_file,
                StreamConfig::new().compression_level(level),
            )
            .context("I/O error occurred while writing token stream")?;
            output_file
                .flush()
                .context("I/O error occurred while writing token stream")?;
        }
        Command::Decompress { input, output } => {
            let input_file = File::open(&input)
                .with_context(|| format!("Failed to open input file '{}'", input.display()))?;
            let mut output_file = File::create(&output)
                .with_context(|| format!("Failed to create output file '{}'", output.display()))?;

            let written = kasa::decompress(input_file, &mut output_file)
                .context("Failed to decompress token stream")?;
            info!("restored {written} bytes");
        }
    }

    stdout.flush()?;

    Ok(())
}
