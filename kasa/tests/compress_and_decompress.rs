// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::{
    error::Error,
    fs::{self, File},
    io,
    path::Path,
};

use blake3::Hasher;
use kasa::TextIndex;

const TEXT_FILE_NAME: &str = "lorem.txt";
const COMPRESSED_FILE_NAME: &str = "lorem.kasa";
const RESTORED_FILE_NAME: &str = "lorem-restored.txt";

/// Generates a few hundred kilobytes of word salad with a reproducible word order.
fn lorem() -> Vec<u8> {
    const WORDS: [&str; 16] = [
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
        "eiusmod", "tempor", "incididunt", "ut", "labore", "magna",
    ];

    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut text = Vec::new();
    for i in 0..40_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.extend_from_slice(WORDS[(state % WORDS.len() as u64) as usize].as_bytes());
        text.push(if i % 12 == 11 { b'\n' } else { b' ' });
    }

    text
}

#[test]
fn lorem_round_trip() -> Result<(), Box<dyn Error>> {
    let workspace_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    fs::write(workspace_dir.join(TEXT_FILE_NAME), lorem())?;

    // Compress the text to a file
    {
        let text = fs::read(workspace_dir.join(TEXT_FILE_NAME))?;
        let mut compressed = File::create(workspace_dir.join(COMPRESSED_FILE_NAME))?;
        kasa::compress(&text, &mut compressed)?;
    }

    // Restore the text from the compressed file
    {
        let compressed = File::open(workspace_dir.join(COMPRESSED_FILE_NAME))?;
        let mut restored = File::create(workspace_dir.join(RESTORED_FILE_NAME))?;
        kasa::decompress(compressed, &mut restored)?;
    }

    // Verify that the restored text matches the original by comparing their hashes
    let mut text = File::open(workspace_dir.join(TEXT_FILE_NAME))?;
    let mut restored = File::open(workspace_dir.join(RESTORED_FILE_NAME))?;

    let mut text_hasher = Hasher::new();
    let mut restored_hasher = Hasher::new();
    io::copy(&mut text, &mut text_hasher)?;
    io::copy(&mut restored, &mut restored_hasher)?;

    assert_eq!(text_hasher.finalize(), restored_hasher.finalize());

    // The compressed file should be much smaller than a text made of 16 distinct words
    let text_len = fs::metadata(workspace_dir.join(TEXT_FILE_NAME))?.len();
    let compressed_len = fs::metadata(workspace_dir.join(COMPRESSED_FILE_NAME))?.len();
    assert!(compressed_len < text_len / 2);

    Ok(())
}

#[test]
fn index_queries_agree_with_scan() {
    let text = lorem();
    let index = TextIndex::new(text.clone());

    let patterns: [&[u8]; 5] = [b"lorem ipsum", b"magna\n", b"ut ut", b"dolorem", b"x"];
    for pattern in patterns {
        let expected = text.windows(pattern.len()).filter(|w| *w == pattern).count();

        assert_eq!(index.count_occurrences(pattern), expected);
        assert_eq!(index.exists(pattern), expected > 0);

        let mut positions = index.list_occurrences(pattern).to_vec();
        positions.sort_unstable();
        let scanned: Vec<u32> = text
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern)
            .map(|(i, _)| i as u32)
            .collect();
        assert_eq!(positions, scanned);
    }
}

#[test]
fn longest_common_substring_between_halves() -> Result<(), Box<dyn Error>> {
    let text = lorem();
    let (first, second) = text.split_at(text.len() / 2);

    let lcs = kasa::longest_common_substring(&first[..5_000], &second[..5_000])?;

    assert!(!lcs.is_empty());
    assert!(second[..5_000].windows(lcs.len()).any(|w| w == lcs));

    Ok(())
}
