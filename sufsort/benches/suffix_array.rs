// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CHUNK_SIZE: usize = 4096;
const CHUNKS: usize = 8;

/// Generates text over a small alphabet with plenty of repeats, close to natural language in how
/// long the shared prefixes get.
fn text(len: usize) -> Vec<u8> {
    const WORDS: [&[u8]; 8] = [
        b"the ", b"quick ", b"brown ", b"fox ", b"jumps ", b"over ", b"lazy ", b"dog ",
    ];

    // xorshift keeps the data reproducible between runs
    let mut state: u32 = 0x9e37_79b9;
    let mut data = Vec::with_capacity(len + 8);
    while data.len() < len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.extend_from_slice(WORDS[(state % WORDS.len() as u32) as usize]);
    }
    data.truncate(len);

    data
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    let contents = text(CHUNK_SIZE * CHUNKS);
    for size in (1..=CHUNKS).map(|i| i * CHUNK_SIZE) {
        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(
                BenchmarkId::from_parameter(size),
                &contents[..size],
                |b, data| {
                    b.iter(|| sufsort::suffix_array(data));
                },
            );
    }

    group.finish();
}

fn lcp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcp");

    let contents = text(CHUNK_SIZE * CHUNKS);
    for size in (1..=CHUNKS).map(|i| i * CHUNK_SIZE) {
        let data = &contents[..size];
        let suffix_array = sufsort::suffix_array(data);

        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(BenchmarkId::from_parameter(size), &suffix_array, |b, sa| {
                b.iter(|| sufsort::lcp_array(data, sa));
            });
    }

    group.finish();
}

criterion_group!(benches, construct, lcp);
criterion_main!(benches);
