// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use shroud_cipher::{ChaCha20, KEY_SIZE, NONCE_SIZE, StreamCipher};

fn benchmark_chacha20_apply_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("chacha20_apply_keystream");

    for size in [4, 8, 16, 64, 256, 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let mut cipher = ChaCha20::default();
            let key = [0x42u8; KEY_SIZE];
            let nonce = [0x24u8; NONCE_SIZE];
            let mut data = vec![0u8; size];

            b.iter(|| {
                cipher.apply_keystream(
                    black_box(&key),
                    black_box(&nonce),
                    black_box(0),
                    black_box(&mut data),
                );
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_chacha20_apply_keystream);
criterion_main!(benches);
