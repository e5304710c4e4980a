//! Benchmarks for integer input scanning

use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use minilang_runtime::scan::scan_i64;
use minilang_runtime::{Console, MalformedInputPolicy, RuntimeConfig};

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_i64");

    let tokens: String = (0..1000).map(|i| format!("{} ", i * 7919 - 500_000)).collect();

    group.bench_function("thousand_tokens", |b| {
        b.iter(|| {
            let mut input = Cursor::new(black_box(tokens.as_bytes()));
            while scan_i64(&mut input).is_ok() {}
        });
    });

    group.bench_function("extreme_values", |b| {
        b.iter(|| {
            let mut input = Cursor::new(black_box(&b"  -9223372036854775808\n9223372036854775807"[..]));
            let low = scan_i64(&mut input).unwrap();
            let high = scan_i64(&mut input).unwrap();
            black_box((low, high))
        });
    });

    group.finish();
}

fn bench_skip_policy(c: &mut Criterion) {
    let noisy: String = (0..200).map(|i| format!("x{i} ")).chain(["42".to_owned()]).collect();
    let config = RuntimeConfig {
        malformed_input: MalformedInputPolicy::Skip,
    };

    c.bench_function("read_input_skip_noise", |b| {
        b.iter(|| {
            let mut console =
                Console::with_config(Cursor::new(black_box(noisy.as_bytes())), Vec::new(), config);
            black_box(console.read_input().unwrap())
        });
    });
}

criterion_group!(benches, bench_scan, bench_skip_policy);
criterion_main!(benches);
