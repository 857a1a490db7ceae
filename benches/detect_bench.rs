use charscope::api;
use charscope::tables::latin;
use charscope::DetectionInput;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_text(len: usize) -> Vec<u8> {
    let seed = b"the quick brown fox jumps over the lazy dog and runs away into the forest ";
    seed.iter().copied().cycle().take(len).collect()
}

fn bench_single_recognizer(c: &mut Criterion) {
    let recognizer = latin::iso_8859_1().unwrap();
    let bytes = sample_text(16 * 1024);

    c.bench_function("latin1_16k", |b| {
        b.iter(|| {
            let input = DetectionInput::from_bytes(black_box(&bytes));
            black_box(recognizer.detect(&input))
        })
    });
}

fn bench_full_bank(c: &mut Criterion) {
    let bank = api::recognizers().unwrap();
    let bytes = sample_text(16 * 1024);

    c.bench_function("full_bank_16k", |b| {
        b.iter(|| {
            let input = DetectionInput::from_bytes(black_box(&bytes));
            black_box(api::scan(&bank, &input, None))
        })
    });
}

criterion_group!(benches, bench_single_recognizer, bench_full_bank);
criterion_main!(benches);
