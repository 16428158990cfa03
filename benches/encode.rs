use criterion::{Criterion, black_box, criterion_group, criterion_main};
use invite_qr::{QrEncoder, encode, encode_batch};

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_4_bytes", |b| b.iter(|| encode(black_box("AB12"))));
}

fn bench_encode_full(c: &mut Criterion) {
    c.bench_function("encode_14_bytes", |b| {
        b.iter(|| encode(black_box("ABCDEFGHIJKLMN")))
    });
}

fn bench_encode_reused_encoder(c: &mut Criterion) {
    let encoder = QrEncoder::new();
    c.bench_function("encode_reused_encoder", |b| {
        b.iter(|| encoder.encode(black_box("INVITE-X9")))
    });
}

fn bench_codewords_only(c: &mut Criterion) {
    let encoder = QrEncoder::new();
    c.bench_function("codewords_9_bytes", |b| {
        b.iter(|| encoder.codewords(black_box(b"INVITE-X9")))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let texts: Vec<String> = (0..256).map(|i| format!("INVITE-{:04X}", i)).collect();
    c.bench_function("encode_batch_256", |b| {
        b.iter(|| encode_batch(black_box(&texts)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_full,
    bench_encode_reused_encoder,
    bench_codewords_only,
    bench_encode_batch
);
criterion_main!(benches);
