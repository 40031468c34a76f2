use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overlay_primitives::Address;

fn bench_address(c: &mut Criterion) {
    let addr = Address::new(0x01_2345_6789);
    let wire = addr.to_bytes();

    c.bench_function("address_from_slice", |b| {
        b.iter(|| Address::from_slice(black_box(&wire)))
    });

    c.bench_function("address_copy_to", |b| {
        let mut out = [0u8; 5];
        b.iter(|| black_box(addr).copy_to(&mut out))
    });

    c.bench_function("address_write_hex", |b| {
        let mut buf = [0u8; 16];
        b.iter(|| black_box(addr).write_hex(&mut buf))
    });

    c.bench_function("address_to_hex", |b| b.iter(|| black_box(addr).to_hex()));
}

criterion_group!(benches, bench_address);
criterion_main!(benches);
