//! Decode throughput per bit depth, measured on input bytes.

use std::hint::black_box;

use criterion::{Criterion, Throughput};
use zenbmp::{AlphaMode, DecodeRequest, decode_bmp};

#[path = "../tests/common/mod.rs"]
mod common;

use common::{BmpBuilder, gradient_palette, noise};

const W: u32 = 1024;
const H: u32 = 768;

/// A `W` x `H` file at `bpp` with noise pixels. Indexed depths get a full
/// palette, so every index is in range.
fn sample(bpp: u16) -> Vec<u8> {
    let mut builder = BmpBuilder::new(W, H, bpp);
    if matches!(bpp, 8 | 4) {
        builder = builder.palette(gradient_palette(1 << bpp));
    }
    let row_len = (W as usize * usize::from(bpp)).div_ceil(8);
    let rows = (0..H)
        .map(|y| noise(row_len, y + 1))
        .collect();
    builder.rows(rows).build()
}

fn bench_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for bpp in [32u16, 24, 8, 4] {
        let data = sample(bpp);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(format!("{bpp}bpp"), |b| {
            b.iter(|| decode_bmp(black_box(&data)).unwrap());
        });
    }
    group.finish();
}

fn bench_alpha_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_32bpp_alpha");
    let data = sample(32);
    group.throughput(Throughput::Bytes(data.len() as u64));
    for (name, mode) in [
        ("auto", AlphaMode::Auto),
        ("pass_through", AlphaMode::PassThrough),
        ("opaque", AlphaMode::Opaque),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                DecodeRequest::new(black_box(&data))
                    .with_alpha_mode(mode)
                    .decode()
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_depths(&mut criterion);
    bench_alpha_modes(&mut criterion);
    criterion.final_summary();
}
