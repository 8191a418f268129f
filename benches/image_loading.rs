// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{Rgba, RgbaImage};
use keepsake::media;
use std::hint::black_box;

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");

    // A photo-sized PNG written once, decoded on every iteration.
    let dir = tempfile::tempdir().expect("temp dir");
    let image_path = dir.path().join("sample.png");
    RgbaImage::from_fn(1600, 1200, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]))
        .save(&image_path)
        .expect("write sample png");

    group.bench_function("load_sample_png", |b| {
        b.iter(|| {
            let _ = black_box(media::load_image(&image_path).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
