use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simreg_geometry::{CenteredSimilarity2D, Point2D, Transform3D, Translation2D, Translation3D};
use simreg_image::{Image, ImageSize, Volume};
use simreg_imgproc::resample::{resample_2d, resample_3d};

fn create_test_image(width: usize, height: usize, rng: &mut StdRng) -> Image<u8, 1> {
    let data: Vec<u8> = (0..(width * height)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_resample_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resample2D");
    let mut rng = StdRng::seed_from_u64(42);

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = create_test_image(*width, *height, &mut rng);

        let translation = Translation2D::new(10.3, -4.7);
        let center = Point2D::new(*width as f64 / 2.0, *height as f64 / 2.0);
        let similarity = CenteredSimilarity2D::new(center, 0.5, 30.0, 10.3, -4.7);

        group.bench_with_input(
            BenchmarkId::new("translation", &parameter_string),
            &image,
            |b, image| b.iter(|| resample_2d(black_box(image), black_box(&translation), image)),
        );

        group.bench_with_input(
            BenchmarkId::new("similarity", &parameter_string),
            &image,
            |b, image| b.iter(|| resample_2d(black_box(image), black_box(&similarity), image)),
        );
    }
    group.finish();
}

fn bench_resample_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resample3D");
    let mut rng = StdRng::seed_from_u64(42);

    let (width, height, depth) = (256, 256, 32);
    let slices = (0..depth)
        .map(|_| create_test_image(width, height, &mut rng))
        .collect();
    let volume = Volume::new(slices).unwrap();
    let transform = Transform3D::Translation(Translation3D::new(3.2, -1.6, 2.5));

    group.throughput(criterion::Throughput::Elements((width * height * depth) as u64));
    group.bench_with_input(
        BenchmarkId::new("translation", format!("{}x{}x{}", width, height, depth)),
        &volume,
        |b, volume| b.iter(|| resample_3d(black_box(volume), black_box(&transform), volume)),
    );
    group.finish();
}

criterion_group!(benches, bench_resample_2d, bench_resample_3d);
criterion_main!(benches);
