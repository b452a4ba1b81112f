use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simreg_image::{Image, ImageSize};
use simreg_imgproc::composite::{
    checkerboard, difference_of_intensities, magenta_green, sum_of_intensities,
};

fn create_test_image(width: usize, height: usize, rng: &mut StdRng) -> Image<u8, 1> {
    let data: Vec<u8> = (0..(width * height)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("Composite");
    let mut rng = StdRng::seed_from_u64(42);

    let (w, h) = (1920, 1080);
    let src1 = create_test_image(w, h, &mut rng);
    let src2 = create_test_image(w, h, &mut rng);
    let parameter_string = format!("{}x{}", w, h);

    group.throughput(criterion::Throughput::Elements((w * h) as u64));

    group.bench_with_input(
        BenchmarkId::new("checkerboard", &parameter_string),
        &(&src1, &src2),
        |b, (src1, src2)| {
            let mut dst = Image::<u8, 1>::zeros(src1.size());
            b.iter(|| checkerboard(black_box(src1), black_box(src2), &mut dst, 32).unwrap())
        },
    );

    group.bench_with_input(
        BenchmarkId::new("magenta_green", &parameter_string),
        &(&src1, &src2),
        |b, (src1, src2)| {
            let mut dst = Image::<u8, 3>::zeros(src1.size());
            b.iter(|| magenta_green(black_box(src1), black_box(src2), &mut dst).unwrap())
        },
    );

    group.bench_with_input(
        BenchmarkId::new("sum_of_intensities", &parameter_string),
        &(&src1, &src2),
        |b, (src1, src2)| {
            let mut dst = Image::<u8, 1>::zeros(src1.size());
            b.iter(|| sum_of_intensities(black_box(src1), black_box(src2), &mut dst).unwrap())
        },
    );

    let (src1_f32, src2_f32) = (src1.cast::<f32>(), src2.cast::<f32>());
    group.bench_with_input(
        BenchmarkId::new("difference_of_intensities_f32", &parameter_string),
        &(&src1_f32, &src2_f32),
        |b, (src1, src2)| {
            let mut dst = Image::<f32, 1>::zeros(src1.size());
            b.iter(|| {
                difference_of_intensities(black_box(src1), black_box(src2), &mut dst).unwrap()
            })
        },
    );

    group.finish();
}

criterion_group!(benches, bench_composite);
criterion_main!(benches);
