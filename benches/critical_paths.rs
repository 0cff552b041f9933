//! Criterion benchmarks for avatar generation critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Grid: full-grid circle/ellipse scans and the outline pass
//! - Selector: seed chunking and index selection
//! - Species: silhouette drawing per species
//! - Generator: full seeded composition and PNG export
//! - Batch: parallel generation of many seeds

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crustal::batch::generate_all;
use crustal::catalog::Catalog;
use crustal::generator::AvatarGenerator;
use crustal::grid::{PixelGrid, GRID_SIZE};
use crustal::models::Species;
use crustal::selector::{select, SeedChunks, SeedPicker};
use crustal::species;
use image::Rgba;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const DARK: Rgba<u8> = Rgba([40, 0, 0, 255]);

/// Deterministic 64-digit seeds, like transaction hashes
fn make_seeds(n: usize) -> Vec<String> {
    (0..n as u64)
        .map(|i| {
            let word = i.wrapping_mul(0x9e37_79b9_7f4a_7c15);
            format!("0x{:016x}{:016x}{:016x}{:016x}", word, !word, word.rotate_left(17), i)
        })
        .collect()
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    group.bench_function("fill_circle_r8", |b| {
        b.iter(|| {
            let mut grid = PixelGrid::new(GRID_SIZE);
            grid.fill_circle(black_box(15), black_box(15), black_box(8.0), RED);
            grid
        })
    });

    group.bench_function("fill_ellipse", |b| {
        b.iter(|| {
            let mut grid = PixelGrid::new(GRID_SIZE);
            grid.fill_ellipse(black_box(15), black_box(16), black_box(10.0), black_box(6.0), RED);
            grid
        })
    });

    let mut blob = PixelGrid::new(GRID_SIZE);
    blob.fill_circle(15, 15, 10.0, RED);
    group.bench_function("add_outline", |b| {
        b.iter(|| {
            let mut grid = blob.clone();
            grid.add_outline(DARK);
            grid
        })
    });

    group.finish();
}

fn bench_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector");
    let catalog = Catalog::global();
    let seed = make_seeds(1).remove(0);

    group.bench_function("seed_chunks", |b| b.iter(|| SeedChunks::parse(black_box(&seed))));

    group.bench_function("select_seeded", |b| {
        b.iter(|| select(catalog, &mut SeedPicker::new(black_box(&seed)), None).record())
    });

    group.finish();
}

fn bench_species(c: &mut Criterion) {
    let mut group = c.benchmark_group("species");
    let catalog = Catalog::global();

    for species in Species::ALL {
        let palette = catalog.palettes(species)[0].colors();
        group.bench_with_input(BenchmarkId::new("draw", species), &palette, |b, palette| {
            b.iter(|| species::draw(black_box(species), palette))
        });
    }

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    let generator = AvatarGenerator::new();
    let seed = make_seeds(1).remove(0);

    group.bench_function("generate_from_seed", |b| {
        b.iter(|| generator.generate_from_seed(black_box(&seed)))
    });

    let avatar = generator.generate_from_seed(&seed);
    group.bench_function("to_png_bytes", |b| b.iter(|| avatar.to_png_bytes()));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let generator = AvatarGenerator::new().with_pixel_scale(1);

    for count in [16usize, 256] {
        let seeds = make_seeds(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("generate_all", count), &seeds, |b, seeds| {
            b.iter(|| generate_all(&generator, seeds))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid, bench_selector, bench_species, bench_generator, bench_batch);

criterion_main!(benches);
