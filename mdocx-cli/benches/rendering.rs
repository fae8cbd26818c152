// ABOUTME: Benchmark for markdown rendering and image scaling in the browser
// ABOUTME: Measures renderer throughput across widths and Sixel budget downscaling

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{DynamicImage, RgbaImage};
use mdocx_cli::image_protocols::{PixelBudget, fit_within};
use mdocx_cli::markdown::build_renderer;
use std::hint::black_box;

fn create_document(sections: usize) -> String {
    (0..sections)
        .map(|i| {
            format!(
                "## Section {i}\n\nSome *emphasis* and **strong** text with a [link](https://example.com/{i}) \
                 that wraps across several lines when the pane is narrow.\n\n\
                 - first item\n- second item with `code`\n\n\
                 ```rust\nfn main() {{\n    println!(\"{i}\");\n}}\n```\n\n\
                 | key | value |\n|-----|-------|\n| a | {i} |\n\n"
            )
        })
        .collect()
}

fn benchmark_markdown_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_rendering");
    let source = create_document(20);

    for width in [40u16, 80, 160] {
        let renderer = build_renderer("dark", width).unwrap();
        group.bench_with_input(BenchmarkId::new("width", width), &source, |b, source| {
            b.iter(|| renderer.render(black_box(source)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_renderer_rebuild(c: &mut Criterion) {
    c.bench_function("renderer_rebuild", |b| {
        b.iter(|| build_renderer(black_box("dark"), black_box(100)).unwrap())
    });
}

fn benchmark_image_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_scaling");
    let budget = PixelBudget::from_cells(120, 40);

    for size in [512u32, 1024, 2048] {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(size, size));
        group.bench_with_input(BenchmarkId::new("square", size), &img, |b, img| {
            b.iter(|| fit_within(black_box(img), budget.max_width, budget.max_height).width())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_markdown_rendering,
    benchmark_renderer_rebuild,
    benchmark_image_scaling
);
criterion_main!(benches);
