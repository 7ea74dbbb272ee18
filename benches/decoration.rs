use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skipink::decoration::{build, Band, UnderlineMethod};
use skipink::offset::{offset, JoinKind, OffsetRequest};
use skipink::outline::Outline;

/// A row of glyph-like blocks with quadratic side bulges.
fn glyph_row(count: usize) -> Outline {
    let mut outline = Outline::new();
    for i in 0..count {
        let x = 100.0 + i as f64 * 60.0;
        outline.move_to(x, 100.0);
        outline.line_to(x + 40.0, 100.0);
        outline.curve3(x + 52.0, 130.0, x + 40.0, 160.0);
        outline.line_to(x, 160.0);
        outline.curve3(x - 12.0, 130.0, x, 100.0);
        outline.close_polygon();
    }
    outline
}

fn bench_offset(c: &mut Criterion) {
    let outline = glyph_row(32);
    let mut group = c.benchmark_group("offset");
    for join in [JoinKind::Bevel, JoinKind::Miter, JoinKind::Round] {
        let request = OffsetRequest::new(20.0, join);
        group.bench_function(format!("{join:?}"), |b| {
            b.iter(|| offset(black_box(&outline), black_box(&request)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let outline = glyph_row(32);
    let band = Band::new(0.0, 125.0, 2100.0, 10.0);
    let mut group = c.benchmark_group("build");
    for (name, method) in [
        ("straight", UnderlineMethod::Straight),
        ("largest-gap", UnderlineMethod::LargestGap),
        ("offset-mask", UnderlineMethod::OffsetMask),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| build(black_box(&band), black_box(&outline), method))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_offset, bench_build);
criterion_main!(benches);
