use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kml_pole_generator::{parse_linestrings, resample_by_interval, GeoPoint};
use std::hint::black_box;

fn bench_kml_parsing(c: &mut Criterion) {
    let kml_content = include_str!("../tests/fixtures/jalur.kml");

    c.bench_function("kml_parse_fixture", |b| {
        b.iter(|| {
            let lines = parse_linestrings(black_box(kml_content)).expect("KML parse failed");
            black_box(lines.len())
        })
    });
}

/// Zickzack-Linie um Jakarta mit `vertex_count` Vertices (~10m Segmente).
fn build_synthetic_line(vertex_count: usize) -> Vec<GeoPoint> {
    (0..vertex_count)
        .map(|i| {
            let step = i as f64 * 0.000_09;
            let wiggle = if i % 2 == 0 { 0.0 } else { 0.000_03 };
            GeoPoint::new(-6.2 + wiggle, 106.8 + step)
        })
        .collect()
}

fn bench_resampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_by_interval");

    for &vertex_count in &[1_000usize, 100_000usize] {
        let line = build_synthetic_line(vertex_count);

        for &interval in &[5.0f64, 100.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("interval_{interval}m"), vertex_count),
                &line,
                |b, line| {
                    b.iter(|| {
                        let path = resample_by_interval(black_box(line), black_box(interval));
                        black_box(path.len())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(core_benches, bench_kml_parsing, bench_resampling);
criterion_main!(core_benches);
