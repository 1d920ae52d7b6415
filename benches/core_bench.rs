use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use parcel_capture::core::geo_math::{
    circle_from_area_hectares, polygon_area_hectares, polygon_centroid, DEFAULT_CIRCLE_STEPS,
};
use parcel_capture::{CaptureMode, CaptureSession, Coordinate, Geometry, GeometryClassifier};
use std::hint::black_box;

/// Unregelmäßiger Ring mit `vertex_count` Ecken um einen Punkt in Goiás.
fn build_ring(vertex_count: usize) -> Vec<Coordinate> {
    let mut ring: Vec<Coordinate> = (0..vertex_count)
        .map(|i| {
            let angle = i as f64 / vertex_count as f64 * std::f64::consts::TAU;
            let radius = 0.01 + 0.002 * ((i * 7) % 5) as f64;
            Coordinate::new(-49.25 + radius * angle.cos(), -16.68 + radius * angle.sin())
        })
        .collect();
    ring.push(ring[0]);
    ring
}

fn bench_polygon_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_area");

    for &vertex_count in &[8usize, 64, 1024] {
        let ring = build_ring(vertex_count);
        group.bench_with_input(
            BenchmarkId::new("area_hectares", vertex_count),
            &ring,
            |b, ring| b.iter(|| polygon_area_hectares(black_box(ring)).expect("Fläche")),
        );
        group.bench_with_input(
            BenchmarkId::new("centroid", vertex_count),
            &ring,
            |b, ring| b.iter(|| polygon_centroid(black_box(ring)).expect("Schwerpunkt")),
        );
    }

    group.finish();
}

fn bench_circle_generation(c: &mut Criterion) {
    let center = Coordinate::new(-47.93, -15.78);

    c.bench_function("circle_from_area_64_steps", |b| {
        b.iter(|| {
            circle_from_area_hectares(black_box(center), black_box(12.5), DEFAULT_CIRCLE_STEPS)
                .expect("Kreis")
        })
    });
}

fn bench_classifier(c: &mut Criterion) {
    let classifier = GeometryClassifier::new(DEFAULT_CIRCLE_STEPS);
    let circle = circle_from_area_hectares(Coordinate::new(-47.93, -15.78), 5.0, 64)
        .expect("Kreis für Benchmark");
    let boundary = Geometry::Polygon(build_ring(40));

    c.bench_function("classify_untagged_circle", |b| {
        b.iter(|| classifier.classify(black_box(&circle), None, None).expect("Klassifizierung"))
    });
    c.bench_function("classify_untagged_boundary", |b| {
        b.iter(|| classifier.classify(black_box(&boundary), None, None).expect("Klassifizierung"))
    });
}

fn bench_mode_switch_roundtrip(c: &mut Criterion) {
    let ring = build_ring(32);

    c.bench_function("draw_pin_draw_roundtrip", |b| {
        b.iter(|| {
            let mut session = CaptureSession::new();
            session.on_polygon_drawn(ring.clone()).expect("Polygon");
            session.switch_mode(CaptureMode::Pin);
            session
                .on_pin_placed(Coordinate::new(-49.2, -16.7))
                .expect("Pin");
            session.on_manual_area_entered(3.0).expect("Fläche");
            session.switch_mode(CaptureMode::Draw);
            black_box(session.is_ready_to_persist())
        })
    });
}

criterion_group!(
    benches,
    bench_polygon_area,
    bench_circle_generation,
    bench_classifier,
    bench_mode_switch_roundtrip
);
criterion_main!(benches);
