use criterion::{Criterion, criterion_group, criterion_main};
use simple_charts::api::{ChartConfig, ChartRenderer};
use simple_charts::core::{
    Frame, LegendPlacement, RangeAggregator, Series, SeriesSet, compute_offset, x_for_index,
    y_for_value,
};
use simple_charts::interaction::TouchSnapshot;
use simple_charts::render::{Color, RecordingCanvas};
use std::hint::black_box;

fn generated_set(series_count: usize, len: usize) -> SeriesSet {
    SeriesSet::new(
        (0..series_count)
            .map(|s| {
                let values = (0..len)
                    .map(|i| 100.0 + ((i * (s + 3)) % 97) as f64 * 1.5)
                    .collect();
                Series::new(format!("series-{s}"), Color::rgb(0.2, 0.4, 0.8), values)
            })
            .collect(),
    )
}

fn bench_point_mapping_10k(c: &mut Criterion) {
    let offset = compute_offset(LegendPlacement::Bottom, 1.0);

    c.bench_function("point_mapping_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for index in 0..10_000 {
                acc += x_for_index(black_box(index), 10_000, 1920.0, offset);
                acc += y_for_value(black_box(index as f64), 10_041.0, 0.0, 1080.0, offset);
            }
            acc
        })
    });
}

fn bench_range_aggregation_4x10k(c: &mut Criterion) {
    let set = generated_set(4, 10_000);
    let aggregator = RangeAggregator::default();

    c.bench_function("range_aggregation_4x10k", |b| {
        b.iter(|| {
            let max = aggregator.aggregate_max(black_box(&set));
            let count = aggregator.aggregate_count(black_box(&set));
            (max, count)
        })
    });
}

fn bench_render_pass_4x2k(c: &mut Criterion) {
    let set = generated_set(4, 2_000);
    let renderer = ChartRenderer::new(ChartConfig::line()).expect("valid config");
    let frame = Frame::new(1600.0, 900.0);
    let touch = TouchSnapshot::at(800.0, 400.0);
    let mut canvas = RecordingCanvas::default();

    c.bench_function("render_pass_4x2k", |b| {
        b.iter(|| {
            canvas.clear();
            renderer
                .render_pass(black_box(&set), &frame, &touch, &mut canvas)
                .expect("render pass should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_point_mapping_10k,
    bench_range_aggregation_4x10k,
    bench_render_pass_4x2k
);
criterion_main!(benches);
