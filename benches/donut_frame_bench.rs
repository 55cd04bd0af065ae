use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use donut_chart::FillMode;
use donut_chart::animation::AnimationDriver;
use donut_chart::api::{DonutChart, DonutChartConfig};
use donut_chart::core::Viewport;
use donut_chart::render::NullRenderer;
use std::hint::black_box;

fn sample_values(count: usize) -> Vec<f64> {
    let share = 1.0 / count as f64;
    (0..count).map(|_| share).collect()
}

fn bench_frame_build_64_segments(c: &mut Criterion) {
    let mut chart = DonutChart::new(
        NullRenderer::default(),
        DonutChartConfig::default(),
        Viewport::new(1024, 1024),
    )
    .expect("chart init");
    chart.set_data(sample_values(64)).expect("valid data");
    chart.advance(Duration::from_millis(900));

    c.bench_function("frame_build_64_segments", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

fn bench_full_animation_run(c: &mut Criterion) {
    let values = sample_values(16);
    for mode in [FillMode::Parallel, FillMode::Sequential] {
        c.bench_function(&format!("full_animation_run_{mode:?}"), |b| {
            b.iter(|| {
                let mut driver = AnimationDriver::new(mode);
                driver.restart(black_box(&values));
                while driver.is_running() {
                    let _ = driver.advance(Duration::from_millis(16));
                }
            })
        });
    }
}

criterion_group!(benches, bench_frame_build_64_segments, bench_full_animation_run);
criterion_main!(benches);
