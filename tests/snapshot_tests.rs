use std::time::Duration;

use donut_chart::FillMode;
use donut_chart::animation::AnimationStatus;
use donut_chart::api::{DonutChart, DonutChartConfig, DonutChartSnapshot};
use donut_chart::core::Viewport;
use donut_chart::render::NullRenderer;

#[test]
fn snapshot_reflects_data_progress_and_label() {
    let config = DonutChartConfig::default().with_fill_mode(FillMode::Sequential);
    let mut chart =
        DonutChart::new(NullRenderer::default(), config, Viewport::new(240, 240)).expect("init");

    let empty = chart.snapshot();
    assert_eq!(empty.label, None);
    assert_eq!(empty.status, AnimationStatus::Idle);

    chart.set_data(vec![0.5, 0.25]).expect("valid data");
    chart.advance(Duration::from_millis(1000));

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.viewport, Viewport::new(240, 240));
    assert_eq!(snapshot.fill_mode, FillMode::Sequential);
    assert_eq!(snapshot.data, vec![0.5, 0.25]);
    assert_eq!(snapshot.segment_progress, vec![1.0, 0.0]);
    assert_eq!(snapshot.rotation_degrees, 0.0);
    assert_eq!(snapshot.status, AnimationStatus::Running);
    assert_eq!(snapshot.label.as_deref(), Some("75.00%"));
    assert_eq!(snapshot.layout, chart.layout());
}

#[test]
fn snapshot_json_parses_back() {
    let mut chart = DonutChart::new(
        NullRenderer::default(),
        DonutChartConfig::default(),
        Viewport::new(320, 200),
    )
    .expect("init");
    chart.set_data(vec![0.6]).expect("valid data");
    chart.advance(Duration::from_millis(500));

    let snapshot = chart.snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    assert!(json.contains("\"running\""));
    assert_eq!(
        DonutChartSnapshot::from_json_str(&json).expect("parse"),
        snapshot
    );
}
