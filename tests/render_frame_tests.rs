use std::time::Duration;

use donut_chart::FillMode;
use donut_chart::api::{
    BACKGROUND_RING_COLOR, DonutChart, DonutChartConfig, START_ANGLE_DEG, fallback_color,
};
use donut_chart::core::Viewport;
use donut_chart::render::{Color, NullRenderer, StrokeCap, TextHAlign};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

fn chart(config: DonutChartConfig) -> DonutChart<NullRenderer> {
    DonutChart::new(NullRenderer::default(), config, Viewport::new(400, 300)).expect("init")
}

fn finish(chart: &mut DonutChart<NullRenderer>) {
    while chart.is_animating() {
        chart.advance(Duration::from_millis(16));
    }
}

#[test]
fn empty_data_draws_background_ring_only() {
    let mut chart = chart(DonutChartConfig::default().with_line_width_px(10.0));
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.circles.len(), 1);
    assert!(frame.arcs.is_empty());
    assert!(frame.dots.is_empty());
    assert!(frame.texts.is_empty());

    let ring = frame.circles[0];
    assert_eq!(ring.color, BACKGROUND_RING_COLOR);
    assert_eq!((ring.center_x, ring.center_y), (200.0, 150.0));
    assert_eq!(ring.radius, 140.0);
    assert_eq!(ring.stroke_width, 10.0);

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 0);
    assert_eq!(renderer.last_label, None);
}

#[test]
fn completed_quarters_fill_the_ring_clockwise_from_top() {
    let config = DonutChartConfig::default().with_colors(vec![RED, GREEN]);
    let mut chart = chart(config);
    chart
        .set_data(vec![0.25, 0.25, 0.25, 0.25])
        .expect("valid data");
    finish(&mut chart);

    let frame = chart.build_render_frame().expect("frame");
    let starts: Vec<f64> = frame.arcs.iter().map(|arc| arc.start_angle_deg).collect();
    assert_eq!(starts, vec![-90.0, 0.0, 90.0, 180.0]);
    assert!(frame.arcs.iter().all(|arc| arc.sweep_angle_deg == 90.0));
    assert!(frame.arcs.iter().all(|arc| arc.cap == StrokeCap::Round));
    assert_eq!(frame.arcs[0].color, RED);
    assert_eq!(frame.arcs[1].color, GREEN);
    assert_eq!(frame.arcs[2].color, fallback_color(2));
    assert_eq!(frame.arcs[3].color, fallback_color(3));

    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "100.00%");
}

#[test]
fn half_ring_label_uses_unit_total() {
    let mut chart = chart(DonutChartConfig::default());
    chart.set_data(vec![0.5]).expect("valid data");
    finish(&mut chart);

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.texts[0].text, "50.00%");
    assert_eq!(frame.arcs[0].sweep_angle_deg, 180.0);
}

#[test]
fn zero_sum_renders_zero_percent() {
    let mut chart = chart(DonutChartConfig::default());
    chart.set_data(vec![0.0, 0.0]).expect("valid data");
    finish(&mut chart);

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.texts[0].text, "0.00%");
    assert!(frame.arcs.iter().all(|arc| arc.sweep_angle_deg == 0.0));
}

#[test]
fn label_is_centered_below_middle_by_quarter_font_size() {
    let config = DonutChartConfig::default()
        .with_font_size_px(40.0)
        .with_label_color(GREEN);
    let mut chart = chart(config);
    chart.set_data(vec![0.3]).expect("valid data");

    let frame = chart.build_render_frame().expect("frame");
    let label = &frame.texts[0];
    assert_eq!(label.text, "30.00%");
    assert_eq!((label.x, label.y), (200.0, 160.0));
    assert_eq!(label.font_size_px, 40.0);
    assert_eq!(label.color, GREEN);
    assert_eq!(label.h_align, TextHAlign::Center);
}

#[test]
fn unstarted_segments_draw_nothing_but_keep_their_slots() {
    let config = DonutChartConfig::default().with_fill_mode(FillMode::Sequential);
    let mut chart = chart(config);
    chart.set_data(vec![0.5, 0.25]).expect("valid data");
    chart.advance(Duration::from_millis(500));

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.arcs[0].start_angle_deg, START_ANGLE_DEG);
    assert!((frame.arcs[0].sweep_angle_deg - 90.0).abs() <= 1e-9);
    assert_eq!(frame.arcs[1].start_angle_deg, 90.0);
    assert_eq!(frame.arcs[1].sweep_angle_deg, 0.0);
}

#[test]
fn marker_dot_spins_with_parallel_rotation() {
    let config = DonutChartConfig::default()
        .with_line_width_px(6.0)
        .with_colors(vec![RED]);
    let mut chart = chart(config);
    chart.set_data(vec![0.4, 0.4]).expect("valid data");
    chart.advance(Duration::from_millis(1000));

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.rotation.degrees, 180.0);
    assert_eq!((frame.rotation.pivot_x, frame.rotation.pivot_y), (200.0, 150.0));

    assert_eq!(frame.dots.len(), 1);
    let dot = frame.dots[0];
    assert_eq!((dot.x, dot.y), (200.0, 6.0));
    assert_eq!(dot.diameter, 6.0);
    assert_eq!(dot.color, RED);

    let (x, y) = frame.rotation.apply(dot.x, dot.y);
    assert!((x - 200.0).abs() <= 1e-9);
    assert!((y - 294.0).abs() <= 1e-9);
}

#[test]
fn generated_colors_do_not_flicker_between_frames() {
    let mut chart = chart(DonutChartConfig::default());
    chart.set_data(vec![0.2, 0.2, 0.2]).expect("valid data");

    chart.advance(Duration::from_millis(100));
    let first = chart.build_render_frame().expect("first frame");
    chart.advance(Duration::from_millis(100));
    let second = chart.build_render_frame().expect("second frame");

    for (a, b) in first.arcs.iter().zip(&second.arcs) {
        assert_eq!(a.color, b.color);
    }
    assert_eq!(first.dots[0].color, fallback_color(0));
}
