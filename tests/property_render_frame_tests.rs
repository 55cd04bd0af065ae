use donut_chart::animation::AnimationState;
use donut_chart::api::{
    DonutChart, DonutChartConfig, FULL_TURN_DEG, START_ANGLE_DEG, segment_layout,
};
use donut_chart::core::{MAX_DATA_SUM, Viewport};
use donut_chart::render::NullRenderer;
use donut_chart::{ChartError, FillMode};
use proptest::prelude::*;

fn chart_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..1.0f64,
        0.0f64..(MAX_DATA_SUM / 16.0),
        0.0f64..f64::MAX,
    ]
}

proptest! {
    #[test]
    fn final_start_angle_tracks_data_sum(
        values in prop::collection::vec(0.0f64..1.0f64, 0..24),
        progress in prop::collection::vec(0.0f64..=1.0f64, 0..24),
    ) {
        let animation = AnimationState::from_parts(progress, 0.0);
        let layout = segment_layout(&values, &animation);
        let sum: f64 = values.iter().sum();

        prop_assert_eq!(layout.segments.len(), values.len());
        prop_assert!((layout.end_angle_deg - (START_ANGLE_DEG + FULL_TURN_DEG * sum)).abs() <= 1e-9);
        for segment in &layout.segments {
            prop_assert!(segment.drawn_sweep_deg >= 0.0);
            prop_assert!(segment.drawn_sweep_deg <= segment.full_sweep_deg + 1e-12);
        }
    }

    #[test]
    fn frames_are_deterministic_valid_and_sized_to_data(
        values in prop::collection::vec(0.0f64..0.5f64, 1..16),
        width in 16u32..2000u32,
        height in 16u32..2000u32,
        elapsed_ms in 0u64..3000u64,
    ) {
        let mut chart = DonutChart::new(
            NullRenderer::default(),
            DonutChartConfig::default(),
            Viewport::new(width, height),
        ).expect("init");
        chart.set_data(values.clone()).expect("valid data");
        chart.advance(std::time::Duration::from_millis(elapsed_ms));

        let first = chart.build_render_frame().expect("first frame");
        let second = chart.build_render_frame().expect("second frame");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.circles.len(), 1);
        prop_assert_eq!(first.arcs.len(), values.len());
        prop_assert_eq!(first.dots.len(), 1);
        prop_assert_eq!(first.texts.len(), 1);
        prop_assert!(first.texts[0].text.ends_with('%'));
    }

    #[test]
    fn any_accepted_data_renders_with_a_finite_label(
        values in prop::collection::vec(chart_value(), 1..12),
        sequential in any::<bool>(),
        elapsed_ms in 0u64..5000u64,
    ) {
        let fill_mode = if sequential { FillMode::Sequential } else { FillMode::Parallel };
        let mut chart = DonutChart::new(
            NullRenderer::default(),
            DonutChartConfig::default().with_fill_mode(fill_mode),
            Viewport::new(240, 240),
        ).expect("init");

        match chart.set_data(values.clone()) {
            Ok(()) => {
                chart.advance(std::time::Duration::from_millis(elapsed_ms));
                let frame = chart.build_render_frame().expect("accepted data must render");
                prop_assert_eq!(frame.arcs.len(), values.len());

                let label = &frame.texts[0].text;
                let percent: f64 = label
                    .strip_suffix('%')
                    .expect("percent suffix")
                    .parse()
                    .expect("numeric label");
                prop_assert!(percent.is_finite());
                prop_assert!((0.0..=100.0).contains(&percent));
                chart.render().expect("render");
            }
            Err(err) => {
                prop_assert!(matches!(err, ChartError::InvalidData(_)));
                prop_assert!(chart.data().is_empty());
            }
        }
    }
}
