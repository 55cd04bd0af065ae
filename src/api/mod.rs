mod animation_controller;
mod chart_config;
mod data_controller;
mod donut_chart;
mod donut_frame_builder;
mod layout_controller;
mod segment_palette;
mod snapshot;

pub use chart_config::{
    BACKGROUND_RING_COLOR, DEFAULT_FONT_SIZE_DP, DEFAULT_LINE_WIDTH_DP, DonutChartConfig,
    dp_to_px,
};
pub use donut_chart::DonutChart;
pub use donut_frame_builder::{
    DonutFrameInput, FULL_TURN_DEG, START_ANGLE_DEG, SegmentLayout, SegmentSweep,
    build_donut_frame, segment_layout,
};
pub use segment_palette::{SegmentPalette, fallback_color};
pub use snapshot::DonutChartSnapshot;
