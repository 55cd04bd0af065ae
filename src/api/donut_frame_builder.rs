//! Segment Renderer: turns data, progress and geometry into draw commands.

use smallvec::SmallVec;

use crate::animation::AnimationState;
use crate::core::{DataSet, LayoutGeometry, Viewport};
use crate::render::{
    ArcPrimitive, CirclePrimitive, DotPrimitive, RenderFrame, RotationScope, StrokeCap,
    TextHAlign, TextPrimitive,
};

use super::{BACKGROUND_RING_COLOR, DonutChartConfig, SegmentPalette};

/// First segment starts at 12 o'clock.
pub const START_ANGLE_DEG: f64 = -90.0;
pub const FULL_TURN_DEG: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSweep {
    pub index: usize,
    pub start_angle_deg: f64,
    /// Angular slot reserved for the segment once fully revealed.
    pub full_sweep_deg: f64,
    /// Portion of the slot drawn at the current progress.
    pub drawn_sweep_deg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    pub segments: SmallVec<[SegmentSweep; 8]>,
    /// Start angle the next segment would get.
    pub end_angle_deg: f64,
}

/// Lays segments out clockwise from 12 o'clock.
///
/// The start angle always advances by the full sweep, so partially revealed
/// segments keep their final slot while only the drawn part grows.
#[must_use]
pub fn segment_layout(values: &[f64], animation: &AnimationState) -> SegmentLayout {
    let mut start_angle_deg = START_ANGLE_DEG;
    let mut segments = SmallVec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let full_sweep_deg = FULL_TURN_DEG * value;
        segments.push(SegmentSweep {
            index,
            start_angle_deg,
            full_sweep_deg,
            drawn_sweep_deg: full_sweep_deg * animation.progress(index),
        });
        start_angle_deg += full_sweep_deg;
    }

    SegmentLayout {
        segments,
        end_angle_deg: start_angle_deg,
    }
}

/// Everything one paint pass reads.
#[derive(Debug, Clone, Copy)]
pub struct DonutFrameInput<'a> {
    pub viewport: Viewport,
    pub layout: LayoutGeometry,
    pub data: &'a DataSet,
    pub animation: &'a AnimationState,
    pub palette: &'a SegmentPalette,
    pub config: &'a DonutChartConfig,
}

/// Builds the frame for one paint pass.
///
/// Ring primitives (background, arcs, marker dot) share one rotation scope
/// driven by the animation; the center label is emitted unrotated. An empty
/// data set yields the background ring only.
#[must_use]
pub fn build_donut_frame(input: &DonutFrameInput<'_>) -> RenderFrame {
    let DonutFrameInput {
        viewport,
        layout,
        data,
        animation,
        palette,
        config,
    } = *input;
    let center = layout.center;
    let stroke_width = config.line_width_px;

    let mut frame = RenderFrame::new(viewport)
        .with_rotation(RotationScope::new(
            center.x,
            center.y,
            animation.rotation_degrees(),
        ))
        .with_circle(CirclePrimitive::new(
            center.x,
            center.y,
            layout.radius,
            stroke_width,
            BACKGROUND_RING_COLOR,
        ));

    if data.is_empty() {
        return frame;
    }

    for segment in segment_layout(data.values(), animation).segments {
        frame = frame.with_arc(ArcPrimitive::new(
            center.x,
            center.y,
            layout.radius,
            segment.start_angle_deg,
            segment.drawn_sweep_deg,
            stroke_width,
            StrokeCap::Round,
            palette.color(segment.index),
        ));
    }

    if let Some(marker_color) = palette.marker_color() {
        let top = layout.top_point();
        frame = frame.with_dot(DotPrimitive::new(top.x, top.y, stroke_width, marker_color));
    }

    frame.with_text(TextPrimitive::new(
        data.percentage_label(),
        center.x,
        center.y + config.font_size_px / 4.0,
        config.font_size_px,
        config.label_color,
        TextHAlign::Center,
    ))
}
