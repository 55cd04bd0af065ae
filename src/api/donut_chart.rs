use tracing::debug;

use crate::animation::{AnimationDriver, AnimationState, AnimationStatus};
use crate::core::{DataSet, LayoutGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{DonutChartConfig, DonutFrameInput, SegmentPalette, build_donut_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Animated donut statistics widget consumed by host applications.
///
/// `DonutChart` owns the data set, the ring geometry and the animation
/// driver, and hands materialized frames to its renderer. Hosts forward
/// resize events, feed elapsed frame time through `advance`, and repaint
/// whenever `take_redraw_request` reports pending changes.
pub struct DonutChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: DonutChartConfig,
    pub(super) viewport: Viewport,
    pub(super) layout: LayoutGeometry,
    pub(super) data: DataSet,
    pub(super) palette: SegmentPalette,
    pub(super) animation: AnimationDriver,
    pub(super) redraw_requested: bool,
}

impl<R: Renderer> DonutChart<R> {
    pub fn new(renderer: R, config: DonutChartConfig, viewport: Viewport) -> ChartResult<Self> {
        config.validate()?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let layout = LayoutGeometry::compute(viewport, config.line_width_px);
        let animation = AnimationDriver::new(config.fill_mode);
        debug!(
            width = viewport.width,
            height = viewport.height,
            fill_mode = ?config.fill_mode,
            configured_colors = config.colors.len(),
            "created donut chart"
        );

        Ok(Self {
            renderer,
            config,
            viewport,
            layout,
            data: DataSet::empty(),
            palette: SegmentPalette::default(),
            animation,
            redraw_requested: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DonutChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> LayoutGeometry {
        self.layout
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        self.data.values()
    }

    #[must_use]
    pub fn data_set(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn palette(&self) -> &SegmentPalette {
        &self.palette
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationDriver {
        &self.animation
    }

    #[must_use]
    pub fn animation_state(&self) -> &AnimationState {
        self.animation.state()
    }

    #[must_use]
    pub fn animation_status(&self) -> AnimationStatus {
        self.animation.status()
    }

    /// Builds the frame for the current data, progress and geometry.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let frame = build_donut_frame(&DonutFrameInput {
            viewport: self.viewport,
            layout: self.layout,
            data: &self.data,
            animation: self.animation.state(),
            palette: &self.palette,
            config: &self.config,
        });
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Returns whether a repaint was requested since the last call and clears
    /// the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.redraw_requested
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
