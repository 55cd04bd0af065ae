use tracing::debug;

use crate::core::{LayoutGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::DonutChart;

impl<R: Renderer> DonutChart<R> {
    /// Handles a host resize: recomputes center, radius and bounding box.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }

        self.viewport = viewport;
        self.layout = LayoutGeometry::compute(viewport, self.config.line_width_px);
        self.redraw_requested = true;
        debug!(
            width = viewport.width,
            height = viewport.height,
            radius = self.layout.radius,
            "resized donut chart"
        );
        Ok(())
    }
}
