use tracing::{debug, warn};

use crate::core::DataSet;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{DonutChart, SegmentPalette};

impl<R: Renderer> DonutChart<R> {
    /// Replaces the whole data set and restarts the reveal animation.
    ///
    /// Any in-flight animation is cancelled first; progress is rebuilt with
    /// one zeroed entry per value. Invalid input is rejected and leaves the
    /// previous data and animation untouched.
    pub fn set_data(&mut self, values: Vec<f64>) -> ChartResult<()> {
        let data = match DataSet::new(values) {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, "rejecting chart data");
                return Err(err);
            }
        };

        self.palette = SegmentPalette::resolve(&self.config.colors, data.len());
        let generation = self.animation.restart(data.values());
        debug!(
            count = data.len(),
            sum = data.sum(),
            generated_colors = self.palette.generated_count(),
            generation = generation.value(),
            "set chart data"
        );
        self.data = data;
        self.redraw_requested = true;
        Ok(())
    }

    /// Removes all values; the widget falls back to the background ring.
    pub fn clear_data(&mut self) {
        self.palette = SegmentPalette::default();
        self.animation.restart(&[]);
        self.data = DataSet::empty();
        self.redraw_requested = true;
        debug!("cleared chart data");
    }
}
