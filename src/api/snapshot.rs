use serde::{Deserialize, Serialize};

use crate::animation::{AnimationStatus, FillMode};
use crate::core::{LayoutGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::DonutChart;

/// Serializable view of widget state for diagnostics and host tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartSnapshot {
    pub viewport: Viewport,
    pub layout: LayoutGeometry,
    pub fill_mode: FillMode,
    pub data: Vec<f64>,
    pub segment_progress: Vec<f64>,
    pub rotation_degrees: f64,
    pub status: AnimationStatus,
    pub generation: u64,
    /// Center label, absent when there is no data.
    pub label: Option<String>,
}

impl DonutChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart snapshot: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart snapshot json: {e}"))
        })
    }
}

impl<R: Renderer> DonutChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> DonutChartSnapshot {
        let state = self.animation.state();
        DonutChartSnapshot {
            viewport: self.viewport,
            layout: self.layout,
            fill_mode: self.config.fill_mode,
            data: self.data.values().to_vec(),
            segment_progress: state.segment_progress().to_vec(),
            rotation_degrees: state.rotation_degrees(),
            status: self.animation.status(),
            generation: self.animation.generation().value(),
            label: (!self.data.is_empty()).then(|| self.data.percentage_label()),
        }
    }
}
