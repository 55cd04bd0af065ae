use serde::{Deserialize, Serialize};

use crate::animation::FillMode;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_FONT_SIZE_DP: f64 = 20.0;
pub const DEFAULT_LINE_WIDTH_DP: f64 = 5.0;

/// Faint gray ring painted underneath the segments.
pub const BACKGROUND_RING_COLOR: Color =
    Color::rgba(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0, 10.0 / 255.0);

/// Converts density-independent pixels to physical pixels, rounding up.
#[must_use]
pub fn dp_to_px(density: f64, dp: f64) -> f64 {
    (density * dp).ceil()
}

/// Resolved styling for one chart widget.
///
/// This type is serializable so hosts can keep widget styling next to the rest
/// of their UI description instead of inventing an ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartConfig {
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
    #[serde(default)]
    pub fill_mode: FillMode,
    /// Segment colors by data index; indices past the end get generated colors.
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            font_size_px: default_font_size_px(),
            line_width_px: default_line_width_px(),
            fill_mode: FillMode::default(),
            colors: Vec::new(),
            label_color: default_label_color(),
        }
    }
}

impl DonutChartConfig {
    /// Default font size and line width scaled for a display density.
    pub fn for_density(density: f64) -> ChartResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ChartError::InvalidData(
                "display density must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            font_size_px: dp_to_px(density, DEFAULT_FONT_SIZE_DP),
            line_width_px: dp_to_px(density, DEFAULT_LINE_WIDTH_DP),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_line_width_px(mut self, line_width_px: f64) -> Self {
        self.line_width_px = line_width_px;
        self
    }

    #[must_use]
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Sets segment colors from packed `0xAARRGGBB` resource values.
    #[must_use]
    pub fn with_argb_colors(mut self, colors: impl IntoIterator<Item = u32>) -> Self {
        self.colors = colors.into_iter().map(Color::from_argb).collect();
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        self.label_color.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses and validates a config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_font_size_px() -> f64 {
    DEFAULT_FONT_SIZE_DP
}

fn default_line_width_px() -> f64 {
    DEFAULT_LINE_WIDTH_DP
}

fn default_label_color() -> Color {
    Color::BLACK
}
