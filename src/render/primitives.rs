use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Decodes a packed `0xAARRGGBB` color resource value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xFF) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl From<Srgba<f64>> for Color {
    fn from(color: Srgba<f64>) -> Self {
        let (red, green, blue, alpha) = color.into_components();
        Self::rgba(red, green, blue, alpha)
    }
}

/// Line end style for stroked arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeCap {
    Butt,
    #[default]
    Round,
}

/// Stroked (unfilled) full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        center_x: f64,
        center_y: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_center_and_radius(self.center_x, self.center_y, self.radius, "circle")?;
        validate_stroke_width(self.stroke_width, "circle")?;
        self.color.validate()
    }
}

/// Open stroked arc. Angles are in degrees, `0` at 3 o'clock, growing
/// clockwise in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub stroke_width: f64,
    pub cap: StrokeCap,
    pub color: Color,
}

impl ArcPrimitive {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle_deg: f64,
        sweep_angle_deg: f64,
        stroke_width: f64,
        cap: StrokeCap,
        color: Color,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            start_angle_deg,
            sweep_angle_deg,
            stroke_width,
            cap,
            color,
        }
    }

    #[must_use]
    pub fn end_angle_deg(self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_center_and_radius(self.center_x, self.center_y, self.radius, "arc")?;
        if !self.start_angle_deg.is_finite() || !self.sweep_angle_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "arc angles must be finite".to_owned(),
            ));
        }
        if self.sweep_angle_deg < 0.0 {
            return Err(ChartError::InvalidData(
                "arc sweep angle must be >= 0".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "arc")?;
        self.color.validate()
    }
}

/// Filled round dot drawn with the diameter of the ring stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPrimitive {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub color: Color,
}

impl DotPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, diameter: f64, color: Color) -> Self {
        Self {
            x,
            y,
            diameter,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "dot coordinates must be finite".to_owned(),
            ));
        }
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(ChartError::InvalidData(
                "dot diameter must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Label draw command. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Rotation applied around a pivot to every ring primitive of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationScope {
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub degrees: f64,
}

impl RotationScope {
    #[must_use]
    pub const fn new(pivot_x: f64, pivot_y: f64, degrees: f64) -> Self {
        Self {
            pivot_x,
            pivot_y,
            degrees,
        }
    }

    /// Maps a point through the rotation (clockwise in pixel space).
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.degrees.to_radians().sin_cos();
        let dx = x - self.pivot_x;
        let dy = y - self.pivot_y;
        (
            self.pivot_x + dx * cos - dy * sin,
            self.pivot_y + dx * sin + dy * cos,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.pivot_x.is_finite() || !self.pivot_y.is_finite() || !self.degrees.is_finite() {
            return Err(ChartError::InvalidData(
                "rotation pivot and angle must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_center_and_radius(x: f64, y: f64, radius: f64, kind: &str) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{kind} center must be finite"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} radius must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_stroke_width(stroke_width: f64, kind: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}
