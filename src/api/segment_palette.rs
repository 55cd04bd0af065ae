use palette::encoding::Srgb as SrgbStandard;
use palette::{Clamp, Hsv, IntoColor, Srgb, WithAlpha};

use crate::render::Color;

const GOLDEN_ANGLE_DEG: f64 = 137.507_764_050_037_85;
const FALLBACK_SATURATION: f64 = 0.65;
const FALLBACK_VALUE: f64 = 0.9;

/// Opaque color generated for segment `index` when none is configured.
///
/// Hues are spread by the golden angle so neighbouring segments stay
/// distinguishable; the same index always yields the same color.
#[must_use]
pub fn fallback_color(index: usize) -> Color {
    let hue = (index as f64 * GOLDEN_ANGLE_DEG) % 360.0;
    let hsv = Hsv::<SrgbStandard, f64>::new(hue, FALLBACK_SATURATION, FALLBACK_VALUE);
    let rgb: Srgb<f64> = hsv.into_color();
    Color::from(rgb.clamp().with_alpha(1.0))
}

/// Per-segment colors resolved once whenever the data set is replaced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentPalette {
    colors: Vec<Color>,
    configured_count: usize,
}

impl SegmentPalette {
    #[must_use]
    pub fn resolve(configured: &[Color], segment_count: usize) -> Self {
        let colors = (0..segment_count)
            .map(|index| {
                configured
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| fallback_color(index))
            })
            .collect();
        Self {
            colors,
            configured_count: configured.len(),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors
            .get(index)
            .copied()
            .unwrap_or_else(|| fallback_color(index))
    }

    #[must_use]
    pub fn is_generated(&self, index: usize) -> bool {
        index < self.colors.len() && index >= self.configured_count
    }

    /// Number of resolved colors that came from the fallback generator.
    #[must_use]
    pub fn generated_count(&self) -> usize {
        (0..self.colors.len())
            .filter(|index| self.is_generated(*index))
            .count()
    }

    /// Color of the spinning marker dot: the first segment color.
    #[must_use]
    pub fn marker_color(&self) -> Option<Color> {
        self.colors.first().copied()
    }
}
