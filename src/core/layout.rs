//! Layout Calculator: maps widget pixel size to the donut ring geometry.

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in pixel space (`left <= right`, `top <= bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Square box centered on `center` with the given half extent.
    #[must_use]
    pub fn square(center: Point, half_extent: f64) -> Self {
        Self {
            left: center.x - half_extent,
            top: center.y - half_extent,
            right: center.x + half_extent,
            bottom: center.y + half_extent,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// Ring geometry derived from the viewport and the configured stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub center: Point,
    pub radius: f64,
    pub bounding_box: BoundingBox,
}

impl LayoutGeometry {
    /// Computes ring geometry for one resize event.
    ///
    /// `radius = min(width, height) / 2 - line_width`, clamped at zero so that
    /// viewports narrower than two stroke widths collapse to a point instead
    /// of producing a negative radius.
    #[must_use]
    pub fn compute(viewport: Viewport, line_width_px: f64) -> Self {
        let center = Point::new(
            f64::from(viewport.width) / 2.0,
            f64::from(viewport.height) / 2.0,
        );
        let radius = (f64::from(viewport.min_side()) / 2.0 - line_width_px).max(0.0);
        Self {
            center,
            radius,
            bounding_box: BoundingBox::square(center, radius),
        }
    }

    /// Topmost point of the ring (12 o'clock), where the marker dot sits.
    #[must_use]
    pub fn top_point(self) -> Point {
        Point::new(self.center.x, self.center.y - self.radius)
    }
}
