use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, DotPrimitive, RotationScope, TextPrimitive,
};

/// Backend-agnostic scene for one donut draw pass.
///
/// Backends paint in this order: `circles`, `arcs`, `dots` inside the
/// `rotation` scope, then `texts` without rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rotation: RotationScope,
    pub circles: Vec<CirclePrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rotation: RotationScope::default(),
            circles: Vec::new(),
            arcs: Vec::new(),
            dots: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationScope) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_dot(mut self, dot: DotPrimitive) -> Self {
        self.dots.push(dot);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.rotation.validate()?;
        for circle in &self.circles {
            circle.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.arcs.is_empty() && self.dots.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.circles.len() + self.arcs.len() + self.dots.len() + self.texts.len()
    }
}
