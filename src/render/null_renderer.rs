use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content and records what the last frame held,
/// so tests can check paint output without a real surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_circle_count: usize,
    pub last_arc_count: usize,
    pub last_dot_count: usize,
    pub last_text_count: usize,
    pub last_label: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_circle_count = frame.circles.len();
        self.last_arc_count = frame.arcs.len();
        self.last_dot_count = frame.dots.len();
        self.last_text_count = frame.texts.len();
        self.last_label = frame.texts.first().map(|text| text.text.clone());
        Ok(())
    }
}
