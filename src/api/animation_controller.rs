use std::time::Duration;

use crate::animation::AnimationTick;
use crate::render::Renderer;

use super::DonutChart;

impl<R: Renderer> DonutChart<R> {
    /// Advances the reveal animation by one host frame.
    ///
    /// Returns `true` when progress moved and the widget should repaint.
    pub fn advance(&mut self, delta: Duration) -> bool {
        !self.advance_ticks(delta).is_empty()
    }

    /// Like `advance`, returning the applied ticks.
    pub fn advance_ticks(&mut self, delta: Duration) -> Vec<AnimationTick> {
        let ticks = self.animation.advance(delta);
        if !ticks.is_empty() {
            self.redraw_requested = true;
        }
        ticks
    }

    /// Applies a tick delivered by an external scheduler.
    ///
    /// Ticks issued before the last `set_data` are rejected, as are ticks for
    /// segments the current data set does not have.
    pub fn apply_tick(&mut self, tick: AnimationTick) -> bool {
        let applied = self.animation.apply_tick(tick);
        if applied {
            self.redraw_requested = true;
        }
        applied
    }

    /// Stops the running animation, freezing progress where it is.
    pub fn cancel_animation(&mut self) -> bool {
        self.animation.cancel()
    }

    /// Starts the reveal again from zero for the current data.
    pub fn restart_animation(&mut self) {
        self.animation.restart(self.data.values());
        self.redraw_requested = true;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }
}
