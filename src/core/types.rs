use serde::{Deserialize, Serialize};

/// Widget size in physical pixels, as reported by the host on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Length of the shorter side in pixels.
    #[must_use]
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}
