//! Frame-driven reveal animation for chart segments.
//!
//! Nothing in this module reads a clock: hosts feed elapsed time through
//! `AnimationDriver::advance`, which keeps timing deterministic under test.

mod driver;
mod state;
mod tween;

pub use driver::{
    AnimationDriver, AnimationStatus, FillMode, PARALLEL_FILL_DURATION,
    SEQUENTIAL_BASE_DURATION, SEQUENTIAL_DURATION_PER_UNIT, SEQUENTIAL_MAX_EXTRA_DURATION,
    planned_durations, segment_duration, total_duration,
};
pub use state::{AnimationGeneration, AnimationState, AnimationTick, FULL_ROTATION_DEGREES, TickTarget};
pub use tween::Tween;
