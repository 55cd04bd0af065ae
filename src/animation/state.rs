use serde::{Deserialize, Serialize};

pub const FULL_ROTATION_DEGREES: f64 = 360.0;

/// Identifies one animation run. Every restart or cancellation moves the
/// driver to a new generation, so ticks carrying an older one are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct AnimationGeneration(u64);

impl AnimationGeneration {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickTarget {
    Segment(usize),
    Rotation,
}

/// One progress update emitted by a timed driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTick {
    pub generation: AnimationGeneration,
    pub target: TickTarget,
    pub value: f64,
}

/// Reveal progress read by the frame builder on every paint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    segment_progress: Vec<f64>,
    rotation_degrees: f64,
}

impl AnimationState {
    #[must_use]
    pub fn zeroed(segment_count: usize) -> Self {
        Self {
            segment_progress: vec![0.0; segment_count],
            rotation_degrees: 0.0,
        }
    }

    /// Builds a state from explicit values, clamping them into range.
    #[must_use]
    pub fn from_parts(segment_progress: Vec<f64>, rotation_degrees: f64) -> Self {
        Self {
            segment_progress: segment_progress
                .into_iter()
                .map(|progress| sanitize(progress, 1.0))
                .collect(),
            rotation_degrees: sanitize(rotation_degrees, FULL_ROTATION_DEGREES),
        }
    }

    #[must_use]
    pub fn segment_progress(&self) -> &[f64] {
        &self.segment_progress
    }

    /// Progress of one segment; missing entries read as not started.
    #[must_use]
    pub fn progress(&self, index: usize) -> f64 {
        self.segment_progress.get(index).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_progress.len()
    }

    pub(crate) fn set_segment_progress(&mut self, index: usize, value: f64) -> bool {
        match self.segment_progress.get_mut(index) {
            Some(slot) => {
                *slot = sanitize(value, 1.0);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_rotation_degrees(&mut self, value: f64) {
        self.rotation_degrees = sanitize(value, FULL_ROTATION_DEGREES);
    }
}

fn sanitize(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::AnimationState;

    #[test]
    fn out_of_range_segment_write_is_rejected() {
        let mut state = AnimationState::zeroed(2);
        assert!(state.set_segment_progress(1, 0.5));
        assert!(!state.set_segment_progress(2, 0.5));
        assert_eq!(state.segment_progress(), &[0.0, 0.5]);
        assert_eq!(state.progress(7), 0.0);
    }

    #[test]
    fn values_are_clamped_into_range() {
        let state = AnimationState::from_parts(vec![-1.0, 2.0, f64::NAN], 400.0);
        assert_eq!(state.segment_progress(), &[0.0, 1.0, 0.0]);
        assert_eq!(state.rotation_degrees(), 360.0);
    }
}
