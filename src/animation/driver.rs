use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{AnimationGeneration, AnimationState, AnimationTick, FULL_ROTATION_DEGREES, TickTarget, Tween};

/// Duration of every driver in parallel fill mode, rotation included.
pub const PARALLEL_FILL_DURATION: Duration = Duration::from_millis(2000);
/// Fixed part of a sequential segment duration.
pub const SEQUENTIAL_BASE_DURATION: Duration = Duration::from_millis(500);
/// Sequential duration added per unit of segment value.
pub const SEQUENTIAL_DURATION_PER_UNIT: Duration = Duration::from_millis(1000);
/// Upper bound on the value-dependent part of a sequential segment duration.
pub const SEQUENTIAL_MAX_EXTRA_DURATION: Duration = Duration::from_secs(3600);

/// Policy deciding how segment reveals are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// All segments fill together while the marker dot spins one full turn.
    #[default]
    Parallel,
    /// Segments fill one after another, larger ones more slowly.
    Sequential,
}

impl FillMode {
    /// Decodes the integer styling attribute: `0` is parallel, anything else
    /// sequential.
    #[must_use]
    pub fn from_attribute_value(value: i32) -> Self {
        if value == 0 {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }

    #[must_use]
    pub fn attribute_value(self) -> i32 {
        match self {
            Self::Parallel => 0,
            Self::Sequential => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStatus {
    /// Never started, or cancelled before completion.
    #[default]
    Idle,
    Running,
    Finished,
}

/// Reveal duration of one segment under the given policy.
#[must_use]
pub fn segment_duration(fill_mode: FillMode, value: f64) -> Duration {
    match fill_mode {
        FillMode::Parallel => PARALLEL_FILL_DURATION,
        FillMode::Sequential => {
            let max_extra_ms = SEQUENTIAL_MAX_EXTRA_DURATION.as_secs_f64() * 1000.0;
            let extra_ms = (SEQUENTIAL_DURATION_PER_UNIT.as_secs_f64() * 1000.0 * value)
                .round()
                .clamp(0.0, max_extra_ms);
            SEQUENTIAL_BASE_DURATION.saturating_add(Duration::from_millis(extra_ms as u64))
        }
    }
}

#[must_use]
pub fn planned_durations(fill_mode: FillMode, values: &[f64]) -> Vec<Duration> {
    values
        .iter()
        .map(|value| segment_duration(fill_mode, *value))
        .collect()
}

/// Wall-clock time from restart until the last driver reaches its end.
#[must_use]
pub fn total_duration(fill_mode: FillMode, values: &[f64]) -> Duration {
    match fill_mode {
        FillMode::Parallel => PARALLEL_FILL_DURATION,
        FillMode::Sequential => planned_durations(fill_mode, values)
            .into_iter()
            .fold(Duration::ZERO, Duration::saturating_add),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ActivePlan {
    Parallel {
        segments: Vec<Tween>,
        rotation: Tween,
    },
    Sequential {
        segments: Vec<Tween>,
        current: usize,
    },
}

/// Owns the animation state and the single active driver plan.
///
/// `restart` replaces the plan atomically (cancel, reset, start), so a plan
/// built for a previous data set can never write into the new state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    fill_mode: FillMode,
    generation: AnimationGeneration,
    status: AnimationStatus,
    plan: Option<ActivePlan>,
    state: AnimationState,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(fill_mode: FillMode) -> Self {
        Self {
            fill_mode,
            generation: AnimationGeneration::default(),
            status: AnimationStatus::Idle,
            plan: None,
            state: AnimationState::default(),
        }
    }

    #[must_use]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    #[must_use]
    pub fn generation(&self) -> AnimationGeneration {
        self.generation
    }

    #[must_use]
    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == AnimationStatus::Running
    }

    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Index of the segment currently filling in sequential mode.
    #[must_use]
    pub fn active_segment(&self) -> Option<usize> {
        match &self.plan {
            Some(ActivePlan::Sequential { segments, current }) if *current < segments.len() => {
                Some(*current)
            }
            _ => None,
        }
    }

    /// Stops the active plan immediately. Ticks issued before this call are
    /// rejected afterwards. Progress values are left as they were.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.plan.take().is_some();
        self.generation = self.generation.next();
        if was_running {
            debug!(
                generation = self.generation.value(),
                "cancelled running animation"
            );
            self.status = AnimationStatus::Idle;
        }
        was_running
    }

    /// Cancels any in-flight plan, zeroes progress for `values.len()`
    /// segments and starts the configured policy from the beginning.
    pub fn restart(&mut self, values: &[f64]) -> AnimationGeneration {
        self.cancel();
        self.state = AnimationState::zeroed(values.len());

        let durations = planned_durations(self.fill_mode, values);
        let segments: Vec<Tween> = durations
            .iter()
            .map(|duration| Tween::new(0.0, 1.0, *duration))
            .collect();

        self.plan = match self.fill_mode {
            FillMode::Parallel => Some(ActivePlan::Parallel {
                segments,
                rotation: Tween::new(0.0, FULL_ROTATION_DEGREES, PARALLEL_FILL_DURATION),
            }),
            FillMode::Sequential if segments.is_empty() => None,
            FillMode::Sequential => Some(ActivePlan::Sequential {
                segments,
                current: 0,
            }),
        };
        self.status = if self.plan.is_some() {
            AnimationStatus::Running
        } else {
            AnimationStatus::Finished
        };

        debug!(
            generation = self.generation.value(),
            fill_mode = ?self.fill_mode,
            segment_count = values.len(),
            total_ms = u64::try_from(total_duration(self.fill_mode, values).as_millis())
                .unwrap_or(u64::MAX),
            "restarted animation"
        );
        self.generation
    }

    /// Advances the active plan by `delta` and applies the resulting ticks.
    ///
    /// Returns the ticks that were applied; an empty list means nothing moved
    /// and no repaint is needed.
    pub fn advance(&mut self, delta: Duration) -> Vec<AnimationTick> {
        let generation = self.generation;
        let Some(plan) = self.plan.as_mut() else {
            return Vec::new();
        };

        let mut ticks = Vec::new();
        let finished = match plan {
            ActivePlan::Parallel { segments, rotation } => {
                for (index, tween) in segments.iter_mut().enumerate() {
                    if tween.is_finished() {
                        continue;
                    }
                    tween.advance(delta);
                    ticks.push(AnimationTick {
                        generation,
                        target: TickTarget::Segment(index),
                        value: tween.value(),
                    });
                }
                if !rotation.is_finished() {
                    rotation.advance(delta);
                    ticks.push(AnimationTick {
                        generation,
                        target: TickTarget::Rotation,
                        value: rotation.value(),
                    });
                }
                rotation.is_finished() && segments.iter().all(Tween::is_finished)
            }
            ActivePlan::Sequential { segments, current } => {
                let mut remaining = delta;
                while let Some(tween) = segments.get_mut(*current) {
                    remaining = tween.advance(remaining);
                    ticks.push(AnimationTick {
                        generation,
                        target: TickTarget::Segment(*current),
                        value: tween.value(),
                    });
                    if !tween.is_finished() {
                        break;
                    }
                    *current += 1;
                    if remaining.is_zero() {
                        break;
                    }
                }
                *current >= segments.len()
            }
        };

        for tick in &ticks {
            self.apply_tick(*tick);
        }
        if finished {
            self.plan = None;
            self.status = AnimationStatus::Finished;
            debug!(generation = generation.value(), "animation finished");
        }
        trace!(
            generation = generation.value(),
            delta_us = delta.as_micros() as u64,
            tick_count = ticks.len(),
            "advanced animation"
        );
        ticks
    }

    /// Applies one tick to the state. Ticks from a previous generation or
    /// addressing a segment that does not exist are dropped.
    pub fn apply_tick(&mut self, tick: AnimationTick) -> bool {
        if tick.generation != self.generation {
            warn!(
                tick_generation = tick.generation.value(),
                current_generation = self.generation.value(),
                "dropping stale animation tick"
            );
            return false;
        }

        match tick.target {
            TickTarget::Segment(index) => {
                let applied = self.state.set_segment_progress(index, tick.value);
                if !applied {
                    warn!(
                        index,
                        segment_count = self.state.segment_count(),
                        "dropping animation tick for missing segment"
                    );
                }
                applied
            }
            TickTarget::Rotation => {
                self.state.set_rotation_degrees(tick.value);
                true
            }
        }
    }
}
