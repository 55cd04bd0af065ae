use std::time::Duration;

/// Linear timed interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Normalized completion in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated value; exactly `to` once finished.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.fraction()
    }

    /// Moves the tween forward and returns the part of `delta` left over
    /// after it reached its end.
    pub fn advance(&mut self, delta: Duration) -> Duration {
        let remaining = self.duration.saturating_sub(self.elapsed);
        if delta >= remaining {
            self.elapsed = self.duration;
            delta - remaining
        } else {
            self.elapsed += delta;
            Duration::ZERO
        }
    }
}
