use std::time::{Duration, Instant};

/// Timing snapshot handed to apps, scenes and UI each frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AppTime {
    /// Seconds elapsed since the previous frame.
    pub delta: f32,

    /// Seconds accumulated since the clock started.
    pub total: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `AppTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the loop is paused
/// by the debugger, the window is dragged, or a frame stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    total: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (100µs..250ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            total: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching the accumulated total.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> AppTime {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(elapsed)
    }

    /// Advances the clock by an explicit amount of wall time.
    pub fn advance(&mut self, elapsed: Duration) -> AppTime {
        let dt = elapsed.clamp(self.dt_min, self.dt_max);
        self.total += dt.as_secs_f64();

        let time = AppTime {
            delta: dt.as_secs_f32(),
            total: self.total,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }

    /// Seconds accumulated so far.
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn delta_is_clamped_to_max() {
        let mut clock = FrameClock::new();
        let t = clock.advance(Duration::from_secs(3));
        assert_relative_eq!(t.delta, 0.25);
    }

    #[test]
    fn delta_is_clamped_to_min() {
        let mut clock = FrameClock::new();
        let t = clock.advance(Duration::ZERO);
        assert_relative_eq!(t.delta, 0.0001, epsilon = 1e-7);
    }

    #[test]
    fn total_accumulates_and_frames_count() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(100));
        let t = clock.advance(Duration::from_millis(50));
        assert_relative_eq!(t.total, 0.15, epsilon = 1e-9);
        assert_eq!(t.frame_index, 1);
    }
}
