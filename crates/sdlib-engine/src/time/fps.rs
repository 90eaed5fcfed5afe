/// Frames-per-second counter over one-second windows.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    window: f64,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame of `delta` seconds.
    ///
    /// Returns the new reading when a one-second window closes.
    pub fn tick(&mut self, delta: f64) -> Option<f64> {
        self.frames += 1;
        self.window += delta;

        if self.window < 1.0 {
            return None;
        }

        self.fps = self.frames as f64 / self.window;
        self.frames = 0;
        self.window = 0.0;
        Some(self.fps)
    }

    /// Last completed reading; zero until the first window closes.
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reports_once_per_second() {
        let mut counter = FpsCounter::new();
        for _ in 0..7 {
            assert!(counter.tick(0.125).is_none());
        }
        let fps = counter.tick(0.125).unwrap();
        assert_relative_eq!(fps, 8.0);
        assert_relative_eq!(counter.fps(), 8.0);
    }

    #[test]
    fn zero_before_first_window() {
        let mut counter = FpsCounter::new();
        counter.tick(0.1);
        assert_eq!(counter.fps(), 0.0);
    }
}
