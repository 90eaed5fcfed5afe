use std::time::{Duration, Instant};

/// Caps a loop at a maximum framerate by sleeping out the rest of each frame.
///
/// A framerate of `None`, a non-positive value, or one so low that a frame
/// would outlast `Duration` disables pacing.
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(max_framerate: Option<f64>) -> Self {
        Self {
            budget: budget_for(max_framerate),
            frame_start: Instant::now(),
        }
    }

    pub fn set_max_framerate(&mut self, max_framerate: Option<f64>) {
        self.budget = budget_for(max_framerate);
    }

    /// Time allotted to a single frame, if pacing is enabled.
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Marks the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// How long to sleep after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let budget = self.budget?;
        budget.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleeps until the frame budget is used up.
    pub fn wait(&mut self) {
        if let Some(rest) = self.remaining(self.frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

fn budget_for(max_framerate: Option<f64>) -> Option<Duration> {
    match max_framerate {
        Some(fps) if fps > 0.0 && fps.is_finite() => Duration::try_from_secs_f64(1.0 / fps).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget() {
        let pacer = FramePacer::new(Some(60.0));
        let budget = pacer.budget().unwrap();
        assert_eq!(budget.as_micros(), 16_666);
    }

    #[test]
    fn non_positive_rate_disables_pacing() {
        assert!(FramePacer::new(Some(-1.0)).budget().is_none());
        assert!(FramePacer::new(Some(0.0)).budget().is_none());
        assert!(FramePacer::new(None).remaining(Duration::ZERO).is_none());
    }

    #[test]
    fn vanishing_rate_disables_pacing() {
        assert!(FramePacer::new(Some(1e-300)).budget().is_none());
        assert!(FramePacer::new(Some(f64::MIN_POSITIVE)).budget().is_none());
    }

    #[test]
    fn runtime_command_with_vanishing_rate_disables_pacing() {
        use crate::window::{RuntimeCtx, WindowCommand};

        let mut pacer = FramePacer::new(Some(60.0));
        let mut ctx = RuntimeCtx::default();
        ctx.set_max_framerate(Some(1e-300));
        for command in ctx.drain() {
            if let WindowCommand::SetMaxFramerate(fps) = command {
                pacer.set_max_framerate(fps);
            }
        }
        assert!(pacer.budget().is_none());
    }

    #[test]
    fn remaining_is_budget_minus_elapsed() {
        let pacer = FramePacer::new(Some(100.0));
        assert_eq!(pacer.remaining(Duration::from_millis(4)), Some(Duration::from_millis(6)));
        assert_eq!(pacer.remaining(Duration::from_millis(10)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(25)), None);
    }
}
