use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers and driven by a backend runtime.
///
/// Call order: `on_init` once, then per frame every `on_event` followed by
/// one `on_frame`, and `on_quit` once after the loop ends.
pub trait App {
    /// Called once after the window and renderer exist. An error aborts startup.
    fn on_init(&mut self, ctx: &mut FrameCtx<'_>) -> anyhow::Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for each translated input event, before the frame.
    fn on_event(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame between clear and present.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once when the loop ends, while the renderer is still alive.
    fn on_quit(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }
}
