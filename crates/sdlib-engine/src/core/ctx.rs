use crate::audio::AudioDevice;
use crate::gfx::Graphics;
use crate::input::{InputFrame, InputState, InputView};
use crate::time::AppTime;
use crate::window::{RuntimeCtx, WindowInfo};

/// Per-frame context passed to `core::App` callbacks.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    pub gfx: &'a mut dyn Graphics,
    pub audio: &'a mut dyn AudioDevice,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: AppTime,
    /// Last completed frames-per-second reading.
    pub fps: f64,
    pub window: &'a WindowInfo,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a> FrameCtx<'a> {
    /// Held state and this frame's transitions together.
    pub fn input_view(&self) -> InputView<'a> {
        InputView::new(self.input, self.input_frame)
    }
}
