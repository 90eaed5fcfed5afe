//! Core runtime contracts shared by every backend.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
