//! Time subsystem.
//!
//! Frame timing utilities that do not depend on the backend:
//! - `FrameClock` produces `AppTime` (delta and total time) once per presented frame
//! - `FramePacer` caps the loop at a maximum framerate
//! - `FpsCounter` reports frames per second over one-second windows

mod fps;
mod frame_clock;
mod pacer;

pub use fps::FpsCounter;
pub use frame_clock::{AppTime, FrameClock};
pub use pacer::FramePacer;
