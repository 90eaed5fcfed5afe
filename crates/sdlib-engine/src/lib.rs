//! sdlib engine crate.
//!
//! Backend-agnostic building blocks: geometry, colors, input, timing, logging,
//! configuration, the audio contract, and the graphics traits plus everything
//! built on them.
//! The SDL2 backend lives in `sdlib-sdl`; this crate never links a native library.

pub mod audio;
pub mod config;
pub mod coords;
pub mod core;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod paint;
pub mod time;
pub mod window;
