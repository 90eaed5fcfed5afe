//! Window state visible to apps, and the buffered runtime commands that change it.
//!
//! Apps never touch the native window directly: they read a `WindowInfo`
//! snapshot and queue changes on `RuntimeCtx`, which the backend applies
//! after the frame callback returns.

mod commands;

pub use commands::{RuntimeCtx, WindowCommand};

/// Snapshot of the window taken at the start of each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowInfo {
    pub title: String,
    pub size: (u32, u32),
    pub position: (i32, i32),
    pub min_size: (u32, u32),
    pub max_size: (u32, u32),
    pub focused: bool,
}
