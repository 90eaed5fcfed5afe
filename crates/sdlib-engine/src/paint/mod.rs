//! Paint model shared between the graphics objects, UI and actors.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes, as the renderer consumes them)
//! - blend modes applied to texture copies and fills

pub mod blend;
pub mod color;

pub use blend::BlendMode;
pub use color::Color;
