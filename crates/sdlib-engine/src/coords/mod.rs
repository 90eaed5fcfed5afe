//! Coordinate and geometry types shared by the graphics layer, UI and actors.
//!
//! Screen space:
//! - Window pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Element bounds are integral (`IRect`); draw destinations may be fractional (`Rect`).

mod rect;
mod vec2;

pub use rect::{IRect, Rect, extent};
pub use vec2::Vec2;
