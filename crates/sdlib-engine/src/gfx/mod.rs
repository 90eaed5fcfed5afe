//! Graphics layer.
//!
//! Backends implement two traits:
//! - `DrawSurface`: draw calls against the current target (screen or texture)
//! - `Graphics`: texture lifecycle, text rasterization and render-to-texture
//!
//! Everything else here (sprites, offscreen areas, cached text, shapes, the
//! texture manager) is written against those traits and refers to textures by
//! `TextureId`, so graphics objects never borrow the device.

mod device;
mod error;
mod font;
pub mod headless;
mod shape;
mod texture;
mod texture_area;
mod texture_manager;

pub use device::{CopyOptions, DrawSurface, Flip, Graphics, TextureId, Vertex};
pub use error::{GfxError, GfxResult};
pub use font::{FontFamily, FontRenderer, FontStyle};
pub use shape::{Geometry, RectangleShape};
pub use texture::{ReferencePoint, Texture2D};
pub use texture_area::TextureArea;
pub use texture_manager::TextureManager;
