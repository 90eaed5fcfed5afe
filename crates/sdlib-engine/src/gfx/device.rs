use std::path::Path;

use crate::coords::{IRect, Rect, Vec2};
use crate::paint::{BlendMode, Color};

use super::error::GfxResult;
use super::font::FontFamily;

slotmap::new_key_type! {
    /// Handle to a texture owned by a `Graphics` device.
    ///
    /// Handles are `Copy` and stay valid until `Graphics::destroy_texture`;
    /// a destroyed handle resolves to `GfxError::UnknownTexture`.
    pub struct TextureId;
}

/// Mirroring applied to a texture copy.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip { horizontal: false, vertical: false };
    pub const HORIZONTAL: Flip = Flip { horizontal: true, vertical: false };
    pub const VERTICAL: Flip = Flip { horizontal: false, vertical: true };
    pub const BOTH: Flip = Flip { horizontal: true, vertical: true };
}

/// Per-copy texture state: blending, modulation, rotation and flip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CopyOptions {
    pub blend: BlendMode,
    pub alpha: u8,
    /// Color modulation; white leaves the texture unchanged.
    pub tint: Color,
    /// Clockwise rotation in degrees.
    pub angle: f64,
    /// Rotation center relative to the destination rect; its middle when `None`.
    pub center: Option<Vec2>,
    pub flip: Flip,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            blend: BlendMode::Blend,
            alpha: 255,
            tint: Color::WHITE,
            angle: 0.0,
            center: None,
            flip: Flip::NONE,
        }
    }
}

/// Geometry vertex. `tex_coord` is normalized and ignored without a texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
    pub tex_coord: Vec2,
}

impl Vertex {
    pub fn colored(position: Vec2, color: Color) -> Self {
        Self { position, color, tex_coord: Vec2::ZERO }
    }
}

/// Draw calls against the current render target.
pub trait DrawSurface {
    /// Fills `rect` with `color`, alpha-blended.
    fn fill_rect(&mut self, rect: IRect, color: Color) -> GfxResult<()>;

    /// Copies `src` of `texture` (the whole texture when `None`) into `dst`.
    fn copy(&mut self, texture: TextureId, src: Option<IRect>, dst: Rect, options: &CopyOptions) -> GfxResult<()>;

    /// Renders triangles; `indices` of `None` draws the vertices in order.
    fn geometry(&mut self, vertices: &[Vertex], indices: Option<&[u32]>, texture: Option<TextureId>) -> GfxResult<()>;

    /// Pixel size of a live texture.
    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)>;
}

/// A rendering device: owns textures and the screen.
pub trait Graphics: DrawSurface {
    /// The device itself as a plain draw surface targeting the screen.
    fn surface(&mut self) -> &mut dyn DrawSurface;

    /// Creates a transparent render-target texture.
    fn create_target(&mut self, width: u32, height: u32) -> GfxResult<TextureId>;

    /// Decodes an image file into a texture.
    fn load_texture(&mut self, path: &Path) -> GfxResult<TextureId>;

    /// Rasterizes a single line of text. `text` must not be empty.
    fn render_text(&mut self, font: &FontFamily, text: &str) -> GfxResult<TextureId>;

    /// Frees a texture. Returns `false` for unknown handles.
    fn destroy_texture(&mut self, texture: TextureId) -> bool;

    /// Redirects drawing into `target`, cleared to transparent first, then
    /// restores the previous target. `target` cannot be drawn from meanwhile.
    fn render_to(
        &mut self,
        target: TextureId,
        draw: &mut dyn FnMut(&mut dyn DrawSurface) -> GfxResult<()>,
    ) -> GfxResult<()>;

    /// Clears the screen.
    fn clear(&mut self, color: Color) -> GfxResult<()>;
}
