use std::path::Path;

use crate::coords::{IRect, Rect, Vec2};
use crate::paint::{BlendMode, Color};

use super::device::{CopyOptions, DrawSurface, Flip, Graphics, TextureId};
use super::error::{GfxError, GfxResult};

/// One of the nine anchor points of a box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ReferencePoint {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl ReferencePoint {
    /// Position of the anchor inside a `w` x `h` box.
    pub fn offset(self, w: f32, h: f32) -> Vec2 {
        use ReferencePoint::*;
        let x = match self {
            TopLeft | Left | BottomLeft => 0.0,
            Top | Center | Bottom => w / 2.0,
            TopRight | Right | BottomRight => w,
        };
        let y = match self {
            TopLeft | Top | TopRight => 0.0,
            Left | Center | Right => h / 2.0,
            BottomLeft | Bottom | BottomRight => h,
        };
        Vec2::new(x, y)
    }
}

/// A texture plus the sprite parameters used when drawing it.
///
/// The pixel data lives in the `Graphics` device; this is a cheap handle.
/// `render_point` anchors the texture at the position passed to `render`,
/// `rotation_point` is the pivot for `rotation`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2D {
    id: TextureId,
    width: u32,
    height: u32,

    pub width_scale: f32,
    pub height_scale: f32,
    pub alpha: u8,
    /// Clockwise degrees.
    pub rotation: f64,
    /// Color modulation.
    pub brightness: Color,
    pub rotation_point: ReferencePoint,
    pub render_point: ReferencePoint,
    pub blend_mode: BlendMode,
    pub flip: Flip,
}

impl Texture2D {
    pub fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            width_scale: 1.0,
            height_scale: 1.0,
            alpha: 255,
            rotation: 0.0,
            brightness: Color::WHITE,
            rotation_point: ReferencePoint::Center,
            render_point: ReferencePoint::TopLeft,
            blend_mode: BlendMode::Blend,
            flip: Flip::NONE,
        }
    }

    /// Wraps a texture the device already owns, reading its size.
    pub fn from_id(gfx: &dyn Graphics, id: TextureId) -> GfxResult<Self> {
        let (w, h) = gfx.texture_size(id).ok_or(GfxError::UnknownTexture)?;
        Ok(Self::new(id, w, h))
    }

    /// Decodes an image file.
    pub fn load(gfx: &mut dyn Graphics, path: impl AsRef<Path>) -> GfxResult<Self> {
        let id = gfx.load_texture(path.as_ref())?;
        Self::from_id(gfx, id)
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width after scaling.
    #[inline]
    pub fn actual_width(&self) -> f32 {
        self.width as f32 * self.width_scale
    }

    /// Height after scaling.
    #[inline]
    pub fn actual_height(&self) -> f32 {
        self.height as f32 * self.height_scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.width_scale = scale;
        self.height_scale = scale;
    }

    /// Copies the sprite parameters of `other`, keeping this texture's handle and size.
    pub fn inherit_params(&mut self, other: &Texture2D) {
        self.width_scale = other.width_scale;
        self.height_scale = other.height_scale;
        self.alpha = other.alpha;
        self.rotation = other.rotation;
        self.brightness = other.brightness;
        self.rotation_point = other.rotation_point;
        self.render_point = other.render_point;
        self.blend_mode = other.blend_mode;
        self.flip = other.flip;
    }

    /// Destination for drawing the texture (or its `clip` region) anchored at `(x, y)`.
    pub fn dest_rect(&self, x: f32, y: f32, clip: Option<IRect>) -> Rect {
        let (w, h) = match clip {
            Some(c) => (c.w as f32, c.h as f32),
            None => (self.width as f32, self.height as f32),
        };
        let w = w * self.width_scale;
        let h = h * self.height_scale;
        let anchor = self.render_point.offset(w, h);
        Rect::new(x - anchor.x, y - anchor.y, w, h)
    }

    pub fn copy_options(&self, dst: Rect) -> CopyOptions {
        CopyOptions {
            blend: self.blend_mode,
            alpha: self.alpha,
            tint: self.brightness,
            angle: self.rotation,
            center: Some(self.rotation_point.offset(dst.w, dst.h)),
            flip: self.flip,
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface, x: f32, y: f32) -> GfxResult<()> {
        let dst = self.dest_rect(x, y, None);
        surface.copy(self.id, None, dst, &self.copy_options(dst))
    }

    /// Draws only the `clip` region of the texture.
    pub fn render_clip(&self, surface: &mut dyn DrawSurface, x: f32, y: f32, clip: IRect) -> GfxResult<()> {
        let dst = self.dest_rect(x, y, Some(clip));
        surface.copy(self.id, Some(clip), dst, &self.copy_options(dst))
    }

    /// Stretches the texture over `dst`, ignoring scale and render point.
    pub fn render_ex(&self, surface: &mut dyn DrawSurface, dst: Rect) -> GfxResult<()> {
        surface.copy(self.id, None, dst, &self.copy_options(dst))
    }

    /// Frees the device texture.
    pub fn destroy(self, gfx: &mut dyn Graphics) {
        gfx.destroy_texture(self.id);
    }
}
