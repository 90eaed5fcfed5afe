//! Windowless `Graphics` implementation.
//!
//! Textures are size-only records and every draw call is appended to a log,
//! which makes the device usable for tests and for dry runs without a display.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use slotmap::SlotMap;

use crate::coords::{IRect, Rect};
use crate::paint::Color;

use super::device::{CopyOptions, DrawSurface, Graphics, TextureId, Vertex};
use super::error::{GfxError, GfxResult};
use super::font::FontFamily;

/// What produced a headless texture.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureOrigin {
    Target,
    Image(PathBuf),
    Text(String),
}

#[derive(Debug, Clone)]
struct HeadlessTexture {
    width: u32,
    height: u32,
    origin: TextureOrigin,
}

/// A recorded draw call. `target` is `None` for the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        target: Option<TextureId>,
        color: Color,
    },
    Fill {
        target: Option<TextureId>,
        rect: IRect,
        color: Color,
    },
    Copy {
        target: Option<TextureId>,
        texture: TextureId,
        src: Option<IRect>,
        dst: Rect,
        options: CopyOptions,
    },
    Geometry {
        target: Option<TextureId>,
        vertices: usize,
        indices: Option<usize>,
        texture: Option<TextureId>,
    },
}

impl DrawCall {
    pub fn target(&self) -> Option<TextureId> {
        match self {
            DrawCall::Clear { target, .. }
            | DrawCall::Fill { target, .. }
            | DrawCall::Copy { target, .. }
            | DrawCall::Geometry { target, .. } => *target,
        }
    }
}

/// Recording graphics device.
///
/// Text is measured as `ceil(size / 2)` pixels per character by `size` pixels
/// per line. Images resolve through `register_image`; unknown paths fail to load.
#[derive(Debug, Default)]
pub struct HeadlessGraphics {
    textures: SlotMap<TextureId, HeadlessTexture>,
    images: HashMap<PathBuf, (u32, u32)>,
    calls: Vec<DrawCall>,
}

impl HeadlessGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `path` loadable with the given pixel size.
    pub fn register_image(&mut self, path: impl Into<PathBuf>, width: u32, height: u32) {
        self.images.insert(path.into(), (width, height));
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of live textures.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn origin(&self, texture: TextureId) -> Option<&TextureOrigin> {
        self.textures.get(texture).map(|t| &t.origin)
    }

    /// Pixel size headless text rendering gives `text` in `font`.
    pub fn measure(font: &FontFamily, text: &str) -> (u32, u32) {
        let advance = (font.size as u32).div_ceil(2);
        (advance * text.chars().count() as u32, font.size as u32)
    }

    fn insert(&mut self, width: u32, height: u32, origin: TextureOrigin) -> TextureId {
        self.textures.insert(HeadlessTexture { width, height, origin })
    }

    fn screen(&mut self) -> Recorder<'_> {
        Recorder {
            textures: &self.textures,
            calls: &mut self.calls,
            target: None,
        }
    }
}

/// Draw surface bound to one target.
struct Recorder<'a> {
    textures: &'a SlotMap<TextureId, HeadlessTexture>,
    calls: &'a mut Vec<DrawCall>,
    target: Option<TextureId>,
}

impl Recorder<'_> {
    fn check(&self, texture: TextureId) -> GfxResult<()> {
        if self.target == Some(texture) || !self.textures.contains_key(texture) {
            return Err(GfxError::UnknownTexture);
        }
        Ok(())
    }
}

impl DrawSurface for Recorder<'_> {
    fn fill_rect(&mut self, rect: IRect, color: Color) -> GfxResult<()> {
        self.calls.push(DrawCall::Fill { target: self.target, rect, color });
        Ok(())
    }

    fn copy(&mut self, texture: TextureId, src: Option<IRect>, dst: Rect, options: &CopyOptions) -> GfxResult<()> {
        self.check(texture)?;
        self.calls.push(DrawCall::Copy {
            target: self.target,
            texture,
            src,
            dst,
            options: *options,
        });
        Ok(())
    }

    fn geometry(&mut self, vertices: &[Vertex], indices: Option<&[u32]>, texture: Option<TextureId>) -> GfxResult<()> {
        if let Some(texture) = texture {
            self.check(texture)?;
        }
        self.calls.push(DrawCall::Geometry {
            target: self.target,
            vertices: vertices.len(),
            indices: indices.map(<[u32]>::len),
            texture,
        });
        Ok(())
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(texture).map(|t| (t.width, t.height))
    }
}

impl DrawSurface for HeadlessGraphics {
    fn fill_rect(&mut self, rect: IRect, color: Color) -> GfxResult<()> {
        self.screen().fill_rect(rect, color)
    }

    fn copy(&mut self, texture: TextureId, src: Option<IRect>, dst: Rect, options: &CopyOptions) -> GfxResult<()> {
        self.screen().copy(texture, src, dst, options)
    }

    fn geometry(&mut self, vertices: &[Vertex], indices: Option<&[u32]>, texture: Option<TextureId>) -> GfxResult<()> {
        self.screen().geometry(vertices, indices, texture)
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(texture).map(|t| (t.width, t.height))
    }
}

impl Graphics for HeadlessGraphics {
    fn surface(&mut self) -> &mut dyn DrawSurface {
        self
    }

    fn create_target(&mut self, width: u32, height: u32) -> GfxResult<TextureId> {
        if width == 0 || height == 0 {
            return Err(GfxError::InvalidSize { width, height });
        }
        Ok(self.insert(width, height, TextureOrigin::Target))
    }

    fn load_texture(&mut self, path: &Path) -> GfxResult<TextureId> {
        let (width, height) = self
            .images
            .get(path)
            .copied()
            .ok_or_else(|| GfxError::Image(format!("Couldn't open {}", path.display())))?;
        Ok(self.insert(width, height, TextureOrigin::Image(path.to_path_buf())))
    }

    fn render_text(&mut self, font: &FontFamily, text: &str) -> GfxResult<TextureId> {
        if text.is_empty() {
            return Err(GfxError::Font("Text has zero width".into()));
        }
        let (width, height) = Self::measure(font, text);
        Ok(self.insert(width, height, TextureOrigin::Text(text.to_string())))
    }

    fn destroy_texture(&mut self, texture: TextureId) -> bool {
        self.textures.remove(texture).is_some()
    }

    fn render_to(
        &mut self,
        target: TextureId,
        draw: &mut dyn FnMut(&mut dyn DrawSurface) -> GfxResult<()>,
    ) -> GfxResult<()> {
        match self.textures.get(target) {
            Some(t) if t.origin == TextureOrigin::Target => {}
            _ => return Err(GfxError::UnknownTexture),
        }

        let mut recorder = Recorder {
            textures: &self.textures,
            calls: &mut self.calls,
            target: Some(target),
        };
        recorder.calls.push(DrawCall::Clear { target: Some(target), color: Color::TRANSPARENT });
        draw(&mut recorder)
    }

    fn clear(&mut self, color: Color) -> GfxResult<()> {
        self.calls.push(DrawCall::Clear { target: None, color });
        Ok(())
    }
}
