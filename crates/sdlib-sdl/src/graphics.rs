use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use log::debug;
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color as SdlColor, PixelFormatEnum};
use sdl2::rect::{FPoint, FRect, Rect as SdlRect};
use sdl2::render::{
    BlendMode as SdlBlendMode, Canvas, TargetRenderError, Texture, TextureCreator,
    Vertex as SdlVertex, VertexIndices,
};
use sdl2::ttf::{Font, FontStyle as SdlFontStyle, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};
use slotmap::SlotMap;

use sdlib_engine::coords::{IRect, Rect};
use sdlib_engine::gfx::{
    CopyOptions, DrawSurface, FontFamily, FontStyle, GfxError, GfxResult, Graphics, TextureId,
    Vertex,
};
use sdlib_engine::paint::{BlendMode, Color};
use sdlib_engine::window::WindowInfo;

/// A texture plus its cached size. `texture` is `None` while the texture is
/// the current render target.
struct Slot {
    texture: Option<Texture>,
    width: u32,
    height: u32,
}

/// `Graphics` over an SDL window canvas.
///
/// Owns every texture it creates; handles are `TextureId`s into a slot map.
/// Textures still alive when the device drops are destroyed before the renderer.
pub struct SdlGraphics<'ttf> {
    canvas: Canvas<Window>,
    creator: TextureCreator<WindowContext>,
    ttf: &'ttf Sdl2TtfContext,
    fonts: HashMap<(PathBuf, u16), Font<'ttf, 'static>>,
    textures: SlotMap<TextureId, Slot>,
}

impl<'ttf> SdlGraphics<'ttf> {
    pub fn new(canvas: Canvas<Window>, ttf: &'ttf Sdl2TtfContext) -> Self {
        let creator = canvas.texture_creator();
        Self {
            canvas,
            creator,
            ttf,
            fonts: HashMap::new(),
            textures: SlotMap::with_key(),
        }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn window(&self) -> &Window {
        self.canvas.window()
    }

    pub fn window_mut(&mut self) -> &mut Window {
        self.canvas.window_mut()
    }

    pub fn window_info(&self, focused: bool) -> WindowInfo {
        let window = self.canvas.window();
        WindowInfo {
            title: window.title().to_string(),
            size: window.size(),
            position: window.position(),
            min_size: window.minimum_size(),
            max_size: window.maximum_size(),
            focused,
        }
    }

    fn insert(&mut self, texture: Texture) -> TextureId {
        let query = texture.query();
        self.textures.insert(Slot {
            texture: Some(texture),
            width: query.width,
            height: query.height,
        })
    }

    fn screen(&mut self) -> CanvasSurface<'_> {
        CanvasSurface {
            canvas: &mut self.canvas,
            textures: &mut self.textures,
        }
    }
}

impl Drop for SdlGraphics<'_> {
    fn drop(&mut self) {
        let count = self.textures.len();
        for (_, slot) in self.textures.drain() {
            if let Some(texture) = slot.texture {
                // SAFETY: the canvas that created the texture is still alive; fields drop after this.
                unsafe { texture.destroy() };
            }
        }
        self.fonts.clear();
        debug!("released {count} textures");
    }
}

/// Draw surface over the canvas' current target.
struct CanvasSurface<'a> {
    canvas: &'a mut Canvas<Window>,
    textures: &'a mut SlotMap<TextureId, Slot>,
}

fn texture_mut(textures: &mut SlotMap<TextureId, Slot>, id: TextureId) -> GfxResult<&mut Texture> {
    textures
        .get_mut(id)
        .and_then(|slot| slot.texture.as_mut())
        .ok_or(GfxError::UnknownTexture)
}

impl DrawSurface for CanvasSurface<'_> {
    fn fill_rect(&mut self, rect: IRect, color: Color) -> GfxResult<()> {
        let previous = self.canvas.draw_color();
        self.canvas.set_blend_mode(SdlBlendMode::Blend);
        self.canvas.set_draw_color(sdl_color(color));
        let result = self.canvas.fill_rect(sdl_rect(rect)).map_err(GfxError::Sdl);
        self.canvas.set_draw_color(previous);
        result
    }

    fn copy(&mut self, texture: TextureId, src: Option<IRect>, dst: Rect, options: &CopyOptions) -> GfxResult<()> {
        let texture = texture_mut(self.textures, texture)?;
        texture.set_blend_mode(sdl_blend(options.blend));
        texture.set_alpha_mod(options.alpha);
        texture.set_color_mod(options.tint.r, options.tint.g, options.tint.b);

        self.canvas
            .copy_ex_f(
                &*texture,
                src.map(sdl_rect),
                sdl_frect(dst),
                options.angle,
                options.center.map(|c| FPoint::new(c.x, c.y)),
                options.flip.horizontal,
                options.flip.vertical,
            )
            .map_err(GfxError::Sdl)
    }

    fn geometry(&mut self, vertices: &[Vertex], indices: Option<&[u32]>, texture: Option<TextureId>) -> GfxResult<()> {
        let vertices: Vec<SdlVertex> = vertices
            .iter()
            .map(|v| SdlVertex {
                position: FPoint::new(v.position.x, v.position.y),
                color: sdl_color(v.color),
                tex_coord: FPoint::new(v.tex_coord.x, v.tex_coord.y),
            })
            .collect();

        let texture = match texture {
            Some(id) => Some(&*texture_mut(self.textures, id)?),
            None => None,
        };

        let indices = match indices {
            Some(indices) => VertexIndices::from(indices),
            None => VertexIndices::Sequential,
        };

        self.canvas
            .render_geometry(&vertices, texture, indices)
            .map_err(GfxError::Sdl)
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(texture).map(|slot| (slot.width, slot.height))
    }
}

impl DrawSurface for SdlGraphics<'_> {
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
        self.textures.get(texture).map(|slot| (slot.width, slot.height))
    }
}

impl<'ttf> Graphics for SdlGraphics<'ttf> {
    fn surface(&mut self) -> &mut dyn DrawSurface {
        self
    }

    fn create_target(&mut self, width: u32, height: u32) -> GfxResult<TextureId> {
        if width == 0 || height == 0 {
            return Err(GfxError::InvalidSize { width, height });
        }
        let mut texture = self
            .creator
            .create_texture_target(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| GfxError::Sdl(e.to_string()))?;
        texture.set_blend_mode(SdlBlendMode::Blend);
        Ok(self.insert(texture))
    }

    fn load_texture(&mut self, path: &Path) -> GfxResult<TextureId> {
        let texture = self.creator.load_texture(path).map_err(GfxError::Image)?;
        Ok(self.insert(texture))
    }

    fn render_text(&mut self, family: &FontFamily, text: &str) -> GfxResult<TextureId> {
        let ttf: &'ttf Sdl2TtfContext = self.ttf;
        let font = match self.fonts.entry((family.path.clone(), family.size)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let font = ttf.load_font(&family.path, family.size).map_err(GfxError::Font)?;
                debug!("loaded font {} at {}pt", family.path.display(), family.size);
                entry.insert(font)
            }
        };

        font.set_style(sdl_font_style(family.style));
        let surface = font
            .render(text)
            .blended(sdl_color(family.color))
            .map_err(|e| GfxError::Font(e.to_string()))?;

        let texture = self
            .creator
            .create_texture_from_surface(&surface)
            .map_err(|e| GfxError::Sdl(e.to_string()))?;
        Ok(self.insert(texture))
    }

    fn destroy_texture(&mut self, texture: TextureId) -> bool {
        match self.textures.remove(texture) {
            Some(slot) => {
                if let Some(texture) = slot.texture {
                    // SAFETY: the texture came from `self.creator`, whose renderer is alive.
                    unsafe { texture.destroy() };
                }
                true
            }
            None => false,
        }
    }

    fn render_to(
        &mut self,
        target: TextureId,
        draw: &mut dyn FnMut(&mut dyn DrawSurface) -> GfxResult<()>,
    ) -> GfxResult<()> {
        let mut texture = self
            .textures
            .get_mut(target)
            .and_then(|slot| slot.texture.take())
            .ok_or(GfxError::UnknownTexture)?;

        let textures = &mut self.textures;
        let mut drawn = Ok(());
        let targeted = self.canvas.with_texture_canvas(&mut texture, |canvas| {
            canvas.set_blend_mode(SdlBlendMode::None);
            canvas.set_draw_color(SdlColor::RGBA(0, 0, 0, 0));
            canvas.clear();
            let mut surface = CanvasSurface { canvas, textures };
            drawn = draw(&mut surface);
        });

        if let Some(slot) = self.textures.get_mut(target) {
            slot.texture = Some(texture);
        }

        targeted.map_err(|e| match e {
            TargetRenderError::NotSupported => GfxError::TargetUnsupported,
            other => GfxError::Sdl(other.to_string()),
        })?;
        drawn
    }

    fn clear(&mut self, color: Color) -> GfxResult<()> {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
        Ok(())
    }
}

fn sdl_color(c: Color) -> SdlColor {
    SdlColor::RGBA(c.r, c.g, c.b, c.a)
}

fn sdl_rect(r: IRect) -> SdlRect {
    SdlRect::new(r.x, r.y, r.w, r.h)
}

fn sdl_frect(r: Rect) -> FRect {
    FRect::new(r.x, r.y, r.w, r.h)
}

fn sdl_blend(mode: BlendMode) -> SdlBlendMode {
    match mode {
        BlendMode::None => SdlBlendMode::None,
        BlendMode::Blend => SdlBlendMode::Blend,
        BlendMode::Add => SdlBlendMode::Add,
        BlendMode::Mod => SdlBlendMode::Mod,
        BlendMode::Mul => SdlBlendMode::Mul,
    }
}

fn sdl_font_style(style: FontStyle) -> SdlFontStyle {
    let mut out = SdlFontStyle::NORMAL;
    if style.contains(FontStyle::BOLD) {
        out |= SdlFontStyle::BOLD;
    }
    if style.contains(FontStyle::ITALIC) {
        out |= SdlFontStyle::ITALIC;
    }
    if style.contains(FontStyle::UNDERLINE) {
        out |= SdlFontStyle::UNDERLINE;
    }
    if style.contains(FontStyle::STRIKETHROUGH) {
        out |= SdlFontStyle::STRIKETHROUGH;
    }
    out
}
