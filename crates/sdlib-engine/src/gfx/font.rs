use std::path::PathBuf;

use bitflags::bitflags;

use crate::paint::Color;

use super::device::{Graphics, TextureId};
use super::error::GfxResult;
use super::texture::Texture2D;
use super::texture_area::TextureArea;

bitflags! {
    /// Font style flags; the empty set is the regular face.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
    }
}

impl FontStyle {
    pub const NORMAL: FontStyle = FontStyle::empty();
}

/// A font file at a point size, with style and color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFamily {
    pub path: PathBuf,
    pub size: u16,
    pub style: FontStyle,
    pub color: Color,
}

impl FontFamily {
    pub fn new(path: impl Into<PathBuf>, size: u16) -> Self {
        Self {
            path: path.into(),
            size,
            style: FontStyle::NORMAL,
            color: Color::BLACK,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Text rendered to a texture, re-rasterized only when the text or font changes.
///
/// Text containing `\n` is rendered line by line and stacked into one
/// offscreen area: its width is the widest line, its height the sum of the
/// line heights. Empty or whitespace-only text has no texture.
#[derive(Debug)]
pub struct FontRenderer {
    family: FontFamily,
    text: String,
    rendered_key: Option<(String, FontFamily)>,
    output: Option<Texture2D>,
}

impl FontRenderer {
    pub fn new(family: FontFamily, text: impl Into<String>) -> Self {
        Self {
            family,
            text: text.into(),
            rendered_key: None,
            output: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    pub fn family_mut(&mut self) -> &mut FontFamily {
        &mut self.family
    }

    pub fn set_family(&mut self, family: FontFamily) {
        self.family = family;
    }

    /// True when the next `refresh` will re-rasterize.
    pub fn is_stale(&self) -> bool {
        match &self.rendered_key {
            Some((text, family)) => *text != self.text || *family != self.family,
            None => true,
        }
    }

    /// The last rendered texture, if any.
    pub fn texture(&self) -> Option<&Texture2D> {
        self.output.as_ref()
    }

    /// Sprite parameters set here survive re-rasterization.
    pub fn texture_mut(&mut self) -> Option<&mut Texture2D> {
        self.output.as_mut()
    }

    /// Re-rasterizes if stale and returns the current texture.
    pub fn render(&mut self, gfx: &mut dyn Graphics) -> GfxResult<Option<&Texture2D>> {
        self.refresh(gfx)?;
        Ok(self.output.as_ref())
    }

    pub fn refresh(&mut self, gfx: &mut dyn Graphics) -> GfxResult<()> {
        if !self.is_stale() {
            return Ok(());
        }

        let previous = self.output.take();

        let next = if self.text.trim().is_empty() {
            None
        } else if self.text.contains('\n') {
            Some(self.compose_lines(gfx)?)
        } else {
            let id = gfx.render_text(&self.family, &self.text)?;
            Some(Texture2D::from_id(gfx, id)?)
        };

        self.output = match (next, previous) {
            (Some(mut next), Some(previous)) => {
                next.inherit_params(&previous);
                previous.destroy(gfx);
                Some(next)
            }
            (next, previous) => {
                if let Some(previous) = previous {
                    previous.destroy(gfx);
                }
                next
            }
        };

        self.rendered_key = Some((self.text.clone(), self.family.clone()));
        Ok(())
    }

    fn compose_lines(&self, gfx: &mut dyn Graphics) -> GfxResult<Texture2D> {
        // Blank lines still take up a line of height.
        let mut lines: Vec<(Option<TextureId>, u32, u32)> = Vec::new();
        let rasterized: GfxResult<()> = self.text.split('\n').try_for_each(|line| {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                lines.push((None, 0, self.family.size as u32));
                return Ok(());
            }
            let id = gfx.render_text(&self.family, line)?;
            let (w, h) = gfx.texture_size(id).unwrap_or((0, 0));
            lines.push((Some(id), w, h));
            Ok(())
        });

        let composed: GfxResult<Texture2D> = rasterized.and_then(|()| {
            let width = lines.iter().map(|(_, w, _)| *w).max().unwrap_or(0);
            let height = lines.iter().map(|(_, _, h)| *h).sum();
            let area = TextureArea::new(gfx, width, height)?;

            let drawn = area.render(gfx, |surface| {
                let mut y = 0.0;
                for (id, w, h) in &lines {
                    if let Some(id) = id {
                        let line = Texture2D::new(*id, *w, *h);
                        line.render(surface, 0.0, y)?;
                    }
                    y += *h as f32;
                }
                Ok(())
            });

            match drawn {
                Ok(()) => Ok(area.texture().clone()),
                Err(e) => {
                    area.destroy(gfx);
                    Err(e)
                }
            }
        });

        for (id, _, _) in lines {
            if let Some(id) = id {
                gfx.destroy_texture(id);
            }
        }

        composed
    }

    /// Frees the rendered texture.
    pub fn dispose(&mut self, gfx: &mut dyn Graphics) {
        if let Some(texture) = self.output.take() {
            texture.destroy(gfx);
        }
        self.rendered_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::headless::{DrawCall, HeadlessGraphics, TextureOrigin};

    fn family() -> FontFamily {
        FontFamily::new("fonts/mono.ttf", 16)
    }

    // ── caching ───────────────────────────────────────────────────────────

    #[test]
    fn unchanged_text_is_not_rerendered() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "hello");
        let first = text.render(&mut gfx).unwrap().unwrap().id();
        let second = text.render(&mut gfx).unwrap().unwrap().id();
        assert_eq!(first, second);
        assert_eq!(gfx.texture_count(), 1);
    }

    #[test]
    fn changed_text_replaces_texture() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "hello");
        text.refresh(&mut gfx).unwrap();
        text.set_text("hello, world");
        assert!(text.is_stale());
        let t = text.render(&mut gfx).unwrap().unwrap();
        assert_eq!(t.width(), 12 * 8);
        assert_eq!(gfx.texture_count(), 1);
    }

    #[test]
    fn family_change_marks_stale() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "x");
        text.refresh(&mut gfx).unwrap();
        text.family_mut().style = FontStyle::BOLD | FontStyle::ITALIC;
        assert!(text.is_stale());
    }

    #[test]
    fn whitespace_text_has_no_texture() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "abc");
        text.refresh(&mut gfx).unwrap();
        text.set_text("  \t ");
        assert!(text.render(&mut gfx).unwrap().is_none());
        assert_eq!(gfx.texture_count(), 0);
    }

    #[test]
    fn sprite_parameters_survive_rerender() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "a");
        text.refresh(&mut gfx).unwrap();
        if let Some(t) = text.texture_mut() {
            t.alpha = 10;
        }
        text.set_text("b");
        assert_eq!(text.render(&mut gfx).unwrap().unwrap().alpha, 10);
    }

    // ── multi-line ────────────────────────────────────────────────────────

    #[test]
    fn lines_stack_into_one_area() {
        let mut gfx = HeadlessGraphics::new();
        let mut text = FontRenderer::new(family(), "ab\nabcd\n\nz");
        let t = text.render(&mut gfx).unwrap().unwrap().clone();

        assert_eq!(t.width(), 4 * 8);
        assert_eq!(t.height(), 4 * 16);
        assert_eq!(gfx.origin(t.id()), Some(&TextureOrigin::Target));
        // Only the composed area remains alive.
        assert_eq!(gfx.texture_count(), 1);

        let ys: Vec<f32> = gfx
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Copy { dst, .. } => Some(dst.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![0.0, 16.0, 48.0]);
    }
}
