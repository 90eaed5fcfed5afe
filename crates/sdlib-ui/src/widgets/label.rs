use sdlib_engine::coords::extent;
use sdlib_engine::gfx::{DrawSurface, FontFamily, FontRenderer, GfxResult, Graphics};

use crate::element::Widget;
use crate::position::{HorizontalAlign, VerticalAlign, align};

/// Static text aligned inside the element.
#[derive(Debug)]
pub struct Label {
    pub font: FontRenderer,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Label {
    pub fn new(family: FontFamily) -> Self {
        Self {
            font: FontRenderer::new(family, "Label"),
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Top,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.font.set_text(text);
        self
    }

    pub fn with_align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn text(&self) -> &str {
        self.font.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.font.set_text(text);
    }
}

impl Widget for Label {
    fn prepare(&mut self, gfx: &mut dyn Graphics) -> GfxResult<()> {
        self.font.refresh(gfx)
    }

    fn paint(&mut self, surface: &mut dyn DrawSurface, (w, h): (u32, u32)) -> GfxResult<()> {
        let Some(texture) = self.font.texture() else {
            return Ok(());
        };
        let x = align(extent(w), texture.actual_width() as i32, self.horizontal);
        let y = align(extent(h), texture.actual_height() as i32, self.vertical);
        texture.render(surface, x as f32, y as f32)
    }

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        self.font.dispose(gfx);
    }
}
