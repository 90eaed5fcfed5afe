use super::device::{DrawSurface, Graphics};
use super::error::{GfxError, GfxResult};
use super::texture::Texture2D;

/// Offscreen render target with sprite parameters.
///
/// Drawing into the area always starts from a transparent clear, so an area
/// can be re-rendered every frame and composited with alpha blending.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureArea {
    texture: Texture2D,
}

impl TextureArea {
    pub fn new(gfx: &mut dyn Graphics, width: u32, height: u32) -> GfxResult<Self> {
        if width == 0 || height == 0 {
            return Err(GfxError::InvalidSize { width, height });
        }
        let id = gfx.create_target(width, height)?;
        Ok(Self {
            texture: Texture2D::new(id, width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.texture.width()
    }

    pub fn height(&self) -> u32 {
        self.texture.height()
    }

    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut Texture2D {
        &mut self.texture
    }

    /// Clears the area and runs `draw` with the area as the current target.
    pub fn render<F>(&self, gfx: &mut dyn Graphics, mut draw: F) -> GfxResult<()>
    where
        F: FnMut(&mut dyn DrawSurface) -> GfxResult<()>,
    {
        gfx.render_to(self.texture.id(), &mut draw)
    }

    pub fn destroy(self, gfx: &mut dyn Graphics) {
        self.texture.destroy(gfx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::IRect;
    use crate::gfx::headless::{DrawCall, HeadlessGraphics};
    use crate::paint::Color;

    #[test]
    fn zero_sized_area_is_rejected() {
        let mut gfx = HeadlessGraphics::new();
        let err = TextureArea::new(&mut gfx, 0, 10).unwrap_err();
        assert_eq!(err, GfxError::InvalidSize { width: 0, height: 10 });
    }

    #[test]
    fn render_clears_before_drawing() {
        let mut gfx = HeadlessGraphics::new();
        let area = TextureArea::new(&mut gfx, 16, 8).unwrap();
        area.render(&mut gfx, |s| s.fill_rect(IRect::sized(16, 8), Color::BLUE))
            .unwrap();

        let target = Some(area.texture().id());
        assert_eq!(gfx.calls(), &[
            DrawCall::Clear { target, color: Color::TRANSPARENT },
            DrawCall::Fill { target, rect: IRect::sized(16, 8), color: Color::BLUE },
        ]);
    }
}
