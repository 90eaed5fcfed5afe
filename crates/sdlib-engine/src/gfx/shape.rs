use crate::coords::{IRect, Rect, Vec2};
use crate::paint::Color;

use super::device::{DrawSurface, TextureId, Vertex};
use super::error::GfxResult;

/// Filled rectangle of a fixed size.
///
/// `opacity` replaces the alpha channel of `color` at draw time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectangleShape {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub opacity: u8,
}

impl RectangleShape {
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
            opacity: color.a,
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) -> GfxResult<()> {
        surface.fill_rect(
            IRect::new(x, y, self.width, self.height),
            self.color.with_alpha(self.opacity),
        )
    }
}

/// Triangle list with optional indices and texture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    /// `None` draws the vertices in order, three at a time.
    pub indices: Option<Vec<u32>>,
    pub texture: Option<TextureId>,
}

impl Geometry {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            indices: None,
            texture: None,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Two-triangle quad covering `rect`, with full texture coordinates.
    pub fn quad(rect: Rect, color: Color) -> Self {
        let corners = [
            (Vec2::new(rect.x, rect.y), Vec2::new(0.0, 0.0)),
            (Vec2::new(rect.x + rect.w, rect.y), Vec2::new(1.0, 0.0)),
            (Vec2::new(rect.x + rect.w, rect.y + rect.h), Vec2::new(1.0, 1.0)),
            (Vec2::new(rect.x, rect.y + rect.h), Vec2::new(0.0, 1.0)),
        ];
        let vertices = corners
            .into_iter()
            .map(|(position, tex_coord)| Vertex { position, color, tex_coord })
            .collect();
        Geometry::new(vertices).with_indices(vec![0, 1, 2, 2, 3, 0])
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) -> GfxResult<()> {
        surface.geometry(&self.vertices, self.indices.as_deref(), self.texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::headless::{DrawCall, HeadlessGraphics};

    #[test]
    fn rectangle_uses_opacity_as_alpha() {
        let mut gfx = HeadlessGraphics::new();
        let mut shape = RectangleShape::new(10, 5, Color::RED);
        shape.opacity = 64;
        shape.render(&mut gfx, 3, 4).unwrap();
        assert_eq!(gfx.calls(), &[DrawCall::Fill {
            target: None,
            rect: IRect::new(3, 4, 10, 5),
            color: Color::rgba(255, 0, 0, 64),
        }]);
    }

    #[test]
    fn quad_is_indexed() {
        let mut gfx = HeadlessGraphics::new();
        Geometry::quad(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE)
            .render(&mut gfx)
            .unwrap();
        assert_eq!(gfx.calls(), &[DrawCall::Geometry {
            target: None,
            vertices: 4,
            indices: Some(6),
            texture: None,
        }]);
    }

    #[test]
    fn unindexed_geometry_is_sequential() {
        let mut gfx = HeadlessGraphics::new();
        let v = Vertex::colored(Vec2::ZERO, Color::BLACK);
        Geometry::new(vec![v, v, v]).render(&mut gfx).unwrap();
        assert!(matches!(gfx.calls()[0], DrawCall::Geometry { indices: None, .. }));
    }
}
