use sdlib_engine::gfx::{DrawSurface, GfxResult, RectangleShape};
use sdlib_engine::paint::Color;

use crate::element::Widget;

/// Fills the whole element with one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub color: Color,
    /// Replaces the alpha of `color`.
    pub opacity: u8,
}

impl Panel {
    pub fn new(color: Color) -> Self {
        Self { color, opacity: color.a }
    }

    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Widget for Panel {
    fn paint(&mut self, surface: &mut dyn DrawSurface, (width, height): (u32, u32)) -> GfxResult<()> {
        RectangleShape {
            width,
            height,
            color: self.color,
            opacity: self.opacity,
        }
        .render(surface, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use sdlib_engine::coords::IRect;
    use sdlib_engine::gfx::headless::{DrawCall, HeadlessGraphics};
    use sdlib_engine::input::{InputFrame, InputState, InputView};

    use super::*;
    use crate::element::UiElement;

    #[test]
    fn fills_the_area_with_opacity() {
        let mut gfx = HeadlessGraphics::new();
        let (state, frame) = (InputState::default(), InputFrame::default());
        let mut panel = UiElement::new(Panel::new(Color::RED).with_opacity(128), 3, 4, 30, 20).unwrap();

        panel.update(&mut gfx, &InputView::new(&state, &frame), 0.0).unwrap();
        panel.render(&mut gfx).unwrap();

        let area = panel.area().unwrap().texture().id();
        assert!(gfx.calls().contains(&DrawCall::Fill {
            target: Some(area),
            rect: IRect::new(0, 0, 30, 20),
            color: Color::rgba(255, 0, 0, 128),
        }));
    }
}
