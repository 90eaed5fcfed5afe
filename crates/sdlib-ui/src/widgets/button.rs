use sdlib_engine::coords::extent;
use sdlib_engine::gfx::{DrawSurface, FontFamily, FontRenderer, GfxResult, Graphics, RectangleShape, Texture2D};
use sdlib_engine::paint::Color;

use crate::element::{UpdateCtx, Widget};
use crate::position::{HorizontalAlign, VerticalAlign, align};

/// How a button's on state follows the pointer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ButtonMode {
    /// On while held.
    #[default]
    Momentary,
    /// Flips on every release.
    Toggle,
}

/// Placement of the text or icon inside the button.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Placement {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Added after alignment.
    pub offset: (i32, i32),
}

impl Placement {
    pub const CENTER: Placement = Placement {
        horizontal: HorizontalAlign::Center,
        vertical: VerticalAlign::Center,
        offset: (0, 0),
    };
}

/// A pressable button whose background fades between two colors.
///
/// The fade position is an angle in `[0, 90]` degrees that moves toward 90
/// while the button is on and toward 0 while it is off, covering the full
/// range in `fade` seconds. The background is
/// `back + sin(angle) * (click - back)` per channel.
pub struct Button {
    mode: ButtonMode,
    fade: f64,
    back_color: Color,
    click_color: Color,
    is_on: bool,

    angle: f64,
    now_color: Color,
    fading: bool,
    colors_changed: bool,
    on_color_change: Vec<Box<dyn FnMut(Color)>>,

    pub font: FontRenderer,
    pub text_placement: Placement,
    /// Drawn over the text. Not owned: disposing the button leaves it alive.
    pub icon: Option<Texture2D>,
    pub icon_placement: Placement,
}

impl Button {
    pub const DEFAULT_FADE: f64 = 0.125;

    /// Fade used when a non-positive duration is set.
    pub const MIN_FADE: f64 = 0.1;

    pub fn new(family: FontFamily) -> Self {
        Self {
            mode: ButtonMode::Momentary,
            fade: Self::DEFAULT_FADE,
            back_color: Color::WHITE,
            click_color: Color::LIGHT_GRAY,
            is_on: false,
            angle: 0.0,
            now_color: Color::WHITE,
            fading: false,
            colors_changed: true,
            on_color_change: Vec::new(),
            font: FontRenderer::new(family, "Button"),
            text_placement: Placement::CENTER,
            icon: None,
            icon_placement: Placement::CENTER,
        }
    }

    /// A button that stays on after a click until the next one.
    pub fn toggle(family: FontFamily) -> Self {
        Self::new(family).with_mode(ButtonMode::Toggle)
    }

    pub fn with_mode(mut self, mode: ButtonMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.font.set_text(text);
        self
    }

    pub fn with_colors(mut self, back: Color, click: Color) -> Self {
        self.set_back_color(back);
        self.set_click_color(click);
        self
    }

    pub fn with_icon(mut self, icon: Texture2D) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        self.font.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.font.set_text(text);
    }

    pub fn fade(&self) -> f64 {
        self.fade
    }

    /// Seconds for a full transition; non-positive values become `MIN_FADE`.
    pub fn set_fade(&mut self, seconds: f64) {
        self.fade = if seconds > 0.0 { seconds } else { Self::MIN_FADE };
    }

    pub fn back_color(&self) -> Color {
        self.back_color
    }

    pub fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
        self.colors_changed = true;
    }

    pub fn click_color(&self) -> Color {
        self.click_color
    }

    pub fn set_click_color(&mut self, color: Color) {
        self.click_color = color;
        self.colors_changed = true;
    }

    /// Current background color.
    pub fn color(&self) -> Color {
        self.now_color
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn set_on(&mut self, on: bool) {
        if self.is_on != on {
            self.is_on = on;
            self.fading = true;
        }
    }

    /// Called with the new background every time it is recomputed.
    pub fn on_color_change(&mut self, f: impl FnMut(Color) + 'static) {
        self.on_color_change.push(Box::new(f));
    }

    fn step_fade(&mut self, dt: f64) {
        let speed = 90.0 / self.fade;
        self.angle = if self.is_on {
            (self.angle + dt * speed).min(90.0)
        } else {
            (self.angle - dt * speed).max(0.0)
        };

        if !(self.fading || self.colors_changed) || self.angle.is_nan() {
            return;
        }

        let t = self.angle.to_radians().sin();
        self.now_color = self.back_color.lerp_rgb(self.click_color, t);
        for f in &mut self.on_color_change {
            f(self.now_color);
        }

        if self.angle == 0.0 || self.angle == 90.0 {
            self.fading = false;
        }
        self.colors_changed = false;
    }
}

impl Widget for Button {
    fn prepare(&mut self, gfx: &mut dyn Graphics) -> GfxResult<()> {
        self.font.refresh(gfx)
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, dt: f32) {
        match self.mode {
            ButtonMode::Momentary => self.set_on(ctx.input.pushing),
            ButtonMode::Toggle => {
                if ctx.input.separate {
                    self.set_on(!self.is_on);
                }
            }
        }
        self.step_fade(dt as f64);
    }

    fn paint(&mut self, surface: &mut dyn DrawSurface, (w, h): (u32, u32)) -> GfxResult<()> {
        RectangleShape::new(w, h, self.now_color).render(surface, 0, 0)?;

        if let Some(text) = self.font.texture() {
            place(text, &self.text_placement, surface, (w, h))?;
        }
        if let Some(icon) = &self.icon {
            place(icon, &self.icon_placement, surface, (w, h))?;
        }
        Ok(())
    }

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        self.font.dispose(gfx);
    }
}

fn place(texture: &Texture2D, at: &Placement, surface: &mut dyn DrawSurface, (w, h): (u32, u32)) -> GfxResult<()> {
    let x = align(extent(w), texture.actual_width() as i32, at.horizontal).saturating_add(at.offset.0);
    let y = align(extent(h), texture.actual_height() as i32, at.vertical).saturating_add(at.offset.1);
    texture.render(surface, x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sdlib_engine::coords::{Rect, Vec2};
    use sdlib_engine::gfx::headless::{DrawCall, HeadlessGraphics, TextureOrigin};
    use sdlib_engine::input::{InputEvent, InputFrame, InputState, InputView, KeyState, MouseButton};

    use super::*;
    use crate::element::UiElement;

    fn family() -> FontFamily {
        FontFamily::new("fonts/ui.ttf", 8)
    }

    struct Pointer {
        state: InputState,
        frame: InputFrame,
    }

    impl Pointer {
        fn over(x: f32, y: f32) -> Self {
            let mut p = Self {
                state: InputState::default(),
                frame: InputFrame::default(),
            };
            p.state.apply_event(&mut p.frame, InputEvent::PointerMoved(Vec2::new(x, y)));
            p
        }

        fn left(&mut self, state: KeyState) {
            let position = self.state.pointer_pos.unwrap_or(Vec2::ZERO);
            self.state.apply_event(
                &mut self.frame,
                InputEvent::PointerButton { button: MouseButton::Left, state, position },
            );
        }

        fn step(&mut self, gfx: &mut HeadlessGraphics, e: &mut UiElement, dt: f32) {
            e.update(gfx, &InputView::new(&self.state, &self.frame), dt).unwrap();
            self.frame.clear();
        }
    }

    fn button(e: &UiElement) -> &Button {
        e.widget::<Button>().unwrap()
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let b = Button::new(family());
        assert_eq!(b.text(), "Button");
        assert_eq!(b.fade(), 0.125);
        assert_eq!(b.back_color(), Color::WHITE);
        assert_eq!(b.click_color(), Color::LIGHT_GRAY);
        assert_eq!(b.mode(), ButtonMode::Momentary);
        assert_eq!(b.text_placement, Placement::CENTER);
    }

    #[test]
    fn non_positive_fade_is_replaced() {
        let mut b = Button::new(family());
        b.set_fade(0.0);
        assert_eq!(b.fade(), Button::MIN_FADE);
        b.set_fade(-3.0);
        assert_eq!(b.fade(), Button::MIN_FADE);
        b.set_fade(0.5);
        assert_eq!(b.fade(), 0.5);
    }

    // ── fade ──────────────────────────────────────────────────────────────

    #[test]
    fn momentary_fades_toward_click_color_while_held() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = UiElement::new(Button::new(family()), 0, 0, 40, 20).unwrap();
        let mut p = Pointer::over(10.0, 10.0);

        p.step(&mut gfx, &mut e, 0.0625);
        assert_eq!(button(&e).color(), Color::WHITE);

        // Half of the 0.125s fade: 45 degrees.
        p.left(KeyState::Pressed);
        p.step(&mut gfx, &mut e, 0.0625);
        assert!(button(&e).is_on());
        assert_eq!(button(&e).color(), Color::rgb(223, 223, 223));

        p.step(&mut gfx, &mut e, 0.0625);
        assert_eq!(button(&e).color(), Color::LIGHT_GRAY);

        p.left(KeyState::Released);
        p.step(&mut gfx, &mut e, 1.0);
        assert!(!button(&e).is_on());
        assert_eq!(button(&e).color(), Color::WHITE);
    }

    #[test]
    fn color_hook_fires_on_recompute_only() {
        let mut gfx = HeadlessGraphics::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut b = Button::new(family()).with_colors(Color::BLACK, Color::WHITE);
        let log = seen.clone();
        b.on_color_change(move |c| log.borrow_mut().push(c));

        let mut e = UiElement::new(b, 0, 0, 10, 10).unwrap();
        let mut p = Pointer::over(50.0, 50.0);
        p.step(&mut gfx, &mut e, 0.1);
        p.step(&mut gfx, &mut e, 0.1);

        assert_eq!(*seen.borrow(), vec![Color::BLACK]);
    }

    #[test]
    fn toggle_flips_on_release() {
        let mut gfx = HeadlessGraphics::new();
        let mut e = UiElement::new(Button::toggle(family()), 0, 0, 40, 20).unwrap();
        let mut p = Pointer::over(5.0, 5.0);

        p.left(KeyState::Pressed);
        p.step(&mut gfx, &mut e, 0.01);
        assert!(!button(&e).is_on());

        p.left(KeyState::Released);
        p.step(&mut gfx, &mut e, 0.01);
        assert!(button(&e).is_on());

        p.step(&mut gfx, &mut e, 0.01);
        assert!(button(&e).is_on());

        p.left(KeyState::Pressed);
        p.step(&mut gfx, &mut e, 0.01);
        p.left(KeyState::Released);
        p.step(&mut gfx, &mut e, 0.01);
        assert!(!button(&e).is_on());
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn paints_background_then_centered_text_and_offset_icon() {
        let mut gfx = HeadlessGraphics::new();
        gfx.register_image("icon.png", 8, 8);
        let icon = Texture2D::load(&mut gfx, "icon.png").unwrap();
        let icon_id = icon.id();

        let mut b = Button::new(family()).with_text("ok").with_icon(icon);
        b.icon_placement = Placement {
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Center,
            offset: (4, 0),
        };

        let mut e = UiElement::new(b, 0, 0, 40, 20).unwrap();
        let mut p = Pointer::over(-1.0, -1.0);
        p.step(&mut gfx, &mut e, 0.0);
        e.render(&mut gfx).unwrap();

        let area = e.area().unwrap().texture().id();
        let in_area: Vec<&DrawCall> = gfx.calls().iter().filter(|c| c.target() == Some(area)).collect();

        assert!(matches!(in_area[1], DrawCall::Fill { color, .. } if *color == Color::WHITE));
        match in_area[2] {
            DrawCall::Copy { texture, dst, .. } => {
                assert_eq!(gfx.origin(*texture), Some(&TextureOrigin::Text("ok".into())));
                // "ok" at size 8 measures 8x8.
                assert_eq!(*dst, Rect::new(16.0, 6.0, 8.0, 8.0));
            }
            other => panic!("unexpected call {other:?}"),
        }
        match in_area[3] {
            DrawCall::Copy { texture, dst, .. } => {
                assert_eq!(*texture, icon_id);
                assert_eq!(*dst, Rect::new(4.0, 6.0, 8.0, 8.0));
            }
            other => panic!("unexpected call {other:?}"),
        }

        e.dispose(&mut gfx);
        // Only the caller-owned icon survives.
        assert_eq!(gfx.texture_count(), 1);
    }
}
