use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use log::{error, info};
use sdlib_actors::{SceneCtx, SceneManager};
use sdlib_engine::core::{App, AppControl, FrameCtx};
use sdlib_engine::input::{InputEvent, Key, KeyState};
use sdlib_ui::prelude::*;

use crate::scenes::{Bounce, Orbit};

const FONT_ENV: &str = "SDLIB_DEMO_FONT";
const DEFAULT_FONT: &str = "assets/DejaVuSans.ttf";

const SCENES: [&str; 2] = [Bounce::NAME, Orbit::NAME];

#[derive(Default)]
pub struct Demo {
    display: UiDisplay,
    scenes: SceneManager,
    hud: Option<Hud>,
    switch: Rc<Cell<bool>>,
    paused: Rc<Cell<bool>>,
}

/// Ids of the overlay elements the demo rewrites each frame.
struct Hud {
    panel: ElementId,
    status: ElementId,
}

impl Demo {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_hud(&mut self) -> UiResult<Hud> {
        let path = std::env::var(FONT_ENV).unwrap_or_else(|_| DEFAULT_FONT.to_string());
        let font = FontFamily::new(path, 16);

        let mut panel = UiElement::new(Panel::new(Color::GRAY).with_opacity(192), 10, 10, 250, 120)?;

        let status = panel.add_child(UiElement::new(
            Label::new(font.clone().with_color(Color::WHITE)).with_text(""),
            10,
            8,
            230,
            40,
        )?);

        let mut switch = UiElement::new(Button::new(font.clone()).with_text("Switch"), 10, 70, 110, 36)?;
        let requested = self.switch.clone();
        switch.on_separate(move || requested.set(true));
        panel.add_child(switch);

        let mut pause = UiElement::new(Button::toggle(font).with_text("Pause"), 130, 70, 110, 36)?;
        pause.access_keys.insert(Key::P);
        // The toggle flips on the same release, so the flag tracks `is_on`.
        let paused = self.paused.clone();
        pause.on_separate(move || paused.set(!paused.get()));
        panel.add_child(pause);

        Ok(Hud {
            panel: self.display.add(panel),
            status,
        })
    }

    fn refresh_hud(&mut self) {
        let Some(hud) = &self.hud else {
            return;
        };
        let text = format!(
            "{}\n{} actors{}",
            self.scenes.current_name().unwrap_or("-"),
            self.scenes.actor_count(),
            if self.paused.get() { " (paused)" } else { "" },
        );
        let label = self
            .display
            .get_mut(hud.panel)
            .and_then(|panel| panel.child_mut(hud.status))
            .and_then(|status| status.widget_mut::<Label>());
        if let Some(label) = label {
            label.set_text(text);
        }
    }

    fn next_scene(&self) -> &'static str {
        match self.scenes.current_name() {
            Some(current) if current == SCENES[0] => SCENES[1],
            _ => SCENES[0],
        }
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        if self.switch.replace(false) {
            let next = self.next_scene();
            self.scenes.set_scene(next, ctx.gfx)?;
        }

        if !self.paused.get() {
            let mut scene_ctx = SceneCtx::from_frame(ctx);
            self.scenes.view(&mut scene_ctx)?;
        }

        self.refresh_hud();
        let input = ctx.input_view();
        self.display.update(ctx.gfx, &input, ctx.time.delta)?;
        self.display.render(ctx.gfx)?;
        Ok(())
    }
}

impl App for Demo {
    fn on_init(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        self.scenes.register(Bounce::NAME, Bounce::new(), true)?;
        self.scenes.register(Orbit::NAME, Orbit::new(), false)?;
        self.hud = Some(self.build_hud()?);
        ctx.runtime.set_title(format!("sdlib demo ({} scenes)", self.scenes.len()));
        info!("demo ready");
        Ok(())
    }

    fn on_event(&mut self, event: &InputEvent) -> AppControl {
        if let InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. } = event {
            return AppControl::Exit;
        }
        self.display.handle_event(event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        match self.frame(ctx) {
            Ok(()) => AppControl::Continue,
            Err(e) => {
                error!("{e:#}");
                AppControl::Exit
            }
        }
    }

    fn on_quit(&mut self, ctx: &mut FrameCtx<'_>) {
        self.scenes.remove_all(ctx.gfx);
        self.display.dispose(ctx.gfx);
    }
}
