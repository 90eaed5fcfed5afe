use std::path::Path;

use log::warn;
use sdlib_actors::classic::{self, ActorList, ActorState};
use sdlib_actors::ordered::{self, ActorCtx, ActorId, Order, Stage};
use sdlib_actors::{Scene, SceneCtx};
use sdlib_engine::audio::SoundId;
use sdlib_engine::coords::Vec2;
use sdlib_engine::gfx::{GfxResult, Graphics, RectangleShape};
use sdlib_engine::input::Key;
use sdlib_engine::paint::Color;

const ARENA: Vec2 = Vec2::new(1280.0, 720.0);
const POP_SOUND: &str = "assets/pop.wav";

// ── bounce ─────────────────────────────────────────────────────────────────

/// Squares bounce around and fade out; `Space` spawns one at the pointer.
#[derive(Debug, Default)]
pub struct Bounce {
    actors: ActorList,
}

impl Bounce {
    pub const NAME: &'static str = "bounce";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for Bounce {
    fn init(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let pop = match ctx.audio.load_effect(Path::new(POP_SOUND)) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("{POP_SOUND}: {e}");
                None
            }
        };
        self.actors.add(Emitter { pop, spawned: 0 });
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneCtx<'_>) {
        self.actors.update(ctx);
        if ctx.input.is_key_pushed(Key::Tab) {
            ctx.set_scene(Orbit::NAME);
        }
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        self.actors.render(ctx)
    }

    fn end_frame(&mut self, gfx: &mut dyn Graphics) {
        self.actors.flush(gfx);
    }

    fn finish(&mut self, gfx: &mut dyn Graphics) {
        self.actors.finish(gfx);
    }

    fn actor_count(&self) -> usize {
        self.actors.len()
    }
}

struct Emitter {
    pop: Option<SoundId>,
    spawned: u32,
}

impl classic::Actor for Emitter {
    fn update(&mut self, ctx: &mut classic::ActorCtx<'_, '_>) {
        if !ctx.input.is_key_pushed(Key::Space) {
            return;
        }
        let at = ctx.input.pointer().unwrap_or(Vec2::new(ARENA.x / 2.0, ARENA.y / 2.0));
        let heading = self.spawned as f32 * 2.4;
        self.spawned += 1;

        ctx.spawn(Ball {
            position: at,
            velocity: Vec2::new(heading.cos() * 240.0, heading.sin() * 240.0),
            age: 0.0,
        });
        if let Some(pop) = self.pop {
            if let Err(e) = ctx.audio.play_effect(pop, 0) {
                warn!("{e}");
            }
        }
    }

    fn render(&mut self, _ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        Ok(())
    }
}

struct Ball {
    position: Vec2,
    velocity: Vec2,
    age: f32,
}

impl Ball {
    const SIZE: f32 = 24.0;
    const LIFETIME: f32 = 6.0;
}

impl classic::Actor for Ball {
    fn update(&mut self, ctx: &mut classic::ActorCtx<'_, '_>) {
        let dt = ctx.time.delta;
        self.age += dt;
        self.position += self.velocity * dt;

        if self.position.x < 0.0 || self.position.x + Ball::SIZE > ARENA.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y + Ball::SIZE > ARENA.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let mut shape = RectangleShape::new(Ball::SIZE as u32, Ball::SIZE as u32, Color::rgb(90, 170, 255));
        shape.opacity = (255.0 * (1.0 - self.age / Ball::LIFETIME)).clamp(0.0, 255.0) as u8;
        shape.render(ctx.gfx.surface(), self.position.x as i32, self.position.y as i32)
    }

    fn state(&self) -> ActorState {
        if self.age >= Ball::LIFETIME { ActorState::Dead } else { ActorState::Active }
    }
}

// ── orbit ──────────────────────────────────────────────────────────────────

/// Planets circling a sun, drawn in order; `Space` removes the outermost.
#[derive(Debug, Default)]
pub struct Orbit {
    stage: Stage,
    planets: Vec<ActorId>,
}

impl Orbit {
    pub const NAME: &'static str = "orbit";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for Orbit {
    fn init(&mut self, _ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        // Added back to front on purpose; the stage sorts them.
        for ring in (1..=4).rev() {
            let id = self.stage.add_actor(
                Planet {
                    radius: 70.0 * ring as f32,
                    speed: 1.6 / ring as f32,
                    angle: 0.0,
                    beacon: ring % 2 == 0,
                },
                ring,
            );
            self.planets.push(id);
        }
        self.planets.reverse();
        self.stage.add_actor(Sun, Order::FIRST);
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneCtx<'_>) {
        self.stage.update(ctx);
        if ctx.input.is_key_pushed(Key::Space) {
            if let Some(outermost) = self.planets.pop() {
                self.stage.remove_actor(outermost, ctx.gfx);
            }
        }
        if ctx.input.is_key_pushed(Key::Tab) {
            ctx.set_scene(Bounce::NAME);
        }
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        self.stage.render(ctx)
    }

    fn end_frame(&mut self, gfx: &mut dyn Graphics) {
        self.stage.clean(gfx);
    }

    fn finish(&mut self, gfx: &mut dyn Graphics) {
        self.stage.finish(gfx);
        self.planets.clear();
    }

    fn actor_count(&self) -> usize {
        self.stage.len()
    }
}

fn center() -> Vec2 {
    Vec2::new(ARENA.x / 2.0, ARENA.y / 2.0)
}

struct Sun;

impl ordered::Actor for Sun {
    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let c = center();
        RectangleShape::new(48, 48, Color::rgb(255, 200, 40))
            .render(ctx.gfx.surface(), c.x as i32 - 24, c.y as i32 - 24)
    }
}

struct Planet {
    radius: f32,
    speed: f32,
    angle: f32,
    beacon: bool,
}

impl ordered::Actor for Planet {
    fn update(&mut self, ctx: &mut ActorCtx<'_, '_>) {
        self.angle += self.speed * ctx.time.delta;
        if std::mem::take(&mut self.beacon) {
            let corner = Vec2::new(center().x + self.radius, center().y - 4.0);
            ctx.add_component(Beacon { position: corner }, 0);
        }
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let c = center();
        let x = c.x + self.angle.cos() * self.radius;
        let y = c.y + self.angle.sin() * self.radius;
        RectangleShape::new(16, 16, Color::rgb(120, 220, 140))
            .render(ctx.gfx.surface(), x as i32 - 8, y as i32 - 8)
    }
}

/// A marker on a planet's orbit that blinks twice a second.
struct Beacon {
    position: Vec2,
}

impl ordered::Component for Beacon {
    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        if (ctx.time.total * 4.0) as i64 % 2 == 1 {
            return Ok(());
        }
        RectangleShape::new(8, 8, Color::RED)
            .render(ctx.gfx.surface(), self.position.x as i32, self.position.y as i32)
    }
}
