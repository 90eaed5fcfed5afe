use log::debug;
use sdlib_engine::gfx::{GfxResult, Graphics};

use crate::scene::SceneCtx;

use super::actor::{Actor, ActorCtx};

/// Actors updated and rendered in insertion order.
///
/// A frame is `update`, `render`, then `flush`. Between `update` and `flush`
/// the list is updating: new actors wait in the delay list so the running
/// frame never sees them.
#[derive(Default)]
pub struct ActorList {
    actors: Vec<Box<dyn Actor>>,
    delayed: Vec<Box<dyn Actor>>,
    updating: bool,
}

impl ActorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, actor: impl Actor + 'static) {
        self.add_boxed(Box::new(actor));
    }

    pub fn add_boxed(&mut self, actor: Box<dyn Actor>) {
        if self.updating {
            self.delayed.push(actor);
        } else {
            self.actors.push(actor);
        }
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Live actors, not counting the delay list.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actors waiting for the next flush.
    pub fn delayed_len(&self) -> usize {
        self.delayed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Actor> {
        self.actors.iter().map(|a| &**a)
    }

    pub fn update(&mut self, ctx: &mut SceneCtx<'_>) {
        self.updating = true;
        for actor in &mut self.actors {
            let mut actor_ctx = ActorCtx::new(ctx, &mut self.delayed);
            actor.update(&mut actor_ctx);
        }
    }

    pub fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        for actor in &mut self.actors {
            actor.render(ctx)?;
        }
        Ok(())
    }

    /// Ends the frame: admits delayed actors and disposes dead ones.
    ///
    /// A delayed actor that is already dead is disposed without ever joining.
    pub fn flush(&mut self, gfx: &mut dyn Graphics) {
        self.updating = false;

        for mut actor in self.delayed.drain(..) {
            if actor.state().is_dead() {
                actor.dispose(gfx);
            } else {
                self.actors.push(actor);
            }
        }

        let before = self.actors.len();
        self.actors.retain_mut(|actor| {
            if actor.state().is_dead() {
                actor.dispose(gfx);
                false
            } else {
                true
            }
        });

        let removed = before - self.actors.len();
        if removed > 0 {
            debug!("removed {removed} dead actors");
        }
    }

    /// Disposes every actor, delayed ones included.
    pub fn finish(&mut self, gfx: &mut dyn Graphics) {
        self.updating = false;
        for mut actor in self.actors.drain(..).chain(self.delayed.drain(..)) {
            actor.dispose(gfx);
        }
    }
}

impl std::fmt::Debug for ActorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorList")
            .field("actors", &self.actors.len())
            .field("delayed", &self.delayed.len())
            .field("updating", &self.updating)
            .finish()
    }
}
