use std::ops::{Deref, DerefMut};

use sdlib_engine::gfx::{GfxResult, Graphics};

use crate::scene::SceneCtx;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ActorState {
    #[default]
    Active,
    /// Removed and disposed at the next flush.
    Dead,
}

impl ActorState {
    #[inline]
    pub fn is_dead(self) -> bool {
        self == ActorState::Dead
    }
}

pub trait Actor {
    fn update(&mut self, ctx: &mut ActorCtx<'_, '_>);

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()>;

    fn state(&self) -> ActorState {
        ActorState::Active
    }

    fn dispose(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }
}

/// Scene context plus a spawn queue, handed to `Actor::update`.
///
/// Dereferences to the `SceneCtx`, so `ctx.gfx`, `ctx.time` and friends work
/// unchanged.
pub struct ActorCtx<'s, 'a> {
    scene: &'s mut SceneCtx<'a>,
    spawned: &'s mut Vec<Box<dyn Actor>>,
}

impl<'s, 'a> ActorCtx<'s, 'a> {
    pub(crate) fn new(scene: &'s mut SceneCtx<'a>, spawned: &'s mut Vec<Box<dyn Actor>>) -> Self {
        Self { scene, spawned }
    }

    /// Queues an actor; it joins the list at the next flush.
    pub fn spawn(&mut self, actor: impl Actor + 'static) {
        self.spawned.push(Box::new(actor));
    }

    pub fn spawn_boxed(&mut self, actor: Box<dyn Actor>) {
        self.spawned.push(actor);
    }
}

impl<'a> Deref for ActorCtx<'_, 'a> {
    type Target = SceneCtx<'a>;

    fn deref(&self) -> &Self::Target {
        self.scene
    }
}

impl<'a> DerefMut for ActorCtx<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scene
    }
}
