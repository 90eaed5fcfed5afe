use std::ops::{Deref, DerefMut};

use sdlib_engine::gfx::{GfxResult, Graphics};
use slotmap::new_key_type;

use crate::scene::SceneCtx;

use super::components::ComponentQueue;
use super::stage::{ActorEntry, StageQueue};

/// Update and render position. Lower runs first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Order(pub i32);

impl Order {
    pub const FIRST: Order = Order(i32::MIN);
    pub const LAST: Order = Order(i32::MAX);

    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::LAST
    }
}

impl From<i32> for Order {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

new_key_type! {
    pub struct ActorId;
    pub struct ComponentId;
}

pub trait Actor {
    fn update(&mut self, ctx: &mut ActorCtx<'_, '_>) {
        let _ = ctx;
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let _ = ctx;
        Ok(())
    }

    /// Runs once when the actor leaves the stage.
    fn finish(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }
}

/// Runs after its actor, in component order.
pub trait Component {
    fn update(&mut self, ctx: &mut ActorCtx<'_, '_>) {
        let _ = ctx;
    }

    fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        let _ = ctx;
        Ok(())
    }

    fn finish(&mut self, gfx: &mut dyn Graphics) {
        let _ = gfx;
    }
}

/// Scene context for one actor's update, with queues for stage mutations.
///
/// Nothing queued here is visible until the stage is cleaned.
pub struct ActorCtx<'s, 'a> {
    scene: &'s mut SceneCtx<'a>,
    this: ActorId,
    stage: &'s mut StageQueue,
    components: &'s mut ComponentQueue,
}

impl<'s, 'a> ActorCtx<'s, 'a> {
    pub(crate) fn new(
        scene: &'s mut SceneCtx<'a>,
        this: ActorId,
        stage: &'s mut StageQueue,
        components: &'s mut ComponentQueue,
    ) -> Self {
        Self {
            scene,
            this,
            stage,
            components,
        }
    }

    /// The actor being updated.
    pub fn actor_id(&self) -> ActorId {
        self.this
    }

    pub fn spawn(&mut self, actor: impl Actor + 'static, order: impl Into<Order>) -> ActorId {
        let id = self.stage.actor_ids.insert(());
        self.stage.add.push(ActorEntry::new(id, order.into(), Box::new(actor)));
        id
    }

    pub fn despawn(&mut self, id: ActorId) {
        self.stage.queue_remove(id);
    }

    pub fn despawn_self(&mut self) {
        self.stage.queue_remove(self.this);
    }

    /// Attaches a component to the actor being updated.
    pub fn add_component(&mut self, component: impl Component + 'static, order: impl Into<Order>) -> ComponentId {
        let id = self.stage.component_ids.insert(());
        self.components.add.push((id, order.into(), Box::new(component)));
        id
    }

    pub fn remove_component(&mut self, id: ComponentId) {
        if !self.components.remove.contains(&id) {
            self.components.remove.push(id);
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_sorts_last() {
        assert_eq!(Order::default(), Order(i32::MAX));
        assert!(Order::new(0) < Order::default());
        assert!(Order::FIRST < Order::from(-5));
    }
}
