use log::debug;
use sdlib_engine::gfx::{GfxResult, Graphics};
use slotmap::SlotMap;

use crate::scene::SceneCtx;

use super::actor::{Actor, ActorCtx, ActorId, Component, ComponentId, Order};
use super::components::ComponentList;

/// An actor on a stage together with its components.
pub struct ActorEntry {
    id: ActorId,
    key: (Order, u64),
    actor: Box<dyn Actor>,
    components: ComponentList,
}

impl ActorEntry {
    pub(crate) fn new(id: ActorId, order: Order, actor: Box<dyn Actor>) -> Self {
        Self {
            id,
            key: (order, 0),
            actor,
            components: ComponentList::default(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn order(&self) -> Order {
        self.key.0
    }

    pub fn actor(&self) -> &dyn Actor {
        &*self.actor
    }

    pub fn actor_mut(&mut self) -> &mut dyn Actor {
        &mut *self.actor
    }

    pub fn components(&self) -> &ComponentList {
        &self.components
    }

    fn finish(&mut self, gfx: &mut dyn Graphics, component_ids: &mut SlotMap<ComponentId, ()>) {
        self.components.finish(gfx, component_ids);
        self.actor.finish(gfx);
    }
}

impl std::fmt::Debug for ActorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorEntry")
            .field("id", &self.id)
            .field("order", &self.key.0)
            .field("components", &self.components)
            .finish()
    }
}

/// Id allocation plus the stage's lazy add and remove sets.
#[derive(Default)]
pub(crate) struct StageQueue {
    pub(crate) actor_ids: SlotMap<ActorId, ()>,
    pub(crate) component_ids: SlotMap<ComponentId, ()>,
    pub(crate) add: Vec<ActorEntry>,
    pub(crate) remove: Vec<ActorId>,
}

impl StageQueue {
    pub(crate) fn queue_remove(&mut self, id: ActorId) {
        if self.actor_ids.contains_key(id) && !self.remove.contains(&id) {
            self.remove.push(id);
        }
    }
}

/// Actors sorted by `Order`.
///
/// A frame is `update`, `render`, then `clean`. From `update` until `clean`
/// the stage is updating and every add or remove is deferred.
#[derive(Default)]
pub struct Stage {
    entries: Vec<ActorEntry>,
    queue: StageQueue,
    updating: bool,
    next_seq: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, actor: impl Actor + 'static, order: impl Into<Order>) -> ActorId {
        let id = self.queue.actor_ids.insert(());
        let entry = ActorEntry::new(id, order.into(), Box::new(actor));
        if self.updating {
            self.queue.add.push(entry);
        } else {
            self.admit(entry);
            self.sort();
        }
        id
    }

    /// Removes an actor, finishing it and its components. Unknown ids are ignored.
    pub fn remove_actor(&mut self, id: ActorId, gfx: &mut dyn Graphics) {
        if self.updating {
            self.queue.queue_remove(id);
        } else {
            self.remove_now(id, gfx);
        }
    }

    /// Attaches a component to an actor; `None` when the actor is unknown.
    ///
    /// While updating, the component joins at the next clean.
    pub fn add_component(
        &mut self,
        actor: ActorId,
        component: impl Component + 'static,
        order: impl Into<Order>,
    ) -> Option<ComponentId> {
        let updating = self.updating;
        let queue = &mut self.queue;
        let entry = self
            .entries
            .iter_mut()
            .chain(queue.add.iter_mut())
            .find(|e| e.id == actor)?;

        let id = queue.component_ids.insert(());
        let order = order.into();
        if updating {
            entry.components.queue.add.push((id, order, Box::new(component)));
        } else {
            entry.components.insert(id, order, Box::new(component));
        }
        Some(id)
    }

    pub fn remove_component(&mut self, actor: ActorId, component: ComponentId, gfx: &mut dyn Graphics) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == actor) else {
            return;
        };
        if self.updating {
            entry.components.queue_remove(component);
        } else {
            entry.components.remove(component, gfx, &mut self.queue.component_ids);
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actor(id).is_some()
    }

    /// Actors on stage, not counting lazy additions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Entries in run order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorEntry> {
        self.entries.iter()
    }

    /// Updates each actor, then its components.
    pub fn update(&mut self, ctx: &mut SceneCtx<'_>) {
        self.updating = true;
        for entry in &mut self.entries {
            let ActorEntry { id, actor, components, .. } = entry;
            actor.update(&mut ActorCtx::new(ctx, *id, &mut self.queue, &mut components.queue));
            for slot in &mut components.items {
                slot.component
                    .update(&mut ActorCtx::new(ctx, *id, &mut self.queue, &mut components.queue));
            }
        }
    }

    pub fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
        for entry in &mut self.entries {
            entry.actor.render(ctx)?;
            for slot in &mut entry.components.items {
                slot.component.render(ctx)?;
            }
        }
        Ok(())
    }

    /// Ends the frame: lazy additions join in order, then lazy removals
    /// apply, then every actor cleans its components.
    pub fn clean(&mut self, gfx: &mut dyn Graphics) {
        self.updating = false;

        let added = std::mem::take(&mut self.queue.add);
        if !added.is_empty() {
            debug!("{} actors joined the stage", added.len());
            for entry in added {
                self.admit(entry);
            }
            self.sort();
        }

        for id in std::mem::take(&mut self.queue.remove) {
            self.remove_now(id, gfx);
        }

        for entry in &mut self.entries {
            entry.components.clean(gfx, &mut self.queue.component_ids);
        }
    }

    /// Finishes every actor, queued ones included, and empties the stage.
    pub fn finish(&mut self, gfx: &mut dyn Graphics) {
        self.updating = false;
        let count = self.entries.len() + self.queue.add.len();
        for mut entry in self.entries.drain(..).chain(self.queue.add.drain(..)) {
            entry.finish(gfx, &mut self.queue.component_ids);
        }
        self.queue.remove.clear();
        self.queue.actor_ids.clear();
        self.queue.component_ids.clear();
        debug!("stage finished {count} actors");
    }

    fn admit(&mut self, mut entry: ActorEntry) {
        entry.key.1 = self.next_seq;
        self.next_seq += 1;
        self.entries.push(entry);
    }

    fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.key);
    }

    fn remove_now(&mut self, id: ActorId, gfx: &mut dyn Graphics) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        let mut entry = self.entries.remove(index);
        entry.finish(gfx, &mut self.queue.component_ids);
        self.queue.actor_ids.remove(id);
        debug!("removed actor {id:?}");
        true
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("entries", &self.entries)
            .field("lazy_add", &self.queue.add.len())
            .field("lazy_remove", &self.queue.remove.len())
            .field("updating", &self.updating)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sdlib_engine::audio::SilentAudio;
    use sdlib_engine::gfx::headless::HeadlessGraphics;
    use sdlib_engine::input::{InputFrame, InputState, InputView};
    use sdlib_engine::time::AppTime;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct Script {
        spawn: Option<(&'static str, i32)>,
        despawn_self: bool,
        add_component: Option<(&'static str, i32)>,
    }

    struct Probe {
        name: &'static str,
        log: Log,
        script: Script,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self { name, log: log.clone(), script: Script::default() }
        }

        fn with(mut self, script: Script) -> Self {
            self.script = script;
            self
        }
    }

    impl Actor for Probe {
        fn update(&mut self, ctx: &mut ActorCtx<'_, '_>) {
            self.log.borrow_mut().push(format!("update {}", self.name));
            if let Some((name, order)) = self.script.spawn.take() {
                ctx.spawn(Probe::new(name, &self.log), order);
            }
            if let Some((name, order)) = self.script.add_component.take() {
                ctx.add_component(Part { name, log: self.log.clone() }, order);
            }
            if std::mem::take(&mut self.script.despawn_self) {
                ctx.despawn_self();
            }
        }

        fn render(&mut self, _ctx: &mut SceneCtx<'_>) -> GfxResult<()> {
            self.log.borrow_mut().push(format!("render {}", self.name));
            Ok(())
        }

        fn finish(&mut self, _gfx: &mut dyn Graphics) {
            self.log.borrow_mut().push(format!("finish {}", self.name));
        }
    }

    struct Part {
        name: &'static str,
        log: Log,
    }

    impl Component for Part {
        fn update(&mut self, _ctx: &mut ActorCtx<'_, '_>) {
            self.log.borrow_mut().push(format!("update {}", self.name));
        }

        fn finish(&mut self, _gfx: &mut dyn Graphics) {
            self.log.borrow_mut().push(format!("finish {}", self.name));
        }
    }

    struct Harness {
        gfx: HeadlessGraphics,
        audio: SilentAudio,
        state: InputState,
        frame: InputFrame,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                gfx: HeadlessGraphics::new(),
                audio: SilentAudio::new(),
                state: InputState::default(),
                frame: InputFrame::default(),
            }
        }

        fn update_and_render(&mut self, stage: &mut Stage) {
            let input = InputView::new(&self.state, &self.frame);
            let mut ctx = SceneCtx::new(&mut self.gfx, &mut self.audio, input, AppTime::default());
            stage.update(&mut ctx);
            stage.render(&mut ctx).unwrap();
        }

        fn run_frame(&mut self, stage: &mut Stage) {
            self.update_and_render(stage);
            stage.clean(&mut self.gfx);
        }
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.borrow_mut())
    }

    fn updates(log: &Log) -> Vec<String> {
        take(log).into_iter().filter(|e| e.starts_with("update")).collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn actors_run_by_order_then_insertion() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        stage.add_actor(Probe::new("unordered", &log), Order::default());
        stage.add_actor(Probe::new("b", &log), 2);
        stage.add_actor(Probe::new("a", &log), 1);
        stage.add_actor(Probe::new("b2", &log), 2);

        h.run_frame(&mut stage);
        assert_eq!(
            take(&log),
            [
                "update a", "update b", "update b2", "update unordered",
                "render a", "render b", "render b2", "render unordered",
            ]
        );
    }

    // ── lazy sets ─────────────────────────────────────────────────────────

    #[test]
    fn spawns_join_and_sort_at_clean() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        stage.add_actor(
            Probe::new("parent", &log).with(Script { spawn: Some(("child", 0)), ..Script::default() }),
            5,
        );

        h.update_and_render(&mut stage);
        assert!(stage.is_updating());
        assert_eq!(stage.len(), 1);
        assert_eq!(take(&log), ["update parent", "render parent"]);

        stage.clean(&mut h.gfx);
        assert_eq!(stage.len(), 2);
        h.run_frame(&mut stage);
        assert_eq!(updates(&log), ["update child", "update parent"]);
    }

    #[test]
    fn add_actor_while_updating_is_deferred() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        stage.add_actor(Probe::new("a", &log), 0);

        h.update_and_render(&mut stage);
        let late = stage.add_actor(Probe::new("late", &log), 0);
        assert!(!stage.contains(late));

        stage.clean(&mut h.gfx);
        assert!(stage.contains(late));
        assert_eq!(stage.actor(late).map(ActorEntry::order), Some(Order(0)));
    }

    #[test]
    fn despawn_takes_effect_after_render() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        stage.add_actor(
            Probe::new("doomed", &log).with(Script { despawn_self: true, ..Script::default() }),
            0,
        );

        h.run_frame(&mut stage);
        assert_eq!(take(&log), ["update doomed", "render doomed", "finish doomed"]);
        assert!(stage.is_empty());
    }

    #[test]
    fn remove_while_updating_waits_for_clean() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("a", &log), 0);

        h.update_and_render(&mut stage);
        stage.remove_actor(id, &mut h.gfx);
        assert!(stage.contains(id));

        stage.clean(&mut h.gfx);
        assert!(!stage.contains(id));
    }

    #[test]
    fn removing_unknown_or_stale_ids_is_a_no_op() {
        let log = Log::default();
        let mut gfx = HeadlessGraphics::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("a", &log), 0);
        stage.add_actor(Probe::new("b", &log), 0);

        stage.remove_actor(id, &mut gfx);
        stage.remove_actor(id, &mut gfx);
        stage.remove_actor(ActorId::default(), &mut gfx);
        assert_eq!(stage.len(), 1);
        assert_eq!(take(&log), ["finish a"]);
    }

    // ── components ────────────────────────────────────────────────────────

    #[test]
    fn components_run_after_their_actor_in_order() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("actor", &log), 0);
        stage.add_component(id, Part { name: "late", log: log.clone() }, 9).unwrap();
        stage.add_component(id, Part { name: "early", log: log.clone() }, 1).unwrap();

        h.run_frame(&mut stage);
        assert_eq!(updates(&log), ["update actor", "update early", "update late"]);
    }

    #[test]
    fn components_added_mid_frame_join_at_clean() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(
            Probe::new("actor", &log).with(Script { add_component: Some(("part", 0)), ..Script::default() }),
            0,
        );

        h.update_and_render(&mut stage);
        let entry = stage.actor(id).unwrap();
        assert!(entry.components().is_empty());
        assert_eq!(entry.components().pending(), 1);

        stage.clean(&mut h.gfx);
        assert_eq!(stage.actor(id).unwrap().components().len(), 1);
        take(&log);
        h.run_frame(&mut stage);
        assert_eq!(updates(&log), ["update actor", "update part"]);
    }

    #[test]
    fn component_added_and_removed_in_one_frame_is_gone() {
        let log = Log::default();
        let mut h = Harness::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("actor", &log), 0);

        h.update_and_render(&mut stage);
        let part = stage.add_component(id, Part { name: "part", log: log.clone() }, 0).unwrap();
        stage.remove_component(id, part, &mut h.gfx);
        take(&log);

        stage.clean(&mut h.gfx);
        assert!(stage.actor(id).unwrap().components().is_empty());
        assert_eq!(take(&log), ["finish part"]);
    }

    #[test]
    fn remove_component_outside_a_frame_is_immediate() {
        let log = Log::default();
        let mut gfx = HeadlessGraphics::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("actor", &log), 0);
        let part = stage.add_component(id, Part { name: "part", log: log.clone() }, 0).unwrap();

        stage.remove_component(id, part, &mut gfx);
        assert!(!stage.actor(id).unwrap().components().contains(part));
        assert_eq!(take(&log), ["finish part"]);
        assert!(stage.add_component(ActorId::default(), Part { name: "x", log: log.clone() }, 0).is_none());
    }

    // ── finish ────────────────────────────────────────────────────────────

    #[test]
    fn finish_releases_components_before_actors() {
        let log = Log::default();
        let mut gfx = HeadlessGraphics::new();
        let mut stage = Stage::new();
        let id = stage.add_actor(Probe::new("actor", &log), 0);
        stage.add_component(id, Part { name: "part", log: log.clone() }, 0).unwrap();

        stage.finish(&mut gfx);
        assert!(stage.is_empty());
        assert_eq!(take(&log), ["finish part", "finish actor"]);
    }
}
