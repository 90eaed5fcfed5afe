use sdlib_engine::gfx::Graphics;
use slotmap::SlotMap;

use super::actor::{Component, ComponentId, Order};

pub(crate) struct ComponentSlot {
    pub(crate) id: ComponentId,
    key: (Order, u64),
    pub(crate) component: Box<dyn Component>,
}

/// Component mutations requested mid-frame.
#[derive(Default)]
pub(crate) struct ComponentQueue {
    pub(crate) add: Vec<(ComponentId, Order, Box<dyn Component>)>,
    pub(crate) remove: Vec<ComponentId>,
}

/// An actor's components sorted by order, ties in insertion order.
#[derive(Default)]
pub struct ComponentList {
    pub(crate) items: Vec<ComponentSlot>,
    pub(crate) queue: ComponentQueue,
    next_seq: u64,
}

impl ComponentList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.items.iter().any(|slot| slot.id == id)
    }

    pub fn get(&self, id: ComponentId) -> Option<&dyn Component> {
        self.items.iter().find(|slot| slot.id == id).map(|slot| &*slot.component)
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        match self.items.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => Some(&mut *slot.component),
            None => None,
        }
    }

    /// Component ids in run order.
    pub fn ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.items.iter().map(|slot| slot.id)
    }

    /// Mutations waiting for the next clean.
    pub fn pending(&self) -> usize {
        self.queue.add.len() + self.queue.remove.len()
    }

    pub(crate) fn insert(&mut self, id: ComponentId, order: Order, component: Box<dyn Component>) {
        self.push(id, order, component);
        self.sort();
    }

    pub(crate) fn queue_remove(&mut self, id: ComponentId) {
        if !self.queue.remove.contains(&id) {
            self.queue.remove.push(id);
        }
    }

    /// Removes and finishes a component, releasing its id.
    pub(crate) fn remove(
        &mut self,
        id: ComponentId,
        gfx: &mut dyn Graphics,
        ids: &mut SlotMap<ComponentId, ()>,
    ) -> bool {
        let Some(index) = self.items.iter().position(|slot| slot.id == id) else {
            return false;
        };
        let mut slot = self.items.remove(index);
        slot.component.finish(gfx);
        ids.remove(id);
        true
    }

    /// Applies queued additions, re-sorts, then applies queued removals.
    pub(crate) fn clean(&mut self, gfx: &mut dyn Graphics, ids: &mut SlotMap<ComponentId, ()>) {
        let added = std::mem::take(&mut self.queue.add);
        if !added.is_empty() {
            for (id, order, component) in added {
                self.push(id, order, component);
            }
            self.sort();
        }

        for id in std::mem::take(&mut self.queue.remove) {
            self.remove(id, gfx, ids);
        }
    }

    /// Finishes every component, queued ones included.
    pub(crate) fn finish(&mut self, gfx: &mut dyn Graphics, ids: &mut SlotMap<ComponentId, ()>) {
        for mut slot in self.items.drain(..) {
            slot.component.finish(gfx);
            ids.remove(slot.id);
        }
        for (id, _, mut component) in self.queue.add.drain(..) {
            component.finish(gfx);
            ids.remove(id);
        }
        self.queue.remove.clear();
    }

    fn push(&mut self, id: ComponentId, order: Order, component: Box<dyn Component>) {
        let key = (order, self.next_seq);
        self.next_seq += 1;
        self.items.push(ComponentSlot { id, key, component });
    }

    fn sort(&mut self) {
        self.items.sort_by_key(|slot| slot.key);
    }
}

impl std::fmt::Debug for ComponentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentList")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .field("pending", &self.pending())
            .finish()
    }
}
