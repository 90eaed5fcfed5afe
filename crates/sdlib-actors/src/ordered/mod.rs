//! Actors and components sorted by an explicit `Order`.
//!
//! Lower orders update and render first; equal orders keep insertion order.
//! Everything added or removed while a `Stage` is mid-frame is held in lazy
//! sets until `Stage::clean`.

mod actor;
mod components;
mod stage;

pub use actor::{Actor, ActorCtx, ActorId, Component, ComponentId, Order};
pub use components::ComponentList;
pub use stage::{ActorEntry, Stage};
