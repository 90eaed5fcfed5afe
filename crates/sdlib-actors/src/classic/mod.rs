//! Actors in insertion order.
//!
//! Actors added while an `ActorList` is mid-frame wait in a delay list until
//! `flush`; actors reporting `ActorState::Dead` are disposed there too.

mod actor;
mod component;
mod list;

pub use actor::{Actor, ActorCtx, ActorState};
pub use component::{Component, Components, TextureComponent};
pub use list::ActorList;
