//! Scenes and actors for sdlib.
//!
//! A `SceneManager` owns named `Scene`s and drives the current one through
//! `view` once per frame. Scenes usually hold their actors in one of two
//! frameworks:
//! - `classic::ActorList`: insertion order, actors die by reporting
//!   `ActorState::Dead`
//! - `ordered::Stage`: actors and components sorted by `Order`, with explicit
//!   handles for removal
//!
//! Both defer every mutation made mid-frame to the end of the frame.
//!
//! ```ignore
//! struct Title { actors: ActorList }
//!
//! impl Scene for Title {
//!     fn update(&mut self, ctx: &mut SceneCtx<'_>) { self.actors.update(ctx) }
//!     fn render(&mut self, ctx: &mut SceneCtx<'_>) -> GfxResult<()> { self.actors.render(ctx) }
//!     fn end_frame(&mut self, gfx: &mut dyn Graphics) { self.actors.flush(gfx) }
//!     fn finish(&mut self, gfx: &mut dyn Graphics) { self.actors.finish(gfx) }
//!     fn actor_count(&self) -> usize { self.actors.len() }
//! }
//! ```

pub mod classic;
pub mod ordered;
mod scene;

pub use scene::{Scene, SceneCtx, SceneError, SceneManager, SceneResult};
