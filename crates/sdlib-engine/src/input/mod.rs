//! Input subsystem.
//!
//! The public API is backend-agnostic; the runtime translates native events into
//! `InputEvent`s and feeds them through `InputState::apply_event`.

mod frame;
mod state;
mod types;
mod view;

pub use frame::{InputFrame, Transition};
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, KeyState, Modifiers, MouseButton};
pub use view::InputView;
