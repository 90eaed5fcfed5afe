use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton};

/// Current input state for the window.
///
/// Holds "is down" information and the pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window has keyboard focus.
    pub focused: bool,

    /// Pointer position in window pixels; `None` once it leaves the window.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl Default for InputState {
    fn default() -> Self {
        // Windows are created focused; a FocusLost event arrives otherwise.
        Self {
            modifiers: Modifiers::default(),
            focused: true,
            pointer_pos: None,
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
        }
    }
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss swallows the matching key-up events.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(p) => {
                self.pointer_pos = Some(*p);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.record_key(*key, KeyState::Pressed);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.record_key(*key, KeyState::Released);
                        }
                    }
                }
            }

            InputEvent::PointerButton { button, state, position } => {
                self.pointer_pos = Some(*position);
                match state {
                    KeyState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.record_button(*button, KeyState::Pressed);
                        }
                    }
                    KeyState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.record_button(*button, KeyState::Released);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { x, y } => {
                frame.wheel += Vec2::new(*x, *y);
            }

            InputEvent::Text(text) => {
                frame.text.push_str(text);
            }

            InputEvent::Resized { .. } => {}
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
