use std::collections::HashMap;
use std::hash::Hash;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, KeyState, MouseButton};

/// Edges seen for one key or button during a frame.
///
/// A tap shorter than a frame sets both.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Transition {
    pub pressed: bool,
    pub released: bool,
}

/// What happened since the last presented frame.
///
/// `InputState` answers "is it held"; this answers "did it change". The
/// runtime clears it after every present.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    keys: HashMap<Key, Transition>,
    buttons: HashMap<MouseButton, Transition>,

    /// Wheel motion summed over the frame.
    pub wheel: Vec2,

    /// Text committed this frame.
    pub text: String,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys.clear();
        self.buttons.clear();
        self.wheel = Vec2::ZERO;
        self.text.clear();
    }

    /// True when nothing arrived this frame.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn record_key(&mut self, key: Key, state: KeyState) {
        record(&mut self.keys, key, state);
    }

    pub fn record_button(&mut self, button: MouseButton, state: KeyState) {
        record(&mut self.buttons, button, state);
    }

    pub fn key(&self, key: Key) -> Transition {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    pub fn button(&self, button: MouseButton) -> Transition {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    pub fn any_key_pressed(&self) -> bool {
        self.keys.values().any(|t| t.pressed)
    }
}

fn record<K: Eq + Hash>(map: &mut HashMap<K, Transition>, id: K, state: KeyState) {
    let edge = map.entry(id).or_default();
    match state {
        KeyState::Pressed => edge.pressed = true,
        KeyState::Released => edge.released = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_within_a_frame_keeps_both_edges() {
        let mut frame = InputFrame::default();
        frame.record_key(Key::Space, KeyState::Pressed);
        frame.record_key(Key::Space, KeyState::Released);
        assert_eq!(frame.key(Key::Space), Transition { pressed: true, released: true });
        assert_eq!(frame.key(Key::Enter), Transition::default());
    }

    #[test]
    fn clear_forgets_edges() {
        let mut frame = InputFrame::default();
        frame.record_button(MouseButton::Left, KeyState::Pressed);
        frame.push_event(InputEvent::PointerLeft);
        frame.clear();
        assert!(frame.is_empty());
        assert!(!frame.button(MouseButton::Left).pressed);
    }
}
