use crate::coords::Vec2;

use super::frame::{InputFrame, Transition};
use super::state::InputState;
use super::types::{ButtonState, Key, MouseButton};

/// Read-only pairing of the held state and this frame's transitions.
///
/// This is what UI and scene code query: "is it held", "was it pushed this
/// frame", "was it released this frame".
#[derive(Debug, Copy, Clone)]
pub struct InputView<'a> {
    pub state: &'a InputState,
    pub frame: &'a InputFrame,
}

impl<'a> InputView<'a> {
    pub fn new(state: &'a InputState, frame: &'a InputFrame) -> Self {
        Self { state, frame }
    }

    pub fn key(&self, key: Key) -> ButtonState {
        classify(self.state.key_down(key), self.frame.key(key))
    }

    pub fn button(&self, button: MouseButton) -> ButtonState {
        classify(self.state.button_down(button), self.frame.button(button))
    }

    pub fn is_key_pushing(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    pub fn is_key_pushed(&self, key: Key) -> bool {
        self.frame.key(key).pressed
    }

    pub fn is_key_separate(&self, key: Key) -> bool {
        self.frame.key(key).released
    }

    pub fn is_button_pushing(&self, button: MouseButton) -> bool {
        self.state.button_down(button)
    }

    pub fn is_button_pushed(&self, button: MouseButton) -> bool {
        self.frame.button(button).pressed
    }

    pub fn is_button_separate(&self, button: MouseButton) -> bool {
        self.frame.button(button).released
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.state.pointer_pos
    }

    pub fn wheel(&self) -> Vec2 {
        self.frame.wheel
    }

    pub fn focused(&self) -> bool {
        self.state.focused
    }
}

fn classify(down: bool, edge: Transition) -> ButtonState {
    match (down, edge.pressed, edge.released) {
        (true, true, _) => ButtonState::Pushed,
        (true, false, _) => ButtonState::Held,
        (false, _, true) => ButtonState::Released,
        (false, _, false) => ButtonState::Up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState, Modifiers};

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key, edge: KeyState) {
        state.apply_event(frame, InputEvent::Key {
            key,
            state: edge,
            modifiers: Modifiers::default(),
            repeat: false,
        });
    }

    #[test]
    fn key_walks_through_all_states() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        assert_eq!(InputView::new(&state, &frame).key(Key::Z), ButtonState::Up);

        press(&mut state, &mut frame, Key::Z, KeyState::Pressed);
        assert_eq!(InputView::new(&state, &frame).key(Key::Z), ButtonState::Pushed);
        frame.clear();

        assert_eq!(InputView::new(&state, &frame).key(Key::Z), ButtonState::Held);

        press(&mut state, &mut frame, Key::Z, KeyState::Released);
        let view = InputView::new(&state, &frame);
        assert_eq!(view.key(Key::Z), ButtonState::Released);
        assert!(view.is_key_separate(Key::Z));
        assert!(!view.is_key_pushing(Key::Z));
        frame.clear();

        assert_eq!(InputView::new(&state, &frame).key(Key::Z), ButtonState::Up);
    }

    #[test]
    fn tap_within_one_frame_reads_as_released() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press(&mut state, &mut frame, Key::Q, KeyState::Pressed);
        press(&mut state, &mut frame, Key::Q, KeyState::Released);
        let view = InputView::new(&state, &frame);
        assert_eq!(view.key(Key::Q), ButtonState::Released);
        assert!(view.is_key_pushed(Key::Q));
    }
}
