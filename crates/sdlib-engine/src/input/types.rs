use std::fmt;

use crate::coords::Vec2;

/// Keyboard key identifier, by physical position (scancode).
///
/// Backends map their scancodes into these variants where possible;
/// anything else arrives as `Key::Unknown` carrying the raw code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    Up,
    Down,
    Left,
    Right,

    LShift,
    RShift,
    LCtrl,
    RCtrl,
    LAlt,
    RAlt,
    LGui,
    RGui,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Num0, Num1, Num2, Num3, Num4,
    Num5, Num6, Num7, Num8, Num9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(i32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
    Other(u8),
}

/// Press or release edge carried by key and button events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Per-frame state of a key or mouse button.
///
/// `Pushed` and `Released` last exactly one frame; `Held` follows `Pushed`
/// for as long as the key stays down.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ButtonState {
    #[default]
    Up,
    Pushed,
    Held,
    Released,
}

impl ButtonState {
    /// Down this frame, whether freshly pushed or held.
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::Pushed | ButtonState::Held)
    }
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub gui: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.gui
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    /// Pointer moved; position in window pixels.
    PointerMoved(Vec2),

    PointerButton {
        button: MouseButton,
        state: KeyState,
        position: Vec2,
    },

    /// Wheel motion in lines; positive `y` scrolls away from the user.
    MouseWheel { x: f32, y: f32 },

    /// Committed text.
    Text(String),

    /// Pointer left the window.
    PointerLeft,

    /// Window focus change.
    Focused(bool),

    /// Window client area resized.
    Resized { width: u32, height: u32 },
}
