use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Mod, Scancode};
use sdl2::mouse::MouseButton as SdlMouseButton;

use sdlib_engine::coords::Vec2;
use sdlib_engine::input::{InputEvent, Key, KeyState, Modifiers, MouseButton};

/// Translates an SDL event into an engine event.
///
/// `Quit` and events the engine has no use for map to `None`; the runtime
/// handles `Quit` itself.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::KeyDown { scancode: Some(code), keymod, repeat, .. } => Some(InputEvent::Key {
            key: map_scancode(*code),
            state: KeyState::Pressed,
            modifiers: map_modifiers(*keymod),
            repeat: *repeat,
        }),

        Event::KeyUp { scancode: Some(code), keymod, repeat, .. } => Some(InputEvent::Key {
            key: map_scancode(*code),
            state: KeyState::Released,
            modifiers: map_modifiers(*keymod),
            repeat: *repeat,
        }),

        Event::MouseMotion { x, y, .. } => Some(InputEvent::PointerMoved(Vec2::from_i32(*x, *y))),

        Event::MouseButtonDown { mouse_btn, x, y, .. } => Some(InputEvent::PointerButton {
            button: map_mouse_button(*mouse_btn),
            state: KeyState::Pressed,
            position: Vec2::from_i32(*x, *y),
        }),

        Event::MouseButtonUp { mouse_btn, x, y, .. } => Some(InputEvent::PointerButton {
            button: map_mouse_button(*mouse_btn),
            state: KeyState::Released,
            position: Vec2::from_i32(*x, *y),
        }),

        Event::MouseWheel { precise_x, precise_y, .. } => Some(InputEvent::MouseWheel {
            x: *precise_x,
            y: *precise_y,
        }),

        Event::TextInput { text, .. } => Some(InputEvent::Text(text.clone())),

        Event::Window { win_event, .. } => match win_event {
            WindowEvent::FocusGained => Some(InputEvent::Focused(true)),
            WindowEvent::FocusLost => Some(InputEvent::Focused(false)),
            WindowEvent::Leave => Some(InputEvent::PointerLeft),
            WindowEvent::SizeChanged(w, h) => Some(InputEvent::Resized {
                width: (*w).max(0) as u32,
                height: (*h).max(0) as u32,
            }),
            _ => None,
        },

        _ => None,
    }
}

fn map_modifiers(m: Mod) -> Modifiers {
    Modifiers {
        shift: m.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        ctrl: m.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
        alt: m.intersects(Mod::LALTMOD | Mod::RALTMOD),
        gui: m.intersects(Mod::LGUIMOD | Mod::RGUIMOD),
    }
}

fn map_mouse_button(b: SdlMouseButton) -> MouseButton {
    match b {
        SdlMouseButton::Left => MouseButton::Left,
        SdlMouseButton::Middle => MouseButton::Middle,
        SdlMouseButton::Right => MouseButton::Right,
        SdlMouseButton::X1 => MouseButton::X1,
        SdlMouseButton::X2 => MouseButton::X2,
        SdlMouseButton::Unknown => MouseButton::Other(0),
    }
}

pub fn map_scancode(code: Scancode) -> Key {
    use Scancode as S;

    match code {
        S::Escape => Key::Escape,
        S::Return | S::KpEnter => Key::Enter,
        S::Tab => Key::Tab,
        S::Backspace => Key::Backspace,
        S::Space => Key::Space,

        S::Insert => Key::Insert,
        S::Delete => Key::Delete,
        S::Home => Key::Home,
        S::End => Key::End,
        S::PageUp => Key::PageUp,
        S::PageDown => Key::PageDown,

        S::Up => Key::Up,
        S::Down => Key::Down,
        S::Left => Key::Left,
        S::Right => Key::Right,

        S::LShift => Key::LShift,
        S::RShift => Key::RShift,
        S::LCtrl => Key::LCtrl,
        S::RCtrl => Key::RCtrl,
        S::LAlt => Key::LAlt,
        S::RAlt => Key::RAlt,
        S::LGui => Key::LGui,
        S::RGui => Key::RGui,

        S::A => Key::A,
        S::B => Key::B,
        S::C => Key::C,
        S::D => Key::D,
        S::E => Key::E,
        S::F => Key::F,
        S::G => Key::G,
        S::H => Key::H,
        S::I => Key::I,
        S::J => Key::J,
        S::K => Key::K,
        S::L => Key::L,
        S::M => Key::M,
        S::N => Key::N,
        S::O => Key::O,
        S::P => Key::P,
        S::Q => Key::Q,
        S::R => Key::R,
        S::S => Key::S,
        S::T => Key::T,
        S::U => Key::U,
        S::V => Key::V,
        S::W => Key::W,
        S::X => Key::X,
        S::Y => Key::Y,
        S::Z => Key::Z,

        S::Num0 => Key::Num0,
        S::Num1 => Key::Num1,
        S::Num2 => Key::Num2,
        S::Num3 => Key::Num3,
        S::Num4 => Key::Num4,
        S::Num5 => Key::Num5,
        S::Num6 => Key::Num6,
        S::Num7 => Key::Num7,
        S::Num8 => Key::Num8,
        S::Num9 => Key::Num9,

        S::F1 => Key::F1,
        S::F2 => Key::F2,
        S::F3 => Key::F3,
        S::F4 => Key::F4,
        S::F5 => Key::F5,
        S::F6 => Key::F6,
        S::F7 => Key::F7,
        S::F8 => Key::F8,
        S::F9 => Key::F9,
        S::F10 => Key::F10,
        S::F11 => Key::F11,
        S::F12 => Key::F12,

        other => Key::Unknown(other as i32),
    }
}
