//! Backend-neutral input events.
//!
//! The window loop translates winit events into these so game code never sees winit types.
//! Mouse positions are in logical canvas pixels with the origin at the top-left corner.

use winit::event::{MouseButton as WinitMouseButton, VirtualKeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Either Alt key.
    Alt,
    Enter,
    Space,
    Other,
}

impl From<VirtualKeyCode> for Key {
    fn from(code: VirtualKeyCode) -> Self {
        match code {
            VirtualKeyCode::Escape => Key::Escape,
            VirtualKeyCode::LAlt | VirtualKeyCode::RAlt => Key::Alt,
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Key::Enter,
            VirtualKeyCode::Space => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Primary,
            WinitMouseButton::Right => MouseButton::Secondary,
            WinitMouseButton::Middle => MouseButton::Middle,
            WinitMouseButton::Other(_) => MouseButton::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed or the process was asked to stop.
    Quit,
    KeyDown(Key),
    MouseDown { button: MouseButton, x: i32, y: i32 },
}

impl InputEvent {
    pub fn click(x: i32, y: i32) -> Self {
        InputEvent::MouseDown {
            button: MouseButton::Primary,
            x,
            y,
        }
    }

    /// A button press at the last known cursor position. Presses before the cursor has been
    /// seen have no position and are dropped.
    pub fn press_at(button: MouseButton, cursor: Option<(i32, i32)>) -> Option<Self> {
        let (x, y) = cursor?;
        Some(InputEvent::MouseDown { button, x, y })
    }

    pub fn right_click(x: i32, y: i32) -> Self {
        InputEvent::MouseDown {
            button: MouseButton::Secondary,
            x,
            y,
        }
    }
}
