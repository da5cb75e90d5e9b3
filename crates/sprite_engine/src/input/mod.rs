//! Input management
//!
//! The platform layer delivers input two ways each tick, mirroring how the
//! scene loop consumes it: an ordered sequence of discrete [`InputEvent`]s
//! (key transitions, mouse transitions, quit), and continuous [`InputState`]
//! (currently pressed keys, mouse position and buttons) sampled by widgets
//! and movement code.

use crate::foundation::math::Vec2;
use std::collections::HashSet;

/// Key codes understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Space,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// A discrete input event, delivered in order once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key transitioned to pressed
    KeyDown(Key),
    /// A key transitioned to released
    KeyUp(Key),
    /// The mouse cursor moved
    MouseMoved(f32, f32),
    /// A mouse button transitioned to pressed
    MouseDown(MouseButton),
    /// A mouse button transitioned to released
    MouseUp(MouseButton),
    /// The platform requested the program close
    Quit,
}

/// Continuous input state, updated as events are applied
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
    mouse_position: Vec2,
    buttons: [bool; 3],
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a discrete event into the continuous state
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                self.pressed.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.pressed.remove(&key);
            }
            InputEvent::MouseMoved(x, y) => {
                self.mouse_position = Vec2::new(x, y);
            }
            InputEvent::MouseDown(button) => {
                self.buttons[button.index()] = true;
            }
            InputEvent::MouseUp(button) => {
                self.buttons[button.index()] = false;
            }
            InputEvent::Quit => {}
        }
    }

    /// Whether the given key is currently held
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Current mouse cursor position
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Whether the given mouse button is currently held
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    /// Whether no mouse button is currently held
    pub fn no_buttons_down(&self) -> bool {
        self.buttons.iter().all(|held| !held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_tracking() {
        let mut state = InputState::new();
        state.apply(&InputEvent::KeyDown(Key::W));
        assert!(state.is_pressed(Key::W));
        assert!(!state.is_pressed(Key::S));

        state.apply(&InputEvent::KeyUp(Key::W));
        assert!(!state.is_pressed(Key::W));
    }

    #[test]
    fn test_mouse_tracking() {
        let mut state = InputState::new();
        state.apply(&InputEvent::MouseMoved(12.0, 34.0));
        state.apply(&InputEvent::MouseDown(MouseButton::Left));

        assert_eq!(state.mouse_position(), Vec2::new(12.0, 34.0));
        assert!(state.button_down(MouseButton::Left));
        assert!(!state.no_buttons_down());

        state.apply(&InputEvent::MouseUp(MouseButton::Left));
        assert!(state.no_buttons_down());
    }
}
