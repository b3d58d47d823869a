// Keyboard input mapping
//
// Translates host keyboard events into the shared controller byte. One
// player only; the second port is not wired on this core.

use super::{Button, SharedButtons};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard-to-controller mapping
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    pub button_a: KeyCode,
    pub button_b: KeyCode,
    pub select: KeyCode,
    pub start: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Default mapping: arrows for the D-pad, X/Z for A/B, Enter for
    /// Start, right Shift for Select
    pub fn default_layout() -> Self {
        Self {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::ShiftRight,
            start: KeyCode::Enter,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// The controller button a key maps to, if any
    fn button_for(&self, key: KeyCode) -> Option<Button> {
        if key == self.button_a {
            Some(Button::A)
        } else if key == self.button_b {
            Some(Button::B)
        } else if key == self.select {
            Some(Button::Select)
        } else if key == self.start {
            Some(Button::Start)
        } else if key == self.up {
            Some(Button::Up)
        } else if key == self.down {
            Some(Button::Down)
        } else if key == self.left {
            Some(Button::Left)
        } else if key == self.right {
            Some(Button::Right)
        } else {
            None
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self::default_layout()
    }
}

/// Keyboard handler owned by the UI thread
///
/// Feeds key transitions straight into the shared controller byte; each
/// update is a single atomic bit operation.
pub struct KeyboardHandler {
    mapping: KeyboardMapping,
    buttons: SharedButtons,
}

impl KeyboardHandler {
    pub fn new(buttons: SharedButtons) -> Self {
        Self {
            mapping: KeyboardMapping::default_layout(),
            buttons,
        }
    }

    /// Handle a key press or release
    pub fn handle_key(&mut self, key: PhysicalKey, pressed: bool) {
        if let PhysicalKey::Code(code) = key {
            if let Some(button) = self.mapping.button_for(code) {
                self.buttons.set_button(button, pressed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_sets_shared_bit() {
        let buttons = SharedButtons::new();
        let mut handler = KeyboardHandler::new(buttons.clone());

        handler.handle_key(PhysicalKey::Code(KeyCode::KeyX), true);
        assert_eq!(buttons.load() & 0x01, 0x01, "X presses A (bit 0)");

        handler.handle_key(PhysicalKey::Code(KeyCode::KeyX), false);
        assert_eq!(buttons.load() & 0x01, 0x00);
    }

    #[test]
    fn test_dpad_bits() {
        let buttons = SharedButtons::new();
        let mut handler = KeyboardHandler::new(buttons.clone());

        handler.handle_key(PhysicalKey::Code(KeyCode::ArrowUp), true);
        handler.handle_key(PhysicalKey::Code(KeyCode::ArrowRight), true);

        assert_eq!(buttons.load(), 0b1001_0000, "Up is bit 4, Right is bit 7");
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let buttons = SharedButtons::new();
        let mut handler = KeyboardHandler::new(buttons.clone());

        handler.handle_key(PhysicalKey::Code(KeyCode::KeyQ), true);
        assert_eq!(buttons.load(), 0);
    }
}
