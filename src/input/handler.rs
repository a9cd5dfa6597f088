use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Button;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// One of the two device buttons was pressed.
    Button(Button),
    Quit,
    None,
}

/// Maps terminal key presses onto the device's two buttons. The left
/// button also restarts from the idle screen, so there is no separate
/// restart key.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Left button - anti-clockwise turn
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Button(Button::Left)
            }

            // Right button - clockwise turn
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Button(Button::Right)
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
