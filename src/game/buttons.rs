/// The two physical buttons of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
}

/// Edge-triggered button state.
///
/// A press latches until the next [`take`](Self::take), so a press made
/// between two snake moves is still seen by the later move, while a held
/// button registers only once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ButtonPad {
    left: bool,
    right: bool,
}

impl ButtonPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press edge from the input driver.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Left => self.left = true,
            Button::Right => self.right = true,
        }
    }

    /// True exactly once per recorded press; reading clears the latch.
    pub fn take(&mut self, button: Button) -> bool {
        let slot = match button {
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
        };
        std::mem::take(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_the_latch() {
        let mut pad = ButtonPad::new();
        pad.press(Button::Left);
        assert!(pad.take(Button::Left));
        assert!(!pad.take(Button::Left));
    }

    #[test]
    fn test_repeated_presses_latch_once() {
        let mut pad = ButtonPad::new();
        pad.press(Button::Right);
        pad.press(Button::Right);
        assert!(pad.take(Button::Right));
        assert!(!pad.take(Button::Right));
    }

    #[test]
    fn test_buttons_latch_independently() {
        let mut pad = ButtonPad::new();
        pad.press(Button::Left);
        assert!(!pad.take(Button::Right));
        assert!(pad.take(Button::Left));
    }
}
