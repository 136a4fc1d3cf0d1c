use crate::game::state::Action;

/// Something on screen that can be clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Letter(char),
    Backspace,
    Submit,
    NewGame,
}

/// What a button press asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPress {
    Game(Action),
    Reset,
}

impl Button {
    pub fn label(self) -> String {
        match self {
            Button::Letter(ch) => ch.to_string(),
            Button::Backspace => "\u{232b}".to_string(), // ⌫
            Button::Submit => "Submit".to_string(),
            Button::NewGame => "New game".to_string(),
        }
    }

    /// Rendered width in cells, brackets and padding included.
    pub fn width(self) -> u16 {
        match self {
            Button::Letter(_) | Button::Backspace => 5,
            Button::Submit | Button::NewGame => self.label().chars().count() as u16 + 4,
        }
    }

    pub fn press(self) -> ButtonPress {
        match self {
            Button::Letter(ch) => ButtonPress::Game(Action::Append(ch)),
            Button::Backspace => ButtonPress::Game(Action::Delete),
            Button::Submit => ButtonPress::Game(Action::Submit),
            Button::NewGame => ButtonPress::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_mapping() {
        assert_eq!(
            Button::Letter('Q').press(),
            ButtonPress::Game(Action::Append('Q'))
        );
        assert_eq!(Button::Backspace.press(), ButtonPress::Game(Action::Delete));
        assert_eq!(Button::Submit.press(), ButtonPress::Game(Action::Submit));
        assert_eq!(Button::NewGame.press(), ButtonPress::Reset);
    }

    #[test]
    fn test_button_widths() {
        assert_eq!(Button::Letter('A').width(), 5);
        assert_eq!(Button::Backspace.width(), 5);
        assert_eq!(Button::Submit.width(), 10);
        assert_eq!(Button::NewGame.width(), 12);
    }
}
