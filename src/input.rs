use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::game::state::Action;
use crate::keyboard::display::Button;

/// Map a physical key to a gameplay action. Anything other than a letter,
/// Enter or Backspace maps to nothing.
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
            Some(Action::Append(ch.to_ascii_uppercase()))
        }
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Delete),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Track depressed keys for keyboard diagram
    match (&key.code, key.kind) {
        (KeyCode::Char(ch), KeyEventKind::Press) if ch.is_ascii_alphabetic() => {
            app.depressed_keys.insert(ch.to_ascii_uppercase());
            app.last_key_time = Some(Instant::now());
        }
        (KeyCode::Char(ch), KeyEventKind::Release) => {
            app.depressed_keys.remove(&ch.to_ascii_uppercase());
            return;
        }
        (_, KeyEventKind::Release) => return,
        _ => {}
    }

    // Ignore Repeat so a held key cannot fill the row
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    if app.game.status().is_terminal() {
        // The reset button is the only live control; Enter activates it.
        if key.code == KeyCode::Enter {
            app.press(Button::NewGame);
        }
        return;
    }

    if let Some(action) = key_action(&key) {
        app.dispatch(action);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
}
