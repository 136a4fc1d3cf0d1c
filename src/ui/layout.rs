use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::keyboard::layout::KeyboardLayout;
use crate::ui::components::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::ui::components::keyboard_diagram;

/// Screen regions for the single game screen. `None` for the play regions
/// means the terminal is too small to draw them.
pub struct GameLayout {
    pub header: Rect,
    pub board: Option<Rect>,
    pub notice: Option<Rect>,
    pub keyboard: Option<Rect>,
    pub footer: Rect,
}

pub fn min_size(keyboard: &KeyboardLayout) -> (u16, u16) {
    let width = BOARD_WIDTH.max(keyboard_diagram::required_width(keyboard));
    let height = 1 + BOARD_HEIGHT + 1 + keyboard_diagram::required_height(keyboard) + 1;
    (width, height)
}

impl GameLayout {
    pub fn new(area: Rect, keyboard: &KeyboardLayout) -> Self {
        let kbd_width = keyboard_diagram::required_width(keyboard);
        let kbd_height = keyboard_diagram::required_height(keyboard);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(BOARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(kbd_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let (min_w, min_h) = min_size(keyboard);
        let fits = area.width >= min_w && area.height >= min_h;

        Self {
            header: vertical[0],
            board: fits.then(|| centered_width(BOARD_WIDTH, vertical[2])),
            notice: fits.then(|| vertical[3]),
            keyboard: fits.then(|| centered_width(kbd_width, vertical[4])),
            footer: vertical[6],
        }
    }
}

/// A `width`-wide slice of `area`, horizontally centered.
pub fn centered_width(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let left = area.x + (area.width - width) / 2;
    Rect::new(left, area.y, width, area.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let target_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let left = area.x.saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area.y.saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
