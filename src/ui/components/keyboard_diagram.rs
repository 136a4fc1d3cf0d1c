use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::game::feedback::Feedback;
use crate::game::state::Game;
use crate::keyboard::display::Button;
use crate::keyboard::layout::KeyboardLayout;
use crate::ui::theme::Theme;

const CONTROL_GAP: u16 = 2;

/// Outer width needed to show every key, border included.
pub fn required_width(layout: &KeyboardLayout) -> u16 {
    let last = layout.rows.len().saturating_sub(1);
    let widest = layout
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row.len() as u16 + u16::from(i == last);
            keys * Button::Backspace.width()
        })
        .max()
        .unwrap_or(0);
    widest + 2
}

/// Outer height: letter rows, a spacer, the control row, and the border.
pub fn required_height(layout: &KeyboardLayout) -> u16 {
    layout.rows.len() as u16 + 2 + 2
}

/// Screen rectangles of every button, rows centered inside `inner`.
///
/// Rendering and mouse hit-testing both go through this so a click always
/// lands on the button that was drawn there.
pub fn button_rects(
    inner: Rect,
    layout: &KeyboardLayout,
    show_new_game: bool,
) -> Vec<(Rect, Button)> {
    let mut rects = Vec::new();
    let last = layout.rows.len().saturating_sub(1);

    for (row_idx, row) in layout.rows.iter().enumerate() {
        let mut buttons: Vec<Button> = row.iter().map(|&ch| Button::Letter(ch)).collect();
        if row_idx == last {
            buttons.push(Button::Backspace);
        }
        place_row(inner, inner.y + row_idx as u16, buttons, 0, &mut rects);
    }

    let mut controls = vec![Button::Submit];
    if show_new_game {
        controls.push(Button::NewGame);
    }
    place_row(
        inner,
        inner.y + layout.rows.len() as u16 + 1,
        controls,
        CONTROL_GAP,
        &mut rects,
    );

    rects
}

fn place_row(
    inner: Rect,
    y: u16,
    buttons: Vec<Button>,
    gap: u16,
    rects: &mut Vec<(Rect, Button)>,
) {
    if y >= inner.bottom() {
        return;
    }
    let total: u16 = buttons.iter().map(|b| b.width()).sum::<u16>()
        + gap * buttons.len().saturating_sub(1) as u16;
    let mut x = inner.x + inner.width.saturating_sub(total) / 2;
    for button in buttons {
        let width = button.width();
        if x + width > inner.right() {
            break;
        }
        rects.push((Rect::new(x, y, width, 1), button));
        x += width + gap;
    }
}

pub struct KeyboardDiagram<'a> {
    pub game: &'a Game,
    pub layout: &'a KeyboardLayout,
    pub depressed_keys: &'a HashSet<char>,
    pub theme: &'a Theme,
}

impl<'a> KeyboardDiagram<'a> {
    pub fn new(
        game: &'a Game,
        layout: &'a KeyboardLayout,
        depressed_keys: &'a HashSet<char>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            game,
            layout,
            depressed_keys,
            theme,
        }
    }

    fn block(&self) -> Block<'static> {
        let colors = &self.theme.colors;
        Block::bordered()
            .title(" Keyboard ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()))
    }

    /// The button drawn at screen cell (`column`, `row`) for a diagram
    /// rendered into `area`, if any.
    pub fn button_at(
        area: Rect,
        layout: &KeyboardLayout,
        show_new_game: bool,
        column: u16,
        row: u16,
    ) -> Option<Button> {
        let inner = Block::bordered().inner(area);
        let pos = Position::new(column, row);
        button_rects(inner, layout, show_new_game)
            .into_iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, button)| button)
    }

    fn button_style(&self, button: Button) -> Style {
        let colors = &self.theme.colors;
        let terminal = self.game.status().is_terminal();
        match button {
            Button::Letter(ch) if self.depressed_keys.contains(&ch) => Style::default()
                .fg(colors.tile_fg())
                .bg(colors.key_pressed()),
            Button::Letter(ch) => match self.game.key_feedback(ch) {
                Feedback::Unfilled => Style::default().fg(colors.fg()).bg(colors.key_unused()),
                fb => Style::default()
                    .fg(colors.tile_fg())
                    .bg(colors.feedback(fb))
                    .add_modifier(Modifier::BOLD),
            },
            Button::Backspace => Style::default().fg(colors.fg()).bg(colors.key_unused()),
            Button::Submit if terminal => Style::default().fg(colors.text_pending()),
            Button::Submit => Style::default()
                .fg(colors.bg())
                .bg(colors.accent())
                .add_modifier(Modifier::BOLD),
            Button::NewGame => Style::default()
                .fg(colors.bg())
                .bg(colors.success())
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Widget for KeyboardDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < Button::Backspace.width() {
            return;
        }

        let show_new_game = self.game.status().is_terminal();
        for (rect, button) in button_rects(inner, self.layout, show_new_game) {
            let display = format!("[ {} ]", button.label());
            buf.set_string(rect.x, rect.y, &display, self.button_style(button));
        }
    }
}
