pub mod components;
pub mod layout;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;
use crate::game::state::GameStatus;
use crate::game::words::MAX_ATTEMPTS;
use components::board::Board;
use components::keyboard_diagram::KeyboardDiagram;
use components::notice::NoticeBar;
use layout::GameLayout;

/// Draw the whole screen from app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = GameLayout::new(area, &app.keyboard);

    let status = match app.game.status() {
        GameStatus::InProgress => format!(" Guess {}/{MAX_ATTEMPTS}", app.game.attempt() + 1),
        GameStatus::Won => " Solved".to_string(),
        GameStatus::Lost => " Out of guesses".to_string(),
    };
    let record = if app.games_played > 0 {
        format!(" | Won {}/{}", app.games_won, app.games_played)
    } else {
        String::new()
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " wordly ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{status}{record}"),
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let hints = if app.game.status().is_terminal() {
        " [Enter] New game  [Esc] Quit "
    } else {
        " [A-Z] Type  [Enter] Submit  [Backspace] Delete  [Esc] Quit "
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(colors.text_pending()),
    )));
    frame.render_widget(footer, layout.footer);

    match (layout.board, layout.notice, layout.keyboard) {
        (Some(board), Some(notice), Some(keyboard)) => {
            frame.render_widget(Board::new(&app.game, &app.theme), board);
            frame.render_widget(NoticeBar::new(app.notice.as_ref(), &app.theme), notice);
            let kbd = KeyboardDiagram::new(
                &app.game,
                &app.keyboard,
                &app.depressed_keys,
                &app.theme,
            );
            frame.render_widget(kbd, keyboard);
        }
        _ => {
            let (w, h) = layout::min_size(&app.keyboard);
            let msg = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Terminal too small",
                    Style::default()
                        .fg(colors.error())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Need at least {w}x{h}, have {}x{}", area.width, area.height),
                    Style::default().fg(colors.fg()),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(msg, layout::centered_rect(100, 50, area));
        }
    }
}
