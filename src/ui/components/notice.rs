use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{Notice, NoticeKind};
use crate::ui::theme::Theme;

/// One-line toast above the keyboard.
pub struct NoticeBar<'a> {
    notice: Option<&'a Notice>,
    theme: &'a Theme,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: Option<&'a Notice>, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(notice) = self.notice else {
            return;
        };
        let colors = &self.theme.colors;
        let accent = match notice.kind {
            NoticeKind::Invalid | NoticeKind::Lost => colors.error(),
            NoticeKind::Won => colors.success(),
        };
        let line = Line::from(Span::styled(
            format!(" {} ", notice.text),
            Style::default()
                .fg(colors.bg())
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
