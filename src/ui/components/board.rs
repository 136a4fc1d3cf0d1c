use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::game::feedback::{self, Feedback};
use crate::game::state::Game;
use crate::game::words::{MAX_ATTEMPTS, WORD_LEN};
use crate::ui::theme::Theme;

const TILE_WIDTH: u16 = 5;
const TILE_GAP: u16 = 1;

/// Outer size of the board, border included.
pub const BOARD_WIDTH: u16 = WORD_LEN as u16 * (TILE_WIDTH + TILE_GAP) - TILE_GAP + 2;
pub const BOARD_HEIGHT: u16 = MAX_ATTEMPTS as u16 * 2 - 1 + 2;

/// What one tile shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Letter typed into the active row, not yet submitted.
    Typed(char),
    Scored(char, Feedback),
}

/// Tiles for board row `row`, derived from game state alone.
pub fn row_tiles(game: &Game, row: usize) -> [Tile; WORD_LEN] {
    if let Some(guess) = &game.guesses()[row] {
        let scores = feedback::row_feedback(game.answer(), guess, game.is_winning_row(row));
        let mut letters = guess.chars();
        return std::array::from_fn(|i| match letters.next() {
            Some(ch) => Tile::Scored(ch, scores[i]),
            None => Tile::Empty,
        });
    }
    if row == game.attempt() && !game.status().is_terminal() {
        let mut letters = game.current().chars();
        return std::array::from_fn(|_| letters.next().map_or(Tile::Empty, Tile::Typed));
    }
    [Tile::Empty; WORD_LEN]
}

pub struct Board<'a> {
    game: &'a Game,
    theme: &'a Theme,
}

impl<'a> Board<'a> {
    pub fn new(game: &'a Game, theme: &'a Theme) -> Self {
        Self { game, theme }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        for row in 0..MAX_ATTEMPTS {
            let y = inner.y + row as u16 * 2;
            if y >= inner.bottom() {
                break;
            }
            for (col, tile) in row_tiles(self.game, row).into_iter().enumerate() {
                let x = inner.x + col as u16 * (TILE_WIDTH + TILE_GAP);
                if x + TILE_WIDTH > inner.right() {
                    break;
                }
                let (text, style) = match tile {
                    Tile::Empty => (
                        "  \u{00b7}  ".to_string(), // ·
                        Style::default()
                            .fg(colors.text_pending())
                            .bg(colors.tile_empty()),
                    ),
                    Tile::Typed(ch) => (
                        format!("  {ch}  "),
                        Style::default()
                            .fg(colors.fg())
                            .bg(colors.tile_empty())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Tile::Scored(ch, fb) => (
                        format!("  {ch}  "),
                        Style::default()
                            .fg(colors.tile_fg())
                            .bg(colors.feedback(fb))
                            .add_modifier(Modifier::BOLD),
                    ),
                };
                buf.set_string(x, y, &text, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
        let _ = game.submit_guess();
    }

    #[test]
    fn test_board_dimensions() {
        assert_eq!(BOARD_WIDTH, 31);
        assert_eq!(BOARD_HEIGHT, 13);
    }

    #[test]
    fn test_row_tiles_scored_typed_empty() {
        let mut game = Game::with_answer("EAGLE");
        play(&mut game, "CRANE");
        game.append_letter('B');

        let first = row_tiles(&game, 0);
        assert_eq!(first[0], Tile::Scored('C', Feedback::Absent));
        assert_eq!(first[2], Tile::Scored('A', Feedback::Present));
        assert_eq!(first[4], Tile::Scored('E', Feedback::Exact));

        let active = row_tiles(&game, 1);
        assert_eq!(active[0], Tile::Typed('B'));
        assert_eq!(active[1], Tile::Empty);

        assert_eq!(row_tiles(&game, 2), [Tile::Empty; WORD_LEN]);
    }

    #[test]
    fn test_winning_row_all_exact() {
        let mut game = Game::with_answer("EAGLE");
        play(&mut game, "EAGLE");
        assert!(
            row_tiles(&game, 0)
                .iter()
                .all(|t| matches!(t, Tile::Scored(_, Feedback::Exact)))
        );
    }

    #[test]
    fn test_render_paints_feedback_colors() {
        let theme = Theme::default();
        let mut game = Game::with_answer("EAGLE");
        play(&mut game, "CRANE");

        let area = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        Board::new(&game, &theme).render(area, &mut buf);

        // First tile of the first row: "  C  " starting inside the border.
        let cell = &buf[(3, 1)];
        assert_eq!(cell.symbol(), "C");
        assert_eq!(cell.bg, theme.colors.feedback(Feedback::Absent));

        let last = &buf[(1 + 4 * 6 + 2, 1)];
        assert_eq!(last.symbol(), "E");
        assert_eq!(last.bg, theme.colors.feedback(Feedback::Exact));

        // Second row is still empty.
        assert_eq!(buf[(3, 3)].symbol(), "\u{00b7}");
    }

    #[test]
    fn test_render_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let game = Game::with_answer("EAGLE");
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        Board::new(&game, &theme).render(area, &mut buf);
    }
}
