use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::game::state::{Action, Dispatched, Game, GuessError, SubmitOutcome};
use crate::game::words::MAX_ATTEMPTS;
use crate::keyboard::display::{Button, ButtonPress};
use crate::keyboard::layout::KeyboardLayout;
use crate::ui::components::keyboard_diagram::KeyboardDiagram;
use crate::ui::layout::GameLayout;
use crate::ui::theme::Theme;

/// How long a physically pressed key stays highlighted when the terminal
/// never reports its release.
const DEPRESSED_KEY_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Invalid,
    Won,
    Lost,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// `None` keeps the notice until the next game.
    pub expires_at: Option<Instant>,
}

impl Notice {
    pub fn transient(kind: NoticeKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    pub fn lasting(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub config: Config,
    pub keyboard: KeyboardLayout,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub depressed_keys: HashSet<char>,
    pub last_key_time: Option<Instant>,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub games_played: u32,
    pub games_won: u32,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, theme: Theme, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let game = Game::new(&mut rng);
        tracing::info!(seeded = seed.is_some(), "new game");
        tracing::debug!(answer = game.answer(), "answer drawn");
        let keyboard = config.keyboard();

        Self {
            game,
            theme,
            config,
            keyboard,
            notice: None,
            should_quit: false,
            depressed_keys: HashSet::new(),
            last_key_time: None,
            viewport: Rect::default(),
            games_played: 0,
            games_won: 0,
            rng,
        }
    }

    /// Apply one gameplay action and surface any resulting message.
    pub fn dispatch(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Ok(Dispatched::Ignored) => {
                tracing::trace!(?action, "action ignored");
            }
            Ok(Dispatched::Edited) => {
                if matches!(self.notice, Some(Notice { kind: NoticeKind::Invalid, .. })) {
                    self.notice = None;
                }
            }
            Ok(Dispatched::Submitted(outcome)) => self.on_submitted(outcome),
            Err(err @ GuessError::TooShort { .. }) => {
                tracing::debug!(error = %err, "guess rejected");
                self.notice = Some(Notice::transient(
                    NoticeKind::Invalid,
                    "Not enough letters",
                    self.config.notice_duration(),
                ));
            }
        }
    }

    fn on_submitted(&mut self, outcome: SubmitOutcome) {
        let attempt = self.game.attempt();
        match outcome {
            SubmitOutcome::Continue => {
                tracing::debug!(attempt, "guess recorded");
                self.notice = None;
            }
            SubmitOutcome::Won => {
                let tries = attempt + 1;
                tracing::info!(tries, "game won");
                self.games_played += 1;
                self.games_won += 1;
                self.notice = Some(Notice::lasting(
                    NoticeKind::Won,
                    format!("{} Solved in {tries}/{MAX_ATTEMPTS}.", praise(tries)),
                ));
            }
            SubmitOutcome::Lost => {
                tracing::info!(answer = self.game.answer(), "game lost");
                self.games_played += 1;
                self.notice = Some(Notice::lasting(
                    NoticeKind::Lost,
                    format!("The word was {}", self.game.answer()),
                ));
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset(&mut self.rng);
        self.notice = None;
        tracing::info!(played = self.games_played, won = self.games_won, "new game");
        tracing::debug!(answer = self.game.answer(), "answer drawn");
    }

    pub fn press(&mut self, button: Button) {
        match button.press() {
            ButtonPress::Game(action) => self.dispatch(action),
            // The reset button only exists once the game is over.
            ButtonPress::Reset if self.game.status().is_terminal() => self.new_game(),
            ButtonPress::Reset => {}
        }
    }

    /// Handle a click at a screen cell.
    pub fn click(&mut self, column: u16, row: u16) {
        let layout = GameLayout::new(self.viewport, &self.keyboard);
        let Some(area) = layout.keyboard else {
            return;
        };
        let show_new_game = self.game.status().is_terminal();
        if let Some(button) =
            KeyboardDiagram::button_at(area, &self.keyboard, show_new_game, column, row)
        {
            tracing::trace!(?button, "button clicked");
            self.press(button);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
        // Fallback: clear depressed keys if no Release event arrived
        if let Some(last) = self.last_key_time {
            if now.duration_since(last) > DEPRESSED_KEY_TIMEOUT {
                self.depressed_keys.clear();
                self.last_key_time = None;
            }
        }
    }
}

fn praise(tries: usize) -> &'static str {
    match tries {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}
