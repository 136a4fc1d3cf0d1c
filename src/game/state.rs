use rand::Rng;
use thiserror::Error;

use crate::game::feedback::{self, Feedback};
use crate::game::words::{self, MAX_ATTEMPTS, WORD_LEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The three gameplay actions both input sources funnel into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Append(char),
    Delete,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess recorded, next slot is active.
    Continue,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// Action was filtered out; nothing changed.
    Ignored,
    /// The in-progress guess changed.
    Edited,
    Submitted(SubmitOutcome),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("not enough letters ({len}/{})", WORD_LEN)]
    TooShort { len: usize },
}

pub struct Game {
    answer: &'static str,
    guesses: [Option<String>; MAX_ATTEMPTS],
    current: String,
    attempt: usize,
    status: GameStatus,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_answer(words::pick_answer(rng))
    }

    /// Start a game with a known answer. Used by tests and benches.
    pub fn with_answer(answer: &'static str) -> Self {
        Self {
            answer,
            guesses: Default::default(),
            current: String::with_capacity(WORD_LEN),
            attempt: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn answer(&self) -> &'static str {
        self.answer
    }

    pub fn guesses(&self) -> &[Option<String>; MAX_ATTEMPTS] {
        &self.guesses
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn submitted(&self) -> impl Iterator<Item = &str> {
        self.guesses.iter().flatten().map(String::as_str)
    }

    /// Whether board row `row` is the one that won the game.
    pub fn is_winning_row(&self, row: usize) -> bool {
        self.status == GameStatus::Won && row == self.attempt
    }

    /// Keyboard colour for `key`, scanned over guesses `0..attempt` only.
    /// The row that ended the game is not counted.
    pub fn key_feedback(&self, key: char) -> Feedback {
        let earlier = self.guesses[..self.attempt].iter().flatten();
        feedback::key_feedback(self.answer, earlier.map(String::as_str), key)
    }

    /// Returns `true` if the letter was added.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_terminal() || self.current.len() >= WORD_LEN || !ch.is_ascii_alphabetic()
        {
            return false;
        }
        self.current.push(ch.to_ascii_uppercase());
        true
    }

    /// Returns `true` if a letter was removed.
    pub fn delete_last_letter(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// Submit the in-progress guess.
    ///
    /// A short guess is rejected without touching any state. In a terminal
    /// state nothing happens and `Ok(None)` is returned.
    pub fn submit_guess(&mut self) -> Result<Option<SubmitOutcome>, GuessError> {
        if self.status.is_terminal() {
            return Ok(None);
        }
        let len = self.current.len();
        if len != WORD_LEN {
            return Err(GuessError::TooShort { len });
        }

        let guess = std::mem::take(&mut self.current);
        let won = guess == self.answer;
        self.guesses[self.attempt] = Some(guess);

        let outcome = if won {
            self.status = GameStatus::Won;
            SubmitOutcome::Won
        } else if self.attempt == MAX_ATTEMPTS - 1 {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost
        } else {
            self.attempt += 1;
            SubmitOutcome::Continue
        };
        Ok(Some(outcome))
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched, GuessError> {
        let dispatched = match action {
            Action::Append(ch) => edited(self.append_letter(ch)),
            Action::Delete => edited(self.delete_last_letter()),
            Action::Submit => match self.submit_guess()? {
                Some(outcome) => Dispatched::Submitted(outcome),
                None => Dispatched::Ignored,
            },
        };
        Ok(dispatched)
    }

    /// Reinitialise every field and draw a fresh answer.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}

fn edited(changed: bool) -> Dispatched {
    if changed {
        Dispatched::Edited
    } else {
        Dispatched::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    fn guess(game: &mut Game, word: &str) -> Result<Option<SubmitOutcome>, GuessError> {
        type_word(game, word);
        game.submit_guess()
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::with_answer("EAGLE");
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.current(), "");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.guesses().iter().all(Option::is_none));
    }

    #[test]
    fn test_append_caps_at_five_letters() {
        let mut game = Game::with_answer("EAGLE");
        type_word(&mut game, "abcdefg");
        assert_eq!(game.current(), "ABCDE");
        assert!(!game.append_letter('Z'));
    }

    #[test]
    fn test_append_rejects_non_letters() {
        let mut game = Game::with_answer("EAGLE");
        assert!(!game.append_letter('1'));
        assert!(!game.append_letter(' '));
        assert!(!game.append_letter('é'));
        assert_eq!(game.current(), "");
    }

    #[test]
    fn test_delete_last_letter() {
        let mut game = Game::with_answer("EAGLE");
        assert!(!game.delete_last_letter());
        type_word(&mut game, "AB");
        assert!(game.delete_last_letter());
        assert_eq!(game.current(), "A");
    }

    #[test]
    fn test_short_guess_rejected_without_mutation() {
        let mut game = Game::with_answer("EAGLE");
        guess(&mut game, "CRANE").unwrap();
        let result = guess(&mut game, "AB");
        assert_eq!(result, Err(GuessError::TooShort { len: 2 }));
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current(), "AB");
        assert_eq!(game.submitted().count(), 1);
    }

    #[test]
    fn test_wrong_guess_advances_attempt() {
        let mut game = Game::with_answer("EAGLE");
        assert_eq!(guess(&mut game, "CRANE"), Ok(Some(SubmitOutcome::Continue)));
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.current(), "");
        assert_eq!(game.guesses()[0].as_deref(), Some("CRANE"));
    }

    #[test]
    fn test_correct_guess_wins_at_any_attempt() {
        for misses in 0..MAX_ATTEMPTS {
            let mut game = Game::with_answer("EAGLE");
            for _ in 0..misses {
                guess(&mut game, "WRONG").unwrap();
            }
            assert_eq!(guess(&mut game, "eagle"), Ok(Some(SubmitOutcome::Won)));
            assert_eq!(game.status(), GameStatus::Won);
            assert_eq!(game.attempt(), misses);
            assert!(game.is_winning_row(misses));
        }
    }

    #[test]
    fn test_sixth_miss_loses() {
        let mut game = Game::with_answer("EAGLE");
        for _ in 0..MAX_ATTEMPTS - 1 {
            assert_eq!(guess(&mut game, "WRONG"), Ok(Some(SubmitOutcome::Continue)));
        }
        assert_eq!(game.attempt(), 5);
        assert_eq!(guess(&mut game, "WRONG"), Ok(Some(SubmitOutcome::Lost)));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempt(), 5);
        assert_eq!(game.answer(), "EAGLE");
        assert!(game.guesses().iter().all(Option::is_some));
    }

    #[test]
    fn test_terminal_state_ignores_input() {
        let mut game = Game::with_answer("EAGLE");
        guess(&mut game, "EAGLE").unwrap();

        assert_eq!(game.dispatch(Action::Append('A')), Ok(Dispatched::Ignored));
        assert_eq!(game.dispatch(Action::Delete), Ok(Dispatched::Ignored));
        assert_eq!(game.dispatch(Action::Submit), Ok(Dispatched::Ignored));
        assert_eq!(game.current(), "");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.submitted().count(), 1);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut game = Game::with_answer("CRANE");
        assert_eq!(game.dispatch(Action::Append('c')), Ok(Dispatched::Edited));
        assert_eq!(game.dispatch(Action::Delete), Ok(Dispatched::Edited));
        assert_eq!(game.dispatch(Action::Delete), Ok(Dispatched::Ignored));
        assert_eq!(
            game.dispatch(Action::Submit),
            Err(GuessError::TooShort { len: 0 })
        );
        for ch in "CRANE".chars() {
            game.dispatch(Action::Append(ch)).unwrap();
        }
        assert_eq!(
            game.dispatch(Action::Submit),
            Ok(Dispatched::Submitted(SubmitOutcome::Won))
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut game = Game::with_answer("EAGLE");
        guess(&mut game, "WRONG").unwrap();
        type_word(&mut game, "AB");

        for _ in 0..20 {
            game.reset(&mut rng);
            assert!(words::is_answer(game.answer()));
            assert_eq!(game.attempt(), 0);
            assert_eq!(game.current(), "");
            assert_eq!(game.status(), GameStatus::InProgress);
            assert!(game.guesses().iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_key_feedback_skips_winning_row() {
        let mut game = Game::with_answer("EAGLE");
        guess(&mut game, "CRANE").unwrap();
        assert_eq!(game.key_feedback('G'), Feedback::Unfilled);
        guess(&mut game, "EAGLE").unwrap();
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.key_feedback('G'), Feedback::Unfilled);
        assert_eq!(game.key_feedback('R'), Feedback::Absent);
        assert_eq!(game.key_feedback('E'), Feedback::Exact);
    }

    #[test]
    fn test_key_feedback_skips_losing_row() {
        let mut game = Game::with_answer("EAGLE");
        for _ in 0..MAX_ATTEMPTS - 1 {
            guess(&mut game, "CRANE").unwrap();
        }
        guess(&mut game, "PLUMB").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.key_feedback('P'), Feedback::Unfilled);
        assert_eq!(game.key_feedback('C'), Feedback::Absent);
    }

    #[test]
    fn test_error_message() {
        let err = GuessError::TooShort { len: 3 };
        assert_eq!(err.to_string(), "not enough letters (3/5)");
    }
}
