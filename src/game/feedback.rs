//! Per-letter and per-key feedback.
//!
//! Presence is a plain membership test against the answer: a letter that
//! occurs in the answer is `Present` at every non-matching position, no
//! matter how many times it was already counted. Board tiles and keyboard
//! keys share this rule so they never disagree.

use crate::game::words::WORD_LEN;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Empty tile, or a key that was never guessed.
    Unfilled,
    Exact,
    Present,
    Absent,
}

fn classify(answer: &str, letter: char, position: usize) -> Feedback {
    if answer.chars().nth(position) == Some(letter) {
        Feedback::Exact
    } else if answer.contains(letter) {
        Feedback::Present
    } else {
        Feedback::Absent
    }
}

/// Feedback for one board cell.
///
/// A winning row is painted exact throughout regardless of its letters.
pub fn letter_feedback(
    answer: &str,
    letter: Option<char>,
    position: usize,
    winning_row: bool,
) -> Feedback {
    if winning_row {
        return Feedback::Exact;
    }
    match letter {
        None => Feedback::Unfilled,
        Some(ch) => classify(answer, ch.to_ascii_uppercase(), position),
    }
}

pub fn row_feedback(answer: &str, guess: &str, winning_row: bool) -> [Feedback; WORD_LEN] {
    let mut letters = guess.chars();
    std::array::from_fn(|pos| letter_feedback(answer, letters.next(), pos, winning_row))
}

/// Aggregate feedback for an on-screen key across every submitted guess.
///
/// An exact hit anywhere wins outright. Otherwise the most recent
/// present/absent result is kept; keys never guessed stay `Unfilled`.
pub fn key_feedback<'a, I>(answer: &str, guesses: I, key: char) -> Feedback
where
    I: IntoIterator<Item = &'a str>,
{
    let key = key.to_ascii_uppercase();
    let mut best = Feedback::Unfilled;
    for guess in guesses {
        for (pos, ch) in guess.chars().enumerate() {
            if ch != key {
                continue;
            }
            match classify(answer, ch, pos) {
                Feedback::Exact => return Feedback::Exact,
                other => best = other,
            }
        }
    }
    best
}
