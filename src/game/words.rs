use rand::Rng;
use rand::seq::SliceRandom;

/// Number of letters in every answer and guess.
pub const WORD_LEN: usize = 5;

/// Number of guess slots on the board.
pub const MAX_ATTEMPTS: usize = 6;

/// The fixed answer pool. Every answer is `WORD_LEN` uppercase ASCII letters.
pub const ANSWERS: [&str; 3] = ["EAGLE", "CRANE", "PLUMB"];

/// Draw one answer uniformly from the pool.
pub fn pick_answer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The pool is a non-empty const array, so `choose` cannot miss.
    ANSWERS.choose(rng).copied().unwrap_or(ANSWERS[0])
}

pub fn is_answer(word: &str) -> bool {
    ANSWERS.contains(&word)
}
