//! The engine module holds the rules of a single round: the target word, the letters guessed so
//! far and the attempt budget.
//!
//! Nothing in here touches the terminal. The game loop in game.rs drives a [`Game`] and the
//! messages module turns its state into text.

use std::collections::HashSet;
use std::num::NonZeroU8;

use thiserror::Error;
use tracing::debug;

use crate::art;

/// The attempt budget used when the player doesn't ask for another one.
pub const DEFAULT_ATTEMPTS: NonZeroU8 = match NonZeroU8::new(6) {
    Some(attempts) => attempts,
    None => unreachable!(),
};

/// The character shown in place of a letter that hasn't been guessed yet.
pub const PLACEHOLDER: char = '_';

/// This enum holds the reasons a guess can be rejected before it reaches the game state.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GuessError {
    /// The input had a length other than one character. The field holds the length found.
    #[error("a guess must be a single letter, got {0} characters")]
    Length(usize),
    /// The single character given isn't alphabetic.
    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),
}

/// This enum holds the reasons a word can't be used as the target of a round.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum WordError {
    /// The word has no characters at all.
    #[error("the word can't be empty")]
    Empty,
    /// The word contains the given non-alphabetic character.
    #[error("the word can only contain letters, found '{0}'")]
    NotAlphabetic(char),
}

/// The state of one round of hangman.
///
/// A game can only move forward: letters are added to the guessed set and attempts are spent, but
/// neither is ever given back. Once [`Game::is_over`] returns true the game stays finished.
#[derive(Debug, Clone)]
pub struct Game {
    /// Letters guessed so far.
    guessed: LetterSet,
    /// The budget the game was created with.
    max_attempts: u8,
    /// Attempts left before the round is lost; always within `0..=max_attempts`.
    remaining_attempts: u8,
    /// The lowercased word to guess.
    target: String,
}

/// A set of letters that remembers the order they were inserted in.
#[derive(Debug, Clone, Default)]
struct LetterSet {
    /// Membership lookups.
    members: HashSet<char>,
    /// Insertion order.
    order: Vec<char>,
}

impl Game {
    /// The letters guessed so far that are part of the target, in the order they were guessed.
    #[must_use]
    pub fn correct_guesses(&self) -> Vec<char> {
        self.partition(true)
    }

    /// Processes a guess for a single letter.
    ///
    /// The returned flag tells a new guess apart from a redundant one: it is `true` when the letter
    /// was added to the guessed set and `false` when the letter had already been guessed, or when
    /// the round is already over. Only a new letter that isn't in the target costs an attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`GuessError`] if the input isn't exactly one alphabetic character. The game is
    /// left untouched in that case.
    pub fn guess(&mut self, input: &str) -> Result<bool, GuessError> {
        let letter = parse_letter(input)?;

        if self.is_over() || !self.guessed.insert(letter) {
            return Ok(false);
        }

        if !self.reveals(letter) {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        }

        debug!(
            %letter,
            remaining = self.remaining_attempts,
            "guess processed"
        );
        Ok(true)
    }

    /// All letters guessed so far, in the order they were guessed.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        self.guessed.as_slice()
    }

    /// The letters guessed so far that aren't part of the target, in the order they were guessed.
    #[must_use]
    pub fn incorrect_guesses(&self) -> Vec<char> {
        self.partition(false)
    }

    /// Checks whether the round has finished, either by revealing the word or by running out of
    /// attempts.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining_attempts == 0 || self.is_won()
    }

    /// Checks whether every letter of the target has been guessed.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.target
            .chars()
            .all(|letter| self.guessed.contains(letter))
    }

    /// The attempt budget the game was created with.
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Creates a game for the given word with the default budget of six wrong guesses.
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if the word is empty or contains anything other than letters.
    pub fn new(word: &str) -> Result<Self, WordError> {
        Self::with_attempts(word, DEFAULT_ATTEMPTS)
    }

    /// Partitions the guessed letters by whether they are part of the target.
    fn partition(&self, in_target: bool) -> Vec<char> {
        self.guessed
            .as_slice()
            .iter()
            .copied()
            .filter(|&letter| self.reveals(letter) == in_target)
            .collect()
    }

    /// The number of attempts left.
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    /// Renders the target with every unguessed letter replaced by a placeholder. Characters are
    /// separated by a single space, so a revealed "cat" renders as "c a t".
    #[must_use]
    pub fn render_masked(&self) -> String {
        let mut output = String::with_capacity(self.target.len() * 2);

        for (idx, letter) in self.target.chars().enumerate() {
            if idx > 0 {
                output.push(' ');
            }

            if self.guessed.contains(letter) {
                output.push(letter);
            } else {
                output.push(PLACEHOLDER);
            }
        }

        output
    }

    /// Renders the gallows for the number of wrong guesses made so far.
    #[must_use]
    pub fn render_progress_art(&self) -> &'static str {
        art::frame(self.wrong_guesses(), self.max_attempts)
    }

    /// The outcome of the round: `None` while it is still being played, `Some(true)` if the word
    /// was revealed and `Some(false)` if the attempts ran out.
    #[must_use]
    pub fn result(&self) -> Option<bool> {
        self.is_over().then(|| self.is_won())
    }

    /// Checks whether the given letter appears in the target.
    #[must_use]
    pub fn reveals(&self, letter: char) -> bool {
        self.target.contains(letter)
    }

    /// The lowercased word being guessed.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Creates a game for the given word that is lost after `max_attempts` wrong guesses.
    ///
    /// The word is lowercased before being stored; the original casing is not kept.
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if the word is empty or contains anything other than letters.
    pub fn with_attempts(word: &str, max_attempts: NonZeroU8) -> Result<Self, WordError> {
        // lowercase letter by letter, the way guesses are, so context rules such as the final
        // sigma don't give the same letter two forms
        let target: String = word.chars().flat_map(char::to_lowercase).collect();

        if target.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = target.chars().find(|letter| !letter.is_alphabetic()) {
            return Err(WordError::NotAlphabetic(bad));
        }

        Ok(Self {
            guessed: LetterSet::default(),
            max_attempts: max_attempts.get(),
            remaining_attempts: max_attempts.get(),
            target,
        })
    }

    /// The number of wrong guesses made so far, always within `0..=max_attempts`.
    const fn wrong_guesses(&self) -> u8 {
        self.max_attempts - self.remaining_attempts
    }
}

impl LetterSet {
    /// The letters in insertion order.
    fn as_slice(&self) -> &[char] {
        &self.order
    }

    /// Checks for membership.
    fn contains(&self, letter: char) -> bool {
        self.members.contains(&letter)
    }

    /// Adds a letter, returning whether it was new.
    fn insert(&mut self, letter: char) -> bool {
        if self.members.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }
}

/// Validates a raw guess and normalizes it to the lowercase letter the engine works with.
///
/// This is the same check [`Game::guess`] performs, so input prompts can use it to reject bad input
/// before it ever reaches a game.
///
/// # Errors
///
/// Returns [`GuessError::Length`] if the input isn't exactly one character, and
/// [`GuessError::NotAlphabetic`] if that character (once lowercased) isn't a single letter.
pub fn parse_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.chars();
    let (Some(raw), None) = (chars.next(), chars.next()) else {
        return Err(GuessError::Length(input.chars().count()));
    };

    // some uppercase letters lowercase to more than one character
    let mut lower = raw.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Ok(letter),
        _ => Err(GuessError::NotAlphabetic(raw)),
    }
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Builds a budget for tests, which always use positive ones.
    fn attempts(count: u8) -> NonZeroU8 {
        NonZeroU8::new(count).expect("test budgets are positive")
    }

    /// Guesses every letter of `letters` in order, ignoring whether each one was new.
    fn play(game: &mut Game, letters: &str) {
        for letter in letters.chars() {
            let _ = game
                .guess(&letter.to_string())
                .expect("test letters are valid");
        }
    }

    #[test]
    fn fresh_game_is_fully_masked() {
        let game = Game::with_attempts("hangman", attempts(4)).expect("valid word");

        assert_eq!(game.remaining_attempts(), 4, "budget starts full");
        assert!(!game.is_over(), "a fresh game is in progress");
        assert_eq!(game.result(), None, "no result while in progress");
        assert_eq!(game.render_masked(), "_ _ _ _ _ _ _", "every letter hidden");
        assert!(game.guessed_letters().is_empty(), "nothing guessed yet");
    }

    #[test]
    fn default_budget_is_six() {
        let game = Game::new("word").expect("valid word");
        assert_eq!(game.max_attempts(), 6, "default budget");
        assert_eq!(game.remaining_attempts(), 6, "default budget");
    }

    #[test]
    fn rejects_empty_and_non_alphabetic_words() {
        assert_eq!(Game::new("").err(), Some(WordError::Empty), "empty word");
        assert_eq!(
            Game::new("abc123").err(),
            Some(WordError::NotAlphabetic('1')),
            "digits"
        );
        assert_eq!(
            Game::new("two words").err(),
            Some(WordError::NotAlphabetic(' ')),
            "whitespace"
        );
    }

    #[test]
    fn normalizes_word_to_lowercase() {
        let game = Game::new("Hangman").expect("valid word");
        assert_eq!(game.target(), "hangman", "target is lowercased");
    }

    #[test]
    fn accepts_non_ascii_letters() {
        let mut game = Game::new("Caf\u{c9}").expect("valid word");
        assert_eq!(game.target(), "caf\u{e9}", "lowercased");
        assert_eq!(game.guess("\u{c9}"), Ok(true), "uppercase guess matches");
        assert_eq!(game.render_masked(), "_ _ _ \u{e9}", "revealed");
    }

    #[test]
    fn same_letter_has_one_form_wherever_it_appears() {
        let mut game = Game::new("\u{3a3}\u{39f}\u{3a3}").expect("valid word");
        assert_eq!(game.target(), "\u{3c3}\u{3bf}\u{3c3}", "no final sigma");

        assert_eq!(game.guess("\u{3a3}"), Ok(true), "sigma");
        assert_eq!(game.guess("\u{39f}"), Ok(true), "omicron");
        assert_eq!(game.render_masked(), "\u{3c3} \u{3bf} \u{3c3}", "both sigmas revealed");
        assert!(game.is_won(), "every letter guessed");
    }

    #[test]
    fn winning_scenario() {
        let mut game = Game::with_attempts("cat", attempts(6)).expect("valid word");

        assert_eq!(game.guess("c"), Ok(true), "hit");
        assert_eq!(game.remaining_attempts(), 6, "a hit is free");
        assert_eq!(game.guess("z"), Ok(true), "miss");
        assert_eq!(game.remaining_attempts(), 5, "a miss costs one");
        assert_eq!(game.guess("a"), Ok(true), "hit");
        assert_eq!(game.guess("t"), Ok(true), "hit");

        assert!(game.is_won(), "every letter revealed");
        assert!(game.is_over(), "won games are over");
        assert_eq!(game.result(), Some(true), "won");
        assert_eq!(game.render_masked(), "c a t", "fully revealed");
    }

    #[test]
    fn single_attempt_loss() {
        let mut game = Game::with_attempts("dog", attempts(1)).expect("valid word");

        assert_eq!(game.guess("x"), Ok(true), "miss");
        assert_eq!(game.remaining_attempts(), 0, "budget spent");
        assert!(game.is_over(), "out of attempts");
        assert_eq!(game.result(), Some(false), "lost");
    }

    #[test]
    fn loses_after_budget_of_misses_despite_hits() {
        let mut game = Game::with_attempts("rust", attempts(3)).expect("valid word");
        play(&mut game, "rxuyz");

        assert_eq!(game.remaining_attempts(), 0, "three misses");
        assert!(game.is_over(), "out of attempts");
        assert_eq!(game.result(), Some(false), "lost");
    }

    #[test]
    fn malformed_guesses_leave_state_untouched() {
        let mut game = Game::new("dog").expect("valid word");
        play(&mut game, "dq");

        for input in ["", "ab", "1", " ", "?"] {
            assert!(game.guess(input).is_err(), "{input:?} is rejected");
        }

        assert_eq!(game.guessed_letters(), ['d', 'q'], "guessed set unchanged");
        assert_eq!(game.remaining_attempts(), 5, "attempts unchanged");
    }

    #[test]
    fn guess_errors_describe_the_input() {
        let mut game = Game::new("dog").expect("valid word");

        assert_eq!(game.guess(""), Err(GuessError::Length(0)), "empty");
        assert_eq!(game.guess("ab"), Err(GuessError::Length(2)), "too long");
        assert_eq!(game.guess("7"), Err(GuessError::NotAlphabetic('7')), "digit");
    }

    #[test]
    fn repeated_guess_is_a_free_no_op() {
        let mut game = Game::new("dog").expect("valid word");

        assert_eq!(game.guess("x"), Ok(true), "first miss");
        assert_eq!(game.guess("x"), Ok(false), "repeat");
        assert_eq!(game.guess("X"), Ok(false), "repeat in another case");
        assert_eq!(game.remaining_attempts(), 5, "charged once");
        assert_eq!(game.guessed_letters(), ['x'], "stored once");
    }

    #[test]
    fn finished_game_ignores_further_guesses() {
        let mut game = Game::with_attempts("ox", attempts(2)).expect("valid word");
        play(&mut game, "ox");
        assert!(game.is_won(), "revealed");

        assert_eq!(game.guess("q"), Ok(false), "no-op once over");
        assert_eq!(game.guessed_letters(), ['o', 'x'], "set frozen");
        assert_eq!(game.remaining_attempts(), 2, "budget frozen");
        assert_eq!(game.guess("1"), Err(GuessError::NotAlphabetic('1')), "still validated");
    }

    #[test]
    fn partitions_guesses_in_order() {
        let mut game = Game::new("banana").expect("valid word");
        play(&mut game, "zanqb");

        assert_eq!(game.correct_guesses(), ['a', 'n', 'b'], "hits");
        assert_eq!(game.incorrect_guesses(), ['z', 'q'], "misses");
    }

    #[test]
    fn progress_art_follows_wrong_guesses() {
        let mut game = Game::new("dog").expect("valid word");
        let empty = game.render_progress_art();

        play(&mut game, "d");
        assert_eq!(game.render_progress_art(), empty, "hits don't draw");

        play(&mut game, "abcefh");
        assert_eq!(game.render_progress_art(), art::HANGED, "six misses hang");
    }

    #[test]
    fn parse_letter_normalizes() {
        assert_eq!(parse_letter("Q"), Ok('q'), "lowercased");
        assert_eq!(parse_letter("q"), Ok('q'), "unchanged");
        assert_eq!(
            parse_letter("\u{130}"),
            Err(GuessError::NotAlphabetic('\u{130}')),
            "lowercases to two characters"
        );
    }

    proptest! {
        #[test]
        fn attempts_stay_in_bounds_and_only_decrease(
            word in "[a-z]{1,10}",
            budget in 1_u8..10,
            guesses in proptest::collection::vec("[a-z]", 0..40),
        ) {
            let mut game = Game::with_attempts(&word, attempts(budget)).expect("valid word");
            let mut previous = game.remaining_attempts();
            let mut seen = 0;

            for input in &guesses {
                let _ = game.guess(input).expect("valid letter");
                prop_assert!(game.remaining_attempts() <= previous);
                prop_assert!(game.guessed_letters().len() >= seen);
                previous = game.remaining_attempts();
                seen = game.guessed_letters().len();
            }

            prop_assert!(game.remaining_attempts() <= budget);
            prop_assert_eq!(
                game.correct_guesses().len() + game.incorrect_guesses().len(),
                game.guessed_letters().len()
            );
        }

        #[test]
        fn repeating_a_guess_changes_nothing(
            word in "[a-z]{1,10}",
            letter in "[a-z]",
            repeats in 1_usize..5,
        ) {
            let mut game = Game::new(&word).expect("valid word");
            prop_assert_eq!(game.guess(&letter), Ok(true));
            let remaining = game.remaining_attempts();

            for _ in 0..repeats {
                prop_assert_eq!(game.guess(&letter), Ok(false));
            }

            prop_assert_eq!(game.remaining_attempts(), remaining);
            prop_assert_eq!(game.guessed_letters().len(), 1);
        }

        #[test]
        fn revealed_word_renders_spaced(word in "[a-z]{1,12}") {
            let mut game = Game::with_attempts(&word, attempts(26)).expect("valid word");
            for letter in word.chars() {
                let _ = game.guess(&letter.to_string()).expect("valid letter");
            }

            let mut expected = String::new();
            for (idx, letter) in word.chars().enumerate() {
                if idx > 0 {
                    expected.push(' ');
                }
                expected.push(letter);
            }

            prop_assert!(game.is_won());
            prop_assert_eq!(game.result(), Some(true));
            prop_assert_eq!(game.render_masked(), expected);
        }
    }
}
