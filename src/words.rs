//! This module contains the sources the game draws its target words from.
//!
//! The game loop only knows about the [`WordSource`] trait, so a round can be played against the
//! built-in catalog, a custom list, or a single fixed word.

use fastrand::Rng;
use thiserror::Error;

/// The words the game ships with. All of them are lowercase and alphabetic.
pub const BUILTIN: &[&str] = &[
    "python",
    "hangman",
    "computer",
    "programming",
    "keyboard",
    "developer",
    "algorithm",
    "function",
    "variable",
    "language",
    "code",
    "game",
    "player",
    "screen",
    "console",
    "challenge",
    "guess",
    "letter",
    "word",
    "puzzle",
    "logic",
    "software",
    "interface",
    "network",
    "database",
];

/// This enum holds the reasons a list of words can't be turned into a [`Catalog`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CatalogError {
    /// The list has no words to pick from.
    #[error("the word list is empty")]
    Empty,
    /// The given word has something other than lowercase letters in it.
    #[error("\"{0}\" is not a lowercase alphabetic word")]
    InvalidWord(String),
}

/// A fixed, non-empty list of words picked from uniformly at random.
#[derive(Debug)]
pub struct Catalog<'list> {
    /// The random number generator used to pick words.
    rng: Rng,
    /// The words to pick from; never empty.
    words: &'list [&'list str],
}

/// A source that hands out the same word every time.
#[derive(Debug, Clone)]
pub struct Fixed(String);

/// Anything that can hand the game a word to guess.
pub trait WordSource {
    /// Returns the next word to play. Words are lowercase and alphabetic.
    fn next_word(&mut self) -> &str;
}

impl<'list> Catalog<'list> {
    /// Creates a catalog over the [`BUILTIN`] word list.
    #[must_use]
    pub const fn builtin(rng: Rng) -> Catalog<'static> {
        Catalog {
            rng,
            words: BUILTIN,
        }
    }

    /// Creates a catalog over the given words, after checking that there is at least one and that
    /// every one is made up of lowercase letters only.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list, and [`CatalogError::InvalidWord`] with the
    /// first offending word otherwise.
    pub fn new(words: &'list [&'list str], rng: Rng) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(&bad) = words.iter().find(|word| !is_playable(word)) {
            return Err(CatalogError::InvalidWord(bad.to_owned()));
        }

        Ok(Self { rng, words })
    }

    /// The words this catalog picks from.
    #[must_use]
    pub const fn words(&self) -> &'list [&'list str] {
        self.words
    }
}

impl WordSource for Catalog<'_> {
    #[expect(
        clippy::indexing_slicing,
        reason = "The catalog is checked to be non-empty on construction, and the index is drawn from within its length."
    )]
    fn next_word(&mut self) -> &str {
        let idx = self.rng.usize(..self.words.len());
        self.words[idx]
    }
}

impl Fixed {
    /// Creates a source that always returns `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self(word.to_owned())
    }
}

impl WordSource for Fixed {
    fn next_word(&mut self) -> &str {
        &self.0
    }
}

/// Checks whether a word is non-empty and made up of lowercase letters only.
fn is_playable(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|letter| letter.is_alphabetic() && letter.is_lowercase())
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_words_are_playable() {
        assert_eq!(BUILTIN.len(), 25, "the shipped list");
        for word in BUILTIN {
            assert!(is_playable(word), "'{word}' should be lowercase letters");
        }
    }

    #[test]
    fn rejects_bad_lists() {
        assert_eq!(
            Catalog::new(&[], Rng::with_seed(1)).err(),
            Some(CatalogError::Empty),
            "empty"
        );
        assert_eq!(
            Catalog::new(&["fine", "Nope"], Rng::with_seed(1)).err(),
            Some(CatalogError::InvalidWord("Nope".to_owned())),
            "uppercase"
        );
        assert_eq!(
            Catalog::new(&["r2d2"], Rng::with_seed(1)).err(),
            Some(CatalogError::InvalidWord("r2d2".to_owned())),
            "digits"
        );
    }

    #[test]
    fn exposes_its_words() {
        let list = ["alpha", "beta"];
        let catalog = Catalog::new(&list, Rng::with_seed(3)).expect("valid list");
        assert_eq!(catalog.words(), list, "given list");
        assert_eq!(Catalog::builtin(Rng::new()).words(), BUILTIN, "shipped list");
    }

    #[test]
    fn picks_only_listed_words() {
        let list = ["alpha", "beta", "gamma"];
        let mut catalog = Catalog::new(&list, Rng::with_seed(7)).expect("valid list");

        let picked: HashSet<String> = (0..200)
            .map(|_| catalog.next_word().to_owned())
            .collect();

        assert!(
            picked.iter().all(|word| list.contains(&word.as_str())),
            "only listed words"
        );
        assert_eq!(picked.len(), list.len(), "every word shows up eventually");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut first = Catalog::builtin(Rng::with_seed(42));
        let mut second = Catalog::builtin(Rng::with_seed(42));

        for _ in 0..20 {
            assert_eq!(first.next_word(), second.next_word(), "seeded picks match");
        }
    }

    #[test]
    fn fixed_source_repeats() {
        let mut source = Fixed::new("cat");
        assert_eq!(source.next_word(), "cat", "first");
        assert_eq!(source.next_word(), "cat", "second");
    }
}
