//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Specifically, the two available functions take a letter to guess, and take the answer to
//! whether the player wants another round.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use regex::Regex;
use tracing::debug;

use crate::engine::{parse_letter, GuessError};

/// The pattern an answer to the play-again prompt has to match. The first capture group holds the
/// answer itself.
pub(crate) const REPEAT_PATTERN: &str = r"(?i)\A\s*(y|yes|n|no)\s*\z";

/// This function is in charge of taking the letter the user wants to guess next.
///
/// The input is checked with the same parser the game uses, so anything returned here will be
/// accepted by `Game::guess`. Letters that were already guessed are let through; the game reports
/// them as redundant rather than invalid.
pub(crate) fn take_guess(term: &Term) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Enter your guess (a single letter)").bold()))
        .validate_with(|input: &String| check_guess(input))
        .interact_text_on(term)?;

    Ok(input.trim().to_owned())
}

/// This function is in charge of asking whether the user wants to play another round. Anything
/// other than yes or no, in any case, is rejected and asked again.
pub(crate) fn take_repeat(term: &Term, re: &Regex) -> Result<bool> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style("Do you want to play again? (y/n)").bold()
        ))
        .validate_with(|input: &String| -> Result<(), &str> {
            if re.is_match(input) {
                Ok(())
            } else {
                Err("Please enter 'y' for yes or 'n' for no")
            }
        })
        .interact_text_on(term)?;

    Ok(wants_repeat(re, &input))
}

/// Checks a raw guess the way the game will, ignoring surrounding whitespace. Rejections are
/// logged so a confused player's attempts can be traced.
fn check_guess(input: &str) -> Result<(), GuessError> {
    parse_letter(input.trim()).map(|_| ()).inspect_err(|err| {
        debug!(%err, "guess rejected at the prompt");
    })
}

/// Reads a validated play-again answer. Answers that don't match the pattern count as a no.
fn wants_repeat(re: &Regex, input: &str) -> bool {
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .is_some_and(|answer| answer.as_str().to_lowercase().starts_with('y'))
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;

    /// Compiles the play-again pattern.
    fn repeat_re() -> Regex {
        Regex::new(REPEAT_PATTERN).expect("pattern compiles")
    }

    #[test]
    fn repeat_pattern_accepts_yes_and_no() {
        let re = repeat_re();

        for answer in ["y", "Y", "yes", "YES", " n ", "No", "no"] {
            assert!(re.is_match(answer), "{answer:?} should be accepted");
        }
        for answer in ["", "maybe", "yess", "nope", "y n"] {
            assert!(!re.is_match(answer), "{answer:?} should be rejected");
        }
    }

    #[test]
    fn guess_check_trims_and_matches_the_game() {
        assert_eq!(check_guess("a"), Ok(()), "plain letter");
        assert_eq!(check_guess("  Q \n"), Ok(()), "padded uppercase");
        assert_eq!(check_guess("   "), Err(GuessError::Length(0)), "only whitespace");
        assert_eq!(check_guess("ab"), Err(GuessError::Length(2)), "two letters");
        assert_eq!(check_guess(" 4 "), Err(GuessError::NotAlphabetic('4')), "digit");
    }

    #[test]
    fn reads_the_answer() {
        let re = repeat_re();

        assert!(wants_repeat(&re, "Yes"), "yes");
        assert!(wants_repeat(&re, " y"), "y");
        assert!(!wants_repeat(&re, "n"), "n");
        assert!(!wants_repeat(&re, "NO"), "no");
        assert!(!wants_repeat(&re, "perhaps"), "unmatched");
    }
}
