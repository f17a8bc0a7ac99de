//! This module turns game state into the text shown on screen. Nothing here writes to the
//! terminal; the game loop decides when each piece is printed.

use std::fmt::Write as _;

use anyhow::Result;
use console::style;

use crate::engine::{Game, GuessError};

/// The title banner shown at the top of every screen.
const TITLE: &str = r"
  _   _    _    _   _  ____ __  __    _    _   _
 | | | |  / \  | \ | |/ ___|  \/  |  / \  | \ | |
 | |_| | / _ \ |  \| | |  _| |\/| | / _ \ |  \| |
 |  _  |/ ___ \| |\  | |_| | |  | |/ ___ \| |\  |
 |_| |_/_/   \_\_| \_|\____|_|  |_/_/   \_\_| \_|
";

/// The instructions shown once before the first round.
const INSTRUCTIONS: &str = "\
1. The computer picks a random word for you to guess.
2. Each turn, you guess one letter.
3. If the letter is in the word, every place it appears is revealed.
4. If it isn't, another piece of the hangman is drawn.
5. You win if you reveal the word before the hangman is complete.
6. You lose if the hangman is complete before you reveal the word.

Good luck!";

/// The width of the rules separating the sections of a screen.
const RULE_WIDTH: usize = 70;

/// This enum holds what happened on the last turn, to be reported above the next prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feedback {
    /// The letter was in the word.
    Hit(char),
    /// The letter wasn't in the word and cost an attempt.
    Miss(char),
    /// The input couldn't be used as a guess.
    Rejected(GuessError),
    /// The letter had been guessed before.
    Repeated(char),
}

impl Feedback {
    /// Returns the styled line describing this feedback.
    pub(crate) fn message(self) -> String {
        match self {
            Self::Hit(letter) => format!(
                "{}",
                style(format!("Good guess! '{letter}' is in the word.")).green()
            ),
            Self::Miss(letter) => format!(
                "{}",
                style(format!("Sorry, '{letter}' is not in the word.")).red()
            ),
            Self::Rejected(err) => format!("{}", style(format!("Error: {err}.")).yellow()),
            Self::Repeated(letter) => format!(
                "{}",
                style(format!("You've already guessed '{letter}'. Try another letter.")).yellow()
            ),
        }
    }
}

/// Returns the title banner followed by a rule.
pub(crate) fn banner() -> String {
    format!("{}\n{}\n", style(TITLE).bold().cyan(), rule('='))
}

/// Returns the instructions screen body.
pub(crate) fn instructions() -> String {
    format!(
        "{}\n\n{INSTRUCTIONS}\n\n{}\n",
        style("INSTRUCTIONS:").bold(),
        rule('=')
    )
}

/// Joins letters sorted alphabetically with a comma, for display.
fn listing(mut letters: Vec<char>) -> String {
    letters.sort_unstable();

    let mut output = String::new();
    for (idx, letter) in letters.into_iter().enumerate() {
        if idx > 0 {
            output.push_str(", ");
        }
        output.push(letter);
    }

    output
}

/// Returns a horizontal rule made of the given character.
fn rule(fill: char) -> String {
    String::from(fill).repeat(RULE_WIDTH)
}

/// Returns the panel describing the state of a round: the gallows, the masked word, the letters
/// guessed so far and the attempts left.
pub(crate) fn state(game: &Game) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", game.render_progress_art())?;
    writeln!(output, "\nWord: {}\n", style(game.render_masked()).bold())?;

    if !game.guessed_letters().is_empty() {
        writeln!(
            output,
            "Letters guessed: {}",
            listing(game.guessed_letters().to_vec())
        )?;
    }

    let correct = game.correct_guesses();
    if !correct.is_empty() {
        writeln!(output, "Correct guesses: {}", style(listing(correct)).green())?;
    }

    let incorrect = game.incorrect_guesses();
    if !incorrect.is_empty() {
        writeln!(output, "Incorrect guesses: {}", style(listing(incorrect)).red())?;
    }

    writeln!(
        output,
        "\nRemaining attempts: {}\n{}",
        style(game.remaining_attempts()).bold(),
        rule('-')
    )?;

    Ok(output)
}

/// Returns the closing line of a finished round, or `None` if the round is still being played.
pub(crate) fn verdict(game: &Game) -> Option<String> {
    let won = game.result()?;
    let word = game.target();

    let line = if won {
        format!(
            "{}",
            style(format!("Congratulations! You've guessed the word: {word}"))
                .bold()
                .green()
        )
    } else {
        format!(
            "{}",
            style(format!("Game over! The word was: {word}")).bold().red()
        )
    };

    Some(line)
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;

    /// Drops the styling so the text can be compared.
    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    /// Starts a game on `word` and guesses each of `letters` in order.
    fn game_after(word: &str, letters: &str) -> Game {
        let mut game = Game::new(word).expect("valid word");
        for letter in letters.chars() {
            let _ = game.guess(&letter.to_string()).expect("valid letter");
        }
        game
    }

    #[test]
    fn listing_sorts_letters() {
        assert_eq!(listing(vec!['t', 'a', 'c']), "a, c, t", "sorted");
        assert_eq!(listing(Vec::new()), "", "empty");
    }

    #[test]
    fn fresh_state_hides_empty_sections() {
        let panel = plain(&state(&game_after("cat", "")).expect("formatting"));

        assert!(panel.contains("Word: _ _ _"), "masked word: {panel}");
        assert!(panel.contains("Remaining attempts: 6"), "attempts: {panel}");
        assert!(!panel.contains("Letters guessed"), "no guesses yet: {panel}");
    }

    #[test]
    fn state_lists_guesses_sorted() {
        let panel = plain(&state(&game_after("cat", "tzca")).expect("formatting"));

        assert!(panel.contains("Word: c a t"), "revealed: {panel}");
        assert!(panel.contains("Letters guessed: a, c, t, z"), "all: {panel}");
        assert!(panel.contains("Correct guesses: a, c, t"), "hits: {panel}");
        assert!(panel.contains("Incorrect guesses: z"), "misses: {panel}");
        assert!(panel.contains("Remaining attempts: 5"), "attempts: {panel}");
    }

    #[test]
    fn verdict_only_when_over() {
        assert_eq!(verdict(&game_after("cat", "ca")), None, "in progress");

        let won = verdict(&game_after("cat", "cat")).expect("finished");
        assert!(plain(&won).contains("guessed the word: cat"), "won: {won}");

        let lost = verdict(&game_after("cat", "bdefgh")).expect("finished");
        assert!(plain(&lost).contains("The word was: cat"), "lost: {lost}");
    }

    #[test]
    fn feedback_lines() {
        assert_eq!(
            plain(&Feedback::Miss('z').message()),
            "Sorry, 'z' is not in the word.",
            "miss"
        );
        assert_eq!(
            plain(&Feedback::Rejected(GuessError::Length(2)).message()),
            "Error: a guess must be a single letter, got 2 characters.",
            "rejected"
        );
    }
}
