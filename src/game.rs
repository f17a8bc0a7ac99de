//! The game module contains the interactive parts of the game, except for input handling.
//!
//! It contains the `init()` function to parse the command line, set up logging and run the game
//! loop, as well as the loop for a single round.

use std::io;
use std::num::NonZeroU8;

use anyhow::{Error, Result};
use clap::Parser;
use console::Term;
use fastrand::Rng;
use regex::Regex;
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

use crate::engine::{parse_letter, Game};
use crate::input::{take_guess, take_repeat, REPEAT_PATTERN};
use crate::messages::{banner, instructions, state, verdict, Feedback};
use crate::words::{Catalog, WordSource};

/// This struct holds the command-line arguments, parsed with clap's derive attribute. Every option
/// can also be set through an environment variable.
#[derive(Parser, Debug)]
#[command(name = "hangman", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of wrong guesses allowed before the round is lost.
    ///
    /// The gallows is scaled to fit budgets other than the default six.
    #[arg(short, long, default_value = "6")]
    #[arg(env = "HANGMAN_ATTEMPTS", value_name = "COUNT")]
    attempts: NonZeroU8,
    /// Skip the instructions screen and start playing straight away.
    #[arg(short, long)]
    #[arg(env = "HANGMAN_QUICK")]
    quick: bool,
    /// The seed for picking words, to replay the same sequence of rounds.
    #[arg(short, long)]
    #[arg(env = "HANGMAN_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// Parses the command line, sets up logging and runs rounds until the player is done. This is a
/// `main()` function of sorts though it is still called from main.rs.
///
/// Pressing Ctrl+C at any prompt ends the game cleanly instead of reporting an error.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `regex::Error`
/// - `io::Error`
/// - `dialoguer::Error`
/// - `hangman::WordError`
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let term = Term::stdout();

    match session(&term, &cli) {
        Err(err) if is_interrupt(&err) => {
            info!("interrupted by the player");
            term.show_cursor()?;
            term.clear_screen()?;
            term.write_line("Game interrupted. Goodbye!")?;
            Ok(())
        }
        other => other,
    }
}

/// Checks whether an error comes from the player interrupting a prompt with Ctrl+C, whether it
/// was reported by the terminal directly or wrapped by `dialoguer`.
fn is_interrupt(err: &Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
    })
}

/// Shows the intro, then plays rounds until the player says they are done.
fn session(term: &Term, cli: &Cli) -> Result<()> {
    let rng = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    let mut source = Catalog::builtin(rng);
    let repeat_re = Regex::new(REPEAT_PATTERN)?;

    info!(attempts = cli.attempts.get(), seed = ?cli.seed, "starting hangman");
    debug!(words = source.words().len(), "catalog ready");

    // show the init message
    init_message(term, cli.quick)?;

    // game loop
    loop {
        let won = play_round(term, &mut source, cli.attempts)?;
        info!(won, "round finished");

        if !take_repeat(term, &repeat_re)? {
            break;
        }
    }

    term.clear_screen()?;
    term.write_line(&banner())?;
    term.write_line("Thank you for playing Hangman! Goodbye!")?;
    Ok(())
}

/// Sets up the tracing subscriber. Logs go to standard error so they never end up mixed into the
/// game screen, and only warnings are shown unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// This function shows the title and, unless asked to skip it, the instructions, then waits for
/// the player to be ready. The title of the console window is also set to the name of the game.
fn init_message(term: &Term, quick: bool) -> Result<()> {
    term.clear_screen()?;
    term.set_title("hangman");
    term.write_line(&banner())?;

    if !quick {
        term.write_line(&instructions())?;
        term.write_str("Press Enter to start the game...")?;
        let _ = term.read_line()?;
    }

    Ok(())
}

/// Plays one round against a fresh word from the source, returning whether the player won.
///
/// Every turn redraws the screen with the state of the round and the feedback for the previous
/// guess, then asks for the next letter until the round is over.
fn play_round<S: WordSource>(term: &Term, source: &mut S, attempts: NonZeroU8) -> Result<bool> {
    let mut game = Game::with_attempts(source.next_word(), attempts)?;
    let mut feedback: Option<Feedback> = None;

    debug!(letters = game.target().chars().count(), "round started");
    trace!(word = game.target(), "target picked");

    while !game.is_over() {
        draw(term, &game, feedback)?;

        let input = take_guess(term)?;
        let next = turn(&mut game, &input);
        feedback = Some(next);
    }

    draw(term, &game, None)?;
    if let Some(line) = verdict(&game) {
        term.write_line(&line)?;
    }

    Ok(game.result().unwrap_or_default())
}

/// Clears the screen and draws the banner, the state of the round and the optional feedback line.
fn draw(term: &Term, game: &Game, feedback: Option<Feedback>) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&banner())?;
    term.write_line(&state(game)?)?;

    if let Some(feedback) = feedback {
        term.write_line(&feedback.message())?;
    }

    Ok(())
}

/// Applies a single guess to the game and describes what happened.
fn turn(game: &mut Game, input: &str) -> Feedback {
    let letter = match parse_letter(input) {
        Ok(letter) => letter,
        Err(err) => {
            debug!(%err, "guess rejected");
            return Feedback::Rejected(err);
        }
    };

    match game.guess(input) {
        Ok(true) if game.reveals(letter) => Feedback::Hit(letter),
        Ok(true) => Feedback::Miss(letter),
        Ok(false) => Feedback::Repeated(letter),
        Err(err) => Feedback::Rejected(err),
    }
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;
    use crate::engine::{GuessError, WordError};
    use crate::words::Fixed;

    #[test]
    fn ctrl_c_is_told_apart_from_other_errors() {
        let interrupted = || io::Error::new(io::ErrorKind::Interrupted, "read interrupted");

        assert!(is_interrupt(&Error::new(interrupted())), "from the terminal");
        assert!(
            is_interrupt(&Error::new(dialoguer::Error::from(interrupted()))),
            "from a prompt"
        );
        assert!(
            is_interrupt(&Error::new(interrupted()).context("taking a guess")),
            "behind context"
        );

        let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        assert!(!is_interrupt(&Error::new(closed)), "other io errors");
        assert!(!is_interrupt(&Error::new(WordError::Empty)), "game errors");
    }

    #[test]
    fn turns_describe_each_outcome() {
        let mut game = Game::new("cat").expect("valid word");

        assert_eq!(turn(&mut game, "C"), Feedback::Hit('c'), "hit");
        assert_eq!(turn(&mut game, "q"), Feedback::Miss('q'), "miss");
        assert_eq!(turn(&mut game, "c"), Feedback::Repeated('c'), "repeat");
        assert_eq!(
            turn(&mut game, "ab"),
            Feedback::Rejected(GuessError::Length(2)),
            "rejected"
        );
        assert_eq!(game.remaining_attempts(), 5, "only the miss cost anything");
    }

    #[test]
    fn turns_drive_a_round_to_the_end() {
        let mut source = Fixed::new("dog");
        let mut game =
            Game::with_attempts(source.next_word(), NonZeroU8::MIN).expect("valid word");

        assert_eq!(turn(&mut game, "d"), Feedback::Hit('d'), "hit");
        assert_eq!(turn(&mut game, "x"), Feedback::Miss('x'), "miss");
        assert!(game.is_over(), "a single miss ends the round");
        assert_eq!(game.result(), Some(false), "lost");
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["hangman"]).expect("no arguments needed");
        assert_eq!(cli.attempts.get(), 6, "default budget");
        assert!(!cli.quick, "instructions shown");
    }

    #[test]
    fn cli_rejects_zero_attempts() {
        assert!(
            Cli::try_parse_from(["hangman", "--attempts", "0"]).is_err(),
            "a round needs at least one attempt"
        );
        let cli = Cli::try_parse_from(["hangman", "-a", "3", "--seed", "9"]).expect("valid");
        assert_eq!(cli.attempts.get(), 3, "custom budget");
        assert_eq!(cli.seed, Some(9), "seed");
    }
}
