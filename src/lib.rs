//! The library components of the game. They hold the rules of a round of hangman, the sources of
//! words to guess, and the console front end that plays rounds until the player is done.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! rules themselves live in engine.rs and don't depend on the terminal at all.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod art;
mod engine;
mod game;
mod input;
mod messages;
mod words;

pub use engine::{parse_letter, Game, GuessError, WordError, DEFAULT_ATTEMPTS, PLACEHOLDER};
pub use game::init;
pub use words::{Catalog, CatalogError, Fixed, WordSource, BUILTIN};
