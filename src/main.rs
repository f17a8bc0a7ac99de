//! # hangman
//!
//! This crate is the classic game of hangman, played in the terminal. A word is picked at random
//! from a built-in list, and you guess it one letter at a time before the gallows is complete.
//!
//! Every wrong letter draws another piece of the figure; letters you already tried cost nothing.
//! The number of wrong guesses allowed, and the seed used to pick words, can be set on the command
//! line or through environment variables. Run with `--help` for the details.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use hangman::init;

fn main() -> Result<()> {
    init()
}
