//! Gallows drawings, one per stage of the figure.

/// The empty gallows, before any wrong guess.
pub(crate) const EMPTY: &str = "
  +---+
  |   |
      |
      |
      |
      |
=========";

/// The complete figure, shown once the attempts have run out.
pub(crate) const HANGED: &str = r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========";

/// Every stage in drawing order.
const FRAMES: [&str; 7] = [
    EMPTY,
    "
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    HANGED,
];

/// Picks the drawing for `wrong` wrong guesses out of a budget of `max`.
///
/// Budgets other than six are scaled onto the seven stages, rounding up, so no wrong guesses always
/// gives the empty gallows, a spent budget always gives the complete figure, and the first wrong
/// guess always draws something.
pub(crate) fn frame(wrong: u8, max: u8) -> &'static str {
    let last = FRAMES.len() - 1;
    let wrong = usize::from(wrong.min(max));
    let max = usize::from(max.max(1));
    let stage = (wrong * last).div_ceil(max);

    FRAMES.get(stage).copied().unwrap_or(HANGED)
}

#[cfg(test)]
#[expect(
    clippy::missing_docs_in_private_items,
    reason = "Test names describe what each test checks."
)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_maps_one_to_one() {
        for (wrong, expected) in FRAMES.iter().enumerate() {
            let wrong = u8::try_from(wrong).expect("seven frames");
            assert_eq!(frame(wrong, 6), *expected, "stage {wrong}");
        }
    }

    #[test]
    fn bounds_hold_for_any_budget() {
        for max in 1..=u8::MAX {
            assert_eq!(frame(0, max), EMPTY, "nothing drawn for budget {max}");
            assert_eq!(frame(max, max), HANGED, "complete for budget {max}");
        }
    }

    #[test]
    fn first_miss_always_draws() {
        for max in 1..=u8::MAX {
            assert_ne!(frame(1, max), EMPTY, "budget {max}");
        }
    }

    #[test]
    fn small_budget_skips_stages() {
        assert_eq!(frame(1, 2), FRAMES[3], "half way");
        assert_eq!(frame(1, 1), HANGED, "single attempt");
    }
}
