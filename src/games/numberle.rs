//! Number guessing variant
//!
//! The target is a uniformly random integer below `10^length`, written with
//! leading zeros. Any digit string of the right length is a valid guess.

use super::SetupError;
use crate::core::{Alphabet, GameSession, Variant};
use rand::Rng;

pub const NAME: &str = "numberle";

/// Longest target whose range still fits in a `u64`
pub const MAX_LENGTH: usize = 19;

/// Number game variant: digits only, no word list
#[must_use]
pub fn variant() -> Variant {
    Variant::new(NAME, Alphabet::DIGITS)
}

/// Zero-pad `number` to `width` digits
#[must_use]
pub fn render(number: u64, width: usize) -> String {
    format!("{number:0width$}")
}

/// Draw a target of `length` digits, or `None` if the length is unsupported
pub fn select_target<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Option<String> {
    if length == 0 || length > MAX_LENGTH {
        return None;
    }

    let upper = 10u64.checked_pow(u32::try_from(length).ok()?)?;
    Some(render(rng.random_range(0..upper), length))
}

/// Start a number game with a random target
///
/// # Errors
///
/// Returns [`SetupError::UnsupportedLength`] for lengths outside
/// `1..=MAX_LENGTH`, or a session error for a zero guess limit.
pub fn new_game<R: Rng + ?Sized>(
    length: usize,
    guess_limit: Option<usize>,
    rng: &mut R,
) -> Result<GameSession, SetupError> {
    let target = select_target(length, rng).ok_or(SetupError::UnsupportedLength(length))?;
    Ok(GameSession::new(variant(), target, guess_limit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn render_fills_zeroes() {
        assert_eq!(render(1, 5), "00001");
        assert_eq!(render(0, 3), "000");
        assert_eq!(render(99_999, 5), "99999");
    }

    #[test]
    fn targets_have_requested_length() {
        let mut rng = StdRng::seed_from_u64(9);
        for length in [1, 3, 5, MAX_LENGTH] {
            for _ in 0..50 {
                let target = select_target(length, &mut rng).unwrap();
                assert_eq!(target.len(), length);
                assert!(Alphabet::DIGITS.contains_word(&target));
            }
        }
    }

    #[test]
    fn unsupported_lengths() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(select_target(0, &mut rng), None);
        assert_eq!(select_target(MAX_LENGTH + 1, &mut rng), None);
        assert!(matches!(
            new_game(0, Some(5), &mut rng),
            Err(SetupError::UnsupportedLength(0))
        ));
    }

    #[test]
    fn single_digit_targets_cover_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; 10];
        for _ in 0..500 {
            let target = select_target(1, &mut rng).unwrap();
            let digit = target.parse::<usize>().unwrap();
            seen[digit] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn accepts_any_digit_string() {
        let mut rng = StdRng::seed_from_u64(4);
        let game = new_game(5, Some(5), &mut rng).unwrap();

        assert!(game.is_valid_guess("97531"));
        assert!(game.is_valid_guess("00000"));
        assert!(!game.is_valid_guess("ABCDE"));
        assert!(!game.is_valid_guess("1234A"));
        assert!(!game.is_valid_guess("123"));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn lost_after_five_misses() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = new_game(2, Some(5), &mut rng).unwrap();

        let mut finished = false;
        let mut guesses = 0;
        // Guess numbers in order until the game ends either way
        for n in 0..100u64 {
            finished = game.submit_guess(&render(n, 2)).unwrap();
            guesses += 1;
            if finished {
                break;
            }
        }

        assert!(finished);
        assert!(guesses <= 5);
        if game.status() == GameStatus::Lost {
            assert_eq!(guesses, 5);
        }
    }
}
