//! End-to-end game scenarios through the public API

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordall::core::{
    Alphabet, AlphabetState, GameSession, GameStatus, LetterOutcome::*, SessionError, Variant,
};
use wordall::games::{self, GameOptions, VariantKind};
use wordall::wordlists::MemoryLoader;

const FRUIT: [&str; 6] = ["APPLE", "BREAD", "PALER", "POPOP", "MANGO", "LEMON"];

fn fruit_variant() -> Variant {
    let words = FRUIT.into_iter().map(String::from).collect();
    Variant::new("wordle", Alphabet::LETTERS).with_lexicon(words)
}

fn apple(limit: Option<usize>) -> GameSession {
    GameSession::new(fruit_variant(), "APPLE", limit).unwrap()
}

#[test]
fn paler_against_apple() {
    let mut game = apple(Some(6));
    assert!(!game.submit_guess("PALER").unwrap());

    assert_eq!(
        game.history()[0].outcomes(),
        &[
            ('P', Elsewhere),
            ('A', Elsewhere),
            ('L', Elsewhere),
            ('E', Elsewhere),
            ('R', Incorrect),
        ]
    );
}

#[test]
fn popop_against_apple() {
    let mut game = apple(Some(6));
    game.submit_guess("POPOP").unwrap();

    assert_eq!(
        game.history()[0].outcomes(),
        &[
            ('P', Elsewhere),
            ('O', Incorrect),
            ('P', Correct),
            ('O', Incorrect),
            ('P', Incorrect),
        ]
    );
    let knowledge = game.knowledge();
    assert_eq!(knowledge.get('P'), Some(AlphabetState::Found));
    assert_eq!(knowledge.get('O'), Some(AlphabetState::Unused));
}

#[test]
fn three_misses_lose_with_limit_three() {
    let mut game = apple(Some(3));

    for n in 1..=3 {
        assert_eq!(game.status(), GameStatus::InProgress);
        let finished = game.submit_guess("BREAD").unwrap();
        assert_eq!(finished, n == 3);
        assert_eq!(game.history().len(), n);
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.revealed_target(), Some("APPLE"));
    assert!(matches!(
        game.submit_guess("BREAD"),
        Err(SessionError::GameAlreadyFinished)
    ));
    assert_eq!(game.history().len(), 3);
}

#[test]
fn exact_guess_wins_at_once() {
    let mut game = apple(Some(6));
    assert!(game.submit_guess("APPLE").unwrap());

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.remaining_guesses(), Some(0));
}

#[test]
fn invalid_guesses_leave_the_session_alone() {
    let mut game = apple(Some(2));
    game.submit_guess("BREAD").unwrap();
    let before = game.knowledge().clone();

    for bad in ["GRAPE", "APPL", "APPLES", "4PPLE", ""] {
        assert!(matches!(
            game.submit_guess(bad),
            Err(SessionError::InvalidGuess(_))
        ));
    }

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.knowledge(), &before);
}

#[test]
fn seeded_wordle_game_from_dictionary() {
    let source: MemoryLoader = ["apple", "bread", "mango", "kiwi", "grapefruit"]
        .into_iter()
        .map(String::from)
        .collect();
    let options = GameOptions::default();

    let mut rng = StdRng::seed_from_u64(7);
    let mut game = games::new_game(&options, &source, &mut rng).unwrap();
    let target = {
        let mut probe = game.clone();
        // The only way to learn the target is to finish the game
        while !probe.is_finished() {
            probe.submit_guess("BREAD").unwrap();
        }
        probe.revealed_target().unwrap().to_string()
    };

    assert!(["APPLE", "BREAD", "MANGO"].contains(&target.as_str()));
    assert!(!game.is_valid_guess("KIWI"));
    assert!(game.submit_guess(&target).unwrap());

    let mut again = StdRng::seed_from_u64(7);
    let mut replay = games::new_game(&options, &source, &mut again).unwrap();
    assert!(replay.submit_guess(&target).unwrap());
}

#[test]
fn numberle_game_plays_to_a_loss() {
    let options = GameOptions::new(VariantKind::Numberle).with_word_length(4);
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = games::new_game(&options, &MemoryLoader::default(), &mut rng).unwrap();

    assert_eq!(game.guess_limit(), Some(5));
    assert!(!game.is_valid_guess("12a4"));

    let target = loop {
        if game.is_finished() {
            break game.revealed_target().unwrap().to_string();
        }
        let guess = if game.history().len() % 2 == 0 { "0000" } else { "9999" };
        game.submit_guess(guess).unwrap();
    };

    assert_eq!(target.len(), 4);
    assert!(target.chars().all(|c| c.is_ascii_digit()));
    if game.status() == GameStatus::Lost {
        assert_eq!(game.history().len(), 5);
    }
}

/// Transitions a symbol's state may take between two consecutive guesses
fn allowed(before: AlphabetState, after: AlphabetState) -> bool {
    use AlphabetState::{Found, FoundElsewhere, NotGuessed, Unused};
    before == after
        || matches!(
            (before, after),
            (NotGuessed, _) | (Unused | FoundElsewhere, Found)
        )
}

const SMALL: Alphabet = Alphabet::new("ABCDE");

proptest! {
    #[test]
    fn knowledge_only_moves_forward(
        target in "[A-E]{5}",
        guesses in prop::collection::vec("[A-E]{5}", 1..12),
    ) {
        let variant = Variant::new("letters", SMALL);
        let mut game = GameSession::new(variant, target.as_str(), None).unwrap();

        for guess in &guesses {
            if game.is_finished() {
                break;
            }
            let before = game.knowledge().clone();
            game.submit_guess(guess).unwrap();

            for (symbol, state) in game.knowledge().iter() {
                let old = before.get(symbol).unwrap();
                prop_assert!(
                    allowed(old, state),
                    "{symbol}: {old:?} -> {state:?} after {guess} against {target}"
                );
            }
        }
    }

    #[test]
    fn loses_exactly_on_the_limit(
        target in "[A-E]{4}",
        guesses in prop::collection::vec("[A-E]{4}", 1..10),
        limit in 1_usize..8,
    ) {
        let variant = Variant::new("letters", SMALL);
        let mut game = GameSession::new(variant, target.as_str(), Some(limit)).unwrap();

        for guess in &guesses {
            if game.is_finished() {
                prop_assert!(matches!(
                    game.submit_guess(guess),
                    Err(SessionError::GameAlreadyFinished)
                ));
                continue;
            }

            let finished = game.submit_guess(guess).unwrap();
            let used = game.history().len();
            prop_assert_eq!(finished, game.is_finished());
            match game.status() {
                GameStatus::Won => prop_assert_eq!(guess, &target),
                GameStatus::Lost => prop_assert_eq!(used, limit),
                GameStatus::InProgress => prop_assert!(used < limit),
            }
        }
    }
}
