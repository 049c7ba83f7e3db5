//! Tests for session bookkeeping and outcome derivation.

use hangman_core::{GameConfig, GuessRecord, Outcome, SessionState};

fn session() -> SessionState {
    let config = GameConfig::new("Ada Lovelace", 6).expect("valid config");
    SessionState::new(&config)
}

#[test]
fn test_single_letter_hit_keeps_session_ongoing() {
    let mut session = session();
    assert_eq!(session.record_guess("a"), GuessRecord::Hit);
    assert!(session.guesses().contains("a"));
    assert_eq!(session.incorrect(), 0);
    assert_eq!(session.outcome(), Outcome::Ongoing);
    assert!(session.reveal().mask().starts_with(" A "));
}

#[test]
fn test_six_misses_lose() {
    let mut session = session();
    for n in 1..=5 {
        assert_eq!(session.record_guess("z"), GuessRecord::Miss);
        assert_eq!(session.incorrect(), n);
        assert_eq!(session.outcome(), Outcome::Ongoing);
    }
    assert_eq!(session.record_guess("z"), GuessRecord::Miss);
    assert_eq!(session.incorrect(), 6);
    assert_eq!(session.outcome(), Outcome::Lost);
    assert_eq!(session.remaining(), 0);
}

#[test]
fn test_lost_session_rejects_further_guesses() {
    let mut session = session();
    for _ in 0..6 {
        session.record_guess("q");
    }
    assert_eq!(session.record_guess("z"), GuessRecord::Rejected);
    assert_eq!(session.record_guess("a"), GuessRecord::Rejected);
    assert_eq!(session.incorrect(), 6);
    assert!(session.guesses().is_empty());
    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_incorrect_count_never_exceeds_max() {
    let mut session = session();
    for _ in 0..50 {
        session.record_guess("x");
        assert!(session.incorrect() <= session.max_chances());
    }
    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_whole_phrase_wins_in_one_submission() {
    let mut session = session();
    session.record_guess("z");
    session.record_guess("q");
    assert_eq!(session.record_guess("ada lovelace"), GuessRecord::Hit);
    assert_eq!(session.outcome(), Outcome::Won);
    assert!(session.reveal().is_fully_revealed());
    assert_eq!(session.incorrect(), 2);
}

#[test]
fn test_letter_by_letter_win() {
    let mut session = session();
    for letter in ["a", "d", "l", "o", "v", "e"] {
        session.record_guess(letter);
        assert_eq!(session.outcome(), Outcome::Ongoing);
    }
    session.record_guess("C");
    assert_eq!(session.outcome(), Outcome::Won);
}

#[test]
fn test_won_session_rejects_guesses() {
    let mut session = session();
    session.record_guess("Ada Lovelace");
    assert_eq!(session.record_guess("z"), GuessRecord::Rejected);
    assert_eq!(session.incorrect(), 0);
    assert_eq!(session.outcome(), Outcome::Won);
}

#[test]
fn test_repeated_correct_guess_is_idempotent() {
    let mut session = session();
    session.record_guess("a");
    let guesses = session.guesses().clone();
    let outcome = session.outcome();

    assert_eq!(session.record_guess("a"), GuessRecord::Repeat);
    assert_eq!(session.guesses(), &guesses);
    assert_eq!(session.outcome(), outcome);
    assert_eq!(session.incorrect(), 0);
}

#[test]
fn test_empty_guess_ignored() {
    let mut session = session();
    assert_eq!(session.record_guess(""), GuessRecord::Ignored);
    assert!(session.guesses().is_empty());
    assert_eq!(session.incorrect(), 0);
}

#[test]
fn test_reset_clears_everything() {
    let mut session = session();
    session.record_guess("a");
    for _ in 0..6 {
        session.record_guess("z");
    }
    assert_eq!(session.outcome(), Outcome::Lost);

    session.reset();
    assert!(session.guesses().is_empty());
    assert_eq!(session.incorrect(), 0);
    assert_eq!(session.outcome(), Outcome::Ongoing);
    assert_eq!(session.record_guess("d"), GuessRecord::Hit);
}

#[test]
fn test_single_chance_loses_on_first_miss() {
    let config = GameConfig::new("pi", 1).unwrap();
    let mut session = SessionState::new(&config);
    session.record_guess("e");
    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_guess_differing_only_in_case_is_repeat() {
    let mut session = session();
    assert_eq!(session.record_guess("a"), GuessRecord::Hit);
    assert_eq!(session.record_guess("A"), GuessRecord::Repeat);
    assert_eq!(session.guesses().len(), 1);

    assert_eq!(session.record_guess("LOVE"), GuessRecord::Hit);
    assert_eq!(session.record_guess("love"), GuessRecord::Repeat);
    assert!(session.guesses().contains("love"));
    assert_eq!(session.guesses().len(), 2);
    assert_eq!(session.incorrect(), 0);
}

#[test]
fn test_large_budget_beyond_u8() {
    let config = GameConfig::new("Ada Lovelace", 300).expect("valid config");
    let mut session = SessionState::new(&config);
    for _ in 0..299 {
        assert_eq!(session.record_guess("z"), GuessRecord::Miss);
    }
    assert_eq!(session.outcome(), Outcome::Ongoing);
    assert_eq!(session.record_guess("z"), GuessRecord::Miss);
    assert_eq!(session.incorrect(), 300);
    assert_eq!(session.outcome(), Outcome::Lost);
}
