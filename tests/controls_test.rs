//! Tests for buttons and the guess text box.

use crossterm::event::KeyCode;
use hangman_core::{GameConfig, GuessRecord, SessionState};
use mathematician_hangman::{
    Button, FrameInput, InputState, InteractiveControl, Presentation, ScreenId, TextEvent,
    TextInput, dispatch,
};
use ratatui::layout::{Position, Rect};

fn session() -> SessionState {
    SessionState::new(&GameConfig::new("Ada Lovelace", 6).expect("valid config"))
}

fn quit_button() -> Button {
    let mut button = Button::new("Quit", ScreenId::Quit);
    button.set_region(Rect::new(10, 5, 8, 3));
    button
}

#[test]
fn test_button_release_inside_returns_action_once() {
    let mut button = quit_button();
    assert_eq!(button.update(Position::new(12, 6), true), Some(ScreenId::Quit));
    assert_eq!(button.update(Position::new(12, 6), false), None);
}

#[test]
fn test_button_release_outside_does_nothing() {
    let mut button = quit_button();
    assert_eq!(button.update(Position::new(0, 0), true), None);
    assert_eq!(button.update(Position::new(18, 6), true), None);
    assert!(!*button.hovered());
}

#[test]
fn test_button_hover_selects_emphasized_variant() {
    let mut button = quit_button();
    assert_eq!(button.presentation(), Presentation::Default);

    button.update(Position::new(10, 5), false);
    assert!(*button.hovered());
    assert_eq!(button.presentation(), Presentation::Emphasized);

    button.update(Position::new(40, 5), false);
    assert_eq!(button.presentation(), Presentation::Default);
}

#[test]
fn test_button_without_layout_is_never_hit() {
    let mut button = Button::new("Start", ScreenId::Playing);
    assert_eq!(button.update(Position::new(0, 0), true), None);
}

#[test]
fn test_button_shortcut_activates() {
    let mut button = quit_button().with_shortcut(KeyCode::Esc);
    let mut session = session();
    assert_eq!(
        button.apply(&FrameInput::key(KeyCode::Esc), &mut session),
        Some(ScreenId::Quit)
    );
    assert_eq!(button.apply(&FrameInput::key(KeyCode::Tab), &mut session), None);
}

#[test]
fn test_button_preferred_size() {
    let button = Button::new("Start", ScreenId::Playing);
    assert_eq!(button.preferred_width(), 9);
    assert_eq!(button.preferred_height(), 3);
}

#[test]
fn test_text_input_locks_after_one_character() {
    let mut input = TextInput::new();
    let mut session = session();

    input.handle(TextEvent::Enter('a'), &mut session);
    assert_eq!(input.buffer(), "a");
    assert_eq!(*input.state(), InputState::Locked);

    input.handle(TextEvent::Enter('b'), &mut session);
    assert_eq!(input.buffer(), "a");
}

#[test]
fn test_text_input_delete_unlocks() {
    let mut input = TextInput::new();
    let mut session = session();

    input.handle(TextEvent::Enter('x'), &mut session);
    input.handle(TextEvent::Delete, &mut session);
    assert_eq!(input.buffer(), "");
    assert_eq!(*input.state(), InputState::Typing);

    input.handle(TextEvent::Enter('d'), &mut session);
    assert_eq!(input.buffer(), "d");
}

#[test]
fn test_text_input_delete_on_empty_buffer() {
    let mut input = TextInput::new();
    let mut session = session();
    input.handle(TextEvent::Delete, &mut session);
    assert_eq!(input.buffer(), "");
    assert_eq!(*input.state(), InputState::Typing);
}

#[test]
fn test_text_input_submit_records_guess_and_clears() {
    let mut input = TextInput::new();
    let mut session = session();

    input.handle(TextEvent::Enter('a'), &mut session);
    let record = input.handle(TextEvent::Submit, &mut session);

    assert_eq!(record, Some(GuessRecord::Hit));
    assert!(session.guesses().contains("a"));
    assert_eq!(input.buffer(), "");
    assert_eq!(*input.state(), InputState::Typing);
}

#[test]
fn test_text_input_submit_miss_counts() {
    let mut input = TextInput::new();
    let mut session = session();

    input.handle(TextEvent::Enter('z'), &mut session);
    assert_eq!(input.handle(TextEvent::Submit, &mut session), Some(GuessRecord::Miss));
    assert_eq!(session.incorrect(), 1);
}

#[test]
fn test_text_input_empty_submit_is_noop() {
    let mut input = TextInput::new();
    let mut session = session();

    assert_eq!(input.handle(TextEvent::Submit, &mut session), None);
    assert_eq!(session.incorrect(), 0);
    assert!(session.guesses().is_empty());
    assert_eq!(*input.state(), InputState::Typing);
}

#[test]
fn test_text_input_applies_frame_events_in_order() {
    let mut input = TextInput::new();
    let mut session = session();
    let frame = FrameInput::typed([
        TextEvent::Enter('a'),
        TextEvent::Submit,
        TextEvent::Enter('z'),
        TextEvent::Submit,
    ]);

    assert_eq!(input.apply(&frame, &mut session), None);
    assert!(session.guesses().contains("a"));
    assert_eq!(session.incorrect(), 1);
}

#[test]
fn test_dispatch_first_action_wins() {
    let mut session = session();
    let mut first = Button::new("Start", ScreenId::Playing);
    first.set_region(Rect::new(0, 0, 10, 3));
    let mut second = Button::new("Quit", ScreenId::Quit);
    second.set_region(Rect::new(0, 0, 10, 3));

    let mut controls: [&mut dyn InteractiveControl; 2] = [&mut first, &mut second];
    assert_eq!(
        dispatch(&mut controls, &FrameInput::click(1, 1), &mut session),
        Some(ScreenId::Playing)
    );
}

#[test]
fn test_dispatch_feeds_text_before_button() {
    let mut session = session();
    let mut input = TextInput::new();
    let mut back = Button::new("Back", ScreenId::Title);
    back.set_region(Rect::new(0, 10, 10, 3));

    let frame = FrameInput {
        pointer: Position::new(2, 11),
        pointer_released: true,
        text: vec![TextEvent::Enter('d'), TextEvent::Submit],
        ..FrameInput::default()
    };
    let mut controls: [&mut dyn InteractiveControl; 2] = [&mut input, &mut back];
    assert_eq!(dispatch(&mut controls, &frame, &mut session), Some(ScreenId::Title));
    assert!(session.guesses().contains("d"));
}
