use std::time::Duration;

use common::{Direction, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use terminal::app::{App, AppCommand};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrow_keys_steer_the_snake() {
    let mut app = App::new(1);

    assert!(app.handle_input(key(KeyCode::Up)).is_none());
    assert_eq!(app.game.arena.snake.pending_direction, Direction::Up);

    assert!(app.handle_input(key(KeyCode::Down)).is_none());
    assert_eq!(app.game.arena.snake.pending_direction, Direction::Down);

    // Left is the reverse of the applied direction and must not stick
    assert!(app.handle_input(key(KeyCode::Left)).is_none());
    assert_eq!(app.game.arena.snake.pending_direction, Direction::Down);
}

#[test]
fn pause_and_quit_keys() {
    let mut app = App::new(2);

    assert!(app.handle_input(key(KeyCode::Char('p'))).is_none());
    assert_eq!(app.game.status, GameStatus::Paused);
    assert!(app.handle_input(key(KeyCode::Char('P'))).is_none());
    assert_eq!(app.game.status, GameStatus::Running);

    assert!(matches!(
        app.handle_input(key(KeyCode::Char('q'))),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_input(key(KeyCode::Esc)),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(AppCommand::Quit)
    ));
}

#[test]
fn restart_key_only_works_after_game_over() {
    let mut app = App::new(3);

    app.handle_input(key(KeyCode::Char('r')));
    assert_eq!(app.game.status, GameStatus::Running);
    assert_eq!(app.game.tick, 0);
}

#[test]
fn update_paces_ticks_to_the_configured_interval() {
    let mut app = App::new(4);

    // Short frames accumulate without stepping
    for _ in 0..5 {
        app.update(Duration::from_millis(16));
    }
    assert_eq!(app.game.tick, 0);

    // Crossing the interval applies exactly one step
    app.update(Duration::from_millis(30));
    assert_eq!(app.game.tick, 1);

    // A long stall still applies at most one step per call
    app.update(Duration::from_millis(1000));
    assert_eq!(app.game.tick, 2);
}
