//! Engine tests - lifecycle, input dispatch and the event queue

use std::sync::mpsc::channel;

use term_tetris::core::{GameState, MoveOutcome};
use term_tetris::input::InputSource;
use term_tetris::types::{InputEvent, SPAWN_X, SPAWN_Y};

#[test]
fn test_new_game_state() {
    let state = GameState::new(12345);

    assert!(!state.game_over());
    assert!(!state.paused());
    assert_eq!(state.score(), 0);
    assert_eq!(state.active().x, SPAWN_X);
    assert_eq!(state.active().y, SPAWN_Y);
    assert_eq!(state.active().rotation, 0);
}

#[test]
fn test_same_seed_same_pieces() {
    let a = GameState::new(777);
    let b = GameState::new(777);
    assert_eq!(a.active().kind, b.active().kind);
    assert_eq!(a.next_kind(), b.next_kind());
}

#[test]
fn test_soft_drop_moves_one_row() {
    let mut state = GameState::new(1);
    let y0 = state.active().y;

    assert!(state.apply_input(InputEvent::SoftDrop));
    assert_eq!(state.active().y, y0 + 1);
}

#[test]
fn test_gravity_tick_equals_soft_drop() {
    let mut a = GameState::new(9);
    let mut b = GameState::new(9);

    a.tick();
    b.apply_input(InputEvent::SoftDrop);
    assert_eq!(a.active(), b.active());
}

#[test]
fn test_hard_drop_locks_and_respawns() {
    let mut state = GameState::new(3);
    let kind = state.active().kind;

    assert!(state.apply_input(InputEvent::HardDrop));

    let locked = state
        .board()
        .cells()
        .iter()
        .filter(|c| **c == Some(kind))
        .count();
    assert!(locked >= 4);
    assert_eq!(state.active().y, SPAWN_Y);
    assert!(!state.game_over());
}

#[test]
fn test_piece_locks_into_exact_cells() {
    let mut state = GameState::new(4);
    let kind = state.active().kind;
    let piece_cells = loop {
        let before = state.active();
        match state.try_move(0, 1) {
            MoveOutcome::Moved => continue,
            MoveOutcome::Locked => break before.cells(),
            MoveOutcome::Blocked => panic!("downward move can only move or lock"),
        }
    };

    // No rows cleared on an empty board, so the board holds exactly the
    // cells the piece occupied when it came to rest.
    assert_eq!(state.score(), 0);
    for (x, y) in piece_cells {
        assert_eq!(state.board().get(x, y), Some(Some(kind)));
    }
    let locked = state
        .board()
        .cells()
        .iter()
        .filter(|c| c.is_some())
        .count();
    assert_eq!(locked, 4);
}

#[test]
fn test_pause_roundtrip() {
    let mut state = GameState::new(1);

    state.apply_input(InputEvent::TogglePause);
    assert!(state.paused());
    assert!(!state.tick());

    state.apply_input(InputEvent::TogglePause);
    assert!(!state.paused());
    assert!(state.tick());
}

#[test]
fn test_active_piece_never_invalid() {
    let mut state = GameState::new(2024);
    let inputs = [
        InputEvent::MoveLeft,
        InputEvent::SoftDrop,
        InputEvent::Rotate,
        InputEvent::MoveRight,
        InputEvent::MoveRight,
        InputEvent::HardDrop,
    ];

    for step in 0..600 {
        state.apply_input(inputs[step % inputs.len()]);
        state.tick();
        if state.game_over() {
            break;
        }
        let piece = state.active();
        assert!(
            state.board().can_place(&piece.shape(), piece.x, piece.y),
            "invalid piece position after step {}",
            step
        );
    }
}

#[test]
fn test_burst_of_events_applies_in_fifo_order() {
    let (tx, rx) = channel();
    let mut source = InputSource::from_receiver(rx);
    let mut state = GameState::new(1);
    let x0 = state.active().x;

    // Queue a burst before a single frame drain.
    tx.send(InputEvent::MoveLeft).unwrap();
    tx.send(InputEvent::MoveLeft).unwrap();
    tx.send(InputEvent::Rotate).unwrap();
    tx.send(InputEvent::MoveRight).unwrap();

    let mut applied = 0;
    while let Some(event) = source.poll_event() {
        state.apply_input(event);
        applied += 1;
    }

    // All four events were applied, not just the most recent one.
    assert_eq!(applied, 4);
    assert_eq!(state.active().x, x0 - 1);
}

#[test]
fn test_quit_event_stops_the_loop() {
    let (tx, rx) = channel();
    let mut source = InputSource::from_receiver(rx);
    let mut state = GameState::new(1);

    tx.send(InputEvent::MoveLeft).unwrap();
    tx.send(InputEvent::Quit).unwrap();
    tx.send(InputEvent::MoveRight).unwrap();

    let mut keep_running = true;
    while let Some(event) = source.poll_event() {
        if !state.apply_input(event) {
            keep_running = false;
            break;
        }
    }

    assert!(!keep_running);
    // The event after quit was never applied.
    assert_eq!(source.poll_event(), Some(InputEvent::MoveRight));
}

#[test]
fn test_snapshot_matches_engine_state() {
    let mut state = GameState::new(6);
    state.apply_input(InputEvent::SoftDrop);

    let snap = state.snapshot();
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.next, state.next_kind());
    assert_eq!(snap.paused, state.paused());
    assert_eq!(snap.game_over, state.game_over());

    let active = snap.active.expect("running game exposes the active piece");
    assert_eq!(active.kind, state.active().kind);
    assert_eq!(active.cells, state.active().cells());
}
