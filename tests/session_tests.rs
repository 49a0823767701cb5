//! Session state machine tests driven through the public API.

use blockfall::core::{Phase, Piece, Session};
use blockfall::types::{Command, BASE_DROP_MS, SPAWN_POSITION};

/// Row the active piece would rest on if it fell straight down.
fn landing_y(session: &Session) -> i8 {
    let piece = session.active();
    (1..)
        .map(|dy| piece.moved(0, dy))
        .take_while(|p| session.board().is_valid_position(p))
        .last()
        .map_or(piece.y(), |p| p.y())
}

#[test]
fn test_new_session_defaults() {
    let session = Session::new(Some(42));
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.level(), 1);
    assert_eq!(session.drop_interval_ms(), BASE_DROP_MS);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.pieces_locked(), 0);
    assert_eq!(session.board().filled_count(), 0);
    assert_eq!(session.active(), Piece::spawn(session.active().kind()));
    assert_eq!(session.active().position(), SPAWN_POSITION);
}

#[test]
fn test_next_kind_becomes_active_after_lock() {
    let mut session = Session::new(Some(9));
    for _ in 0..20 {
        let upcoming = session.next_kind();
        session.on_command(Command::HardDrop);
        if session.is_game_over() {
            break;
        }
        assert_eq!(session.active().kind(), upcoming);
        assert_eq!(session.active().position(), SPAWN_POSITION);
    }
}

#[test]
fn test_hard_drop_until_game_over() {
    let mut session = Session::new(Some(42));
    let mut last_score = 0;
    let mut drops = 0;

    while !session.is_game_over() && drops < 10_000 {
        session.on_command(Command::HardDrop);
        drops += 1;
        assert!(session.score() >= last_score);
        last_score = session.score();
    }

    assert!(session.is_game_over(), "no game over after {drops} drops");
    assert_eq!(session.pieces_locked(), drops);
}

#[test]
fn test_game_over_freezes_state() {
    let mut session = Session::new(Some(42));
    while !session.is_game_over() {
        session.on_command(Command::HardDrop);
    }
    let frozen = session.snapshot();
    assert!(frozen.game_over());

    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::RotateCw,
        Command::HardDrop,
    ] {
        assert!(!session.on_command(command));
    }
    assert!(!session.on_tick());
    assert_eq!(session.snapshot(), frozen);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Command::MoveLeft,
        Command::RotateCw,
        Command::HardDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
        Command::RotateCw,
        Command::RotateCw,
        Command::HardDrop,
    ];

    let mut a = Session::new(Some(2024));
    let mut b = Session::new(Some(2024));
    for round in 0..30 {
        for &command in &script {
            a.on_command(command);
            b.on_command(command);
        }
        if round % 3 == 0 {
            a.on_tick();
            b.on_tick();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_gravity_ticks_until_lock() {
    let mut session = Session::new(Some(5));
    let start_y = session.active().y();
    let target_y = landing_y(&session);
    let fall = (target_y - start_y) as u32;

    for _ in 0..fall {
        assert!(session.on_tick());
        assert_eq!(session.pieces_locked(), 0);
    }
    assert_eq!(session.active().y(), target_y);
    assert!(session.take_last_event().is_none());

    session.on_tick();
    assert_eq!(session.pieces_locked(), 1);
    let event = session.take_last_event().expect("lock event");
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(event.score_delta, 0);
    assert!(!event.game_over);
    assert!(session.take_last_event().is_none());
}

#[test]
fn test_soft_drop_does_not_lock() {
    let mut session = Session::new(Some(5));
    let target_y = landing_y(&session);
    while session.active().y() < target_y {
        assert!(session.on_command(Command::SoftDrop));
    }
    assert!(!session.on_command(Command::SoftDrop));
    assert_eq!(session.pieces_locked(), 0);
}

#[test]
fn test_snapshot_reflects_session() {
    let mut session = Session::new(Some(77));
    session.on_command(Command::HardDrop);
    let snap = session.snapshot();

    assert_eq!(snap.next, session.next_kind());
    assert_eq!(snap.score, session.score());
    assert_eq!(snap.pieces_locked, 1);
    let active = snap.active.expect("active piece");
    assert_eq!(active.kind, session.active().kind());
    assert_eq!(active.cells, session.active().cells());
    assert_eq!(snap.board.iter().flatten().filter(|&&v| v != 0).count(), 4);
}
