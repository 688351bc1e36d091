use tui_snake::core::GameEngine;
use tui_snake::types::{Direction, GamePhase, Key};

fn started() -> GameEngine {
    let mut e = GameEngine::new(4);
    e.handle_input(Key::Other);
    e
}

#[test]
fn reverse_into_neck_is_rejected() {
    let mut e = started();
    assert_eq!(e.direction(), Direction::Right);
    assert!(!e.handle_input(Key::Left));
    assert_eq!(e.pending_direction(), Direction::Right);
    e.tick();
    assert_eq!(e.direction(), Direction::Right);
}

#[test]
fn every_direction_rejects_only_its_opposite() {
    for dir in Direction::ALL {
        let mut e = started();
        // Turn to `dir` (two steps when it is the opposite of Right).
        if dir == Direction::Left {
            e.handle_input(Key::Down);
            e.tick();
        }
        e.handle_input(Key::from(dir));
        e.tick();
        assert_eq!(e.direction(), dir);

        for other in Direction::ALL {
            let mut probe = e.clone();
            let changed = probe.handle_input(Key::from(other));
            if other == dir.opposite() {
                assert!(!changed, "{dir:?} must reject {other:?}");
                assert_eq!(probe.pending_direction(), dir);
            } else if other != dir {
                assert!(changed, "{dir:?} must accept {other:?}");
                assert_eq!(probe.pending_direction(), other);
            }
        }
    }
}

#[test]
fn last_valid_key_before_tick_wins() {
    let mut e = started();
    e.handle_input(Key::Up);
    e.handle_input(Key::Down);
    e.tick();
    assert_eq!(e.direction(), Direction::Down);
}

#[test]
fn quick_double_turn_cannot_reverse() {
    let mut e = started();
    // Up is accepted as pending, but Left still reverses the committed Right.
    assert!(e.handle_input(Key::Up));
    assert!(!e.handle_input(Key::Left));
    e.tick();
    assert_eq!(e.direction(), Direction::Up);
    assert_eq!(e.phase(), GamePhase::Running);
}

#[test]
fn unknown_keys_are_noops() {
    let mut e = started();
    let before = e.snapshot();
    assert!(!e.handle_input(Key::Other));
    assert_eq!(e.snapshot(), before);
}
