use std::collections::HashSet;

use tui_snake::core::{
    Collision, GameConfig, HeldKeys, MemoryRecorder, PaceController, Session, SimpleRng, SnakeColors,
    TickOutcome,
};
use tui_snake::types::{Direction, GameStatus, InputEvent, LogicalKey, Pos};

fn layout(snake: &[Pos], dir: Direction, food: &[Pos]) -> Session {
    layout_with(GameConfig::default(), snake, dir, food)
}

fn layout_with(config: GameConfig, snake: &[Pos], dir: Direction, food: &[Pos]) -> Session {
    Session::with_layout(config, &SnakeColors::default(), 42, snake, dir, food).unwrap()
}

fn down(key: LogicalKey) -> InputEvent {
    InputEvent::KeyDown(key)
}

fn assert_invariants(s: &Session) {
    let (w, h) = s.grid_size();
    let cells = s.snake_cells();
    let unique: HashSet<Pos> = cells.iter().copied().collect();
    assert_eq!(unique.len(), cells.len(), "snake overlaps itself: {cells:?}");
    for c in &cells {
        assert!(c.in_bounds(w, h), "snake out of bounds: {c:?}");
    }
    for pair in cells.windows(2) {
        let d = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(d, 1, "segments not adjacent: {pair:?}");
    }

    let food: HashSet<Pos> = s.food().iter().copied().collect();
    assert_eq!(food.len(), s.food().len(), "duplicate food");
    for f in s.food() {
        assert!(f.in_bounds(w, h));
        assert!(!unique.contains(f), "food under snake: {f:?}");
    }
    assert!(s.food().len() <= s.target_food_count());
}

#[test]
fn scenario_a_eating_grows_scores_and_replenishes() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(10, 7)], Direction::Right, &[Pos::new(11, 7)]);

    assert_eq!(s.step(&mut rec), Some(TickOutcome::Ate));
    assert_eq!(s.score(), 10);
    assert_eq!(s.snake_cells(), vec![Pos::new(11, 7), Pos::new(10, 7)]);
    assert!(!s.food().contains(&Pos::new(11, 7)));
    assert_eq!(s.food().len(), s.target_food_count());
    assert_eq!(s.food().len(), 5);
    assert_invariants(&s);
}

#[test]
fn scenario_b_reverse_input_is_ignored() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(5, 5), Pos::new(4, 5)], Direction::Right, &[]);

    s.handle_event(down(LogicalKey::Left));
    assert_eq!(s.pending_direction(), Direction::Right);
    assert_eq!(s.step(&mut rec), Some(TickOutcome::Moved));
    assert_eq!(s.snake_cells(), vec![Pos::new(6, 5), Pos::new(5, 5)]);
}

#[test]
fn scenario_c_only_current_body_is_checked() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(
        &[Pos::new(3, 5), Pos::new(3, 4), Pos::new(3, 3)],
        Direction::Down,
        &[],
    );
    assert_eq!(s.step(&mut rec), Some(TickOutcome::Moved));
    assert_eq!(s.status(), GameStatus::Playing);
    assert_eq!(
        s.snake_cells(),
        vec![Pos::new(3, 6), Pos::new(3, 5), Pos::new(3, 4)]
    );
}

#[test]
fn scenario_d_wall_ends_game_and_records_once() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(
        &[Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)],
        Direction::Left,
        &[],
    );
    assert_eq!(s.step(&mut rec), Some(TickOutcome::GameOver(Collision::Wall)));
    assert_eq!(s.status(), GameStatus::GameOver);
    assert_eq!(rec.recorded, vec![0]);

    // Terminal state is absorbing.
    for _ in 0..5 {
        assert_eq!(s.step(&mut rec), None);
        assert_eq!(s.update(10_000, &mut rec), None);
    }
    assert_eq!(rec.recorded, vec![0]);
    assert_eq!(s.snake_cells()[0], Pos::new(0, 2));
}

#[test]
fn scenario_e_held_direction_selects_fast_interval() {
    let mut held = HeldKeys::new();
    let pace = PaceController::new(300, 100);
    assert_eq!(pace.interval_ms(&held), 300);

    held.press(LogicalKey::Pause);
    assert_eq!(pace.interval_ms(&held), 300);

    held.press(LogicalKey::Up);
    assert_eq!(pace.interval_ms(&held), 100);

    held.release(LogicalKey::Up);
    assert_eq!(pace.interval_ms(&held), 300);
}

#[test]
fn update_paces_ticks_by_held_keys() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(2, 2)], Direction::Right, &[]);

    assert_eq!(s.update(1_000, &mut rec), None);
    assert_eq!(s.update(1_299, &mut rec), None);
    assert_eq!(s.update(1_300, &mut rec), Some(TickOutcome::Moved));

    s.handle_event(down(LogicalKey::Right));
    assert!(s.is_accelerating());
    assert_eq!(s.update(1_399, &mut rec), None);
    assert_eq!(s.update(1_400, &mut rec), Some(TickOutcome::Moved));

    s.handle_event(InputEvent::KeyUp(LogicalKey::Right));
    assert!(!s.is_accelerating());
    assert_eq!(s.update(1_600, &mut rec), None);
    assert_eq!(s.update(1_700, &mut rec), Some(TickOutcome::Moved));
    assert_eq!(s.snake_cells()[0], Pos::new(5, 2));
}

#[test]
fn long_stall_produces_a_single_tick() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(2, 2)], Direction::Right, &[]);
    s.update(0, &mut rec);
    assert_eq!(s.update(5_000, &mut rec), Some(TickOutcome::Moved));
    assert_eq!(s.update(5_001, &mut rec), None);
    assert_eq!(s.snake_cells()[0], Pos::new(3, 2));
}

#[test]
fn victory_at_configured_length() {
    let config = GameConfig {
        victory_length: 3,
        ..GameConfig::default()
    };
    let mut rec = MemoryRecorder::default();
    let mut s = layout_with(config, &[Pos::new(5, 5), Pos::new(4, 5)], Direction::Right, &[Pos::new(6, 5)]);

    assert_eq!(s.step(&mut rec), Some(TickOutcome::Victory));
    assert_eq!(s.status(), GameStatus::Victory);
    assert_eq!(s.snake().len(), 3);
    assert_eq!(rec.recorded, vec![10]);
    assert!(s.new_record());

    assert_eq!(s.step(&mut rec), None);
    assert_eq!(rec.recorded, vec![10]);

    s.handle_event(down(LogicalKey::Confirm));
    assert_eq!(s.status(), GameStatus::Playing);
    assert_eq!(s.score(), 0);
    assert!(!s.new_record());
}

#[test]
fn paused_session_ignores_ticks_and_resumes() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(5, 5)], Direction::Right, &[]);
    s.update(0, &mut rec);

    s.handle_event(down(LogicalKey::Pause));
    assert_eq!(s.status(), GameStatus::Paused);
    assert_eq!(s.update(10_000, &mut rec), None);

    s.handle_event(down(LogicalKey::Pause));
    assert_eq!(s.status(), GameStatus::Playing);
    assert_eq!(s.snake_cells(), vec![Pos::new(5, 5)]);
}

#[test]
fn terminal_state_only_accepts_confirm_menu_and_fullscreen() {
    let mut rec = MemoryRecorder::default();
    let mut s = layout(&[Pos::new(0, 0)], Direction::Up, &[]);
    s.step(&mut rec);
    assert_eq!(s.status(), GameStatus::GameOver);

    assert_eq!(s.handle_event(down(LogicalKey::Pause)), None);
    assert_eq!(s.status(), GameStatus::GameOver);
    assert_eq!(s.handle_event(down(LogicalKey::Left)), None);
    assert_eq!(
        s.handle_event(down(LogicalKey::ToggleFullscreen)),
        Some(tui_snake::core::SessionCommand::ToggleFullscreen)
    );
    assert_eq!(
        s.handle_event(down(LogicalKey::ReturnToMenu)),
        Some(tui_snake::core::SessionCommand::ExitToMenu)
    );
}

#[test]
fn every_wall_is_fatal() {
    let cases = [
        (Pos::new(0, 7), Direction::Left),
        (Pos::new(19, 7), Direction::Right),
        (Pos::new(10, 0), Direction::Up),
        (Pos::new(10, 14), Direction::Down),
    ];
    for (head, dir) in cases {
        let mut rec = MemoryRecorder::default();
        let mut s = layout(&[head], dir, &[]);
        assert_eq!(s.step(&mut rec), Some(TickOutcome::GameOver(Collision::Wall)), "{dir:?}");
    }
}

#[test]
fn food_stops_when_grid_is_full() {
    let s = Session::new(GameConfig::with_grid(2, 1), &SnakeColors::default(), 9).unwrap();
    assert_eq!(s.snake_cells(), vec![Pos::new(1, 0)]);
    assert_eq!(s.food(), &[Pos::new(0, 0)]);
}

#[test]
fn same_seed_same_session() {
    let a = Session::new(GameConfig::default(), &SnakeColors::default(), 2024).unwrap();
    let b = Session::new(GameConfig::default(), &SnakeColors::default(), 2024).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn random_play_keeps_invariants() {
    for seed in [1u32, 7, 99, 12345] {
        let mut rec = MemoryRecorder::default();
        let mut s = Session::new(GameConfig::default(), &SnakeColors::default(), seed).unwrap();
        let mut rng = SimpleRng::new(seed ^ 0xdead_beef);
        let mut finished = 0;

        for _ in 0..3_000 {
            let dir = Direction::ALL[rng.next_range(4) as usize];
            s.queue_direction(dir);
            match s.step(&mut rec) {
                Some(TickOutcome::GameOver(_)) | Some(TickOutcome::Victory) => {
                    finished += 1;
                    assert_eq!(s.score() as usize, (s.snake().len() - 1) * 10);
                    assert_invariants(&s);
                    s.handle_event(down(LogicalKey::Confirm));
                }
                Some(_) => {
                    assert_eq!(s.score() as usize, (s.snake().len() - 1) * 10);
                }
                None => panic!("step on a playing session must advance"),
            }
            assert_invariants(&s);
        }
        assert_eq!(rec.recorded.len(), finished);
    }
}
