use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{
    select_food_color, FoodSet, GameConfig, MemoryRecorder, Session, SimpleRng, Snake, SnakeColors,
};
use tui_snake::types::{Direction, Pos};

fn bench_step(c: &mut Criterion) {
    let mut rec = MemoryRecorder::default();
    let mut session = Session::new(GameConfig::default(), &SnakeColors::default(), 12345).unwrap();

    c.bench_function("session_step", |b| {
        b.iter(|| {
            if session.step(&mut rec).is_none() || session.status().is_terminal() {
                session.restart();
            }
            // Stay on the grid by circling.
            let next = match session.direction() {
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Up,
                Direction::Up => Direction::Right,
            };
            session.queue_direction(black_box(next));
        })
    });
}

fn bench_update_idle_frame(c: &mut Criterion) {
    let mut rec = MemoryRecorder::default();
    let mut session = Session::new(GameConfig::default(), &SnakeColors::default(), 12345).unwrap();
    session.update(0, &mut rec);

    c.bench_function("update_16ms_no_tick", |b| {
        b.iter(|| {
            // Same timestamp: pacing never fires.
            session.update(black_box(16), &mut rec);
        })
    });
}

fn bench_replenish_long_snake(c: &mut Criterion) {
    // Boustrophedon snake covering 10 rows.
    let mut cells = Vec::new();
    for y in 0..10 {
        for i in 0..20 {
            let x = if y % 2 == 0 { i } else { 19 - i };
            cells.push(Pos::new(x, y));
        }
    }
    cells.reverse();
    let snake = Snake::from_segments(&cells, 20, 15).unwrap();

    c.bench_function("fill_food_to_20_len200", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(7);
            let mut food = FoodSet::new();
            food.fill_to(black_box(20), &snake, 20, 15, &mut rng);
            food
        })
    });
}

fn bench_food_color(c: &mut Criterion) {
    let mut rng = SimpleRng::new(99);
    c.bench_function("select_food_color", |b| {
        b.iter(|| select_food_color(black_box(SnakeColors::default()), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_update_idle_frame,
    bench_replenish_long_snake,
    bench_food_color
);
criterion_main!(benches);
