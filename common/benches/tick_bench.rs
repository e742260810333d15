use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::{ManualTickScheduler, SessionRng};
use common::games::snake::{
    Direction, GameSession, GameState, GameView, GRID_SIZE, InputAction, NullRenderer, Point,
    ScoreReporter, Snake, SnakeGame, SnakeSettings, build_scene, place_food,
};

struct DiscardScores;

impl ScoreReporter for DiscardScores {
    fn submit(&mut self, _score: u32) {}
}

fn chase_food(head: Point, food: Point) -> Direction {
    if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    }
}

fn bench_greedy_run(seed: u64) -> u32 {
    let mut game = SnakeGame::new(
        SnakeSettings::default(),
        SessionRng::new(seed),
        ManualTickScheduler::new(),
        DiscardScores,
        NullRenderer::default(),
    );
    game.start();

    for _ in 0..10_000 {
        if game.state() != GameState::Playing {
            break;
        }
        let turn = game
            .session()
            .and_then(|session| session.food().map(|food| chase_food(session.snake().head(), food)));
        if let Some(direction) = turn {
            game.handle_action(InputAction::Turn(direction));
        }
        game.tick();
    }
    game.score()
}

/// Boustrophedon fill leaving only the final cell free.
fn nearly_full_snake() -> Snake {
    let mut cells = Vec::new();
    for y in 0..GRID_SIZE {
        let row: Vec<Point> = (0..GRID_SIZE).map(|x| Point::new(x, y)).collect();
        if y % 2 == 0 {
            cells.extend(row);
        } else {
            cells.extend(row.into_iter().rev());
        }
    }
    cells.pop();
    cells.reverse();
    Snake::new(&cells).expect("board has free cells")
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group.bench_function("greedy_run", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(bench_greedy_run(seed))
        })
    });

    let crowded = nearly_full_snake();
    group.bench_function("place_food_last_cell", |b| {
        let mut rng = SessionRng::new(7);
        b.iter(|| black_box(place_food(&crowded, &mut rng)))
    });

    let settings = SnakeSettings::default();
    let session = GameSession::new(&settings, &mut SessionRng::new(3));
    group.bench_function("build_scene", |b| {
        b.iter(|| {
            let view = GameView { state: GameState::Playing, session: Some(&session) };
            black_box(build_scene(&view))
        })
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
