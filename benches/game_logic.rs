use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::render::BoardRenderer;
use tui_snake::core::GameState;
use tui_snake::types::{Cell, Direction, GRID_COLS, GRID_ROWS};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(GRID_ROWS, GRID_COLS, 12345);

    c.bench_function("advance_step", |b| {
        b.iter(|| {
            if !state.alive() {
                state.reset();
            }
            black_box(state.advance())
        })
    });
}

fn bench_request_direction(c: &mut Criterion) {
    let mut state = GameState::new(GRID_ROWS, GRID_COLS, 12345);

    c.bench_function("request_direction", |b| {
        b.iter(|| black_box(state.request_direction(black_box(Direction::Up))))
    });
}

fn bench_draw(c: &mut Criterion) {
    struct NullRenderer;
    impl BoardRenderer for NullRenderer {
        fn clear(&mut self) {}
        fn draw_head(&mut self, cell: Cell, _dir: Direction) {
            black_box(cell);
        }
        fn draw_fruit(&mut self, cell: Cell) {
            black_box(cell);
        }
        fn draw_body(&mut self, cell: Cell) {
            black_box(cell);
        }
    }

    let state = GameState::new(GRID_ROWS, GRID_COLS, 12345);
    let mut renderer = NullRenderer;

    c.bench_function("draw_pass", |b| b.iter(|| state.draw(&mut renderer)));
}

criterion_group!(benches, bench_advance, bench_request_direction, bench_draw);
criterion_main!(benches);
