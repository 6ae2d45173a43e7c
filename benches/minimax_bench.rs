use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_ai::board::Grid;
use tictactoe_ai::game::{Game, decide};
use tictactoe_ai::minimax::next_move;
use tictactoe_ai::playout::self_play;
use tictactoe_ai::position::Board;

fn bench_single_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_single_move_empty", |b| {
        b.iter(|| next_move(black_box(&Board::new()), 'x', 'o'));
    });
}

fn bench_single_move_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_single_move_midgame", |b| {
        let game = Game::new(
            ["x", "o"],
            "o",
            Grid::from_rows([
                [Some("x"), None, None],
                [None, Some("o"), None],
                [None, None, Some("x")],
            ]),
        );
        b.iter(|| decide(black_box(&game)));
    });
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("minimax_self_play_full_game", |b| {
        b.iter(|| self_play(black_box(Board::new()), 'x', 'o'));
    });
}

criterion_group!(
    benches,
    bench_single_move_empty_board,
    bench_single_move_mid_game,
    bench_self_play
);
criterion_main!(benches);
