//! `othello_core::ai::selector` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use othello_core::ai::types::Ai as _;
use othello_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた盤面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut dark_agent = ai::MoveSelector::new(engine::Side::Dark, ai::Difficulty::Easy, u64::MIN);
    let mut game = engine::Game::initial();
    let mut light_agent = ai::MoveSelector::new(
        engine::Side::Light,
        ai::Difficulty::Easy,
        u64::MIN.wrapping_add(1),
    );

    for _turn in u16::MIN..plies {
        let play_result = match game.side_to_move() {
            engine::Side::Dark => game.play_computer(&mut dark_agent),
            engine::Side::Light => game.play_computer(&mut light_agent),
            _ => break,
        };

        match play_result {
            Ok(engine::Turn::GameOver) | Err(_) => break,
            Ok(_) => {}
        }
    }

    *game.board()
}

/// ベンチ用に代表盤面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    let b0 = engine::Board::initial();
    let b1 = board_after_plies(8);
    let b2 = board_after_plies(24);
    [b0, b1, b2]
}

/// `MoveSelector::select_move` を難易度ごとに計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let levels = [
        ai::Difficulty::Easy,
        ai::Difficulty::Normal,
        ai::Difficulty::Hard,
    ];

    for level in levels {
        let mut group = criterion.benchmark_group(format!("ai/selector/{level}"));

        for (index, board) in samples.iter().enumerate() {
            let bench_id = BenchmarkId::new("board", index);
            group.bench_with_input(bench_id, board, |bench, input| {
                bench.iter_batched(
                    || ai::MoveSelector::new(engine::Side::Dark, level, u64::MIN),
                    |mut agent| black_box(agent.select_move(input)),
                    BatchSize::SmallInput,
                );
            });
        }

        group.finish();
    }
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
