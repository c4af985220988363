use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tactoe::{evaluate, GameHistory, Snapshot};

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let boards: Vec<Snapshot> = ["_________", "XO_XO_X__", "XOXXOOOXX", "OOOXX_X__"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    criterion.bench_function("evaluate", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(evaluate(black_box(board)));
            }
        });
    });
    criterion.bench_function("full game with rewind", |b| {
        b.iter(|| {
            let mut game = GameHistory::new();
            for m in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
                let _ = game.play_index(black_box(m));
            }
            let _ = game.jump_to(4);
            let _ = game.play_index(8);
            black_box(game.status())
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
