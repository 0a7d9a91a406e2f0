use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3::core::{has_legal_move, hint, scan, settle, Board, Game, RandomSource};
use match3::types::Gem;

fn settled_board(seed: u32) -> Board<Gem> {
    let mut source = RandomSource::gems(seed, 6);
    let mut board = Board::create(&mut source, 8, 8).unwrap();
    settle(&mut board, &mut source).unwrap();
    board
}

fn bench_scan(c: &mut Criterion) {
    let board = settled_board(12345);

    c.bench_function("scan_8x8", |b| b.iter(|| scan(black_box(&board))));
}

fn bench_settle_fresh_board(c: &mut Criterion) {
    c.bench_function("settle_fresh_8x8", |b| {
        let mut source = RandomSource::gems(12345, 6);
        b.iter(|| {
            let mut board = Board::create(&mut source, 8, 8).unwrap();
            settle(&mut board, &mut source).unwrap()
        })
    });
}

fn bench_hint(c: &mut Criterion) {
    let mut board = settled_board(12345);

    c.bench_function("hint_8x8", |b| b.iter(|| hint(black_box(&mut board))));
    c.bench_function("has_legal_move_8x8", |b| {
        b.iter(|| has_legal_move(black_box(&mut board)))
    });
}

fn bench_hinted_move(c: &mut Criterion) {
    c.bench_function("apply_hinted_move", |b| {
        let mut game = Game::new(RandomSource::gems(12345, 6), 8, 8).unwrap();
        game.settle().unwrap();
        b.iter(|| match game.hint() {
            Some(swap) => game.apply_swap(swap).unwrap().effects.len(),
            None => game.reset().unwrap().len(),
        })
    });
}

criterion_group!(
    benches,
    bench_scan,
    bench_settle_fresh_board,
    bench_hint,
    bench_hinted_move
);
criterion_main!(benches);
