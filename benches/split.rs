use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rectsweeper::{
    generators::{checkerboard, nested, random_rects},
    Splitter,
};

fn random(c: &mut Criterion) {
    let rects = random_rects(13607, 100, 1..=100);

    c.bench_function("random 100", |b| {
        b.iter(|| black_box(Splitter::new().split(rects.iter().copied())))
    });
    c.bench_function("random 100, requeue trailing", |b| {
        b.iter(|| {
            black_box(
                Splitter::new()
                    .emit_trailing_fragments(false)
                    .split(rects.iter().copied()),
            )
        })
    });
}

fn patterns(c: &mut Criterion) {
    let board = checkerboard(10);
    c.bench_function("checkerboard", |b| {
        b.iter(|| black_box(Splitter::new().split(board.iter().copied())))
    });

    let squares = nested(20);
    c.bench_function("nested", |b| {
        b.iter(|| black_box(Splitter::new().split(squares.iter().copied())))
    });
}

fn just_the_sweep(c: &mut Criterion) {
    let rects = random_rects(13607, 100, 1..=100);

    c.bench_function("just the sweep", |b| {
        b.iter(|| Splitter::new().split_into(rects.iter().copied(), |r| {
            black_box(r);
        }))
    });
}

criterion_group!(benches, random, patterns, just_the_sweep);
criterion_main!(benches);
