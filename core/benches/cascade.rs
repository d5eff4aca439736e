use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::{DensityGenerator, GameConfig, Grid, RevealPolicy, Session};

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new((255, 255), 4).unwrap();
    c.bench_function("grid.generate.255x255", |b| {
        b.iter_batched(
            || DensityGenerator::new(20260101),
            |mut generator| black_box(Grid::generate(&config, &mut generator).unwrap()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_cascade(c: &mut Criterion) {
    let open = Grid::from_mine_coords((255, 255), &[]).unwrap();

    for policy in RevealPolicy::ALL {
        c.bench_function(&format!("cascade.{policy:?}.open_255x255"), |b| {
            b.iter_batched(
                || open.clone(),
                |mut grid| black_box(policy.cascade(&mut grid, (127, 127))),
                BatchSize::LargeInput,
            );
        });
    }
}

fn bench_session_reveal(c: &mut Criterion) {
    let config = GameConfig::new((64, 64), 8).unwrap();
    c.bench_function("session.reveal_all.64x64", |b| {
        b.iter_batched(
            || Session::seeded(config, 7).unwrap(),
            |mut session| {
                for x in 0..64 {
                    for y in 0..64 {
                        if !session.grid()[(x, y)].is_mine() {
                            black_box(session.on_primary_release((x, y)));
                        }
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(cascade_benches, bench_generate, bench_cascade, bench_session_reveal);
criterion_main!(cascade_benches);
