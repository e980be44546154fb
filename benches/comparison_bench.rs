use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, Board, CostModel, SearchEngine, Variant};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const TERRAIN: [char; 5] = ['w', 'm', 'f', 'g', 'r'];
const N: usize = 64;
const N_BOARDS: usize = 16;

/// Random weighted boards with the start and goal in opposite corners. Only solvable boards are
/// kept so every iteration does a full search.
fn random_boards(rng: &mut StdRng) -> Vec<Board> {
    let mut boards = Vec::new();
    while boards.len() < N_BOARDS {
        let rows = (0..N)
            .map(|y| {
                (0..N)
                    .map(|x| match (x, y) {
                        (0, 0) => 'A',
                        (x, y) if x == N - 1 && y == N - 1 => 'B',
                        _ if rng.gen_bool(0.25) => '#',
                        _ => TERRAIN[rng.gen_range(0..TERRAIN.len())],
                    })
                    .collect::<Vec<char>>()
            })
            .collect::<Vec<_>>();
        let board = Board::from_rows(rows).unwrap();
        if board.solvable() {
            boards.push(board);
        }
    }
    boards
}

fn bench_variant(c: &mut Criterion, boards: &[Board], variant: Variant) {
    c.bench_function(format!("{}x{} random, {}", N, N, variant).as_str(), |b| {
        b.iter(|| {
            for board in boards {
                let mut engine = SearchEngine::new(board.clone(), variant).unwrap();
                black_box(engine.run().unwrap());
            }
        })
    });
}

fn random_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let boards = random_boards(&mut rng);
    for costs in [CostModel::Unit, CostModel::Weighted] {
        for algorithm in Algorithm::ALL {
            bench_variant(c, &boards, Variant::new(algorithm, costs));
        }
    }
}

criterion_group!(benches, random_bench);
criterion_main!(benches);
