/// Fuzzes the search engine on many random boards. Every variant must find a path exactly when
/// start and goal share a connected component, report simple paths, and Dijkstra must never be
/// beaten on cost by another variant under the same cost model.
use grid_search::{
    is_simple_path, Algorithm, Board, CostModel, SearchEngine, SearchState, Variant,
};
use rand::prelude::*;

const TERRAIN: [char; 5] = ['w', 'm', 'f', 'g', 'r'];

fn random_board(w: usize, h: usize, rng: &mut StdRng, terrain: bool) -> Board {
    let rows = (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    if (x, y) == (0, 0) {
                        'A'
                    } else if (x, y) == (w - 1, h - 1) {
                        'B'
                    } else if rng.gen_bool(0.4) {
                        '#'
                    } else if terrain {
                        TERRAIN[rng.gen_range(0..TERRAIN.len())]
                    } else {
                        '.'
                    }
                })
                .collect::<Vec<char>>()
        })
        .collect::<Vec<_>>();
    Board::from_rows(rows).unwrap()
}

fn search(board: &Board, algorithm: Algorithm, costs: CostModel) -> SearchEngine {
    let mut engine = SearchEngine::new(board.clone(), Variant::new(algorithm, costs)).unwrap();
    while !engine.step().unwrap().is_terminal() {}
    engine
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_BOARDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for (terrain, costs) in [(false, CostModel::Unit), (true, CostModel::Weighted)] {
        for _ in 0..N_BOARDS {
            let board = random_board(N, N, &mut rng, terrain);
            let reachable = board.solvable();
            for algorithm in Algorithm::ALL {
                let engine = search(&board, algorithm, costs);
                // Show the board if the outcome is wrong
                if (engine.state() == SearchState::Succeeded) != reachable {
                    println!("{} on\n{}", engine.variant(), board);
                }
                assert_eq!(engine.state() == SearchState::Succeeded, reachable);
                match engine.reconstructed_path() {
                    Some(path) => {
                        assert_eq!(path.first(), Some(&board.start()));
                        assert_eq!(path.last(), Some(&board.goal()));
                        assert!(is_simple_path(&path));
                        assert!(path.iter().all(|p| !board.is_blocked(*p)));
                    }
                    None => assert_eq!(engine.state(), SearchState::Exhausted),
                }
            }
        }
    }
}

#[test]
fn fuzz_cost() {
    const N: usize = 8;
    const N_BOARDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_BOARDS {
        let board = random_board(N, N, &mut rng, true);
        if !board.solvable() {
            continue;
        }
        for costs in [CostModel::Unit, CostModel::Weighted] {
            let dijkstra = search(&board, Algorithm::Dijkstra, costs);
            let best_path = dijkstra.reconstructed_path().unwrap();
            let best = costs.path_cost(&board, &best_path).unwrap();
            assert_eq!(dijkstra.path_cost(), Some(best));
            for algorithm in [Algorithm::Greedy, Algorithm::Astar, Algorithm::Bfs] {
                let engine = search(&board, algorithm, costs);
                let path = engine.reconstructed_path().unwrap();
                let cost = costs.path_cost(&board, &path).unwrap();
                if cost < best {
                    println!("{}: {} < {}\n{}", engine.variant(), cost, best, board);
                }
                assert!(best <= cost);
                // Manhattan distance is consistent for unit steps, so A* and BFS are optimal.
                if costs == CostModel::Unit && algorithm != Algorithm::Greedy {
                    assert_eq!(path.len(), best_path.len());
                }
            }
        }
    }
}
