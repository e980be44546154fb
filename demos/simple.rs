use grid_search::render::Frame;
use grid_search::{Algorithm, Board, CostModel, SearchEngine, Variant};

// In this example every algorithm searches a board with shape
// A . . . .
// . # # # .
// . . . # .
// # # . . B
// where
// - # marks an obstacle
// - A marks the start
// - B marks the goal
//
// Nodes have a 4-neighborhood and every open cell costs 1.

fn main() {
    let board: Board = "A....\n.###.\n...#.\n##..B".parse().unwrap();
    for algorithm in Algorithm::ALL {
        let variant = Variant::new(algorithm, CostModel::Unit);
        let mut engine = SearchEngine::new(board.clone(), variant).unwrap();
        let path = engine.run().unwrap();
        let mut frame = Frame::from_engine(&engine, true);
        frame.mark_path(path.iter().copied());
        println!("{} expanded {} cells:", variant, engine.visited_positions().len());
        println!("{}", frame);
        println!("Path:");
        for p in path {
            println!("{:?}", p);
        }
        println!();
    }
}
