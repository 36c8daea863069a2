use find_my_path::{search, Algorithm, Board, Cell, GridSize, RunStats};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Runs both algorithms on the same random 30x30 board. A* and Dijkstra agree on the
// length of the path, but A* finalizes fewer cells because its heuristic pulls the
// search towards the end.

fn main() {
    let n = GridSize::Large.cells() as i32;
    let mut board = Board::new(n as usize);
    board.set_start(Cell::new(1, 1)).unwrap();
    board.set_end(Cell::new(n - 3, n - 3)).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    board.randomize_walls(&mut rng);
    println!("{}", board);
    if !board.reachable() {
        println!("The end cannot be reached on this board.");
    }
    for algorithm in [Algorithm::UniformCost, Algorithm::AStar] {
        let result = search(&board.request(algorithm).unwrap()).unwrap();
        println!("{}", RunStats::from(&result));
    }
}
