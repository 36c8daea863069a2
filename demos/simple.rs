use find_my_path::{search, Algorithm, Board};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let board: Board = "S..\n.#.\n..E".parse().unwrap();
    println!("{}", board);
    let request = board.request(Algorithm::AStar).unwrap();
    let result = search(&request).unwrap();
    println!("Path:");
    for c in result.path {
        // grid_util points use x for the column and y for the row
        let p: Point = c.into();
        println!("{} -> ({}, {})", c, p.x, p.y);
    }
}
