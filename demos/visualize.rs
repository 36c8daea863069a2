use find_my_path::{Cell, GridSize, ReplaySpeed, Visualizer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;

// Animates a search in the terminal. Each frame redraws the board with the cells
// the search has reached so far:
// - v marks a finalized cell
// - + marks a cell on the frontier
// - * marks the final path

fn main() {
    let mut visualizer = Visualizer::new(GridSize::Small);
    visualizer.click(Cell::new(0, 0)).unwrap();
    visualizer.click(Cell::new(9, 9)).unwrap();
    visualizer
        .randomize_walls(&mut StdRng::seed_from_u64(3))
        .unwrap();
    visualizer.set_speed(ReplaySpeed::from_millis(60)).unwrap();

    let mut replay = visualizer.run().unwrap();
    while let Some(step) = replay.next() {
        // Clear the screen and move the cursor home
        print!("\x1b[2J\x1b[H");
        println!("{}", visualizer.board().view(replay.overlay()));
        thread::sleep(step.delay);
    }
    visualizer.finish(replay);
    println!("{}", visualizer);
}
