use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;

/// [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of
/// the open cells of a grid under 4-directional movement, kept in a [UnionFind].
/// Answers reachability questions without searching.
#[derive(Clone, Debug)]
pub struct Components {
    /// Blocked cells, `x` being the column and `y` the row.
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl Components {
    /// Links every open cell to its open right and lower neighbours.
    pub fn generate(size: usize, walls: &FxHashSet<Cell>) -> Components {
        info!("Generating connected components");
        let mut grid = BoolGrid::new(size, size, false);
        for wall in walls.iter().filter(|c| c.in_bounds(size)) {
            grid.set_point(Point::from(*wall), true);
        }
        let mut components = UnionFind::new(size * size);
        for (x, y) in iproduct!(0..size, 0..size) {
            if grid.get(x, y) {
                continue;
            }
            let point = Point::new(x as i32, y as i32);
            let parent_ix = grid.get_ix_point(&point);
            for p in [point + Point::new(1, 0), point + Point::new(0, 1)] {
                if grid.point_in_bounds(p) && !grid.get_point(p) {
                    components.union(parent_ix, grid.get_ix_point(&p));
                }
            }
        }
        Components { grid, components }
    }

    /// Retrieves the component id of an open cell.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        let point = Point::from(*cell);
        (self.grid.point_in_bounds(point) && !self.grid.get_point(point))
            .then(|| self.components.find(self.grid.get_ix_point(&point)))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }
}
