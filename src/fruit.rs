//! Fruit placement.
//!
//! Rejection sampling is tried a bounded number of times; after that the free
//! cells are enumerated and one is drawn uniformly, so placement terminates
//! even on a nearly full board.

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::{Cell, Grid};

/// Rejection-sampling attempts before falling back to the complement set.
pub const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Pick a uniformly random cell of `grid` not contained in `occupied`.
///
/// Returns `None` only when every cell on the board is occupied.
pub fn place_fruit<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Cell> {
    if grid.area() == 0 {
        return None;
    }
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = Cell::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    grid.cells().filter(|c| !occupied.contains(c)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_lands_on_occupied_cells() {
        let grid = Grid::new(6, 5);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| (c.x + c.y) % 3 != 0).collect();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let cell = place_fruit(&grid, &occupied, &mut rng).unwrap();
            assert!(grid.in_bounds(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(20, 15);
        let free = Cell::new(13, 2);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != free).collect();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(place_fruit(&grid, &occupied, &mut rng), Some(free));
        }
    }

    #[test]
    fn full_board_yields_none() {
        let grid = Grid::new(3, 3);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(place_fruit(&grid, &occupied, &mut rng), None);
    }
}
