//! fruitsnake: grid snake simulation, a renderer-agnostic core plus a Bevy front end.
//!
//! The core (`Grid`, [`snake`], [`fruit`], [`special_fruit`], [`simulation`],
//! [`session`]) never touches Bevy; it is driven by elapsed time and a
//! validated direction, and exposes a [`FrameView`] per frame for whoever draws it.
//!
//! # Example
//! ```
//! use fruitsnake::{Direction, Game, GameRules};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = Game::new(GameRules::default(), &mut rng);
//! game.steer(Direction::Up);
//! let report = game.tick(0.3, &mut rng).unwrap();
//! assert_eq!(report.head, fruitsnake::Cell::new(10, 6));
//! ```

use std::fmt;

pub mod fruit;
pub mod snake;
pub mod special_fruit;
pub mod simulation;
pub mod session;
pub mod io;
pub mod config;
pub mod game_config;
pub mod settings;
pub mod hud;
pub mod start_screen;
pub mod camera;
pub mod cell_renderer;
pub mod ui;

// Main exports
pub use config::Config;
pub use game_config::{ConfigError, GameRules};
pub use simulation::{FrameView, Game, GameOver, TickReport};
pub use session::{Session, SessionPhase};
pub use settings::{Menu, MenuSelection, SnakeColor, SpeedLevel};
pub use snake::Snake;
pub use special_fruit::{SpecialFruit, SpecialFruitState};
pub use io::{HighScoreError, HighScoreFile, HighScoreStore, InMemoryHighScore};

/// A grid cell. Coordinates are signed so a head that left the board is still representable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. Row 0 is the top row.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    #[inline]
    fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Fixed-size board with hard boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 { self.width }
    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 { self.height }

    /// Total number of cells on the board.
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

// ---------- tests ----------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let g = Grid::new(20, 15);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(19, 14)));
        assert!(!g.in_bounds(Cell::new(20, 0)));
        assert!(!g.in_bounds(Cell::new(0, 15)));
        assert!(!g.in_bounds(Cell::new(-1, 3)));
        assert!(!g.in_bounds(Cell::new(3, -1)));
    }

    #[test]
    fn up_decreases_row() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn cells_cover_the_whole_board() {
        let g = Grid::new(4, 3);
        assert_eq!(g.cells().count(), g.area());
        assert!(g.cells().all(|c| g.in_bounds(c)));
        assert_eq!(g.center(), Cell::new(2, 1));
    }
}
