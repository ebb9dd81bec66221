//! One game: snake, fruit, special fruit and score, advanced tick by tick.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::fruit::place_fruit;
use crate::game_config::GameRules;
use crate::settings::SpeedLevel;
use crate::snake::Snake;
use crate::special_fruit::{SpecialFruit, SpecialFruitEvent};
use crate::{Cell, Direction};

/// Terminal condition of a game. Never recovered from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameOver {
    #[error("snake ran into itself at {head}")]
    SelfCollision { head: Cell },
    #[error("snake hit the wall at {head}")]
    WallCollision { head: Cell },
}

impl GameOver {
    pub fn head(&self) -> Cell {
        match *self {
            GameOver::SelfCollision { head } | GameOver::WallCollision { head } => head,
        }
    }
}

/// What happened during a completed tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub head: Cell,
    pub ate_fruit: bool,
    pub ate_special: bool,
    /// At most one segment per tick, even when both fruits were eaten.
    pub grew: bool,
    pub points: u32,
    pub special: Option<SpecialFruitEvent>,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    /// Head first.
    pub snake: Vec<Cell>,
    pub fruit: Option<Cell>,
    pub special_fruit: Option<Cell>,
    pub score: u32,
    pub high_score: u32,
    pub direction: Direction,
}

#[derive(Clone, Debug)]
pub struct Game {
    rules: GameRules,
    snake: Snake,
    direction: Direction,
    /// Direction of the last completed move; reversal is checked against it.
    moved: Direction,
    fruit: Option<Cell>,
    special: SpecialFruit,
    score: u32,
    move_delay: f32,
    since_last_tick: f32,
    over: Option<GameOver>,
}

impl Game {
    /// New game at the default speed.
    pub fn new<R: Rng + ?Sized>(rules: GameRules, rng: &mut R) -> Self {
        Self::with_speed(rules, SpeedLevel::default(), rng)
    }

    /// One-cell snake at the grid center heading right, fruit placed, no special fruit.
    pub fn with_speed<R: Rng + ?Sized>(rules: GameRules, speed: SpeedLevel, rng: &mut R) -> Self {
        let snake = Snake::new(rules.grid.center());
        let occupied: HashSet<Cell> = snake.cells().collect();
        let fruit = place_fruit(&rules.grid, &occupied, rng);
        Self::assemble(rules, speed, snake, fruit)
    }

    /// A game with an explicit layout, for scripted scenarios.
    pub fn with_layout(
        rules: GameRules,
        speed: SpeedLevel,
        snake: Snake,
        direction: Direction,
        fruit: Option<Cell>,
        special_fruit: Option<Cell>,
    ) -> Self {
        let mut game = Self::assemble(rules, speed, snake, fruit);
        game.direction = direction;
        game.moved = direction;
        if let Some(cell) = special_fruit {
            game.special.force_active(cell);
        }
        game
    }

    fn assemble(rules: GameRules, speed: SpeedLevel, snake: Snake, fruit: Option<Cell>) -> Self {
        let special = SpecialFruit::new(rules.special_fruit_threshold, rules.special_fruit_relocate_secs);
        Self {
            rules,
            snake,
            direction: Direction::Right,
            moved: Direction::Right,
            fruit,
            special,
            score: 0,
            move_delay: speed.move_delay(),
            since_last_tick: 0.0,
            over: None,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub fn special_fruit(&self) -> &SpecialFruit {
        &self.special
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_delay(&self) -> f32 {
        self.move_delay
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.over
    }

    /// Request a new heading. Rejected (returns `false`) when it reverses the last move.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.moved) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Accumulate frame time and tick once the move interval has been reached.
    ///
    /// Returns `Ok(None)` on frames where the snake does not move.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Result<Option<TickReport>, GameOver> {
        if let Some(over) = self.over {
            return Err(over);
        }
        self.since_last_tick += dt;
        if self.since_last_tick < self.move_delay {
            return Ok(None);
        }
        let elapsed = self.since_last_tick;
        let report = self.tick(elapsed, rng)?;
        self.since_last_tick = 0.0;
        Ok(Some(report))
    }

    /// Advance the snake by one cell. `elapsed` feeds the special-fruit relocation clock.
    pub fn tick<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) -> Result<TickReport, GameOver> {
        if let Some(over) = self.over {
            return Err(over);
        }
        let grid = self.rules.grid;
        let new_head = self.snake.peek_next_head(self.direction);

        // Special fruit moves before anything is eaten, so a fresh placement
        // can only be eaten on a later tick.
        let mut occupied: HashSet<Cell> = self.snake.cells().collect();
        occupied.insert(new_head);
        occupied.extend(self.fruit);
        let special = self.special.tick(elapsed, &grid, &occupied, rng);

        let mut points = 0;
        let ate_fruit = self.fruit == Some(new_head);
        if ate_fruit {
            points += self.rules.regular_fruit_value;
            self.special.record_regular_fruit();
            let mut occupied: HashSet<Cell> = self.snake.cells().collect();
            occupied.insert(new_head);
            occupied.extend(self.special.cell());
            self.fruit = place_fruit(&grid, &occupied, rng);
        }

        let ate_special = self.special.consume_at(new_head);
        if ate_special {
            points += self.rules.special_fruit_value;
        }

        let grew = ate_fruit || ate_special;
        self.score = self.score.saturating_add(points);
        self.snake.advance(new_head, grew);

        if self.snake.collides_with_self(new_head) {
            return Err(self.finish(GameOver::SelfCollision { head: new_head }));
        }
        if !grid.in_bounds(new_head) {
            return Err(self.finish(GameOver::WallCollision { head: new_head }));
        }

        self.moved = self.direction;
        if grew {
            debug!("ate at {}: +{} (score {}, length {})", new_head, points, self.score, self.snake.len());
        }
        Ok(TickReport { head: new_head, ate_fruit, ate_special, grew, points, special })
    }

    fn finish(&mut self, over: GameOver) -> GameOver {
        self.over = Some(over);
        over
    }

    pub fn view(&self, high_score: u32) -> FrameView {
        FrameView {
            snake: self.snake.cells().collect(),
            fruit: self.fruit,
            special_fruit: self.special.cell(),
            score: self.score,
            high_score,
            direction: self.direction,
        }
    }
}
