//! Bonus fruit lifecycle.
//!
//! ```text
//! Inactive --counter reaches threshold--> Eligible --next tick--> Active
//! Active --interval elapsed--> Active (relocated)
//! Active --eaten--> Inactive (counter reset)
//! ```

use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::fruit::place_fruit;
use crate::{Cell, Grid};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpecialFruitState {
    /// Nothing on the board, counter below threshold.
    Inactive,
    /// Threshold reached, waiting for the next tick to place the fruit.
    Eligible,
    /// On the board; `elapsed` counts time since the last placement.
    Active { cell: Cell, elapsed: f32 },
}

/// What a tick did to the special fruit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialFruitEvent {
    Placed(Cell),
    Relocated { from: Cell, to: Cell },
}

#[derive(Clone, Debug)]
pub struct SpecialFruit {
    state: SpecialFruitState,
    counter: u32,
    threshold: u32,
    relocate_after: f32,
}

impl SpecialFruit {
    pub fn new(threshold: u32, relocate_after: f32) -> Self {
        Self {
            state: SpecialFruitState::Inactive,
            counter: 0,
            threshold,
            relocate_after,
        }
    }

    pub fn state(&self) -> SpecialFruitState {
        self.state
    }

    /// Regular fruit eaten since the last special fruit was consumed.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn cell(&self) -> Option<Cell> {
        match self.state {
            SpecialFruitState::Active { cell, .. } => Some(cell),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SpecialFruitState::Active { .. })
    }

    /// Count one regular fruit; may make the special fruit eligible.
    pub fn record_regular_fruit(&mut self) {
        self.counter = self.counter.saturating_add(1);
        if self.state == SpecialFruitState::Inactive && self.counter >= self.threshold {
            debug!("special fruit eligible after {} fruit", self.counter);
            self.state = SpecialFruitState::Eligible;
        }
    }

    /// Per-tick transitions: place when eligible, relocate when the interval has elapsed.
    ///
    /// `elapsed` is the time covered by this tick; it does not count toward the
    /// tick that placed the fruit.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        elapsed: f32,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Option<SpecialFruitEvent> {
        match self.state {
            SpecialFruitState::Inactive => None,
            SpecialFruitState::Eligible => self.place(grid, occupied, rng).map(SpecialFruitEvent::Placed),
            SpecialFruitState::Active { cell, elapsed: so_far } => {
                let so_far = so_far + elapsed;
                if so_far < self.relocate_after {
                    self.state = SpecialFruitState::Active { cell, elapsed: so_far };
                    return None;
                }
                let mut avoid = occupied.clone();
                avoid.insert(cell);
                let to = place_fruit(grid, &avoid, rng)
                    .or_else(|| place_fruit(grid, occupied, rng))
                    .unwrap_or(cell);
                self.state = SpecialFruitState::Active { cell: to, elapsed: 0.0 };
                debug!("special fruit relocated {} -> {}", cell, to);
                Some(SpecialFruitEvent::Relocated { from: cell, to })
            }
        }
    }

    /// Place the fruit if eligible. A no-op while already active or inactive.
    pub fn place<R: Rng + ?Sized>(&mut self, grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Cell> {
        if self.state != SpecialFruitState::Eligible {
            return None;
        }
        let cell = place_fruit(grid, occupied, rng)?;
        self.state = SpecialFruitState::Active { cell, elapsed: 0.0 };
        info!("special fruit appeared at {}", cell);
        Some(cell)
    }

    /// Eat the fruit if it sits on `cell`. Resets the counter and returns `true` on a hit.
    pub fn consume_at(&mut self, cell: Cell) -> bool {
        if self.cell() != Some(cell) {
            return false;
        }
        self.state = SpecialFruitState::Inactive;
        self.counter = 0;
        true
    }

    /// Put the fruit on a specific cell, skipping eligibility.
    pub(crate) fn force_active(&mut self, cell: Cell) {
        self.state = SpecialFruitState::Active { cell, elapsed: 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (SpecialFruit, Grid, HashSet<Cell>, StdRng) {
        let grid = Grid::new(20, 15);
        let occupied: HashSet<Cell> = [Cell::new(10, 7), Cell::new(9, 7)].into_iter().collect();
        (SpecialFruit::new(3, 3.0), grid, occupied, StdRng::seed_from_u64(11))
    }

    #[test]
    fn stays_inactive_below_threshold() {
        let (mut sf, grid, occupied, mut rng) = setup();
        sf.record_regular_fruit();
        sf.record_regular_fruit();
        assert_eq!(sf.tick(0.2, &grid, &occupied, &mut rng), None);
        assert_eq!(sf.state(), SpecialFruitState::Inactive);
        assert_eq!(sf.cell(), None);
    }

    #[test]
    fn eligible_then_placed_on_next_tick() {
        let (mut sf, grid, occupied, mut rng) = setup();
        for _ in 0..3 {
            sf.record_regular_fruit();
        }
        assert_eq!(sf.state(), SpecialFruitState::Eligible);
        let placed = match sf.tick(0.2, &grid, &occupied, &mut rng) {
            Some(SpecialFruitEvent::Placed(c)) => c,
            other => panic!("expected placement, got {other:?}"),
        };
        assert!(!occupied.contains(&placed));
        assert_eq!(sf.cell(), Some(placed));
    }

    #[test]
    fn placing_while_active_is_a_noop() {
        let (mut sf, grid, occupied, mut rng) = setup();
        sf.force_active(Cell::new(1, 1));
        assert_eq!(sf.place(&grid, &occupied, &mut rng), None);
        assert_eq!(sf.cell(), Some(Cell::new(1, 1)));
    }

    #[test]
    fn relocates_once_interval_elapses() {
        let (mut sf, grid, occupied, mut rng) = setup();
        sf.force_active(Cell::new(1, 1));
        assert_eq!(sf.tick(1.5, &grid, &occupied, &mut rng), None);
        assert_eq!(sf.tick(1.0, &grid, &occupied, &mut rng), None);
        match sf.tick(0.5, &grid, &occupied, &mut rng) {
            Some(SpecialFruitEvent::Relocated { from, to }) => {
                assert_eq!(from, Cell::new(1, 1));
                assert_ne!(to, from);
                assert!(!occupied.contains(&to));
            }
            other => panic!("expected relocation, got {other:?}"),
        }
        assert_eq!(sf.tick(0.1, &grid, &occupied, &mut rng), None);
    }

    #[test]
    fn eating_resets_counter() {
        let (mut sf, _, _, _) = setup();
        for _ in 0..5 {
            sf.record_regular_fruit();
        }
        sf.force_active(Cell::new(4, 4));
        assert!(!sf.consume_at(Cell::new(4, 5)));
        assert!(sf.consume_at(Cell::new(4, 4)));
        assert_eq!(sf.counter(), 0);
        assert_eq!(sf.state(), SpecialFruitState::Inactive);
    }

    #[test]
    fn counting_while_active_does_not_change_state() {
        let (mut sf, _, _, _) = setup();
        sf.force_active(Cell::new(4, 4));
        for _ in 0..10 {
            sf.record_regular_fruit();
        }
        assert!(sf.is_active());
    }
}
