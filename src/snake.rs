use std::collections::VecDeque;

use crate::{Cell, Direction};

/// Ordered snake body, head first.
///
/// The body is never empty. Between ticks no cell appears twice; a tick that
/// would produce a duplicate is a self collision and ends the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A one-cell snake at `head`.
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self { body }
    }

    /// Build a snake from explicit cells, head first. Returns `None` for an empty body.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() { None } else { Some(Self { body }) }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The cell the head would move into.
    pub fn peek_next_head(&self, dir: Direction) -> Cell {
        self.head().step(dir)
    }

    /// Push `new_head` to the front; the tail is dropped unless the snake `grew`.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            self.body.pop_back();
        }
    }

    /// `true` if `cell` matches any body cell after the head slot.
    ///
    /// Meant to be called right after [`Snake::advance`], with the new head as `cell`.
    pub fn collides_with_self(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|&c| c == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut s = line(&[(5, 5), (4, 5), (3, 5)]);
        let next = s.peek_next_head(Direction::Right);
        s.advance(next, false);
        assert_eq!(s.len(), 3);
        assert_eq!(s.cells().collect::<Vec<_>>(), vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut s = Snake::new(Cell::new(2, 2));
        s.advance(Cell::new(2, 1), true);
        assert_eq!(s.len(), 2);
        assert_eq!(s.head(), Cell::new(2, 1));
        assert!(s.contains(Cell::new(2, 2)));
    }

    #[test]
    fn head_slot_is_not_a_self_collision() {
        let mut s = line(&[(1, 1), (1, 2)]);
        s.advance(Cell::new(1, 0), false);
        assert!(!s.collides_with_self(s.head()));
    }

    #[test]
    fn chasing_the_tail_is_allowed() {
        // Square of four: head moves into the cell the tail just vacated.
        let mut s = line(&[(1, 1), (2, 1), (2, 2), (1, 2)]);
        let next = s.peek_next_head(Direction::Down);
        assert_eq!(next, Cell::new(1, 2));
        s.advance(next, false);
        assert!(!s.collides_with_self(next));
    }

    #[test]
    fn turning_into_the_body_collides() {
        let mut s = line(&[(2, 1), (2, 2), (1, 2), (1, 1), (1, 0)]);
        let next = s.peek_next_head(Direction::Left);
        s.advance(next, false);
        assert!(s.collides_with_self(next));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }
}
