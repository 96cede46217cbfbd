use super::cell::Cell;
use serde::{ser::Serializer, Serialize};
use std::collections::VecDeque;

/// Snake state.
///
/// Serializes as the list of every occupied cell, head first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake, from the neck to the tip of
    /// the tail
    pub(super) body: VecDeque<Cell>,
}

impl Snake {
    /// Create a new snake that occupies only `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Total number of cells occupied, head included
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Iterate over the occupied cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Move the head onto `cell`, keeping the tail where it is.  Follow with
    /// [`Snake::drop_tail()`] for a plain move.
    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(self.head);
        self.head = cell;
    }

    /// Remove the last cell of the body.  A snake with no body keeps its
    /// head.
    pub(crate) fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}

impl Serialize for Snake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_and_move() {
        let mut snake = Snake::new(Cell::new(10, 10));
        snake.push_head(Cell::new(11, 10));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(11, 10));
        snake.push_head(Cell::new(12, 10));
        snake.drop_tail();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(12, 10), Cell::new(11, 10)]
        );
        assert!(!snake.contains(Cell::new(10, 10)));
    }

    #[test]
    fn tail_of_single_cell_stays() {
        let mut snake = Snake::new(Cell::new(3, 4));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(3, 4));
    }

    #[test]
    fn serializes_head_first() {
        let snake = Snake {
            head: Cell::new(5, 5),
            body: VecDeque::from([Cell::new(5, 6), Cell::new(5, 7)]),
        };
        assert_eq!(
            serde_json::to_string(&snake).unwrap(),
            r#"[{"x":5,"y":5},{"x":5,"y":6},{"x":5,"y":7}]"#
        );
    }
}
