use super::cell::Cell;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the unit `(dx, dy)` step for this direction
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// Return the cell one step from `cell` in this direction, or `None` if
    /// that step would leave the grid.
    pub(crate) fn advance(self, cell: Cell) -> Option<Cell> {
        let (dx, dy) = self.delta();
        let x = cell.x.checked_add_signed(i16::from(dx))?;
        let y = cell.y.checked_add_signed(i16::from(dy))?;
        Some(Cell { x, y }).filter(|c| c.in_bounds())
    }
}
