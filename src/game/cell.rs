use crate::consts::GRID_SIZE;
use serde::Serialize;

/// A cell on the grid.  `(0, 0)` is the top-left corner; `x` grows to the
/// right and `y` grows downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }

    /// Returns true if the cell lies on the grid
    pub(crate) fn in_bounds(self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Cell { x, y }))
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Cell {
        Cell { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_grid() {
        let cells = Cell::all().collect::<Vec<_>>();
        assert_eq!(cells.len(), usize::from(GRID_SIZE) * usize::from(GRID_SIZE));
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.get(1), Some(&Cell::new(1, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(GRID_SIZE - 1, GRID_SIZE - 1)));
        assert!(cells.iter().all(|c| c.in_bounds()));
    }

    #[test]
    fn out_of_bounds() {
        assert!(!Cell::new(GRID_SIZE, 0).in_bounds());
        assert!(!Cell::new(0, GRID_SIZE).in_bounds());
        assert!(Cell::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
    }
}
