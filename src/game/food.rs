use super::cell::Cell;
use super::snake::Snake;
use crate::consts::{GRID_SIZE, MAX_FOOD_ATTEMPTS};
use rand::{seq::IteratorRandom, Rng};

/// Pick a cell for the next piece of food that the snake does not occupy.
///
/// Cells are drawn uniformly at random up to [`MAX_FOOD_ATTEMPTS`] times; if
/// every draw lands on the snake, a free cell is chosen directly from all of
/// the unoccupied cells instead.  Returns `None` if the snake fills the grid.
pub(crate) fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Cell> {
    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = Cell::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
    log::debug!("Random food placement failed {MAX_FOOD_ATTEMPTS} times; scanning for a free cell");
    Cell::all().filter(|&c| !snake.contains(c)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// A snake covering every cell of the grid except those in `free`
    fn snake_covering_all_but(free: &[Cell]) -> Snake {
        let mut cells = Cell::all().filter(|c| !free.contains(c));
        let head = cells.next().expect("grid should not be entirely free");
        Snake {
            head,
            body: cells.collect::<VecDeque<_>>(),
        }
    }

    #[test]
    fn avoids_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake {
            head: Cell::new(10, 10),
            body: (0..GRID_SIZE).map(|x| Cell::new(x, 11)).collect(),
        };
        for _ in 0..500 {
            let food = place_food(&mut rng, &snake).expect("grid has free cells");
            assert!(food.in_bounds());
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let free = Cell::new(13, 7);
        let snake = snake_covering_all_but(&[free]);
        assert_eq!(place_food(&mut rng, &snake), Some(free));
    }

    #[test]
    fn full_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = snake_covering_all_but(&[]);
        assert_eq!(snake.len(), usize::from(GRID_SIZE) * usize::from(GRID_SIZE));
        assert_eq!(place_food(&mut rng, &snake), None);
    }
}
