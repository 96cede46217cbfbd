//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use std::time::Duration;

/// Default time between movements of the snake, in milliseconds
pub(crate) const TICK_MILLIS: u64 = 150;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(TICK_MILLIS);

/// Width and height of the square grid, in cells
pub(crate) const GRID_SIZE: u16 = 20;

/// Where the snake's head starts at the beginning of each game
pub(crate) const START_CELL: Cell = Cell::new(10, 10);

/// The direction the snake faces at the beginning of each game
pub(crate) const START_DIRECTION: Direction = Direction::Up;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_REWARD: u32 = 10;

/// How many random draws to make when placing food before falling back to
/// scanning the grid for free cells
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Name of the program's directories under the user's config & data
/// directories
pub(crate) const APP_DIR_NAME: &str = "gridsnake";
