mod cell;
mod direction;
mod food;
mod snake;
pub(crate) use self::cell::Cell;
pub(crate) use self::direction::Direction;
use self::food::place_food;
pub(crate) use self::snake::Snake;
use crate::consts;
use rand::Rng;
use serde::Serialize;

/// The complete state of one game of Snake.
///
/// Apart from the random choice of food cells, which draws on a caller-owned
/// RNG, every change goes through [`GameState::set_direction()`],
/// [`GameState::tick()`], or [`GameState::reset()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    snake: Snake,
    /// The direction applied by the most recent tick
    direction: Direction,
    /// The direction the next tick will move in
    pending: Direction,
    /// `None` only once the snake has filled the grid
    food: Option<Cell>,
    score: u32,
    high_score: u32,
    ending: Option<Ending>,
}

impl GameState {
    /// Start a new game.  `high_score` is the best score seen in earlier
    /// games.
    pub(crate) fn new<R: Rng + ?Sized>(rng: &mut R, high_score: u32) -> GameState {
        let snake = Snake::new(consts::START_CELL);
        let food = place_food(rng, &snake);
        GameState {
            snake,
            direction: consts::START_DIRECTION,
            pending: consts::START_DIRECTION,
            food,
            score: 0,
            high_score,
            ending: None,
        }
    }

    /// Request that the snake turn to `direction` on the next tick.
    ///
    /// The request is dropped if the game is over or if `direction` would
    /// send the snake straight back the way it last moved.  Of several valid
    /// requests between two ticks, the last one wins.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.alive() && !direction.is_opposite(self.direction) {
            self.pending = direction;
        }
    }

    /// Advance the game by one step.  Once the game is over this does nothing
    /// and returns [`Tick::Halted`].
    pub(crate) fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        if !self.alive() {
            return Tick::Halted;
        }
        self.direction = self.pending;
        let Some(new_head) = self.direction.advance(self.snake.head()) else {
            return self.end(Ending::Wall);
        };
        // The tail has not moved yet, so running into it counts.
        if self.snake.contains(new_head) {
            return self.end(Ending::SelfCollision);
        }
        self.snake.push_head(new_head);
        if self.food != Some(new_head) {
            self.snake.drop_tail();
            return Tick::Moved;
        }
        self.score += consts::FOOD_REWARD;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.food = place_food(rng, &self.snake);
        if self.food.is_none() {
            return self.end(Ending::BoardFilled);
        }
        Tick::Ate
    }

    /// Start the game over from the beginning, keeping only the high score
    pub(crate) fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = GameState::new(rng, self.high_score);
    }

    fn end(&mut self, ending: Ending) -> Tick {
        log::info!(
            "Game over: snake {ending} at length {} with score {}",
            self.snake.len(),
            self.score
        );
        self.ending = Some(ending);
        match ending {
            Ending::BoardFilled => Tick::BoardFilled,
            Ending::Wall | Ending::SelfCollision => Tick::Collided(ending),
        }
    }

    pub(crate) fn alive(&self) -> bool {
        self.ending.is_none()
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn direction(&self) -> Direction {
        self.pending
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn ending(&self) -> Option<Ending> {
        self.ending
    }
}

/// What happened during a call to [`GameState::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved one cell without eating
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The snake ran into a wall or itself and did not move
    Collided(Ending),
    /// The snake ate the food and now fills the entire grid
    BoardFilled,
    /// The game was already over
    Halted,
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Ending {
    Wall,
    SelfCollision,
    BoardFilled,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Ending::Wall => "hit a wall",
            Ending::SelfCollision => "ran into itself",
            Ending::BoardFilled => "filled the board",
        };
        f.pad(s)
    }
}

#[cfg(test)]
impl GameState {
    /// A game in which the snake covers every cell but (0, 0), with food on
    /// that cell and the head right next to it
    pub(crate) fn one_bite_from_full(score: u32, high_score: u32) -> GameState {
        let body = Cell::all()
            .filter(|&c| c != Cell::new(0, 0) && c != Cell::new(1, 0))
            .collect();
        GameState {
            snake: Snake {
                head: Cell::new(1, 0),
                body,
            },
            direction: Direction::Left,
            pending: Direction::Left,
            food: Some(Cell::new(0, 0)),
            score,
            high_score,
            ending: None,
        }
    }
}
