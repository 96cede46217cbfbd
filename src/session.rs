use crate::command::Command;
use crate::game::{Cell, Direction, Ending, GameState, Snake, Tick};
use crate::timer::Ticker;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// A game together with its lifecycle and tick timer.
///
/// The session is the only thing that mutates its [`GameState`].  Input
/// arrives through [`Session::handle_command()`], and ticks happen when
/// [`Session::poll()`] is called at or after [`Session::next_deadline()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    game: GameState,
    phase: Phase,
    ticker: Ticker,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(high_score: u32, tick_period: Duration) -> Self {
        Session::new_with_rng(high_score, tick_period, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(high_score: u32, tick_period: Duration, mut rng: R) -> Session<R> {
        let game = GameState::new(&mut rng, high_score);
        Session {
            rng,
            game,
            phase: Phase::Ready,
            ticker: Ticker::new(tick_period),
        }
    }

    /// Apply an input command received at `now`.  Returns `true` if the
    /// session's visible state may have changed.  [`Command::Quit`] is left
    /// to the caller and is ignored here.
    pub(crate) fn handle_command(&mut self, cmd: Command, now: Instant) -> bool {
        match cmd {
            Command::Turn(d) => self.turn(d),
            Command::TogglePause => match self.phase {
                Phase::Running => self.pause(),
                Phase::Paused => self.resume(now),
                Phase::Ready | Phase::Terminal => false,
            },
            Command::Start => self.start(now),
            Command::Step => match self.step(now) {
                Ok(_) => true,
                Err(e) => {
                    log::debug!("Ignoring step command: {e}");
                    false
                }
            },
            Command::Reset => {
                self.reset();
                true
            }
            Command::Quit => false,
        }
    }

    /// Buffer a direction change for the next tick.  Accepted while ready,
    /// running, or paused.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::Terminal {
            return false;
        }
        let before = self.game.direction();
        self.game.set_direction(direction);
        self.game.direction() != before
    }

    /// Begin play from the ready state, or start a fresh game after a game
    /// over.  Does nothing while a game is running or paused.
    pub(crate) fn start(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Ready => (),
            Phase::Terminal => self.game.reset(&mut self.rng),
            Phase::Running | Phase::Paused => return false,
        }
        self.set_phase(Phase::Running);
        self.ticker.arm(now);
        true
    }

    pub(crate) fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.ticker.cancel();
        self.set_phase(Phase::Paused);
        true
    }

    pub(crate) fn resume(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.set_phase(Phase::Running);
        self.ticker.arm(now);
        true
    }

    /// Throw away the current game and return to the ready state.  The high
    /// score is kept.
    pub(crate) fn reset(&mut self) {
        self.ticker.cancel();
        self.game.reset(&mut self.rng);
        self.set_phase(Phase::Ready);
    }

    /// Run the scheduled tick if it has come due by `now`
    pub(crate) fn poll(&mut self, now: Instant) -> Option<Tick> {
        if self.phase != Phase::Running {
            return None;
        }
        let token = self.ticker.fire(now)?;
        let tick = self.advance();
        if self.phase == Phase::Running {
            self.ticker.complete(token, now);
        }
        Some(tick)
    }

    /// Tick immediately, outside of the timer.  The next timed tick is
    /// rescheduled a full period after `now`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the session is not running.
    pub(crate) fn step(&mut self, now: Instant) -> Result<Tick, SessionError> {
        if self.phase != Phase::Running {
            return Err(SessionError::InvalidState(self.phase));
        }
        self.ticker.cancel();
        let tick = self.advance();
        if self.phase == Phase::Running {
            self.ticker.arm(now);
        }
        Ok(tick)
    }

    fn advance(&mut self) -> Tick {
        let tick = self.game.tick(&mut self.rng);
        if !self.game.alive() {
            self.ticker.cancel();
            self.set_phase(Phase::Terminal);
        }
        tick
    }
}

impl<R> Session<R> {
    pub(crate) fn game(&self) -> &GameState {
        &self.game
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// When the next tick is due, if one is scheduled
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    pub(crate) fn frame(&self) -> Frame<'_> {
        Frame {
            phase: self.phase,
            snake: self.game.snake(),
            food: self.game.food(),
            direction: self.game.direction(),
            score: self.game.score(),
            high_score: self.game.high_score(),
            alive: self.game.alive(),
            ending: self.game.ending(),
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            log::debug!("Session {} -> {}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Phase {
    /// A fresh game that has not started moving yet
    Ready,
    Running,
    Paused,
    /// The game is over
    Terminal,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Ready => "ready",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Terminal => "over",
        };
        f.pad(name)
    }
}

/// A snapshot of a session, as reported to whatever draws the game
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Frame<'a> {
    phase: Phase,
    snake: &'a Snake,
    food: Option<Cell>,
    direction: Direction,
    score: u32,
    high_score: u32,
    alive: bool,
    ending: Option<Ending>,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SessionError {
    #[error("cannot advance the game while it is {0}")]
    InvalidState(Phase),
}

#[cfg(test)]
impl<R> Session<R> {
    pub(crate) fn replace_game(&mut self, game: GameState) {
        self.game = game;
    }
}
