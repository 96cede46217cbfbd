use crate::command::Command;
use crate::highscore::HighScoreFile;
use crate::session::Session;
use crate::util::error_chain;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

/// Drives a [`Session`] from terminal input and writes a JSON frame to `out`
/// after every change
#[derive(Debug)]
pub(crate) struct App<W, R = rand::rngs::ThreadRng> {
    session: Session<R>,
    scores: HighScoreFile,
    out: W,
    quitting: bool,
}

impl<W: Write, R: Rng> App<W, R> {
    pub(crate) fn new(session: Session<R>, scores: HighScoreFile, out: W) -> App<W, R> {
        App {
            session,
            scores,
            out,
            quitting: false,
        }
    }

    pub(crate) fn run(mut self) -> io::Result<()> {
        self.emit()?;
        while !self.quitting {
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either an input event or the next scheduled tick, whichever
    /// comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(when) = self.session.next_deadline() {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                return self.handle_tick(Instant::now());
            }
        }
        self.handle_event(read()?, Instant::now())
    }

    fn handle_tick(&mut self, now: Instant) -> io::Result<()> {
        if self.session.poll(now).is_some() {
            self.save_high_score();
            self.emit()?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> io::Result<()> {
        let Some(ev) = event.as_key_press_event() else {
            return Ok(());
        };
        match Command::from_key_event(ev) {
            Some(Command::Quit) => {
                log::info!("Quit requested while {}", self.session.phase());
                self.quitting = true;
            }
            Some(cmd) => {
                if self.session.handle_command(cmd, now) {
                    self.save_high_score();
                    self.emit()?;
                }
            }
            None => (),
        }
        Ok(())
    }

    /// Persist the session's high score if it beats the stored one.  Failure
    /// is logged and otherwise ignored.
    fn save_high_score(&mut self) {
        if self.scores.path().is_none() {
            return;
        }
        let best = self.session.game().high_score();
        match self.scores.record(best) {
            Ok(true) => log::info!("New high score: {best}"),
            Ok(false) => (),
            Err(e) => log::warn!("Failed to save high score: {}", error_chain(&e)),
        }
    }

    fn emit(&mut self) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &self.session.frame())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
