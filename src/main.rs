mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod session;
mod timer;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::highscore::HighScoreFile;
use crate::session::Session;
use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = match Config::default_path() {
        Ok(path) => Config::load(&path, true)
            .with_context(|| format!("failed to load {}", path.display()))?,
        Err(_) => Config::default(),
    };
    if let Some(path) = config.log_file() {
        if let Err(e) = init_logging(&path) {
            eprintln!("gridsnake: logging disabled: {e:#}");
        }
    }
    log::info!("Starting gridsnake");
    let mut scores = HighScoreFile::new(config.high_score_file());
    if let Some(path) = scores.path() {
        log::info!("High score file: {}", path.display());
    }
    let high_score = scores.load_or_default();
    let session = Session::new(high_score, config.game.tick_period);
    let _raw = RawMode::enable()?;
    App::new(session, scores, io::stdout().lock()).run()?;
    log::info!("Exiting");
    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}

/// Keeps the terminal in raw mode for as long as it is alive, so that key
/// presses arrive one at a time without echo
#[derive(Debug)]
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<RawMode> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::error!("Failed to restore terminal mode: {e}");
        }
    }
}
