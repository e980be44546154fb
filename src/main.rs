mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use grid_search::render::{Frame, OPENED_CELL, RETRACED_PATH_CELL};
use grid_search::{Board, SearchEngine, SearchState};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::cli::Cli;

/// Draws frames to stdout, clearing the screen and pausing in between when animating.
struct Screen {
    delay: Option<Duration>,
}

impl Screen {
    /// Shows an intermediate frame. Does nothing when headless.
    fn animate(&self, frame: &Frame) -> io::Result<()> {
        match self.delay {
            Some(delay) => {
                self.present(frame)?;
                thread::sleep(delay);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn present(&self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.delay.is_some() {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(stdout, "{}", frame)?;
        stdout.flush()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config()?;
    let text = fs::read_to_string(&config.board)
        .with_context(|| format!("could not read board {}", config.board.display()))?;
    let board = Board::parse(&text)
        .with_context(|| format!("invalid board {}", config.board.display()))?;
    info!(
        "Running {} on {}x{} board, goal reachable: {}",
        config.variant,
        board.width(),
        board.height(),
        board.solvable()
    );

    let screen = Screen {
        delay: config.frame_delay,
    };
    let mut engine = SearchEngine::new(board, config.variant)?;
    screen.animate(&Frame::new(engine.board()))?;
    let state = loop {
        let state = engine
            .step()
            .with_context(|| format!("{} failed", config.variant))?;
        if state.is_terminal() {
            break state;
        }
        screen.animate(&Frame::from_engine(&engine, config.show_open))?;
    };

    let mut frame = Frame::from_engine(&engine, config.show_open);
    if let Some(retrace) = engine.retrace() {
        for position in retrace {
            frame.mark(position, RETRACED_PATH_CELL);
            screen.animate(&frame)?;
        }
    }
    for position in engine.frontier_positions() {
        frame.mark(position, OPENED_CELL);
    }
    screen.present(&frame)?;

    match (state, engine.path_cost()) {
        (SearchState::Succeeded, Some(cost)) => {
            let length = engine.reconstructed_path().map_or(0, |path| path.len());
            println!(
                "{}: path of {} cells with cost {} after {} steps",
                config.variant,
                length,
                cost,
                engine.steps()
            );
        }
        _ => {
            eprintln!(
                "{}: no path from {} to {} after {} steps",
                config.variant,
                engine.start(),
                engine.goal(),
                engine.steps()
            );
        }
    }
    Ok(())
}
