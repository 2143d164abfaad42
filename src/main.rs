mod body;
mod consts;
mod direction;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod session;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::{Game, GameState};
use input::Input;
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(consts::LOG_FILE)?,
    )
    .expect("Failed to initialize logger");

    info!("Starting gridsnek");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new(consts::GRID_SIZE, rand::random());
    let result = run(&mut terminal, &mut game);

    // Cleanup terminal, even if the loop failed, running every step before
    // reporting the first error
    let cleanup = [
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];

    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }
    for step in &cleanup {
        if let Err(e) = step {
            error!("Terminal cleanup failed: {}", e);
        }
    }
    info!("Exiting gridsnek");
    result?;
    cleanup.into_iter().collect()
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &mut Game) -> io::Result<()> {
    loop {
        let mut inputs = Vec::new();
        let mut pressed = false;

        // Drain everything that arrived since the last tick without blocking
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                pressed |= key.kind == KeyEventKind::Press;
                inputs.extend(Input::from_key(key));
            }
        }

        match game.state {
            GameState::Playing(_) => game.tick(inputs),
            GameState::GameOver { .. } if pressed => game.acknowledge(),
            _ => {}
        }

        if game.is_exiting() {
            break;
        }

        terminal.draw(|f| game.render(f))?;
        thread::sleep(consts::TICK_PERIOD);
    }

    Ok(())
}
