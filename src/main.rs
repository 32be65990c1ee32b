use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use gridsnake::config::{DEFAULT_GRID_DIMENSION, GridSize, THEME_CLASSIC};
use gridsnake::game::GameState;
use gridsnake::input::{GameInput, InputHandler};
use gridsnake::renderer;
use gridsnake::score::{FileScoreStore, HighScoreStore, MemoryScoreStore};
use gridsnake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Grid dimension (the board is square).
    #[arg(long = "grid", default_value_t = DEFAULT_GRID_DIMENSION)]
    grid: u16,

    /// Seed the RNG for a reproducible food sequence.
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Skip reading and writing the high-score file.
    #[arg(long = "no-persist")]
    no_persist: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let bounds = GridSize::square(cli.grid.max(4));

    let store: Box<dyn HighScoreStore> = if cli.no_persist {
        Box::new(MemoryScoreStore::default())
    } else {
        Box::new(FileScoreStore::new())
    };

    // Built before entering raw mode so a persistence warning stays readable.
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed, store),
        None => GameState::new(bounds, store),
    };
    if let Some(error) = state.last_store_error() {
        eprintln!("Warning: could not read high score file: {error}");
    }

    run(&mut state)?;

    if let Some(error) = state.last_store_error() {
        eprintln!("Warning: high score persistence failed: {error}");
    }
    println!("Final score: {}  (high score: {})", state.score, state.high_score());

    Ok(())
}

fn run(state: &mut GameState) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let bounds = state.bounds();
    let mut last_tick = Instant::now();

    loop {
        let snapshot = state.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, bounds, &THEME_CLASSIC))?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= Duration::from_millis(state.tick_interval_ms) {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}
