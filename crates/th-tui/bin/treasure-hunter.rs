//! Treasure Hunter
//!
//! Main entry point for the game.

use std::io;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use th_core::difficulty::Difficulty;
use th_core::{GameLoopResult, GameRng, GameState};
use th_tui::{App, Theme};

/// Treasure Hunter in the terminal
#[derive(Parser, Debug)]
#[command(name = "treasure-hunter")]
#[command(author, version, about = "Treasure Hunter - Find the three treasures!", long_about = None)]
struct Args {
    /// Hunter name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Difficulty (easy, normal, hard, samurai; single letters work)
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<String>,

    /// Seed the random stream for a reproducible hunt
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Force the light-background theme
    #[arg(long = "light")]
    light: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    // Show version info
    if args.verbose {
        println!("Treasure Hunter {}", env!("CARGO_PKG_VERSION"));
        println!("A text-mode hunt for the three treasures");
        return Ok(());
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Anything the CLI didn't provide is gathered by the setup screens
    let state = match new_game_from_args(&args) {
        Some(state) => state,
        None => run_setup(&mut terminal, &args, theme)?,
    };

    let mut app = App::new(state, theme);

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                let result = app.execute(command);

                if result == GameLoopResult::HunterQuit {
                    // Show the farewell before tearing the terminal down
                    terminal.draw(|frame| app.render(frame))?;
                    std::thread::sleep(Duration::from_secs(1));
                }
            }

            if app.should_quit() {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Build the game straight from CLI args when both name and difficulty
/// are given. An unparseable difficulty falls back to the setup screens.
fn new_game_from_args(args: &Args) -> Option<GameState> {
    let name = args.name.clone()?;
    let difficulty = Difficulty::from_str(args.difficulty.as_deref()?).ok()?;
    Some(GameState::new(name, difficulty, seeded_rng(args)))
}

fn seeded_rng(args: &Args) -> GameRng {
    match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}

/// Run the TUI setup screens and return the new game state
fn run_setup(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    args: &Args,
    theme: Theme,
) -> io::Result<GameState> {
    // Placeholder state shown behind the setup overlay
    let temp_state = GameState::new("Hunter", Difficulty::default(), seeded_rng(args));
    let mut app = App::new(temp_state, theme);

    // Start setup - with the name if provided via CLI
    if let Some(ref name) = args.name {
        app.start_new_game_with_name(name.clone());
    } else {
        app.start_new_game();
    }

    // Setup loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            // Check if setup is complete
            if let Some(choices) = app.setup_choices() {
                app.finish_setup();
                return Ok(GameState::new(
                    choices.name,
                    choices.difficulty,
                    seeded_rng(args),
                ));
            }

            // Check if user quit during setup
            if app.should_quit() {
                // Restore terminal before exiting
                disable_raw_mode()?;
                execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                terminal.show_cursor()?;
                std::process::exit(0);
            }
        }
    }
}
