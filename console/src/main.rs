mod commands;
mod config;
mod game_session;
mod runner;
mod saved_session;
mod ui;

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use tokio::sync::mpsc;
use tictactoe_common::logger::{self, LogTarget};
use tictactoe_common::tictactoe::Difficulty;
use tictactoe_common::{SessionRng, log};

use commands::Command;
use config::{Config, get_config_manager};
use game_session::GameSession;
use runner::{ConsoleContext, run_console};
use saved_session::{DEFAULT_SAVE_FILE, get_session_store};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Settings file (difficulty, scores). Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where an unfinished game is saved on quit.
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    #[arg(long, default_value = "tictactoe_console.log")]
    log_file: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    /// easy, harder or expert. Overrides the saved setting.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Pause before the computer moves, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    reset_scores: bool,

    /// Ignore any saved game and start fresh.
    #[arg(long)]
    new_game: bool,
}

fn spawn_input_reader(command_tx: mpsc::UnboundedSender<Command>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            let quit = command == Command::Quit;
            if command_tx.send(command).is_err() || quit {
                break;
            }
        }
    });
}

fn load_config(args: &Args) -> (config::SettingsManager, Config) {
    let settings = get_config_manager(args.config.as_deref());
    let mut config = match settings.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load settings, using defaults: {}", e);
            eprintln!("Failed to load settings, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.opponent_delay_ms = delay_ms;
    }
    if args.reset_scores {
        config.scores.reset();
    }

    (settings, config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::file(&args.log_file)?);

    let (settings, config) = load_config(&args);
    let mut session = GameSession::new(config.difficulty, config.scores, config.human_starts_next);

    let session_store = get_session_store(&args.save_file);
    if args.new_game {
        session_store.clear()?;
    } else {
        match session_store.load() {
            Ok(Some(saved)) if !saved.game_over => match session.restore(&saved) {
                Ok(()) => log!("Restored game saved at {:?}", saved.saved_at),
                Err(e) => log!("Saved game rejected, starting fresh: {}", e),
            },
            Ok(_) => {}
            Err(e) => {
                log!("Saved game unreadable, starting fresh: {}", e);
                eprintln!("Saved game unreadable, starting fresh: {}", e);
            }
        }
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Console started: difficulty {}, seed {}",
        session.difficulty(),
        rng.seed()
    );

    let context = ConsoleContext {
        settings,
        session_store,
        rng,
        opponent_delay: Duration::from_millis(config.opponent_delay_ms),
    };

    println!("Tic-tac-toe. You are X, the computer is O. Type 'h' for help.");
    println!("Difficulty: {}", session.difficulty());
    println!("{}", ui::render_scores(&session.scores()));

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    spawn_input_reader(command_tx);

    run_console(session, context, command_rx).await;

    Ok(())
}
