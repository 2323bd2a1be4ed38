use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use snake_arcade::game::{BOARD_SIZE, GAME_SPEED_MS, GameConfig, GameEngine, TailPolicy};
use snake_arcade::modes::HumanMode;
use snake_arcade::storage::{FileStore, MemoryStore, ScoreStore};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Single-screen Snake in the terminal")]
struct Cli {
    /// Width and height of the board, in cells
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: usize,

    /// Milliseconds between two moves
    #[arg(long, default_value_t = GAME_SPEED_MS)]
    tick_ms: u64,

    /// Whether moving onto the tail cell that is about to move away is a collision
    #[arg(long, value_enum, default_value = "strict")]
    tail_policy: TailRule,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// File the high score is kept in
    #[arg(long, default_value = "snake_scores.json")]
    scores: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "snake_arcade.log")]
    log_file: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum TailRule {
    /// Entering the current tail cell ends the game
    Strict,
    /// The tail cell is free to enter when it moves away this tick
    Vacating,
}

impl From<TailRule> for TailPolicy {
    fn from(rule: TailRule) -> Self {
        match rule {
            TailRule::Strict => TailPolicy::Strict,
            TailRule::Vacating => TailPolicy::Vacating,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file, cli.log_level.into())?;

    let config = GameConfig {
        board_size: cli.board_size,
        tick_ms: cli.tick_ms,
        tail_policy: cli.tail_policy.into(),
        seed: cli.seed,
        ..Default::default()
    };

    let store: Box<dyn ScoreStore> = if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        info!("High score file: {:?}", cli.scores);
        Box::new(FileStore::new(cli.scores))
    };

    let engine = GameEngine::new(config, store).context("Invalid game configuration")?;

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    info!(
        "Exiting with high score {}",
        human_mode.engine().state().high_score
    );
    Ok(())
}
