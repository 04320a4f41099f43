use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twentyfour::board::constants::{DEFAULT_SIZE, DEFAULT_TARGET};
use twentyfour::board::standard_deck;
use twentyfour::{Board, Operator};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Solve the 24 game
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(
    about = "Find every way to combine a set of cards with arithmetic operators into a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Cards to play; a random hand is dealt when omitted
    #[arg(allow_negative_numbers = true)]
    pub cards: Vec<i64>,

    /// Target value to reach
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: i64,

    /// Number of cards to deal when no cards are given
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Operators to use, e.g. "+-*/"
    #[arg(short, long, default_value = "+-*/")]
    pub operators: String,

    /// Seed for dealing a reproducible hand
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub board: Board,
    pub operators: Vec<Operator>,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a board and operator set
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let operators = Operator::parse_set(&args.operators).context("Invalid operator set")?;

    let board = if args.cards.is_empty() {
        let deck = standard_deck();
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Board::random(&deck, args.size, args.target, &mut rng)
            .context("Could not deal a hand")?
    } else {
        if args.seed.is_some() {
            bail!("--seed only applies when no cards are given");
        }
        Board::new(args.cards, args.target)
    };

    Ok(CliConfig {
        board,
        operators,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let board = &config.board;
    info!(
        "Searching for expressions over {:?} that equal {}",
        board.cards(),
        board.target()
    );

    let solutions = board.solve(&config.operators);

    println!("Cards: {:?}  Target: {}", board.cards(), board.target());
    if solutions.is_empty() {
        warn!("No matching expression found");
    }
    println!("{} Solutions:", solutions.len());
    for solution in &solutions {
        println!("{}", solution);
    }
    Ok(())
}
