use anyhow::{Context, Result};
use argand::{Config, Divisor, DivisorSet, Interpreter, DEFAULT_CAPACITY, HELP};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

/// Complex number calculator which names familiar constants
#[derive(Parser)]
#[command(
    name = "argand",
    version,
    about = "Complex number calculator which names familiar constants",
    after_help = r#"
Values which are a round multiple of a known divisor are shown symbolically,
e.g. 1.0606601717798212 is shown as 3*(sqrt(2)*1/4).

Environment Variables:
  ARGAND_DEBUG=1                Enable debug logging
  ARGAND_LOG_LEVEL=debug        Set log level (error, warn, info, debug, trace)
  ARGAND_CAPACITY=100           How many results to keep
  ARGAND_COMBINATION_SIZE=2     Base divisors per extended divisor
  ARGAND_DIVISORS=wide          Built-in divisor set (standard, wide)
"#
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, env = "ARGAND_DEBUG")]
    debug: bool,

    /// Set log level
    #[arg(long, value_enum, env = "ARGAND_LOG_LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// How many results to keep before 'clear' is needed
    #[arg(long, env = "ARGAND_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// How many base divisors to multiply into each extended divisor
    #[arg(
        short = 'k',
        long,
        env = "ARGAND_COMBINATION_SIZE",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    combination_size: u8,

    /// Built-in base divisors
    #[arg(long, value_enum, env = "ARGAND_DIVISORS", default_value = "standard")]
    divisors: DivisorSet,

    /// Additional base divisor, tried after the built-in ones
    #[arg(long = "divisor", value_name = "LABEL=VALUE")]
    extra_divisors: Vec<Divisor>,

    /// Don't print the usage text on start
    #[arg(short, long)]
    quiet: bool,

    /// File of commands to run instead of reading standard input
    script: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        cli.log_level.into()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(log_level)
        .init();

    info!("argand v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = Config {
        capacity: cli.capacity,
        combination_size: cli.combination_size.into(),
        divisors: cli.divisors.divisors(),
    };
    config.divisors.extend(cli.extra_divisors);
    let catalog = config.catalog();
    let mut interpreter = Interpreter::new(&catalog, config.capacity);

    let mut stdout = io::stdout().lock();
    if !cli.quiet {
        writeln!(stdout, "{HELP}\n")?;
    }

    let session = match cli.script {
        Some(path) => {
            info!("Running commands from {path:?}");
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script file: {path:?}"))?;
            interpreter.run(BufReader::new(file), stdout)
        }
        None => interpreter.run(io::stdin().lock(), stdout),
    };
    session.context("Failed to read calculator input")?;

    info!("argand exiting");
    Ok(())
}
