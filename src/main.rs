use anyhow::{Context, Result};
use calcpad::keypad::render;
use calcpad::{CalculatorState, Config, Readout, Session, parse_script};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Four-function keypad calculator.
///
/// Keys are read from the arguments, or line by line from stdin when none
/// are given. Example: `calcpad 12 + 3 Enter`.
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Key script: digits, `.`, `+ - * /`, `=`, `%`, `c`, `Enter`, `Escape`, `neg`.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Print the calculator state and readout as JSON.
    #[arg(long)]
    json: bool,

    /// Print only the readout, without the keypad.
    #[arg(long)]
    no_keypad: bool,

    /// Copy the final result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a CalculatorState,
    readout: Readout,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_session(session: &Session, cli: &Cli) -> Result<()> {
    let readout = session.readout();

    if cli.json {
        let snapshot = Snapshot {
            state: session.state(),
            readout,
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else if session.config().display.show_keypad && !cli.no_keypad {
        for line in render(&readout, session.highlighted(Instant::now())) {
            println!("{}", line);
        }
    } else {
        println!("{}", readout.text);
    }

    Ok(())
}

fn run_interactive(session: &mut Session, cli: &Cli) -> Result<()> {
    print_session(session, cli)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match parse_script(trimmed) {
            Ok(inputs) => {
                session.feed(inputs);
                print_session(session, cli)?;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "Loaded config");

    let mut session = Session::new(config);

    if cli.keys.is_empty() {
        run_interactive(&mut session, &cli)?;
    } else {
        let inputs = parse_script(&cli.keys.join(" ")).context("Invalid key script")?;
        session.feed(inputs);
        print_session(&session, &cli)?;
    }

    if cli.copy && !session.copy_result() {
        anyhow::bail!("Nothing copied to clipboard");
    }

    Ok(())
}
