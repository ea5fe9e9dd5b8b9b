//! Wildlife photographer game driven by the reflex agent loop.

use anyhow::Result;
use clap::Parser;
use reflex::agent::run_until;
use reflex::config::{self, LogsConfig};
use reflex::scenario::{self, GameEvent};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play the photographer game: type s, r, a, f, o or t for each event.
#[derive(Parser, Debug)]
#[command(name = "reflex")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML).
    #[arg(long, env = config::CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Replay comma-separated event keys instead of reading stdin.
    #[arg(long, value_delimiter = ',')]
    script: Option<Vec<String>>,

    /// Print the step history as JSON when the game ends.
    #[arg(long)]
    history: bool,
}

fn init_logging(logs: &LogsConfig) -> Result<()> {
    let level = logs.level_filter()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // clap has already consulted REFLEX_CONFIG for `--config`.
    let mut config = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };
    config.console.record_history |= args.history;
    init_logging(&config.logs)?;
    info!("Configuration loaded successfully");

    if let Some(keys) = &args.script {
        let script = scenario::parse_script(&config, keys.iter().map(String::as_str));
        let mut agent = scenario::scripted_agent(script)?;
        let summary = run_until(&mut agent, &GameEvent::Terminate)?;

        for command in agent.environment().executed() {
            println!("{command:?}");
        }
        println!("{} cycles, {} commands", summary.cycles, summary.commands);
        if args.history {
            println!("{}", agent.controller().machine().history().to_json()?);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut agent = scenario::console_agent(&config, stdin.lock(), io::stdout())?;
    let summary = run_until(&mut agent, &GameEvent::Terminate)?;

    println!("\n{} cycles, {} commands", summary.cycles, summary.commands);
    if args.history {
        println!("{}", agent.controller().machine().history().to_json()?);
    }
    Ok(())
}
