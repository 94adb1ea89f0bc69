//! Binary entry point for the parking-lot simulator.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use parklot::builders::build_session;
use parklot::config::SimulatorConfig;
use parklot::core::AppResult;
use parklot::parser::Tokenizer;
use parklot::runtime;
use parklot::util::telemetry;

/// Text-command-driven parking lot simulator.
#[derive(Debug, Parser)]
#[command(name = "parklot", version, about)]
struct Cli {
    /// Input file with one command per line. Reads commands interactively
    /// from stdin when omitted.
    input: Option<PathBuf>,

    /// Simulator configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config file {}", path.display()))?;
            SimulatorConfig::from_json_str(&raw).map_err(|e| anyhow::anyhow!(e))?
        }
        None => SimulatorConfig::default(),
    };
    cfg.apply_env().map_err(|e| anyhow::anyhow!(e))?;

    let session = build_session(&cfg)?;

    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            let mut tokenizer = Tokenizer::new(BufReader::new(file));
            runtime::run_batch(&session, &mut tokenizer, &mut io::stdout())
        }
        None => {
            let stdin = io::stdin();
            let mut tokenizer = Tokenizer::new(stdin.lock());
            runtime::run_interactive(
                &session,
                &mut tokenizer,
                &cfg.prompt,
                &mut io::stdout(),
                &mut io::stderr(),
            )?;
            Ok(())
        }
    }
}
