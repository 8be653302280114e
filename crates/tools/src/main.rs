use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{DungeonParameters, generate_dungeon};
use tools::config::load_parameters;
use tools::logging;
use tools::render::{LevelSummary, render_ascii};
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
    Fingerprint,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the generation stream
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file with generator parameters; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    logging::init("dungeon_core=info,dungeon=info");
    let args = Args::parse();

    let params = match &args.config {
        Some(path) => load_parameters(path)?,
        None => DungeonParameters::default(),
    };
    let result = generate_dungeon(&params, args.seed)
        .with_context(|| format!("Failed to generate a dungeon for seed {}", args.seed))?;
    info!(seed = args.seed, rooms = result.rooms.len(), cells = result.floor.len(), "generated");

    match args.format {
        OutputFormat::Ascii => print!("{}", render_ascii(&result)),
        OutputFormat::Json => {
            let summary = LevelSummary::new(args.seed, &result);
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize level summary")?;
            println!("{json}");
        }
        OutputFormat::Fingerprint => println!("{:016x}", result.fingerprint()),
    }

    Ok(())
}
