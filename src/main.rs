//! Headless simulation runner (default binary).
//!
//! Drives the engine end to end with the scripted controller in
//! [`blockfall::sim`]. Runs until game over or a piece cap and prints the final
//! snapshot as JSON. Set `RUST_LOG=debug` to trace the engine.
//!
//! Usage: `blockfall-sim [CONFIG.json] [--seed N] [--pieces N]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use blockfall::core::EngineConfig;
use blockfall::sim;

const DEFAULT_PIECE_CAP: u32 = 500;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    pieces: Option<u32>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().context("--seed needs a value")?;
                    parsed.seed = Some(value.parse().with_context(|| format!("invalid seed {value:?}"))?);
                }
                "--pieces" => {
                    let value = args.next().context("--pieces needs a value")?;
                    parsed.pieces = Some(value.parse().with_context(|| format!("invalid piece cap {value:?}"))?);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if parsed.config.is_some() {
                        bail!("unexpected argument {path:?}");
                    }
                    parsed.config = Some(PathBuf::from(path));
                }
            }
        }
        Ok(parsed)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1))?;
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let snapshot = sim::run(&config, args.pieces.unwrap_or(DEFAULT_PIECE_CAP))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
