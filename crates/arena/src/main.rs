//! Arena CLI
//!
//! Run headless matches between cubic chess engines.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use arena::{MatchConfig, MatchReport, MatchRunner};
use cube_core::Engine;
use random_engine::RandomEngine;
use tracing::info;

fn print_usage() {
    println!("Cubic chess arena");
    println!();
    println!("Usage:");
    println!("  arena [<engine1> <engine2>] [--games N] [--max-moves N]");
    println!("        [--config FILE.toml] [--out FILE.json]");
    println!();
    println!("Engines:");
    println!("  random        - Uniform random mover (entropy-seeded)");
    println!("  random:SEED   - Uniform random mover with a fixed seed");
    println!();
    println!("Examples:");
    println!("  arena random:1 random:2 --games 20");
    println!("  arena --config match.toml --out report.json");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "random" | "rand" => {
            if parts.len() > 1 {
                match parts[1].parse::<u64>() {
                    Ok(seed) => Box::new(RandomEngine::with_seed(seed)),
                    Err(_) => {
                        eprintln!("Warning: invalid seed in {}, using entropy", spec);
                        Box::new(RandomEngine::new())
                    }
                }
            } else {
                Box::new(RandomEngine::new())
            }
        }
        _ => {
            eprintln!("Unknown engine: {}, using random", spec);
            Box::new(RandomEngine::new())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut specs: Vec<String> = Vec::new();
    let mut config = MatchConfig::default();
    let mut out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--games" | "-g" => {
                i += 1;
                let val = args.get(i).ok_or_else(|| anyhow!("--games needs a value"))?;
                config.num_games = val.parse()?;
            }
            "--max-moves" | "-m" => {
                i += 1;
                let val = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--max-moves needs a value"))?;
                config.max_moves = val.parse()?;
            }
            "--config" | "-c" => {
                i += 1;
                let val = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--config needs a path"))?;
                config = MatchConfig::from_toml_file(Path::new(val)).map_err(|e| anyhow!(e))?;
            }
            "--out" | "-o" => {
                i += 1;
                let val = args.get(i).ok_or_else(|| anyhow!("--out needs a path"))?;
                out = Some(PathBuf::from(val));
            }
            other => {
                specs.push(other.to_string());
            }
        }
        i += 1;
    }

    if specs.len() > 2 {
        print_usage();
        return Err(anyhow!("expected at most two engine specifications"));
    }
    while specs.len() < 2 {
        specs.push("random".to_string());
    }

    let mut engine1 = create_engine(&specs[0]);
    let mut engine2 = create_engine(&specs[1]);

    info!(
        engine1 = engine1.name(),
        engine2 = engine2.name(),
        games = config.num_games,
        max_moves = config.max_moves,
        "starting match"
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let report = MatchReport {
        engine1: specs[0].clone(),
        engine2: specs[1].clone(),
        num_games: config.num_games,
        max_moves: config.max_moves,
        result,
    };
    info!("{}", report.summary());

    if let Some(path) = out {
        report.save(&path).map_err(|e| anyhow!(e))?;
        info!(path = %path.display(), "report saved");
    }

    Ok(())
}
