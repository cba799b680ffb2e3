//! scenario-gen: build a COLREGS logical scenario and search for or score instances.
//!
//! Usage:
//!   scenario-gen search --vessels 3 --relation head_on:0:1 --relation crossing:2:0 --seed 7
//!   scenario-gen score --vessels 2 --relation head_on:0:1 --vector 0,0,0,100,5,0,3000,3.1416,100,5

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use colregs_core::config::EvaluationConfig;
use colregs_eval::{LogicalScenario, RelationSpec};
use colregs_search::{ScenarioSearch, SearchConfig};

#[derive(Parser)]
#[command(name = "scenario-gen")]
#[command(about = "Generate and score COLREGS encounter scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScenarioArgs {
    /// Number of vessels, own ship included
    #[arg(long, default_value_t = 2)]
    vessels: usize,

    /// Relation as kind:first:second, e.g. head_on:0:1 (repeatable)
    #[arg(long = "relation", short = 'r')]
    relations: Vec<RelationSpec>,

    /// Evaluation config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a decision vector that satisfies every relation
    Search {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of scored candidates
        #[arg(long)]
        iterations: Option<usize>,

        /// Search config JSON file; --seed and --iterations override it
        #[arg(long)]
        search_config: Option<PathBuf>,

        /// Write the outcome JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Score one flat decision vector
    Score {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Comma-separated x,y,heading,length,speed per vessel
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        vector: Vec<f64>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            scenario,
            seed,
            iterations,
            search_config,
            output,
        } => {
            let scenario = build_scenario(&scenario)?;
            let mut config = match search_config {
                Some(path) => SearchConfig::from_json(&read(&path)?)?,
                None => SearchConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(iterations) = iterations {
                config.max_iterations = iterations;
            }

            let outcome = ScenarioSearch::new(&scenario, config)?.run();
            let json = serde_json::to_string_pretty(&outcome)?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{json}"),
            }
            if !outcome.satisfied {
                bail!(
                    "no satisfying instance within {} candidates (best penalty {})",
                    outcome.iterations,
                    outcome.penalty
                );
            }
        }
        Commands::Score { scenario, vector } => {
            let scenario = build_scenario(&scenario)?;
            let penalty = scenario.score(&vector)?;
            println!("{}", serde_json::to_string_pretty(&penalty)?);
            eprintln!(
                "total {} ({})",
                penalty.total(),
                if scenario.is_satisfied(&penalty) {
                    "satisfied"
                } else {
                    "violated"
                }
            );
        }
    }
    Ok(())
}

/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_scenario(args: &ScenarioArgs) -> Result<LogicalScenario> {
    let config = match &args.config {
        Some(path) => EvaluationConfig::from_json(&read(path)?)?,
        None => EvaluationConfig::default(),
    };
    LogicalScenario::from_relations(args.vessels, &args.relations, config)
        .context("building logical scenario")
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
