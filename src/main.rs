#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::Read;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::process::ExitCode;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battlefield::{
    init_logging, inspect, random_field, FleetRules, FleetTally, Grid, DEFAULT_COLS, DEFAULT_ROWS,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(short, long, global = true, help = "Log every detected ship and violation to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Check whether a field holds a legal fleet. Exits 0 if valid, 1 if not.
    Validate {
        /// Field file: rows of 0/1, or a JSON array of rows. Reads stdin if omitted.
        file: Option<PathBuf>,
        #[arg(long, help = "Print the full report as JSON")]
        json: bool,
    },
    /// Print a randomly generated legal field.
    Generate {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible fields (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(feature = "std")]
fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Validate { file, json } => {
            let input = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading stdin")?;
                    buf
                }
            };
            let grid = parse_grid(&input)?;
            let report = inspect(&grid);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_valid() {
                println!("valid");
            } else {
                println!("invalid");
                println!("  found: {}", fleet_summary(&report.tally));
                for v in &report.violations {
                    println!("  {}", v);
                }
            }
            Ok(if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Generate { rows, cols, seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let grid = random_field(&mut rng, rows, cols, &FleetRules::STANDARD)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", grid);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `"Submarine x4, Destroyer x3"` for the kinds detected, shortest first.
#[cfg(feature = "std")]
fn fleet_summary(tally: &FleetTally) -> String {
    if tally.total() == 0 {
        return "no ships".to_string();
    }
    tally
        .iter()
        .map(|(kind, n)| format!("{} x{}", kind, n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text rows of 0/1, or a JSON array of rows when the input starts with `[`.
#[cfg(feature = "std")]
fn parse_grid(input: &str) -> anyhow::Result<Grid> {
    if input.trim_start().starts_with('[') {
        let rows: Vec<Vec<u8>> = serde_json::from_str(input).context("parsing JSON field")?;
        Ok(Grid::from_rows(&rows)?)
    } else {
        Ok(input.parse::<Grid>()?)
    }
}
