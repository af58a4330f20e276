mod corpus;
mod error;
mod esa;
mod extract;
mod miner;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use extract::ExtractConfig;
use miner::SeedMiner;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "seedex")]
#[command(about = "Suffix-array frequent-substring miner for tokenizer seed vocabularies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine seed pieces from a corpus file (one sentence per line)
    Mine {
        /// Path to the corpus file
        corpus: PathBuf,

        /// Minimum occurrence count for a candidate
        #[arg(long, default_value_t = 2)]
        min_frequency: u64,

        /// Maximum piece length in bytes
        #[arg(long, default_value_t = 100)]
        max_piece_length: usize,

        /// Which boundary policy to report
        #[arg(long, value_enum, default_value_t = Mode::Both)]
        mode: Mode,

        /// Maximum entries to print per report (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Look up one piece in both mappings
    Probe {
        /// Path to the corpus file
        corpus: PathBuf,

        /// Piece to look up (exact match)
        piece: String,
    },
    /// Show summary statistics for both mappings
    Stats {
        /// Path to the corpus file
        corpus: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Strict,
    Trimmed,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mine {
            corpus,
            min_frequency,
            max_piece_length,
            mode,
            limit,
            json,
            no_color,
        } => {
            let config = ExtractConfig {
                max_piece_length,
                min_frequency,
                ..Default::default()
            };
            let seeds = mine_file(&corpus, config)?;

            if json {
                let mut reports = Vec::new();
                if mode != Mode::Trimmed {
                    reports.push(output::JsonReport::from_map("strict", &seeds.strict, limit));
                }
                if mode != Mode::Strict {
                    reports.push(output::JsonReport::from_map(
                        "trimmed",
                        &seeds.trimmed,
                        limit,
                    ));
                }
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                let color = !no_color;
                if mode != Mode::Trimmed {
                    output::print_seed_report(
                        "Strict (skip delimiter)",
                        &seeds.strict,
                        limit,
                        color,
                    )?;
                }
                if mode != Mode::Strict {
                    output::print_seed_report(
                        "Trimmed before delimiter",
                        &seeds.trimmed,
                        limit,
                        color,
                    )?;
                }
            }
        }
        Commands::Probe { corpus, piece } => {
            let seeds = mine_file(&corpus, ExtractConfig::default())?;

            println!("Probe '{}':", piece);
            for (name, map) in [("Strict", &seeds.strict), ("Trimmed", &seeds.trimmed)] {
                match map.get(piece.as_bytes()) {
                    Some(frequency) => {
                        println!("  {:8} present=true, freq={}", format!("{}:", name), frequency)
                    }
                    None => println!("  {:8} present=false", format!("{}:", name)),
                }
            }
        }
        Commands::Stats { corpus } => {
            let seeds = mine_file(&corpus, ExtractConfig::default())?;

            output::print_stats("Strict", &seeds.strict.stats())?;
            output::print_stats("Trimmed", &seeds.trimmed.stats())?;
        }
    }

    Ok(())
}

/// Load a line-delimited corpus file and run the mining pipeline
fn mine_file(path: &Path, config: ExtractConfig) -> Result<extract::SeedExtraction> {
    let content = std::fs::read_to_string(path)?;
    let sentences: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();

    if sentences.is_empty() {
        anyhow::bail!("No sentences found in {}", path.display());
    }

    let miner = SeedMiner::new(config);
    Ok(miner.mine(sentences)?)
}
