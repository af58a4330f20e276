//! Output formatting for mining reports

use crate::extract::{SeedMap, SeedStats};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a ranked `(rank, piece, frequency)` report for one mapping
///
/// Entries are in lexicographic order; `limit` of 0 means unlimited.
pub fn print_seed_report(
    title: &str,
    map: &SeedMap,
    limit: usize,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "=== {} ===", title)?;
    stdout.reset()?;
    writeln!(stdout, "Found {} unique substrings:", map.len())?;

    let entries = map.sorted_entries();
    let shown = if limit == 0 { entries.len() } else { limit };

    for (rank, (piece, frequency)) in entries.iter().take(shown).enumerate() {
        write!(stdout, "  {:3}. ", rank + 1)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "'{}'", String::from_utf8_lossy(piece))?;
        stdout.reset()?;
        writeln!(stdout, " (freq: {})", frequency)?;
    }

    if entries.len() > shown {
        writeln!(stdout, "  ... and {} more", entries.len() - shown)?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Print summary statistics for one mapping
pub fn print_stats(title: &str, stats: &SeedStats) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    writeln!(stdout, "{} statistics:", title)?;
    writeln!(stdout, "  Unique substrings:   {}", stats.unique_count)?;
    writeln!(stdout, "  Single character:    {}", stats.single_char_count)?;
    writeln!(stdout, "  Multi character:     {}", stats.multi_char_count)?;
    writeln!(stdout, "  Mean length:         {:.2}", stats.mean_length)?;
    match &stats.longest {
        Some(piece) => writeln!(
            stdout,
            "  Longest substring:   '{}' ({} bytes)",
            String::from_utf8_lossy(piece),
            piece.len()
        )?,
        None => writeln!(stdout, "  Longest substring:   -")?,
    }
    writeln!(stdout, "  Total frequency:     {}", stats.total_frequency)?;
    writeln!(stdout)?;

    Ok(())
}

/// JSON-serializable report for one mapping
#[derive(Serialize)]
pub struct JsonReport {
    pub policy: String,
    pub unique_count: usize,
    pub total_frequency: u64,
    pub entries: Vec<JsonEntry>,
}

#[derive(Serialize)]
pub struct JsonEntry {
    pub rank: usize,
    pub piece: String,
    pub frequency: u64,
}

impl JsonReport {
    pub fn from_map(policy: &str, map: &SeedMap, limit: usize) -> Self {
        let entries = map.sorted_entries();
        let shown = if limit == 0 { entries.len() } else { limit };
        let stats = map.stats();

        Self {
            policy: policy.to_string(),
            unique_count: stats.unique_count,
            total_frequency: stats.total_frequency,
            entries: entries
                .iter()
                .take(shown)
                .enumerate()
                .map(|(rank, (piece, frequency))| JsonEntry {
                    rank: rank + 1,
                    piece: String::from_utf8_lossy(piece).into_owned(),
                    frequency: *frequency,
                })
                .collect(),
        }
    }
}
