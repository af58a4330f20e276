//! Substring extractor
//!
//! Iterates the LCP-interval nodes from the last id down to 0, so deeper
//! (more specific) discoveries of a suffix-array range are visited in a
//! fixed order relative to the shallower intervals containing them, and
//! applies both boundary policies to every surviving candidate:
//!
//! - **strict**: a candidate is kept unmodified only if its span contains
//!   no sentinel byte. Identical substrings found at different nodes carry
//!   the same exact-occurrence count, so the map overwrites rather than
//!   accumulates (last writer wins).
//! - **trimmed**: the candidate is truncated at the first sentinel byte.
//!   Distinct spans can trim down to the same shorter substring, and their
//!   counts are genuinely additive, so the map accumulates.

use super::report::SeedMap;
use crate::corpus::SENTINEL_BYTE;
use crate::esa::EnhancedSuffixArray;
use serde::{Deserialize, Serialize};

/// Configuration for seed extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Maximum piece length in bytes (default: 100)
    pub max_piece_length: usize,
    /// Minimum occurrence count for a candidate (default: 2)
    pub min_frequency: u64,
    /// Minimum piece length in bytes (default: 2)
    ///
    /// Single-byte spans are too common to be informative seeds.
    pub min_piece_length: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_piece_length: 100,
            min_frequency: 2,
            min_piece_length: 2,
        }
    }
}

/// The two result mappings produced by one extraction run
#[derive(Debug)]
pub struct SeedExtraction {
    /// Strict policy: candidates spanning a sentinel are dropped
    pub strict: SeedMap,
    /// Trim policy: candidates are truncated at the first sentinel
    pub trimmed: SeedMap,
}

impl SeedExtraction {
    pub fn empty() -> Self {
        Self {
            strict: SeedMap::new(),
            trimmed: SeedMap::new(),
        }
    }
}

/// Extract repeated substrings from the interval tree under both policies
pub fn extract_seeds(esa: &EnhancedSuffixArray, config: &ExtractConfig) -> SeedExtraction {
    let text = esa.text();
    let sa = esa.suffix_array();
    let tree = esa.intervals();
    let n = text.len();

    let mut out = SeedExtraction::empty();

    for i in (0..tree.node_count()).rev() {
        let offset = sa[tree.left[i] as usize] as usize;
        let len = tree.depth[i] as usize;
        let frequency = (tree.right[i] - tree.left[i]) as u64;

        if len < config.min_piece_length || frequency < config.min_frequency {
            continue;
        }
        // An out-of-range span means the interval tree is defective;
        // skip it silently rather than fail the run.
        if offset + len > n {
            continue;
        }

        let span = &text[offset..offset + len];
        let sentinel_at = memchr::memchr(SENTINEL_BYTE, span);

        if sentinel_at.is_none() && len <= config.max_piece_length {
            out.strict.record(span, frequency);
        }

        let trimmed = &span[..sentinel_at.unwrap_or(len)];
        if trimmed.len() >= config.min_piece_length && trimmed.len() <= config.max_piece_length {
            out.trimmed.accumulate(trimmed, frequency);
        }
    }

    out
}
