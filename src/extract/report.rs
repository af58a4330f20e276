//! Result aggregation
//!
//! Final substring-to-frequency mappings with exact-match lookup, a
//! deterministic lexicographically sorted report, and derived summary
//! statistics. Keys are raw byte strings; display decodes them lossily.

use ahash::AHashMap;

/// Mapping from substring to occurrence frequency
#[derive(Debug, Default)]
pub struct SeedMap {
    map: AHashMap<Vec<u8>, u64>,
}

impl SeedMap {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    /// Overwrite semantics: last writer wins
    ///
    /// Used by the strict policy, where identical substrings discovered at
    /// different nodes carry the same exact-occurrence count.
    pub fn record(&mut self, piece: &[u8], frequency: u64) {
        self.map.insert(piece.to_vec(), frequency);
    }

    /// Accumulate semantics: frequencies sum across discoveries
    ///
    /// Used by the trim policy, where distinct spans can reduce to the
    /// same piece with genuinely additive counts.
    pub fn accumulate(&mut self, piece: &[u8], frequency: u64) {
        *self.map.entry(piece.to_vec()).or_insert(0) += frequency;
    }

    /// Exact-match lookup
    pub fn get(&self, piece: &[u8]) -> Option<u64> {
        self.map.get(piece).copied()
    }

    pub fn contains(&self, piece: &[u8]) -> bool {
        self.map.contains_key(piece)
    }

    /// Number of unique pieces
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.map.iter().map(|(k, &v)| (k.as_slice(), v))
    }

    /// Entries in lexicographic byte order, for reproducible reporting
    pub fn sorted_entries(&self) -> Vec<(&[u8], u64)> {
        let mut entries: Vec<(&[u8], u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Derived summary statistics over the mapping
    pub fn stats(&self) -> SeedStats {
        let mut stats = SeedStats::default();
        let mut total_len = 0usize;

        // Lexicographic traversal makes the longest-key tie break
        // deterministic: first in sort order wins.
        for (piece, frequency) in self.sorted_entries() {
            stats.unique_count += 1;
            if piece.len() == 1 {
                stats.single_char_count += 1;
            } else {
                stats.multi_char_count += 1;
            }
            total_len += piece.len();
            stats.total_frequency += frequency;

            let longest_so_far = stats.longest.as_ref().map(|l| l.len()).unwrap_or(0);
            if piece.len() > longest_so_far {
                stats.longest = Some(piece.to_vec());
            }
        }

        if stats.unique_count > 0 {
            stats.mean_length = total_len as f64 / stats.unique_count as f64;
        }
        stats
    }
}

/// Summary statistics for one result mapping
#[derive(Debug, Clone, Default)]
pub struct SeedStats {
    pub unique_count: usize,
    pub single_char_count: usize,
    pub multi_char_count: usize,
    pub mean_length: f64,
    pub longest: Option<Vec<u8>>,
    pub total_frequency: u64,
}
