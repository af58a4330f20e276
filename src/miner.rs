//! Top-level mining pipeline
//!
//! One sequential run: sentences -> corpus encoder -> enhanced suffix
//! array -> substring extractor -> aggregated mappings. Each run owns its
//! byte sequence and derived arrays exclusively; nothing is shared or
//! persisted across runs.

use crate::corpus::CorpusEncoder;
use crate::error::MineResult;
use crate::esa::EnhancedSuffixArray;
use crate::extract::{ExtractConfig, SeedExtraction, extract_seeds};

/// Frequent-substring miner over a sentence corpus
pub struct SeedMiner {
    config: ExtractConfig,
}

impl SeedMiner {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExtractConfig::default())
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Run the full pipeline over an ordered sequence of sentences
    ///
    /// Fails if a sentence contains the sentinel byte or the corpus
    /// exceeds the supported size; there is no partial result.
    pub fn mine<I, S>(&self, sentences: I) -> MineResult<SeedExtraction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut encoder = CorpusEncoder::new();
        for sentence in sentences {
            encoder.add_sentence(sentence.as_ref())?;
        }
        let corpus = encoder.build();

        if corpus.is_empty() {
            return Ok(SeedExtraction::empty());
        }

        let esa = EnhancedSuffixArray::build(corpus)?;
        Ok(extract_seeds(&esa, &self.config))
    }
}

impl Default for SeedMiner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
