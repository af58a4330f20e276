//! Corpus encoder
//!
//! Concatenates input sentences into a single byte sequence with sentinel
//! boundaries. Every sentence after the first is preceded by a sentinel
//! (separator), and every sentence is followed by one (terminator), so
//! interior boundaries carry two consecutive sentinel bytes and the sequence
//! ends with exactly one.

use crate::error::{MineError, MineResult};

/// Sentinel byte used to separate and terminate sentences in the
/// concatenated corpus. Reserved: input sentences must not contain it.
pub const SENTINEL_BYTE: u8 = 0x00;

/// Accumulates sentences into a sentinel-delimited byte sequence
pub struct CorpusEncoder {
    text: Vec<u8>,
    sentence_count: usize,
}

impl CorpusEncoder {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            sentence_count: 0,
        }
    }

    /// Append one sentence to the corpus
    ///
    /// Fails if the sentence contains the reserved sentinel byte.
    pub fn add_sentence(&mut self, sentence: &str) -> MineResult<()> {
        let bytes = sentence.as_bytes();

        if memchr::memchr(SENTINEL_BYTE, bytes).is_some() {
            return Err(MineError::InvalidInput(format!(
                "sentence {} contains the reserved sentinel byte 0x{:02x}",
                self.sentence_count, SENTINEL_BYTE
            )));
        }

        // Separator from the previous sentence's terminator
        if !self.text.is_empty() {
            self.text.push(SENTINEL_BYTE);
        }

        self.text.extend_from_slice(bytes);
        self.text.push(SENTINEL_BYTE);
        self.sentence_count += 1;

        Ok(())
    }

    /// Finish encoding and hand the byte sequence to the pipeline
    pub fn build(self) -> EncodedCorpus {
        EncodedCorpus {
            text: self.text,
            sentence_count: self.sentence_count,
        }
    }

    /// Current size of the accumulated text
    pub fn text_size(&self) -> usize {
        self.text.len()
    }

    /// Number of sentences added so far
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}

impl Default for CorpusEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable sentinel-delimited byte sequence produced by [`CorpusEncoder`]
pub struct EncodedCorpus {
    text: Vec<u8>,
    sentence_count: usize,
}

impl EncodedCorpus {
    /// The concatenated byte sequence
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Consume the corpus, yielding the raw byte sequence
    pub fn into_bytes(self) -> Vec<u8> {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_layout() {
        let mut encoder = CorpusEncoder::new();
        encoder.add_sentence("banana").unwrap();
        let corpus = encoder.build();

        assert_eq!(corpus.text(), b"banana\x00");
        assert_eq!(corpus.sentence_count(), 1);
    }

    #[test]
    fn test_multi_sentence_layout() {
        let mut encoder = CorpusEncoder::new();
        encoder.add_sentence("ab").unwrap();
        encoder.add_sentence("cd").unwrap();
        encoder.add_sentence("ef").unwrap();
        let corpus = encoder.build();

        // Separator + terminator between sentences, single terminator at end
        assert_eq!(corpus.text(), b"ab\x00\x00cd\x00\x00ef\x00");
        assert_eq!(corpus.sentence_count(), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = CorpusEncoder::new().build();
        assert!(corpus.is_empty());
        assert_eq!(corpus.sentence_count(), 0);
    }

    #[test]
    fn test_empty_sentence_allowed() {
        let mut encoder = CorpusEncoder::new();
        encoder.add_sentence("").unwrap();
        encoder.add_sentence("x").unwrap();
        let corpus = encoder.build();

        assert_eq!(corpus.text(), b"\x00\x00x\x00");
    }

    #[test]
    fn test_rejects_sentinel_in_input() {
        let mut encoder = CorpusEncoder::new();
        let err = encoder.add_sentence("ab\x00cd").unwrap_err();
        assert!(matches!(err, MineError::InvalidInput(_)));
    }
}
