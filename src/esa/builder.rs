//! Enhanced suffix array builder
//!
//! Ties suffix sorting, the LCP array, and LCP-interval enumeration into
//! one structure that owns the corpus text and every derived array for the
//! duration of a single extraction run.

use super::lcp::{LcpIntervalTree, lcp_array, lcp_intervals};
use super::sais::build_suffix_array;
use super::types::{MAX_TEXT_LEN, TextPosition};
use crate::corpus::EncodedCorpus;
use crate::error::{MineError, MineResult};

/// Suffix array plus LCP-interval tree over one encoded corpus
pub struct EnhancedSuffixArray {
    text: Vec<u8>,
    sa: Vec<TextPosition>,
    tree: LcpIntervalTree,
}

impl EnhancedSuffixArray {
    /// Build the enhanced suffix array for an encoded corpus
    ///
    /// Fails if the corpus exceeds the `u32` position limit or the suffix
    /// sorter produces inconsistent output.
    pub fn build(corpus: EncodedCorpus) -> MineResult<Self> {
        let text = corpus.into_bytes();

        if text.len() > MAX_TEXT_LEN {
            return Err(MineError::Construction(format!(
                "corpus of {} bytes exceeds the maximum of {} bytes",
                text.len(),
                MAX_TEXT_LEN
            )));
        }

        let sa = build_suffix_array(&text);
        if sa.len() != text.len() {
            return Err(MineError::Construction(format!(
                "suffix sorter returned {} entries for {} bytes of text",
                sa.len(),
                text.len()
            )));
        }

        let lcp = lcp_array(&text, &sa);
        let tree = lcp_intervals(&lcp);

        Ok(Self { text, sa, tree })
    }

    /// The concatenated corpus text
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The suffix array: a permutation of `[0, text.len())`
    pub fn suffix_array(&self) -> &[TextPosition] {
        &self.sa
    }

    /// Internal nodes of the implicit suffix tree
    pub fn intervals(&self) -> &LcpIntervalTree {
        &self.tree
    }

    /// Total internal node count
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEncoder;

    fn encode(sentences: &[&str]) -> EncodedCorpus {
        let mut encoder = CorpusEncoder::new();
        for s in sentences {
            encoder.add_sentence(s).unwrap();
        }
        encoder.build()
    }

    #[test]
    fn test_build_simple() {
        let esa = EnhancedSuffixArray::build(encode(&["banana"])).unwrap();

        assert_eq!(esa.text(), b"banana\x00");
        assert_eq!(esa.suffix_array(), &[6, 5, 3, 1, 0, 4, 2]);
        assert_eq!(esa.node_count(), 3);
    }

    #[test]
    fn test_build_empty() {
        let esa = EnhancedSuffixArray::build(encode(&[])).unwrap();

        assert!(esa.text().is_empty());
        assert!(esa.suffix_array().is_empty());
        assert_eq!(esa.node_count(), 0);
    }

    #[test]
    fn test_suffix_array_is_permutation() {
        let esa = EnhancedSuffixArray::build(encode(&["hello", "world", "hello"])).unwrap();

        let n = esa.text().len();
        let mut seen = vec![false; n];
        for &p in esa.suffix_array() {
            assert!(!seen[p as usize]);
            seen[p as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(esa.node_count() < n);
    }
}
