//! Substring extraction and result aggregation
//!
//! Walks the internal nodes of the enhanced suffix array, materializes
//! repeated substrings with their occurrence counts, and aggregates them
//! under the two boundary policies (strict skip vs. trim-at-boundary).

pub mod extractor;
pub mod report;

pub use extractor::{ExtractConfig, SeedExtraction, extract_seeds};
pub use report::{SeedMap, SeedStats};
