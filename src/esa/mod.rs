//! Enhanced suffix array module
//!
//! Computes, from a sentinel-delimited byte sequence, the suffix array,
//! the LCP array, and the LCP-interval tree (the internal nodes of the
//! implicit suffix tree). This is the asymptotically hard part of the
//! pipeline: suffix sorting is O(n) via SA-IS induced sorting, the LCP
//! array is O(n) via Kasai's algorithm, and interval enumeration is O(n)
//! via a monotonic stack.
//!
//! ## Architecture
//!
//! - `sais`: SA-IS suffix sorting
//! - `lcp`: Kasai LCP array and LCP-interval enumeration
//! - `builder`: ties the pieces into an [`EnhancedSuffixArray`]
//! - `types`: core type definitions

pub mod builder;
pub mod lcp;
pub mod sais;
pub mod types;

// Re-export for convenience
pub use builder::EnhancedSuffixArray;
