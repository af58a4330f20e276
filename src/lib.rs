//! # seedex - Suffix-Array Seed Piece Miner
//!
//! seedex derives candidate vocabulary pieces ("seed pieces") from a text
//! corpus as a preprocessing step for subword tokenizer training. It
//! concatenates sentences into a sentinel-delimited byte sequence, builds
//! an enhanced suffix array (suffix array + LCP-interval tree) over it,
//! and extracts every repeated substring together with its occurrence
//! count under two boundary policies.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - Sentence concatenation with sentinel boundaries
//! - [`esa`] - Suffix sorting (SA-IS), LCP array, LCP-interval tree
//! - [`extract`] - Candidate extraction, boundary policies, aggregation
//! - [`miner`] - The end-to-end pipeline driver
//! - [`output`] - Report formatting for the CLI host
//!
//! ## Quick Start
//!
//! ```ignore
//! use seedex::miner::SeedMiner;
//!
//! let miner = SeedMiner::with_defaults();
//! let seeds = miner.mine(["November", "November", "December", "December"]).unwrap();
//!
//! for (piece, frequency) in seeds.trimmed.sorted_entries() {
//!     println!("{} {}", String::from_utf8_lossy(piece), frequency);
//! }
//! ```
//!
//! ## Boundary Policies
//!
//! A repeated span may run across a sentence boundary. The **strict**
//! policy drops any candidate containing the sentinel byte; the
//! **trim-at-boundary** policy truncates the candidate at the first
//! sentinel and sums the counts of every span that reduces to the same
//! piece. Both mappings are produced on every run.

pub mod corpus;
pub mod error;
pub mod esa;
pub mod extract;
pub mod miner;
pub mod output;

pub use error::{MineError, MineResult};
