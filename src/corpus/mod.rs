pub mod encoder;

pub use encoder::{CorpusEncoder, EncodedCorpus, SENTINEL_BYTE};
