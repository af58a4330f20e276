//! Types for enhanced suffix array construction

/// Position in the concatenated corpus text
pub type TextPosition = u32;

/// Maximum supported corpus size in bytes
///
/// Positions are stored as `u32`, so the text must fit below `u32::MAX`.
pub const MAX_TEXT_LEN: usize = (u32::MAX - 1) as usize;

/// Byte alphabet size for suffix sorting
pub const ALPHABET_SIZE: usize = 256;
