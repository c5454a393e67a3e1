//! Route pattern compilation
//!
//! - `pattern`: the compiled edge rule, [`SegmentOption`]
//! - `parser`: fragment grammar, text → `Vec<SegmentOption>`

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{parse_fragment, parse_pattern};
pub use pattern::{SegmentOption, SegmentPattern};
