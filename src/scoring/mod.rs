//! Strictly proper scoring rules and the binary event they score.

mod outcome;
mod rule;

pub use outcome::*;
pub use rule::*;
