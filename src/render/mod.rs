//! Plain text renderers for lexeme streams and syntax trees.
//!
//! Nothing in the lexer or parser depends on this module; it only reads
//! their output for display.

pub mod render;

pub use render::{lexemes, tree};

#[cfg(test)]
mod tests;
