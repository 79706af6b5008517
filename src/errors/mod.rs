//! Error types and error handling for the tokenizer.
//!
//! Every lexical failure is fatal for the tokenizer instance that hit it.
//! This module defines:
//!
//! - The `Error` structure carrying the source position
//! - `ErrorImpl` variants for each kind of malformed lexeme
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
