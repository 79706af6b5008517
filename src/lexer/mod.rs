//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns a character stream into
//! `(kind, id)` tokens for the grammar layer. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Interning of literal values into per-kind tables
//! - Skipping of whitespace and block comments
//! - Line/column tracking through the character source for error reporting

pub mod lexer;
pub mod source;
pub mod tokens;
