//! Literal interning.
//!
//! Literal values found by the tokenizer are deduplicated into per-kind
//! tables so later stages can refer to them by a small integer id:
//!
//! - `table` - the generic find-or-register pool
//! - `tables` - the integer, float, identifier and string pools of a tokenizer

pub mod table;
pub mod tables;
