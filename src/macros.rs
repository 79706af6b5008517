//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps the many return sites of the DFA short.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$id` - The catalog index or interned-literal index
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $id:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            id: $id,
        }
    };
}
