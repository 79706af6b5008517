use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal lexical error together with the place it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True when the source ran out in the middle of a lexeme.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnterminatedString { .. } | ErrorImpl::UnterminatedComment
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UndelimitedLexeme { .. } => "UndelimitedLexeme",
            ErrorImpl::MalformedExponent { .. } => "MalformedExponent",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::CharacterLiteral => "CharacterLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::LexemeTooLong { .. } => "LexemeTooLong",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UndelimitedLexeme { lexeme, found } => ErrorTip::Suggestion(format!(
                "`{}` must be followed by whitespace or an operator, found `{}`",
                lexeme, found
            )),
            ErrorImpl::MalformedExponent { lexeme } => ErrorTip::Suggestion(format!(
                "Exponent of `{}` needs at least one digit",
                lexeme
            )),
            ErrorImpl::InvalidEscape { escape } => ErrorTip::Suggestion(format!(
                "`\\{}` is not an escape, use one of \\t \\n \\r \\b \\\" \\' \\\\ or \\A-\\Z",
                escape
            )),
            ErrorImpl::CharacterLiteral => ErrorTip::Suggestion(String::from(
                "Character constants are not supported, use a string instead",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::LexemeTooLong { limit } => ErrorTip::Suggestion(format!(
                "Lexemes are limited to {} characters",
                limit
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("Missing closing `\"`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Missing closing `*/`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("lexeme {lexeme:?} is not delimited, found {found:?}")]
    UndelimitedLexeme { lexeme: String, found: char },
    #[error("malformed exponent in {lexeme:?}")]
    MalformedExponent { lexeme: String },
    #[error("invalid escape sequence \\{escape}")]
    InvalidEscape { escape: char },
    #[error("character constants are not supported")]
    CharacterLiteral,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("lexeme exceeds {limit} characters")]
    LexemeTooLong { limit: usize },
    #[error("end of input inside string literal {content:?}")]
    UnterminatedString { content: String },
    #[error("end of input inside block comment")]
    UnterminatedComment,
}
