use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    interner::tables::LiteralTables,
    Position, MK_TOKEN,
};

use super::{
    source::{CharSource, StringSource},
    tokens::{find_keyword, find_symbol, Token, TokenKind, UNKNOWN_SYMBOL},
};

/// Upper bound on the size of a single lexeme, in bytes.
pub const DEFAULT_MAX_LEXEME_LENGTH: usize = 4096;

/// Characters that may end an identifier or a number, besides blanks.
const DELIMITERS: &str = "=+-<>^*/%|&?:!(){}\",;~.";

/// Settings for a tokenizer instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Name reported in error positions. Defaults to `shell`.
    pub file: Option<String>,
    /// Longest lexeme accepted before failing with `LexemeTooLong`.
    pub max_lexeme_length: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            file: None,
            max_lexeme_length: DEFAULT_MAX_LEXEME_LENGTH,
        }
    }
}

impl LexerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn max_lexeme_length(mut self, limit: usize) -> Self {
        self.max_lexeme_length = limit;
        self
    }
}

/// Hand-written DFA turning a character stream into tokens.
///
/// The tokenizer keeps exactly one character of lookahead. Every state either
/// consumes that character and moves on, or stops and leaves it for the next
/// call. Literal values are interned into the tokenizer's own
/// [`LiteralTables`] and tokens carry their table index.
///
/// The first error is terminal: every later call to [`Tokenizer::next_token`]
/// returns it again.
pub struct Tokenizer<S> {
    source: S,
    /// The lookahead character, `None` once the source is exhausted.
    current: Option<char>,
    buffer: String,
    tables: LiteralTables,
    file: Rc<String>,
    /// Line and column where the last lexeme began.
    start: (u32, u32),
    max_lexeme_length: usize,
    failure: Option<Error>,
    exhausted: bool,
}

impl Tokenizer<StringSource> {
    pub fn from_text(text: impl Into<String>, options: LexerOptions) -> Self {
        Tokenizer::new(StringSource::new(text), options)
    }
}

impl<S: CharSource> Tokenizer<S> {
    pub fn new(mut source: S, options: LexerOptions) -> Self {
        let current = source.next_char();
        let file = options.file.unwrap_or_else(|| String::from("shell"));
        let start = (source.line(), source.column());

        Tokenizer {
            source,
            current,
            buffer: String::new(),
            tables: LiteralTables::new(),
            file: Rc::new(file),
            start,
            max_lexeme_length: options.max_lexeme_length,
            failure: None,
            exhausted: false,
        }
    }

    /// Lexes the next token.
    ///
    /// Returns a token of kind `End` once the source is exhausted, and keeps
    /// returning it on further calls.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        match self.scan() {
            Ok(token) => {
                trace!(%token, "lexed token");
                Ok(token)
            }
            Err(error) => {
                debug!(%error, "tokenizer failed");
                self.failure = Some(error.clone());
                Err(error)
            }
        }
    }

    pub fn tables(&self) -> &LiteralTables {
        &self.tables
    }

    pub fn into_tables(self) -> LiteralTables {
        self.tables
    }

    pub fn get_identifier(&self, id: i32) -> &str {
        self.tables.get_identifier(id)
    }

    pub fn get_integer(&self, id: i32) -> i64 {
        self.tables.get_integer(id)
    }

    pub fn get_float(&self, id: i32) -> f64 {
        self.tables.get_float(id)
    }

    pub fn get_string(&self, id: i32) -> &str {
        self.tables.get_string(id)
    }

    pub fn line(&self) -> u32 {
        self.source.line()
    }

    pub fn column(&self) -> u32 {
        self.source.column()
    }

    /// Position of the lookahead character.
    pub fn position(&self) -> Position {
        Position::new(self.line(), self.column(), Rc::clone(&self.file))
    }

    /// Position of the first character of the most recent token.
    pub fn token_start(&self) -> Position {
        Position::new(self.start.0, self.start.1, Rc::clone(&self.file))
    }

    fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.position())
    }

    fn advance(&mut self) {
        self.current = self.source.next_char();
    }

    fn push(&mut self, ch: char) -> Result<(), Error> {
        if self.buffer.len() + ch.len_utf8() > self.max_lexeme_length {
            return Err(self.error(ErrorImpl::LexemeTooLong {
                limit: self.max_lexeme_length,
            }));
        }

        self.buffer.push(ch);
        Ok(())
    }

    /// Moves the lookahead character into the buffer.
    fn accept(&mut self) -> Result<(), Error> {
        if let Some(ch) = self.current {
            self.push(ch)?;
            self.advance();
        }

        Ok(())
    }

    fn accept_digits(&mut self) -> Result<(), Error> {
        while self.current.is_some_and(|ch| ch.is_ascii_digit()) {
            self.accept()?;
        }

        Ok(())
    }

    fn scan(&mut self) -> Result<Token, Error> {
        loop {
            self.buffer.clear();
            self.start = (self.line(), self.column());

            let Some(ch) = self.current else {
                return Ok(MK_TOKEN!(TokenKind::End, 0));
            };

            match ch {
                ' ' | '\t' | '\n' => self.advance(),
                _ if ch.is_ascii_alphabetic() => {
                    self.accept()?;
                    return self.lex_word();
                }
                _ if ch.is_ascii_digit() => {
                    self.accept()?;
                    return self.lex_number();
                }
                '(' | ')' | '{' | '}' | ';' | ',' | '?' | ':' | '~' => {
                    self.accept()?;
                    return Ok(self.finish_symbol());
                }
                '.' => {
                    self.accept()?;
                    return self.lex_period();
                }
                '+' => {
                    self.accept()?;
                    return self.lex_operator(&['+', '=']);
                }
                '-' => {
                    self.accept()?;
                    return self.lex_operator(&['-', '=']);
                }
                '*' | '%' | '!' | '^' | '=' => {
                    self.accept()?;
                    return self.lex_operator(&['=']);
                }
                '&' => {
                    self.accept()?;
                    return self.lex_operator(&['&', '=']);
                }
                '|' => {
                    self.accept()?;
                    return self.lex_operator(&['|', '=']);
                }
                '<' | '>' => {
                    self.accept()?;
                    return self.lex_shift(ch);
                }
                '/' => {
                    self.accept()?;
                    if self.current == Some('*') {
                        self.advance();
                        self.skip_comment()?;
                        continue;
                    }
                    return self.lex_operator(&['=']);
                }
                '"' => {
                    self.advance();
                    return self.lex_string();
                }
                '\'' => {
                    self.advance();
                    return Err(self.lex_character());
                }
                _ => return Err(self.error(ErrorImpl::UnrecognisedCharacter { character: ch })),
            }
        }
    }

    /// Identifier or keyword, first letter already in the buffer.
    fn lex_word(&mut self) -> Result<Token, Error> {
        while self.current.is_some_and(|ch| ch.is_ascii_alphanumeric()) {
            self.accept()?;
        }
        self.expect_delimiter()?;

        if let Some(id) = find_keyword(&self.buffer) {
            return Ok(MK_TOKEN!(TokenKind::Keyword, id));
        }

        let index = self.tables.identifiers.register(self.buffer.as_str());
        Ok(MK_TOKEN!(TokenKind::Identifier, index as i32))
    }

    /// Numeric literal, first digit already in the buffer.
    fn lex_number(&mut self) -> Result<Token, Error> {
        self.accept_digits()?;

        match self.current {
            Some('.') => {
                self.accept()?;
                match self.current {
                    Some(ch) if ch.is_ascii_digit() => self.lex_fraction(),
                    Some('E' | 'e') => {
                        self.accept()?;
                        self.lex_exponent()
                    }
                    _ => self.finish_float(),
                }
            }
            Some('E' | 'e') => {
                self.accept()?;
                self.lex_exponent()
            }
            _ => {
                self.expect_delimiter()?;
                self.finish_integer()
            }
        }
    }

    /// A lone `.` is a symbol, `.` followed by a digit starts a float.
    fn lex_period(&mut self) -> Result<Token, Error> {
        if self.current.is_some_and(|ch| ch.is_ascii_digit()) {
            self.lex_fraction()
        } else {
            Ok(self.finish_symbol())
        }
    }

    /// Digits after the decimal point, then an optional exponent.
    fn lex_fraction(&mut self) -> Result<Token, Error> {
        self.accept_digits()?;

        if let Some('E' | 'e') = self.current {
            self.accept()?;
            return self.lex_exponent();
        }

        self.finish_float()
    }

    /// Exponent body after `E`/`e`: optional sign and at least one digit.
    fn lex_exponent(&mut self) -> Result<Token, Error> {
        if let Some('+' | '-') = self.current {
            self.accept()?;
        }

        if !self.current.is_some_and(|ch| ch.is_ascii_digit()) {
            return Err(self.error(ErrorImpl::MalformedExponent {
                lexeme: self.buffer.clone(),
            }));
        }

        self.accept_digits()?;
        self.finish_float()
    }

    /// Extends the buffered operator by one of `extensions`, if it follows.
    fn lex_operator(&mut self, extensions: &[char]) -> Result<Token, Error> {
        if self.current.is_some_and(|ch| extensions.contains(&ch)) {
            self.accept()?;
        }

        Ok(self.finish_symbol())
    }

    /// `<` and `>`: doubled into a shift, then optionally followed by `=`.
    fn lex_shift(&mut self, first: char) -> Result<Token, Error> {
        if self.current == Some(first) {
            self.accept()?;
        }

        self.lex_operator(&['='])
    }

    /// Consumes a block comment body up to and including `*/`.
    fn skip_comment(&mut self) -> Result<(), Error> {
        loop {
            match self.current {
                None => return Err(self.error(ErrorImpl::UnterminatedComment)),
                Some('*') => {
                    self.advance();
                    if self.current == Some('/') {
                        self.advance();
                        trace!("skipped block comment");
                        return Ok(());
                    }
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// String literal body, opening quote already consumed.
    fn lex_string(&mut self) -> Result<Token, Error> {
        loop {
            let Some(ch) = self.current else {
                return Err(self.unterminated_string());
            };
            self.advance();

            match ch {
                '"' => {
                    let index = self.tables.strings.register(self.buffer.as_str());
                    return Ok(MK_TOKEN!(TokenKind::String, index as i32));
                }
                '\\' => {
                    let Some(escape) = self.current else {
                        return Err(self.unterminated_string());
                    };
                    let decoded = self.decode_escape(escape)?;
                    self.push(decoded)?;
                }
                _ => self.push(ch)?,
            }
        }
    }

    fn unterminated_string(&self) -> Error {
        self.error(ErrorImpl::UnterminatedString {
            content: self.buffer.clone(),
        })
    }

    /// Decodes the character after a backslash and consumes it.
    ///
    /// `\A` to `\Z` stand for the control codes 0x01 to 0x1A.
    fn decode_escape(&mut self, escape: char) -> Result<char, Error> {
        let decoded = match escape {
            'A'..='Z' => char::from(escape as u8 - b'A' + 1),
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'b' => '\u{8}',
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            _ => return Err(self.error(ErrorImpl::InvalidEscape { escape })),
        };

        self.advance();
        Ok(decoded)
    }

    /// The language has no character constants, so this path always fails.
    ///
    /// The literal is still scanned (one character or escape, then the closing
    /// quote) so that a bad escape is reported as such.
    fn lex_character(&mut self) -> Error {
        match self.current {
            Some('\\') => {
                self.advance();
                if let Some(escape) = self.current {
                    if let Err(error) = self.decode_escape(escape) {
                        return error;
                    }
                }
            }
            Some(_) => self.advance(),
            None => {}
        }

        if self.current == Some('\'') {
            self.advance();
        }

        self.error(ErrorImpl::CharacterLiteral)
    }

    /// Identifiers and numbers must end at a blank or an operator character.
    fn expect_delimiter(&self) -> Result<(), Error> {
        match self.current {
            None | Some(' ' | '\t' | '\n') => Ok(()),
            Some(ch) if DELIMITERS.contains(ch) => Ok(()),
            Some(found) => Err(self.error(ErrorImpl::UndelimitedLexeme {
                lexeme: self.buffer.clone(),
                found,
            })),
        }
    }

    fn finish_integer(&mut self) -> Result<Token, Error> {
        let value = self.buffer.parse::<i64>().map_err(|_| {
            self.error(ErrorImpl::NumberParseError {
                token: self.buffer.clone(),
            })
        })?;

        let index = self.tables.integers.register(&value);
        Ok(MK_TOKEN!(TokenKind::Integer, index as i32))
    }

    fn finish_float(&mut self) -> Result<Token, Error> {
        self.expect_delimiter()?;

        let value = self.buffer.parse::<f64>().map_err(|_| {
            self.error(ErrorImpl::NumberParseError {
                token: self.buffer.clone(),
            })
        })?;

        let index = self.tables.floats.register(&value);
        Ok(MK_TOKEN!(TokenKind::Float, index as i32))
    }

    fn finish_symbol(&self) -> Token {
        match find_symbol(&self.buffer) {
            Some(id) => MK_TOKEN!(TokenKind::Symbol, id),
            None => {
                warn!(
                    lexeme = %self.buffer,
                    line = self.line(),
                    column = self.column(),
                    "operator missing from the symbol catalog"
                );
                MK_TOKEN!(TokenKind::Symbol, UNKNOWN_SYMBOL)
            }
        }
    }
}

impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, not including, `End`, and stops after an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.exhausted = true;
                Some(Err(error))
            }
        }
    }
}

/// Every token of a source, `End` included, with the literal tables they index.
#[derive(Debug, Clone)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub tables: LiteralTables,
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Lexed, Error> {
    let options = LexerOptions {
        file,
        ..LexerOptions::default()
    };

    tokenize_with(source, options)
}

pub fn tokenize_with(source: String, options: LexerOptions) -> Result<Lexed, Error> {
    let mut lex = Tokenizer::from_text(source, options);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        tokens.push(token);

        if token.is_end() {
            break;
        }
    }

    Ok(Lexed {
        tokens,
        tables: lex.into_tables(),
    })
}
