use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Reserved words, control flow first and type names last.
#[rustfmt::skip]
pub const KEYWORDS: [&str; 15] = [
    "if", "else", "for", "while", "do", "continue", "break", "switch", "case", "default", "goto",
    // Types
    "integer", "float", "string", "list",
];

/// Catalog index of the first type keyword (`integer`).
pub const FIRST_TYPE_KEYWORD: i32 = 11;

/// Every operator and punctuation lexeme, indexed by `SymbolKind`.
#[rustfmt::skip]
pub const SYMBOLS: [&str; 43] = [
    "=",
    "+=", "-=", "<<=", ">>=", "^=",
    "*=", "/=", "%=",
    "|=", "&=",
    "?", ":",
    "!",
    "||",
    "&&",
    "|",
    "&",
    "!=", "==",
    "<", "<=", ">", ">=",
    "<<", ">>",
    "+", "-",
    "*", "/", "%",
    "~", "++", "--",
    "(", ")",
    "{", "}",
    "\"", ",", ";",
    ".", "^",
];

/// Id carried by a Symbol token whose lexeme is missing from `SYMBOLS`.
pub const UNKNOWN_SYMBOL: i32 = -1;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, i32> = KEYWORDS
        .iter()
        .enumerate()
        .map(|(index, keyword)| (*keyword, index as i32))
        .collect();
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, i32> = SYMBOLS
        .iter()
        .enumerate()
        .map(|(index, symbol)| (*symbol, index as i32))
        .collect();
}

pub fn find_keyword(name: &str) -> Option<i32> {
    KEYWORD_LOOKUP.get(name).copied()
}

pub fn find_symbol(lexeme: &str) -> Option<i32> {
    SYMBOL_LOOKUP.get(lexeme).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,
    Symbol,
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme.
///
/// For keywords and symbols `id` is the catalog index, for literals it is the
/// 1-based index into the tokenizer's table of that kind, and for `End` it is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub id: i32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "{}", self.kind),
            _ => write!(f, "{}({})", self.kind, self.id),
        }
    }
}

impl Token {
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    pub fn is_unknown_symbol(&self) -> bool {
        self.kind == TokenKind::Symbol && self.id == UNKNOWN_SYMBOL
    }

    pub fn keyword(&self) -> Option<KeywordKind> {
        match self.kind {
            TokenKind::Keyword => KeywordKind::from_id(self.id),
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<SymbolKind> {
        match self.kind {
            TokenKind::Symbol => SymbolKind::from_id(self.id),
            _ => None,
        }
    }

    /// The fixed lexeme of a keyword or symbol token.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self.kind {
            TokenKind::Keyword => self.keyword().map(KeywordKind::lexeme),
            TokenKind::Symbol => self.symbol().map(SymbolKind::lexeme),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeywordKind {
    If,
    Else,
    For,
    While,
    Do,
    Continue,
    Break,
    Switch,
    Case,
    Default,
    Goto,

    // Types
    Integer,
    Float,
    String,
    List,
}

impl KeywordKind {
    pub const ALL: [KeywordKind; 15] = [
        KeywordKind::If,
        KeywordKind::Else,
        KeywordKind::For,
        KeywordKind::While,
        KeywordKind::Do,
        KeywordKind::Continue,
        KeywordKind::Break,
        KeywordKind::Switch,
        KeywordKind::Case,
        KeywordKind::Default,
        KeywordKind::Goto,
        KeywordKind::Integer,
        KeywordKind::Float,
        KeywordKind::String,
        KeywordKind::List,
    ];

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(id).ok()?).copied()
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn lexeme(self) -> &'static str {
        KEYWORDS[self as usize]
    }

    /// True for `integer`, `float`, `string` and `list`.
    pub fn is_type(self) -> bool {
        self.id() >= FIRST_TYPE_KEYWORD
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Assignment,         // =
    PlusEquals,         // +=
    MinusEquals,        // -=
    ShiftLeftEquals,    // <<=
    ShiftRightEquals,   // >>=
    CaretEquals,        // ^=
    StarEquals,         // *=
    SlashEquals,        // /=
    PercentEquals,      // %=
    PipeEquals,         // |=
    AmpersandEquals,    // &=
    Question,
    Colon,
    Not,                // !
    Or,                 // ||
    And,                // &&
    Pipe,
    Ampersand,
    NotEquals,
    Equals,             // ==
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Tilde,
    PlusPlus,
    MinusMinus,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Quote,
    Comma,
    Semicolon,
    Dot,
    Caret,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 43] = [
        SymbolKind::Assignment,
        SymbolKind::PlusEquals,
        SymbolKind::MinusEquals,
        SymbolKind::ShiftLeftEquals,
        SymbolKind::ShiftRightEquals,
        SymbolKind::CaretEquals,
        SymbolKind::StarEquals,
        SymbolKind::SlashEquals,
        SymbolKind::PercentEquals,
        SymbolKind::PipeEquals,
        SymbolKind::AmpersandEquals,
        SymbolKind::Question,
        SymbolKind::Colon,
        SymbolKind::Not,
        SymbolKind::Or,
        SymbolKind::And,
        SymbolKind::Pipe,
        SymbolKind::Ampersand,
        SymbolKind::NotEquals,
        SymbolKind::Equals,
        SymbolKind::Less,
        SymbolKind::LessEquals,
        SymbolKind::Greater,
        SymbolKind::GreaterEquals,
        SymbolKind::ShiftLeft,
        SymbolKind::ShiftRight,
        SymbolKind::Plus,
        SymbolKind::Dash,
        SymbolKind::Star,
        SymbolKind::Slash,
        SymbolKind::Percent,
        SymbolKind::Tilde,
        SymbolKind::PlusPlus,
        SymbolKind::MinusMinus,
        SymbolKind::OpenParen,
        SymbolKind::CloseParen,
        SymbolKind::OpenCurly,
        SymbolKind::CloseCurly,
        SymbolKind::Quote,
        SymbolKind::Comma,
        SymbolKind::Semicolon,
        SymbolKind::Dot,
        SymbolKind::Caret,
    ];

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(id).ok()?).copied()
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn lexeme(self) -> &'static str {
        SYMBOLS[self as usize]
    }
}
