use std::{fs, io, path::Path, str::Chars};

/// Supplies characters to the tokenizer one at a time.
///
/// `next_char` returns `None` once the input is exhausted and must keep
/// returning `None` afterwards. `line` and `column` describe the character
/// most recently returned.
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;
    fn line(&self) -> u32;
    fn column(&self) -> u32;
}

/// An in-memory character source with line/column tracking.
///
/// A newline belongs to the line it ends: it is reported at the column after
/// the last character of that line, and the line count only moves on when
/// the character after it is read.
#[derive(Debug, Clone)]
pub struct StringSource {
    text: String,
    offset: usize,
    line: u32,
    column: u32,
    /// The last character returned was `\n`.
    at_line_end: bool,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        StringSource {
            text: text.into(),
            offset: 0,
            line: 1,
            column: 0,
            at_line_end: false,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn remainder(&self) -> Chars<'_> {
        self.text[self.offset..].chars()
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<char> {
        let ch = self.remainder().next()?;
        self.offset += ch.len_utf8();

        if self.at_line_end {
            self.line += 1;
            self.column = 0;
        }
        self.column += 1;
        self.at_line_end = ch == '\n';

        Some(ch)
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }

    fn line(&self) -> u32 {
        (**self).line()
    }

    fn column(&self) -> u32 {
        (**self).column()
    }
}
