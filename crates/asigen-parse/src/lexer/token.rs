//! Token definitions for the ActionScript tokenizer.

use std::fmt;

use super::punctuation::Punctuator;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The different kinds of tokens the tokenizer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs, carriage returns, newlines and form feeds
    WhiteSpace,
    /// `// ...` up to the end of the line
    SingleLineComment,
    /// `/* ... */`
    MultiLineComment,
    /// Double-quoted string literal
    StringLiteral,
    /// Reserved word
    Keyword,
    /// Identifier
    Identifier,
    /// Operator or punctuation symbol
    Punctuation,
}

impl TokenKind {
    /// Returns a stable lowercase name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::WhiteSpace => "whitespace",
            TokenKind::SingleLineComment => "single-line-comment",
            TokenKind::MultiLineComment => "multi-line-comment",
            TokenKind::StringLiteral => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Punctuation => "punctuation",
        }
    }

    /// Returns true for either comment kind.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }
}

/// A token produced by the tokenizer.
///
/// `body` holds the matched text. For comments and string literals it is the
/// text between the delimiters; [`fmt::Display`] puts the delimiters back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The captured text
    pub body: String,
    /// The span of the whole match, delimiters included
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, body: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            body: body.into(),
            span,
        }
    }

    /// Returns true for whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::WhiteSpace || self.kind.is_comment()
    }

    /// Returns true if this is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.body == word
    }

    /// Looks up the punctuation table entry for a punctuation token.
    pub fn punctuator(&self) -> Option<Punctuator> {
        if self.kind == TokenKind::Punctuation {
            Punctuator::from_symbol(&self.body)
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::SingleLineComment => write!(f, "//{}", self.body),
            TokenKind::MultiLineComment => write!(f, "/*{}*/", self.body),
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.body),
            _ => f.write_str(&self.body),
        }
    }
}
