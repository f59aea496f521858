//! The ordered token matchers.
//!
//! Each matcher looks only at the start of its input. The tokenizer tries
//! them in [`MATCHERS`] order and the first hit wins.

use std::sync::LazyLock;

use regex::Regex;

use super::punctuation::Punctuator;
use super::token::TokenKind;

/// Reserved words of the language.
pub const KEYWORDS: [&str; 42] = [
    "as", "break", "case", "catch", "class", "const", "continue", "default", "dynamic", "delete",
    "do", "else", "extends", "false", "finally", "for", "function", "if", "implements", "import",
    "in", "instanceof", "interface", "intrinsic", "new", "null", "private", "public", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "use", "var", "void",
    "while", "with",
];

/// A successful match at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Kind of token to emit
    pub kind: TokenKind,
    /// Token body (inner text for delimited kinds)
    pub body: &'a str,
    /// Number of input bytes consumed
    pub len: usize,
}

/// A matcher inspects the start of `input`.
pub type Matcher = for<'a> fn(&'a str) -> Option<Match<'a>>;

/// All matchers in precedence order.
pub const MATCHERS: [Matcher; 7] = [
    match_whitespace,
    match_single_line_comment,
    match_multi_line_comment,
    match_string_literal,
    match_keyword,
    match_identifier,
    match_punctuation,
];

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[ \t\r\n\x0C]+"));
static SINGLE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^//([^\n]*)"));
static MULTI_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)^/\*(.*?)\*/"));
static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"^"([^"\\]*(?:\\.[^"\\]*)*)""#));
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z_$][A-Za-z0-9_$]*"));
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    let mut words = KEYWORDS.to_vec();
    // longest first so `instanceof` is tried before `in`
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    compile(&format!(r"^(?:{})\b", words.join("|")))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid token pattern {pattern:?}: {e}"))
}

/// Matches a run of whitespace.
pub fn match_whitespace(input: &str) -> Option<Match<'_>> {
    WHITESPACE.find(input).map(|m| Match {
        kind: TokenKind::WhiteSpace,
        body: m.as_str(),
        len: m.end(),
    })
}

/// Matches `//` up to, but not including, the next newline.
pub fn match_single_line_comment(input: &str) -> Option<Match<'_>> {
    delimited(&SINGLE_LINE_COMMENT, TokenKind::SingleLineComment, input)
}

/// Matches `/* ... */`, stopping at the first `*/`.
pub fn match_multi_line_comment(input: &str) -> Option<Match<'_>> {
    delimited(&MULTI_LINE_COMMENT, TokenKind::MultiLineComment, input)
}

/// Matches a double-quoted string, honouring backslash escapes.
pub fn match_string_literal(input: &str) -> Option<Match<'_>> {
    delimited(&STRING_LITERAL, TokenKind::StringLiteral, input)
}

/// Matches a whole reserved word.
pub fn match_keyword(input: &str) -> Option<Match<'_>> {
    KEYWORD.find(input).map(|m| Match {
        kind: TokenKind::Keyword,
        body: m.as_str(),
        len: m.end(),
    })
}

/// Matches an identifier.
pub fn match_identifier(input: &str) -> Option<Match<'_>> {
    IDENTIFIER.find(input).map(|m| Match {
        kind: TokenKind::Identifier,
        body: m.as_str(),
        len: m.end(),
    })
}

/// Matches the longest punctuation symbol.
pub fn match_punctuation(input: &str) -> Option<Match<'_>> {
    Punctuator::longest_prefix(input).map(|p| {
        let len = p.symbol().len();
        Match {
            kind: TokenKind::Punctuation,
            body: &input[..len],
            len,
        }
    })
}

fn delimited<'a>(re: &Regex, kind: TokenKind, input: &'a str) -> Option<Match<'a>> {
    let caps = re.captures(input)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1).map_or("", |m| m.as_str());
    Some(Match {
        kind,
        body: inner,
        len: whole.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let m = match_whitespace(" \t\r\n\x0Cx").unwrap();
        assert_eq!(m.len, 5);
        assert!(match_whitespace("x ").is_none());
    }

    #[test]
    fn test_single_line_comment_stops_before_newline() {
        let m = match_single_line_comment("// hello\nnext").unwrap();
        assert_eq!(m.body, " hello");
        assert_eq!(m.len, 8);
    }

    #[test]
    fn test_single_line_comment_at_end_of_input() {
        let m = match_single_line_comment("//tail").unwrap();
        assert_eq!(m.body, "tail");
        assert_eq!(m.len, 6);
    }

    #[test]
    fn test_multi_line_comment_shortest_close() {
        let m = match_multi_line_comment("/* a\n b */ c */").unwrap();
        assert_eq!(m.body, " a\n b ");
        assert_eq!(m.len, 10);
    }

    #[test]
    fn test_unterminated_multi_line_comment() {
        assert!(match_multi_line_comment("/* never closed").is_none());
    }

    #[test]
    fn test_string_literal_keeps_escapes() {
        let m = match_string_literal(r#""a\"b" rest"#).unwrap();
        assert_eq!(m.body, r#"a\"b"#);
        assert_eq!(m.len, 6);
    }

    #[test]
    fn test_unterminated_string_literal() {
        assert!(match_string_literal("\"open").is_none());
    }

    #[test]
    fn test_keyword_boundary() {
        assert_eq!(match_keyword("for (").unwrap().body, "for");
        assert!(match_keyword("forms").is_none());
        assert_eq!(match_keyword("instanceof x").unwrap().body, "instanceof");
        assert_eq!(match_keyword("in x").unwrap().body, "in");
        assert!(match_keyword("inside").is_none());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(match_identifier("$_a1 b").unwrap().body, "$_a1");
        assert!(match_identifier("1abc").is_none());
    }

    #[test]
    fn test_punctuation_longest() {
        let m = match_punctuation("!==x").unwrap();
        assert_eq!(m.body, "!==");
        assert_eq!(m.len, 3);
    }

    #[test]
    fn test_keyword_table_size() {
        assert_eq!(KEYWORDS.len(), 42);
        assert!(KEYWORDS.contains(&"intrinsic"));
    }
}
