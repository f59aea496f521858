//! String literal bodies.
//!
//! The tokenizer keeps string literal bodies exactly as written, escapes
//! included. These helpers translate between that raw form and the text the
//! literal denotes.
//!
//! ## Escape Sequences
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\\` | Backslash |
//! | `\"` | Double quote |
//! | `\n` | Newline |
//! | `\t` | Tab |
//!
//! Any other backslash sequence is left untouched by [`unescape`], and a
//! trailing lone backslash is kept as is.

/// Escapes `text` so it can be placed between double quotes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape`].
///
/// Works in a single pass so that `\\n` (an escaped backslash followed by
/// `n`) comes back as a backslash and an `n`, not a newline.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("line\nnext\tcol"), "line\\nnext\\tcol");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_unescape_specials() {
        assert_eq!(unescape("a\\\\b"), "a\\b");
        assert_eq!(unescape("a\\\"b"), "a\"b");
        assert_eq!(unescape("x\\ny\\tz"), "x\ny\tz");
    }

    #[test]
    fn test_unescape_escaped_backslash_before_n() {
        // `\\n` is a backslash followed by the letter n
        assert_eq!(unescape("\\\\n"), "\\n");
    }

    #[test]
    fn test_unescape_unknown_and_trailing() {
        assert_eq!(unescape("\\r\\u0041"), "\\r\\u0041");
        assert_eq!(unescape("end\\"), "end\\");
    }

    #[test]
    fn test_round_trip() {
        for s in ["", "\\", "\"", "\\n", "a\"b\\c\nd\te", "\\\\\"\"", "ünïcödé\t"] {
            assert_eq!(unescape(&escape(s)), s);
        }
    }
}
