//! The tokenizer that produces tokens from source text.

use std::collections::VecDeque;

use tracing::trace;

use super::matchers::MATCHERS;
use super::{Span, Token};

/// A buffered tokenizer over ActionScript source code.
///
/// The whole source is tokenized on the first call to [`peek`](Self::peek)
/// or [`next`](Self::next); later calls are served from the buffer.
pub struct Tokenizer<'a> {
    source: &'a str,
    tokens: VecDeque<Token>,
    filled: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: VecDeque::with_capacity(200),
            filled: false,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        self.check_fill();
        self.tokens.front()
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        self.check_fill();
        self.tokens.pop_front()
    }

    /// Pushes `token` back so it is the next one returned.
    pub fn put_back(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    /// Drops buffered tokens so the source is tokenized again on demand.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.filled = false;
    }

    /// Like [`reset`](Self::reset), but switches to a new source.
    pub fn reset_source(&mut self, source: &'a str) {
        self.source = source;
        self.reset();
    }

    fn check_fill(&mut self) {
        if self.tokens.is_empty() && !self.filled {
            self.fill();
        }
    }

    fn fill(&mut self) {
        self.filled = true;
        let mut pos = 0;

        while pos < self.source.len() {
            let rest = &self.source[pos..];
            let matched = MATCHERS.iter().find_map(|matcher| matcher(rest));

            match matched {
                Some(m) => {
                    self.tokens
                        .push_back(Token::new(m.kind, m.body, Span::new(pos, pos + m.len)));
                    pos += m.len;
                }
                None => {
                    // Skip whatever no matcher recognizes
                    let width = rest.chars().next().map_or(1, char::len_utf8);
                    trace!(offset = pos, "skipping unclassified character");
                    pos += width;
                }
            }
        }

        trace!(tokens = self.tokens.len(), "tokenized source");
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        Tokenizer::next(self)
    }
}

/// Tokenizes `source` into a vector.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}
