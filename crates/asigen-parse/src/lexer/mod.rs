//! Lexical analysis (tokenization) for ActionScript source code.
//!
//! The tokenizer turns source text into a flat stream of tokens. It is
//! independent of the declaration scanner and is meant for generic lexical
//! clients.
//!
//! ## Structure
//!
//! - `tokenizer.rs` - `Tokenizer`, the buffered token source
//! - `matchers.rs` - the ordered matcher list
//! - `token.rs` - `Token`, `TokenKind` and `Span`
//! - `punctuation.rs` - the punctuation symbol table
//! - `literals.rs` - string literal escape helpers
//!
//! ## Matcher Precedence
//!
//! 1. whitespace
//! 2. single-line comment
//! 3. multi-line comment
//! 4. string literal
//! 5. keyword
//! 6. identifier
//! 7. punctuation
//!
//! Characters no matcher accepts (digits, `'`, `#`, ...) are skipped one at
//! a time without producing a token.
//!
//! ## Usage
//!
//! ```rust
//! use asigen_parse::lexer::{TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("var x:Number;");
//!
//! while let Some(token) = tokenizer.next() {
//!     if token.kind != TokenKind::WhiteSpace {
//!         println!("{:?} {}", token.kind, token);
//!     }
//! }
//! ```

mod token;
mod tokenizer;

pub mod literals;
pub mod matchers;
pub mod punctuation;

pub use literals::{escape, unescape};
pub use punctuation::Punctuator;
pub use token::{Span, Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
