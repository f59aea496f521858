//! Operator and punctuation symbols.
//!
//! The tokenizer resolves punctuation by trying every symbol in
//! [`Punctuator::ALL`], which is ordered longest symbol first, so `>>>=` wins
//! over `>>>`, `>>=`, `>>` and `>`.
//!
//! ## Symbol Groups
//!
//! | Leading char | Variants |
//! |--------------|----------|
//! | `/` | `/`, `/=` |
//! | `\|` | `\|`, `\|\|`, `\|=`, `\|\|=` |
//! | `^` | `^`, `^^`, `^=`, `^^=` |
//! | `>` | `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=` |
//! | `<` | `<`, `<=`, `<<`, `<<=` |
//! | `=` | `=`, `==`, `===` |
//! | `!` | `!`, `!=`, `!==` |
//! | `&` | `&`, `&&`, `&=`, `&&=` |
//! | `.` | `.`, `...` |
//!
//! `//` and `/*` never reach this table: the comment matchers run first.

/// A punctuation symbol known to the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    DivideAssign,
    Divide,
    BitNot,
    RBrace,
    OrAssign,
    Or,
    BitOrAssign,
    BitOr,
    LBrace,
    XOrAssign,
    XOr,
    BitXOrAssign,
    BitXOr,
    RBracket,
    LBracket,
    Hook,
    RShiftUnsignedAssign,
    RShiftUnsigned,
    RShiftAssign,
    RShift,
    GreaterEquals,
    Greater,
    Same,
    Equals,
    Assign,
    LessEquals,
    LShiftAssign,
    LShift,
    Less,
    Semicolon,
    Colon,
    Ellipsis,
    Dot,
    MinusAssign,
    Decrement,
    Minus,
    Comma,
    PlusAssign,
    Increment,
    Plus,
    MultiplyAssign,
    Multiply,
    RParen,
    LParen,
    BitAndAssign,
    AndAssign,
    And,
    BitAnd,
    ModuloAssign,
    Modulo,
    NotSame,
    NotEquals,
    Not,
}

impl Punctuator {
    /// Every punctuator, longest symbol first.
    pub const ALL: [Punctuator; 53] = [
        Punctuator::RShiftUnsignedAssign,
        Punctuator::OrAssign,
        Punctuator::XOrAssign,
        Punctuator::RShiftUnsigned,
        Punctuator::RShiftAssign,
        Punctuator::Same,
        Punctuator::LShiftAssign,
        Punctuator::Ellipsis,
        Punctuator::AndAssign,
        Punctuator::NotSame,
        Punctuator::DivideAssign,
        Punctuator::Or,
        Punctuator::BitOrAssign,
        Punctuator::XOr,
        Punctuator::BitXOrAssign,
        Punctuator::RShift,
        Punctuator::GreaterEquals,
        Punctuator::Equals,
        Punctuator::LessEquals,
        Punctuator::LShift,
        Punctuator::MinusAssign,
        Punctuator::Decrement,
        Punctuator::PlusAssign,
        Punctuator::Increment,
        Punctuator::MultiplyAssign,
        Punctuator::BitAndAssign,
        Punctuator::And,
        Punctuator::ModuloAssign,
        Punctuator::NotEquals,
        Punctuator::Divide,
        Punctuator::BitNot,
        Punctuator::RBrace,
        Punctuator::BitOr,
        Punctuator::LBrace,
        Punctuator::BitXOr,
        Punctuator::RBracket,
        Punctuator::LBracket,
        Punctuator::Hook,
        Punctuator::Greater,
        Punctuator::Assign,
        Punctuator::Less,
        Punctuator::Semicolon,
        Punctuator::Colon,
        Punctuator::Dot,
        Punctuator::Minus,
        Punctuator::Comma,
        Punctuator::Plus,
        Punctuator::Multiply,
        Punctuator::RParen,
        Punctuator::LParen,
        Punctuator::BitAnd,
        Punctuator::Modulo,
        Punctuator::Not,
    ];

    /// The source text of this symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Punctuator::DivideAssign => "/=",
            Punctuator::Divide => "/",
            Punctuator::BitNot => "~",
            Punctuator::RBrace => "}",
            Punctuator::OrAssign => "||=",
            Punctuator::Or => "||",
            Punctuator::BitOrAssign => "|=",
            Punctuator::BitOr => "|",
            Punctuator::LBrace => "{",
            Punctuator::XOrAssign => "^^=",
            Punctuator::XOr => "^^",
            Punctuator::BitXOrAssign => "^=",
            Punctuator::BitXOr => "^",
            Punctuator::RBracket => "]",
            Punctuator::LBracket => "[",
            Punctuator::Hook => "?",
            Punctuator::RShiftUnsignedAssign => ">>>=",
            Punctuator::RShiftUnsigned => ">>>",
            Punctuator::RShiftAssign => ">>=",
            Punctuator::RShift => ">>",
            Punctuator::GreaterEquals => ">=",
            Punctuator::Greater => ">",
            Punctuator::Same => "===",
            Punctuator::Equals => "==",
            Punctuator::Assign => "=",
            Punctuator::LessEquals => "<=",
            Punctuator::LShiftAssign => "<<=",
            Punctuator::LShift => "<<",
            Punctuator::Less => "<",
            Punctuator::Semicolon => ";",
            Punctuator::Colon => ":",
            Punctuator::Ellipsis => "...",
            Punctuator::Dot => ".",
            Punctuator::MinusAssign => "-=",
            Punctuator::Decrement => "--",
            Punctuator::Minus => "-",
            Punctuator::Comma => ",",
            Punctuator::PlusAssign => "+=",
            Punctuator::Increment => "++",
            Punctuator::Plus => "+",
            Punctuator::MultiplyAssign => "*=",
            Punctuator::Multiply => "*",
            Punctuator::RParen => ")",
            Punctuator::LParen => "(",
            Punctuator::BitAndAssign => "&=",
            Punctuator::AndAssign => "&&=",
            Punctuator::And => "&&",
            Punctuator::BitAnd => "&",
            Punctuator::ModuloAssign => "%=",
            Punctuator::Modulo => "%",
            Punctuator::NotSame => "!==",
            Punctuator::NotEquals => "!=",
            Punctuator::Not => "!",
        }
    }

    /// Finds the punctuator whose symbol is exactly `symbol`.
    pub fn from_symbol(symbol: &str) -> Option<Punctuator> {
        Self::ALL.iter().copied().find(|p| p.symbol() == symbol)
    }

    /// Finds the longest punctuator that `input` starts with.
    pub fn longest_prefix(input: &str) -> Option<Punctuator> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| input.starts_with(p.symbol()))
    }
}
