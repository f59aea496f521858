//! Anchored patterns used by the declaration scanner.
//!
//! Every pattern starts with `^` and is applied to the remainder of the
//! source at the cursor, so a match can only begin exactly at the cursor.
//!
//! ## Declaration Patterns
//!
//! | Pattern | Captures | Consumes `{` |
//! |---------|----------|--------------|
//! | Import | `package`, `name` | - |
//! | Class | `dynamic`, `package`, `name`, `basepackage`, `basename`, `interfaces` | yes |
//! | Interface | `package`, `name`, `basepackage`, `basename` | no |
//! | Method | `attribute1`, `attribute2`, `name`, `params`, `returnpackage`, `returnclass` | no |
//! | Accessor | as Method, plus `accessor` (`get`/`set`) | no |
//! | Property | `attribute1`, `attribute2`, `name`, `type` | - |
//!
//! Because the Interface pattern leaves the `{` in place, the scanner treats
//! an interface body as an opaque block.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::declaration::{
    ClassHeader, Declaration, Import, InterfaceHeader, Property, Signature, Visibility,
    join_qualified,
};

/// Opening block symbol.
pub const OPEN_BLOCK: char = '{';
/// Closing block symbol.
pub const CLOSE_BLOCK: char = '}';

const QUALIFIER: &str = r"[a-zA-Z0-9$_.]+";
const IDENT: &str = r"[a-zA-Z0-9$_]+";
const ATTRIBUTES: &str = r"(?:(?P<attribute1>public|private|static)\s+)?(?:(?P<attribute2>public|private|static)\s+)?";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s+".to_string()));
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^//.*?(?:\n|$)".to_string()));
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)^/\*.*?\*/".to_string()));
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"^(?:"[^"\\]*(?:\\.[^"\\]*)*"|'[^'\\]*(?:\\.[^'\\]*)*')"#.to_string())
});
static INCLUDE: LazyLock<Regex> = LazyLock::new(|| compile(r"^#include\s+.*?;".to_string()));

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^import\s*(?P<package>{QUALIFIER})\.(?P<name>[a-zA-Z0-9$*_]+)\s*;"
    ))
});

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        concat!(
            r"^(?:intrinsic\s+)?(?:(?P<dynamic>dynamic)[\s+])?class\s+",
            r"(?:(?P<package>{q})\.)?(?P<name>{i})",
            r"(?:\s+extends\s+(?:(?P<basepackage>{q})\.)?(?P<basename>{i}))?",
            r"(?:\s+implements\s+(?P<interfaces>(?:{q}\s*,?\s*)+))?",
            r"\s*\{{",
        ),
        q = QUALIFIER,
        i = IDENT,
    ))
});

static INTERFACE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        concat!(
            r"^(?:intrinsic\s+)?interface\s+",
            r"(?:(?P<package>{q})\.)?(?P<name>{i})",
            r"(?:\s+extends\s+(?:(?P<basepackage>{q})\.)?(?P<basename>{i}))?",
        ),
        q = QUALIFIER,
        i = IDENT,
    ))
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        concat!(
            r"^\s*{a}function\s+(?P<name>{i})\s*\((?P<params>[^)]*)\)",
            r"(?:\s*:\s*(?:(?P<returnpackage>{q})\.)?(?P<returnclass>{i}))?\s*",
        ),
        a = ATTRIBUTES,
        q = QUALIFIER,
        i = IDENT,
    ))
});

static ACCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        concat!(
            r"^{a}function\s+(?P<accessor>get|set)\s+(?P<name>{i})\s*\((?P<params>[^)]*)\)",
            r"(?:\s*:\s*(?:(?P<returnpackage>{q})\.)?(?P<returnclass>{i}))?\s*",
        ),
        a = ATTRIBUTES,
        q = QUALIFIER,
        i = IDENT,
    ))
});

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        concat!(
            r"^{a}var\s+(?P<name>{i})",
            r"(?:\s*:\s*(?P<type>(?:{q}\.)?{i}))?",
            r"(?:\s*=\s*.*?)?;",
        ),
        a = ATTRIBUTES,
        q = QUALIFIER,
        i = IDENT,
    ))
});

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid declaration pattern {pattern:?}: {e}"))
}

/// Source text the scanner steps over without interpreting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    Whitespace,
    LineComment,
    BlockComment,
    StringLiteral,
    Include,
}

impl Skip {
    /// Skips checked before block symbols, in order.
    pub const TRIVIA: [Skip; 4] = [
        Skip::Whitespace,
        Skip::LineComment,
        Skip::BlockComment,
        Skip::StringLiteral,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            Skip::Whitespace => &*WHITESPACE,
            Skip::LineComment => &*LINE_COMMENT,
            Skip::BlockComment => &*BLOCK_COMMENT,
            Skip::StringLiteral => &*STRING_LITERAL,
            Skip::Include => &*INCLUDE,
        }
    }

    /// Length of the skippable text at the start of `input`, if any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex().find(input).map(|m| m.end())
    }
}

/// The declaration patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Import,
    Class,
    Interface,
    Method,
    Accessor,
    Property,
}

impl Pattern {
    /// All declaration patterns in the order they are tried.
    pub const ORDERED: [Pattern; 6] = [
        Pattern::Import,
        Pattern::Class,
        Pattern::Interface,
        Pattern::Method,
        Pattern::Accessor,
        Pattern::Property,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            Pattern::Import => &*IMPORT,
            Pattern::Class => &*CLASS,
            Pattern::Interface => &*INTERFACE,
            Pattern::Method => &*METHOD,
            Pattern::Accessor => &*ACCESSOR,
            Pattern::Property => &*PROPERTY,
        }
    }

    /// Matches this pattern at the start of `input`.
    ///
    /// Returns the declaration and the number of bytes the match covers.
    pub fn apply(&self, input: &str) -> Option<(Declaration, usize)> {
        let caps = self.regex().captures(input)?;
        let len = caps.get(0)?.end();
        let declaration = match self {
            Pattern::Import => Declaration::Import(Import {
                package: group(&caps, "package").to_string(),
                name: group(&caps, "name").to_string(),
            }),
            Pattern::Class => Declaration::Class(ClassHeader {
                is_dynamic: group(&caps, "dynamic") == "dynamic",
                package: group(&caps, "package").to_string(),
                name: group(&caps, "name").to_string(),
                base_class: join_qualified(group(&caps, "basepackage"), group(&caps, "basename")),
                interfaces: group(&caps, "interfaces").trim().to_string(),
            }),
            Pattern::Interface => Declaration::Interface(InterfaceHeader {
                package: group(&caps, "package").to_string(),
                name: group(&caps, "name").to_string(),
                base_interface: join_qualified(
                    group(&caps, "basepackage"),
                    group(&caps, "basename"),
                ),
            }),
            Pattern::Method => Declaration::Method(signature(&caps)),
            Pattern::Accessor => {
                let sig = signature(&caps);
                if group(&caps, "accessor") == "get" {
                    Declaration::Getter(sig)
                } else {
                    Declaration::Setter(sig)
                }
            }
            Pattern::Property => {
                let (visibility, is_static) = attributes(&caps);
                Declaration::Property(Property {
                    visibility,
                    is_static,
                    name: group(&caps, "name").to_string(),
                    type_name: group(&caps, "type").to_string(),
                })
            }
        };
        Some((declaration, len))
    }
}

/// Tries every declaration pattern in order at the start of `input`.
pub fn match_declaration(input: &str) -> Option<(Declaration, usize)> {
    Pattern::ORDERED.iter().find_map(|pattern| pattern.apply(input))
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn attributes(caps: &Captures<'_>) -> (Visibility, bool) {
    let first = group(caps, "attribute1");
    let second = group(caps, "attribute2");
    let is_static = first == "static" || second == "static";
    (Visibility::from_attributes(first, second), is_static)
}

fn signature(caps: &Captures<'_>) -> Signature {
    let (visibility, is_static) = attributes(caps);
    Signature {
        visibility,
        is_static,
        name: group(caps, "name").to_string(),
        params: group(caps, "params").to_string(),
        return_type: join_qualified(group(caps, "returnpackage"), group(caps, "returnclass")),
    }
}
