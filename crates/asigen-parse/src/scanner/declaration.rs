//! Declaration events reported by the scanner.

use std::fmt;

/// Visibility of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// No `private` attribute present
    #[default]
    Public,
    /// Marked `private`
    Private,
}

impl Visibility {
    /// Returns the attribute keyword for this visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Derives visibility from the two attribute slots of a member.
    pub fn from_attributes(first: &str, second: &str) -> Self {
        if first == "private" || second == "private" {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `import package.name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub package: String,
    /// Class name or `*`
    pub name: String,
}

/// Class header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub is_dynamic: bool,
    pub package: String,
    pub name: String,
    /// Qualified base class, empty when there is no `extends`
    pub base_class: String,
    /// Raw implements list, trimmed
    pub interfaces: String,
}

/// Interface header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceHeader {
    pub package: String,
    pub name: String,
    /// Qualified base interface, empty when there is no `extends`
    pub base_interface: String,
}

/// Header of a method, getter or setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub visibility: Visibility,
    pub is_static: bool,
    pub name: String,
    /// Parameter list text between the parentheses, verbatim
    pub params: String,
    /// Qualified return type, empty when not annotated
    pub return_type: String,
}

/// `var name[:Type] [= ...];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub visibility: Visibility,
    pub is_static: bool,
    pub name: String,
    /// Qualified type, empty when not annotated
    pub type_name: String,
}

/// A construct recognized by the declaration scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Import(Import),
    Class(ClassHeader),
    Interface(InterfaceHeader),
    Method(Signature),
    Getter(Signature),
    Setter(Signature),
    Property(Property),
}

impl Declaration {
    /// Short lowercase name of the construct.
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Import(_) => "import",
            Declaration::Class(_) => "class",
            Declaration::Interface(_) => "interface",
            Declaration::Method(_) => "method",
            Declaration::Getter(_) => "getter",
            Declaration::Setter(_) => "setter",
            Declaration::Property(_) => "property",
        }
    }

    /// Declared name of the construct.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Import(import) => &import.name,
            Declaration::Class(class) => &class.name,
            Declaration::Interface(interface) => &interface.name,
            Declaration::Method(sig) | Declaration::Getter(sig) | Declaration::Setter(sig) => {
                &sig.name
            }
            Declaration::Property(property) => &property.name,
        }
    }

    /// Member visibility; `None` for imports and type headers.
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Declaration::Method(sig) | Declaration::Getter(sig) | Declaration::Setter(sig) => {
                Some(sig.visibility)
            }
            Declaration::Property(property) => Some(property.visibility),
            _ => None,
        }
    }
}

/// Joins a package and a name into a qualified name.
pub fn join_qualified(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
