//! Declaration scanning for ActionScript 2.0 source code.
//!
//! The scanner walks a source text once and reports the declarations that
//! make up a type's public surface: imports, class and interface headers,
//! method, getter and setter signatures, and member variables. Statement
//! bodies are never interpreted.
//!
//! ## Algorithm
//!
//! At each cursor position the scanner tries, in order:
//!
//! 1. whitespace, comments and string literals, which are skipped
//! 2. `{` and `}`, which adjust the block depth
//! 3. if the depth is positive, a one-character advance
//! 4. `#include` directives, which are skipped
//! 5. the declaration patterns (see [`patterns`])
//! 6. a one-character advance
//!
//! A class header consumes its own `{`, so member declarations are found at
//! depth zero while method bodies stay opaque.
//!
//! ## Usage
//!
//! ```rust
//! use asigen_parse::scanner::{Declaration, scan_all};
//!
//! let declarations = scan_all("class Point { var x:Number; }");
//! assert!(matches!(declarations[1], Declaration::Property(_)));
//! ```

mod declaration;
mod driver;
mod state;

pub mod patterns;

pub use declaration::{
    ClassHeader, Declaration, Import, InterfaceHeader, Property, Signature, Visibility,
    join_qualified,
};
pub use patterns::Skip;
pub use driver::{DeclarationHandler, Declarations, scan, scan_all, step};
pub use state::{ScanState, Step};
