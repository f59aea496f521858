//! The declaration scanner.

use tracing::debug;

use super::declaration::{
    ClassHeader, Declaration, Import, InterfaceHeader, Property, Signature,
};
use super::patterns::{self, CLOSE_BLOCK, OPEN_BLOCK, Skip};
use super::state::{ScanState, Step};

/// Receives the events of one scan.
///
/// [`declaration`](Self::declaration) dispatches to the per-construct
/// methods; override either it or the ones you care about.
pub trait DeclarationHandler {
    /// Called before the first character is examined.
    fn start(&mut self) {}

    /// Called after the last character is examined.
    fn complete(&mut self) {}

    /// Called once per recognized construct, in source order.
    fn declaration(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Import(import) => self.import(import),
            Declaration::Class(class) => self.class(class),
            Declaration::Interface(interface) => self.interface(interface),
            Declaration::Method(sig) => self.method(sig),
            Declaration::Getter(sig) => self.getter(sig),
            Declaration::Setter(sig) => self.setter(sig),
            Declaration::Property(property) => self.property(property),
        }
    }

    fn import(&mut self, _import: Import) {}
    fn class(&mut self, _class: ClassHeader) {}
    fn interface(&mut self, _interface: InterfaceHeader) {}
    fn method(&mut self, _method: Signature) {}
    fn getter(&mut self, _getter: Signature) {}
    fn setter(&mut self, _setter: Signature) {}
    fn property(&mut self, _property: Property) {}
}

impl DeclarationHandler for Vec<Declaration> {
    fn declaration(&mut self, declaration: Declaration) {
        self.push(declaration);
    }
}

/// Performs one scanner step at `state.offset`.
///
/// Returns `None` once the cursor has reached the end of `source`. Every
/// other call moves the cursor forward by at least one character.
pub fn step(source: &str, state: &mut ScanState) -> Option<Step> {
    let rest = source.get(state.offset..).filter(|rest| !rest.is_empty())?;

    for skip in Skip::TRIVIA {
        if let Some(len) = skip.match_len(rest) {
            state.offset += len;
            return Some(Step::Skipped(skip));
        }
    }

    let ch = rest.chars().next()?;

    if ch == OPEN_BLOCK {
        state.depth += 1;
        state.offset += 1;
        return Some(Step::Entered);
    }

    if ch == CLOSE_BLOCK {
        state.depth -= 1;
        state.offset += 1;
        return Some(Step::Exited);
    }

    if state.in_block() {
        state.offset += ch.len_utf8();
        return Some(Step::Advanced);
    }

    if let Some(len) = Skip::Include.match_len(rest) {
        state.offset += len;
        return Some(Step::Skipped(Skip::Include));
    }

    if let Some((declaration, len)) = patterns::match_declaration(rest) {
        debug!(
            offset = state.offset,
            kind = declaration.kind(),
            name = declaration.name(),
            "declaration"
        );
        state.offset += len;
        return Some(Step::Declared(declaration));
    }

    state.offset += ch.len_utf8();
    Some(Step::Advanced)
}

/// Iterator over the declarations of one source text.
///
/// Owns its [`ScanState`]; create a new one per file.
pub struct Declarations<'a> {
    source: &'a str,
    state: ScanState,
}

impl<'a> Declarations<'a> {
    /// Starts a scan at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            state: ScanState::new(),
        }
    }

    /// Current scanner state.
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for Declarations<'_> {
    type Item = Declaration;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = step(self.source, &mut self.state) {
            if let Step::Declared(declaration) = step {
                return Some(declaration);
            }
        }
        None
    }
}

/// Scans `source`, reporting every declaration to `handler`.
///
/// Returns the final state; a non-zero depth means the braces did not
/// balance.
pub fn scan<H>(source: &str, handler: &mut H) -> ScanState
where
    H: DeclarationHandler + ?Sized,
{
    handler.start();

    let mut declarations = Declarations::new(source);
    let mut count = 0usize;
    for declaration in declarations.by_ref() {
        count += 1;
        handler.declaration(declaration);
    }
    let state = declarations.state();

    handler.complete();

    debug!(
        bytes = source.len(),
        declarations = count,
        depth = state.depth,
        "scan complete"
    );
    state
}

/// Scans `source` and collects the declarations.
pub fn scan_all(source: &str) -> Vec<Declaration> {
    Declarations::new(source).collect()
}
