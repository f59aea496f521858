//! Intrinsic stub rendering.
//!
//! [`StubEmitter`] listens to the declaration scanner and writes the
//! intrinsic form of each declaration: type headers become `intrinsic`
//! declarations and members lose their bodies.

use std::fmt::Write;

use asigen_parse::scanner::{
    ClassHeader, DeclarationHandler, Import, InterfaceHeader, Property, Signature, Visibility,
    join_qualified, scan,
};
use tracing::debug;

/// The rendered stub of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    /// Qualified name of the last class or interface seen
    pub type_name: Option<String>,
    pub text: String,
}

/// A [`DeclarationHandler`] that renders stub text.
#[derive(Debug, Default)]
pub struct StubEmitter {
    public_only: bool,
    buffer: String,
    type_name: Option<String>,
}

impl StubEmitter {
    pub fn new(public_only: bool) -> Self {
        Self {
            public_only,
            ..Self::default()
        }
    }

    /// Consumes the emitter, returning what it rendered.
    pub fn finish(self) -> Stub {
        Stub {
            type_name: self.type_name,
            text: self.buffer,
        }
    }

    fn skips(&self, visibility: Visibility) -> bool {
        self.public_only && visibility == Visibility::Private
    }

    fn member_prefix(&mut self, visibility: Visibility, is_static: bool) {
        self.buffer.push('\t');
        self.buffer.push_str(visibility.as_str());
        if is_static {
            self.buffer.push_str(" static");
        }
    }

    fn function(&mut self, accessor: &str, sig: &Signature, params: &str) {
        if self.skips(sig.visibility) {
            return;
        }
        self.member_prefix(sig.visibility, sig.is_static);
        let _ = write!(self.buffer, " function {accessor}{}({params})", sig.name);
        self.type_suffix(&sig.return_type);
        self.buffer.push_str(";\n");
    }

    fn type_suffix(&mut self, type_name: &str) {
        if !type_name.is_empty() {
            self.buffer.push(':');
            self.buffer.push_str(type_name);
        }
    }
}

impl DeclarationHandler for StubEmitter {
    fn start(&mut self) {
        self.buffer.clear();
        self.type_name = None;
    }

    fn complete(&mut self) {
        self.buffer.push_str("}\n");
    }

    fn import(&mut self, import: Import) {
        let _ = writeln!(
            self.buffer,
            "import {};",
            join_qualified(&import.package, &import.name)
        );
    }

    fn class(&mut self, class: ClassHeader) {
        let qualified = join_qualified(&class.package, &class.name);

        self.buffer.push_str("intrinsic");
        if class.is_dynamic {
            self.buffer.push_str(" dynamic");
        }
        let _ = write!(self.buffer, " class {qualified}");
        if !class.base_class.is_empty() {
            let _ = write!(self.buffer, " extends {}", class.base_class);
        }
        if !class.interfaces.is_empty() {
            let _ = write!(self.buffer, " implements {}", class.interfaces);
        }
        self.buffer.push_str(" {\n");

        self.type_name = Some(qualified);
    }

    fn interface(&mut self, interface: InterfaceHeader) {
        let qualified = join_qualified(&interface.package, &interface.name);

        let _ = write!(self.buffer, "interface {qualified}");
        if !interface.base_interface.is_empty() {
            let _ = write!(self.buffer, " extends {}", interface.base_interface);
        }
        self.buffer.push_str(" {\n");

        self.type_name = Some(qualified);
    }

    fn method(&mut self, method: Signature) {
        self.function("", &method, &method.params);
    }

    fn getter(&mut self, getter: Signature) {
        self.function("get ", &getter, "");
    }

    fn setter(&mut self, setter: Signature) {
        self.function("set ", &setter, &setter.params);
    }

    fn property(&mut self, property: Property) {
        if self.skips(property.visibility) {
            return;
        }
        self.member_prefix(property.visibility, property.is_static);
        let _ = write!(self.buffer, " var {}", property.name);
        self.type_suffix(&property.type_name);
        self.buffer.push_str(";\n");
    }
}

/// Scans `source` and renders its stub.
pub fn render(source: &str, public_only: bool) -> Stub {
    let mut emitter = StubEmitter::new(public_only);
    let state = scan(source, &mut emitter);
    if state.depth != 0 {
        debug!(depth = state.depth, "unbalanced braces");
    }
    emitter.finish()
}
