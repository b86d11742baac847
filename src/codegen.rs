//! Text emission for declarations, plus final assembly of a registry.
//!
//! Grammar:
//!
//! ```text
//! [export ]interface <Name> {
//!   <key>[?]: <type>;
//! }
//!
//! [export ]type <Name> = {
//!   <key>[?]: <type>;
//! };
//!
//! [export ]type <Name> = <type>;
//! ```
//!
//! Declarations are separated by exactly one blank line.
use std::cmp::Ordering;
use std::fmt;

use crate::convert::ConvertOptions;
use crate::ir::{DeclKind, Declaration, Property, Registry, Ty};
use crate::naming;

const SEPARATOR: &str = "\n\n";

// ------------------------------- Types ----------------------------------- //

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Scalar(kind) => f.write_str(kind.as_str()),
            Ty::ArrayOf(item) => write!(f, "{item}[]"),
            Ty::UnionOf(members) if members.len() == 1 => write!(f, "{}", members[0]),
            Ty::UnionOf(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
            Ty::Ref(name) => f.write_str(name),
            Ty::UnknownArray => f.write_str("unknown[]"),
        }
    }
}

// ---------------------------- Declarations ------------------------------- //

pub struct Codegen<'a> {
    options: &'a ConvertOptions,
    out: String,
}

impl<'a> Codegen<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self { options, out: String::new() }
    }

    pub fn emit(&mut self, decl: &Declaration) {
        if !self.out.is_empty() {
            self.out.push_str(SEPARATOR);
        }
        self.out.push_str(&render_declaration(decl, self.options));
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

pub fn render_declaration(decl: &Declaration, options: &ConvertOptions) -> String {
    let export = if options.add_export { "export " } else { "" };
    let name = &decl.name;
    match &decl.kind {
        DeclKind::Alias(target) => format!("{export}type {name} = {target};"),
        DeclKind::Record(properties) => {
            let body = properties
                .iter()
                .map(render_property)
                .collect::<Vec<_>>()
                .join("\n");
            if options.use_interface {
                format!("{export}interface {name} {{\n{body}\n}}")
            } else {
                format!("{export}type {name} = {{\n{body}\n}};")
            }
        }
    }
}

fn render_property(prop: &Property) -> String {
    let marker = if prop.optional { "?" } else { "" };
    format!("  {}{marker}: {};", naming::render_key(&prop.raw_key), prop.ty)
}

// ------------------------------- Assembly -------------------------------- //

/// Render every registered declaration: non-root names in ordinal order, the
/// declaration named `options.root_name` last.
pub fn assemble(registry: &Registry, options: &ConvertOptions) -> String {
    let mut decls: Vec<&Declaration> = registry.iter().collect();
    decls.sort_by(|a, b| compare_names(&a.name, &b.name, &options.root_name));

    let mut cg = Codegen::new(options);
    for decl in decls {
        cg.emit(decl);
    }
    cg.into_string()
}

fn compare_names(a: &str, b: &str, root: &str) -> Ordering {
    match (a == root, b == root) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

// ------------------------------- Tests ------------------------------------ //
