// Strongly-typed IR between the JSON walk and text emission. No serde_json::Value here.

use indexmap::IndexMap;

/// Primitive kinds JSON can carry. Objects never show up here; they become a `Ty::Ref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Number,
    Boolean,
    Null,
}

impl Scalar {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Number => "number",
            Scalar::Boolean => "boolean",
            Scalar::Null => "null",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Scalar(Scalar),
    ArrayOf(Box<Ty>),
    UnionOf(Vec<Ty>),        // unique by rendered text, first-seen order
    Ref(String),             // name of a declaration in the same registry
    UnknownArray,            // element type of `[]`
}

impl Ty {
    pub fn array_of(item: Ty) -> Self {
        Ty::ArrayOf(Box::new(item))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub raw_key: String,      // as written in the input; quoted on emission when needed
    pub ty: Ty,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// `interface Name { .. }` or `type Name = { .. };`
    Record(Vec<Property>),
    /// `type Name = <ty>;`, only produced for root-level arrays.
    Alias(Ty),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
}

impl Declaration {
    pub fn record(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self { name: name.into(), kind: DeclKind::Record(properties) }
    }

    pub fn alias(name: impl Into<String>, target: Ty) -> Self {
        Self { name: name.into(), kind: DeclKind::Alias(target) }
    }
}

/// Declarations discovered during one conversion, keyed by name.
///
/// Insertion order is discovery order (innermost objects first). Re-inserting a
/// name replaces the stored declaration but keeps its original slot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    decls: IndexMap<String, Declaration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `decl`, returning whatever was previously registered under the same name.
    pub fn insert(&mut self, decl: Declaration) -> Option<Declaration> {
        self.decls.insert(decl.name.clone(), decl)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.values()
    }
}
