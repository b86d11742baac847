//! Type classifier: one JSON value → one `Ty`.
//!
//! Scalars map to their kind, arrays to `ArrayOf` over the deduplicated element
//! types, and `[]` to `UnknownArray`. Objects are not classified here: the caller
//! supplies `on_object`, which is expected to register a declaration and hand
//! back a `Ty::Ref` to it.
pub mod union;

use serde_json::{Map, Value};

use crate::ir::{Scalar, Ty};

pub use union::UnionBuilder;

// ------------------------------ Classify --------------------------------- //

pub fn classify<F>(value: &Value, on_object: &mut F) -> Ty
where
    F: FnMut(&Map<String, Value>) -> Ty,
{
    match value {
        Value::Null => Ty::Scalar(Scalar::Null),
        Value::Bool(_) => Ty::Scalar(Scalar::Boolean),
        Value::Number(_) => Ty::Scalar(Scalar::Number),
        Value::String(_) => Ty::Scalar(Scalar::String),
        Value::Array(items) => classify_items(items, on_object),
        Value::Object(map) => on_object(map),
    }
}

/// Type of an array with the given elements (not of the elements themselves).
pub fn classify_items<F>(items: &[Value], on_object: &mut F) -> Ty
where
    F: FnMut(&Map<String, Value>) -> Ty,
{
    if items.is_empty() {
        return Ty::UnknownArray;
    }
    let mut members = UnionBuilder::new();
    members.extend(items.iter().map(|item| classify(item, on_object)));
    Ty::array_of(members.finish())
}

// ------------------------------- Tests ------------------------------------ //
