//! Declaration generator: walks a JSON object and registers one declaration per
//! object site, innermost first.
use serde_json::{Map, Value};

use crate::convert::ConvertOptions;
use crate::inference;
use crate::ir::{Declaration, Property, Registry, Ty};
use crate::naming;

pub struct Lowering<'a> {
    options: &'a ConvertOptions,
    registry: Registry,
}

impl<'a> Lowering<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self { options, registry: Registry::new() }
    }

    /// Register a record named `name` for `map` (after everything nested inside it)
    /// and return a reference to it.
    ///
    /// An earlier declaration with the same name is overwritten.
    pub fn declare_object(&mut self, map: &Map<String, Value>, name: &str) -> Ty {
        let mut properties = Vec::with_capacity(map.len());
        for (key, value) in map {
            let ty = self.property_ty(key, value);
            properties.push(Property {
                raw_key: key.clone(),
                ty,
                optional: self.options.optional_properties,
            });
        }
        self.registry.insert(Declaration::record(name, properties));
        Ty::Ref(name.to_string())
    }

    /// Type of an array holding `items`. Objects anywhere in the array share one
    /// record named `item_name`, built from the first of them.
    pub fn array_ty(&mut self, items: &[Value], item_name: &str) -> Ty {
        let mut item_ref: Option<Ty> = None;
        inference::classify_items(items, &mut |map| {
            if let Some(existing) = &item_ref {
                return existing.clone();
            }
            let declared = self.declare_object(map, item_name);
            item_ref = Some(declared.clone());
            declared
        })
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    fn property_ty(&mut self, key: &str, value: &Value) -> Ty {
        match value {
            Value::Object(map) => self.declare_object(map, &naming::type_name(key)),
            Value::Array(items) => match items.first() {
                // only the first element shapes the record; the rest is not inspected
                Some(Value::Object(first)) => {
                    Ty::array_of(self.declare_object(first, &naming::item_name(key)))
                }
                _ => self.array_ty(items, &naming::item_name(key)),
            },
            scalar => inference::classify(scalar, &mut |map| {
                self.declare_object(map, &naming::type_name(key))
            }),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
