//! Front API: JSON text + options → declarations text, or an error.
//!
//! Every call builds its own registry and drops it on return, so calls are
//! independent and may run concurrently.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codegen;
use crate::error::{Error, Result};
use crate::ir::{Declaration, Ty};
use crate::lower::Lowering;
use crate::naming;

// ------------------------------- Options --------------------------------- //

/// All four fields are required when deserializing; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConvertOptions {
    /// Name of the top-level declaration. Used verbatim, not sanitized.
    pub root_name: String,
    /// `interface X { .. }` when true, `type X = { .. };` when false.
    pub use_interface: bool,
    /// Mark every property with `?`.
    pub optional_properties: bool,
    /// Prefix every declaration with `export `.
    pub add_export: bool,
}

impl ConvertOptions {
    /// Interfaces, required properties, no export.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            use_interface: true,
            optional_properties: false,
            add_export: false,
        }
    }

    #[must_use]
    pub fn with_interface(mut self, use_interface: bool) -> Self {
        self.use_interface = use_interface;
        self
    }

    #[must_use]
    pub fn with_optional_properties(mut self, optional: bool) -> Self {
        self.optional_properties = optional;
        self
    }

    #[must_use]
    pub fn with_export(mut self, add_export: bool) -> Self {
        self.add_export = add_export;
        self
    }
}

// ------------------------------- Result ---------------------------------- //

/// Flat result record. `output` is empty whenever `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub success: bool,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResult {
    pub fn ok(output: String) -> Self {
        Self { success: true, output, error: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, output: String::new(), error: Some(message.into()) }
    }
}

impl From<Result<String>> for ConvertResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(output) => Self::ok(output),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

// ------------------------------- Front API -------------------------------- //

/// Never fails outright; errors are folded into the returned record.
pub fn convert(json_text: &str, options: &ConvertOptions) -> ConvertResult {
    try_convert(json_text, options).into()
}

pub fn try_convert(json_text: &str, options: &ConvertOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json_text)?;
    convert_value(&value, options)
}

/// Same as [`try_convert`] for an already parsed value.
///
/// Recursion follows the nesting of `value`. Text input is capped by the JSON
/// parser's own depth limit; hand-built values are not.
pub fn convert_value(value: &Value, options: &ConvertOptions) -> Result<String> {
    match value {
        Value::Object(map) => {
            let mut lowering = Lowering::new(options);
            lowering.declare_object(map, &options.root_name);
            Ok(codegen::assemble(&lowering.into_registry(), options))
        }
        Value::Array(items) => Ok(convert_root_array(items, options)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(Error::NotContainer)
        }
    }
}

fn convert_root_array(items: &[Value], options: &ConvertOptions) -> String {
    let root = options.root_name.as_str();
    let item_name = naming::with_item_suffix(root);
    let mut lowering = Lowering::new(options);

    let target = match items.first() {
        Some(Value::Object(first)) => Ty::array_of(lowering.declare_object(first, &item_name)),
        _ => lowering.array_ty(items, &item_name),
    };
    let alias = Declaration::alias(root, target);

    let mut registry = lowering.into_registry();
    if registry.is_empty() {
        // no records were needed: the alias is the whole output
        return codegen::render_declaration(&alias, options);
    }
    registry.insert(alias);
    codegen::assemble(&registry, options)
}

// ------------------------------- Tests ------------------------------------ //
