//! Infer structural type declarations from a JSON sample.
//!
//! ```
//! use json_decl::{convert, ConvertOptions};
//!
//! let result = convert(r#"{"user":{"name":"Ada"}}"#, &ConvertOptions::new("Root"));
//! assert!(result.success);
//! assert_eq!(
//!     result.output,
//!     "interface User {\n  name: string;\n}\n\ninterface Root {\n  user: User;\n}"
//! );
//! ```
pub mod codegen;
pub mod convert;
pub mod error;
pub mod inference;
pub mod ir;
pub mod lower;
pub mod naming;

pub use convert::{convert, convert_value, try_convert, ConvertOptions, ConvertResult};
pub use error::{Error, Result};
