//! Deserialization that reports where in the document a value was rejected.
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use thiserror::Error;

use json_decl::ConvertOptions;

#[derive(Debug, Error)]
#[error("at JSON path {path} → {source}")]
pub struct PathError {
    path: String,
    #[source]
    source: serde_json::Error,
}

pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathError {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

/// Read a full `ConvertOptions` record (camelCase keys, all four required).
pub fn load_options(path: &Path) -> anyhow::Result<ConvertOptions> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    from_str_with_path(&src)
        .with_context(|| format!("invalid options file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_offending_field() {
        let err = from_str_with_path::<ConvertOptions>(
            r#"{"rootName":"Root","useInterface":"yes","optionalProperties":false,"addExport":false}"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("at JSON path useInterface"), "{err}");
    }

    #[test]
    fn loads_a_complete_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(
            &path,
            r#"{"rootName":"Api","useInterface":true,"optionalProperties":true,"addExport":false}"#,
        )
        .unwrap();
        let options = load_options(&path).unwrap();
        assert_eq!(options, ConvertOptions::new("Api").with_optional_properties(true));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_options(&dir.path().join("nope.json")).is_err());
    }
}
