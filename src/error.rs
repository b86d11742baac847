//! Failures a conversion can end in. Both are terminal; there is no partial output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not valid JSON. Displays the parser's message as-is.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but the root is a scalar or null.
    #[error("Input must be a JSON object or array")]
    NotContainer,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
