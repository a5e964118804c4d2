use thiserror::Error;

/// Failures raised while building a processor from a Lex event.
#[derive(Debug, Error)]
pub enum LexError {
    /// A required key is absent. `path` is the full key path, e.g.
    /// `interpretations[1].intent.name`.
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A key is present but holds the wrong JSON type.
    #[error("Field {path} has wrong type: expected {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexError {
    /// Key path of the offending field, if the error is about one.
    pub fn path(&self) -> Option<&str> {
        match self {
            LexError::MissingField { path } | LexError::WrongType { path, .. } => Some(path),
            LexError::Json(_) => None,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;
