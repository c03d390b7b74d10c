use thiserror::Error;

/// Errors from converting objects to and from JSON.
#[derive(Debug, Error)]
pub enum ObjectsError {
    /// The text was not valid JSON, or did not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON object was expected but something else was found.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}
