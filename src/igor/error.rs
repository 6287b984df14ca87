use thiserror::Error;

/// Errors that can occur while loading a figure or writing to an Igor session
#[derive(Debug, Error)]
pub enum IgorError {
    /// I/O error from the underlying command channel or a figure file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Figure or configuration JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Color specification that does not resolve to RGBA
    #[error("Invalid color '{0}'")]
    Color(String),

    /// matplotlib format string that could not be parsed
    #[error("Invalid format string '{0}'")]
    Format(String),

    /// Wave already exists and overwrite was not requested
    #[error("Wave '{0}' already exists")]
    WaveExists(String),

    /// Malformed trace data (e.g. x and y of different length)
    #[error("Invalid data: {0}")]
    Data(String),
}

/// Type alias for Results using IgorError
pub type Result<T> = std::result::Result<T, IgorError>;
