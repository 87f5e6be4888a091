use thiserror::Error;

/// Domain helper error types
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Invalid URL format '{url}': {source}")]
    InvalidUrlFormat {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unable to combine {base} with {relative}: {reason}")]
    InvalidUrlCombination {
        base: String,
        relative: String,
        reason: String,
    },

    #[error("Unable to extract extension from '{0}'")]
    InvalidExtension(String),

    #[error("Invalid suffix entry at line {line}: {message}")]
    InvalidSuffixEntry { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "serialization")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HelperError>;
