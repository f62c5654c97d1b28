//! ExtractError for payload traversal

/// Error type for payload extraction, pointing at the position in the payload
/// tree where extraction stopped.
///
/// Paths are written in a dotted/indexed form rooted at `$`, for example
/// `$.data.embedAnswerData.columns[2].column`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    /// A field the payload shape requires was absent.
    #[error("Missing field '{field}' at {path}")]
    Missing { path: String, field: String },

    /// A node had a different JSON type than the payload shape requires.
    #[error("Unexpected value at {path}: expected {expected}, got {found}")]
    Unexpected {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A JSON-encoded column value could not be decoded.
    #[error("Undecodable column value at {path}: {reason}")]
    BadDataValue { path: String, reason: String },
}

impl ExtractError {
    /// Creates a new missing field error.
    pub fn missing(path: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Missing {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Creates a new unexpected value error.
    pub fn unexpected(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::Unexpected {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Creates a new undecodable column value error.
    pub fn bad_data_value(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadDataValue {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The payload position where extraction stopped.
    pub fn path(&self) -> &str {
        match self {
            Self::Missing { path, .. } => path,
            Self::Unexpected { path, .. } => path,
            Self::BadDataValue { path, .. } => path,
        }
    }
}
