//! Extraction wrapper with completion status

use crate::error::ExtractError;

/// The outcome of extracting a payload, carrying whatever was extracted
/// together with its completion status.
///
/// Payload extraction keeps whatever it managed to assemble before a
/// malformed region stopped it, so adapters return this wrapper instead of a
/// bare `Result`: callers always get the container, plus the error describing
/// where extraction stopped when it did.
///
/// # Example
///
/// ```
/// use vizdata_lib::Extraction;
/// use vizdata_lib::error::ExtractError;
/// use vizdata_lib::model::TabularData;
///
/// let extraction = Extraction::partial(
///     TabularData::new(),
///     ExtractError::missing("$.data", "embedAnswerData"),
/// );
///
/// if let Some(error) = extraction.error() {
///     eprintln!("extraction stopped at {}", error.path());
/// }
///
/// let table = extraction.into_inner();
/// ```
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    data: T,
    /// Whether the payload was extracted in full.
    pub status: ExtractionStatus,
}

impl<T> Extraction<T> {
    /// Creates an extraction that consumed the whole payload.
    pub fn complete(data: T) -> Self {
        Self {
            data,
            status: ExtractionStatus::Complete,
        }
    }

    /// Creates an extraction that stopped early, keeping what was assembled.
    pub fn partial(data: T, error: ExtractError) -> Self {
        Self {
            data,
            status: ExtractionStatus::Partial { error },
        }
    }

    /// Returns `true` if the payload was extracted in full.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Returns `true` if extraction stopped before consuming the payload.
    pub fn is_partial(&self) -> bool {
        self.status.is_partial()
    }

    /// The error that stopped extraction, if any.
    pub fn error(&self) -> Option<&ExtractError> {
        self.status.error()
    }

    /// Returns a reference to the extracted data.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the extraction and returns the data, complete or not.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the extraction, rejecting partial results.
    pub fn into_result(self) -> Result<T, ExtractError> {
        match self.status {
            ExtractionStatus::Complete => Ok(self.data),
            ExtractionStatus::Partial { error } => Err(error),
        }
    }

    /// Consumes the extraction and returns the data with the error, if any.
    pub fn into_parts(self) -> (T, Option<ExtractError>) {
        match self.status {
            ExtractionStatus::Complete => (self.data, None),
            ExtractionStatus::Partial { error } => (self.data, Some(error)),
        }
    }

    /// Maps the extracted data using the provided function.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Extraction<U> {
        Extraction {
            data: f(self.data),
            status: self.status,
        }
    }
}

/// Completion status for an extraction.
#[derive(Debug, Clone)]
pub enum ExtractionStatus {
    /// The whole payload was extracted.
    Complete,
    /// Extraction stopped early; the data holds what was assembled up to
    /// that point.
    Partial {
        /// Where and why extraction stopped.
        error: ExtractError,
    },
}

impl ExtractionStatus {
    /// Returns `true` if the payload was extracted in full.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns `true` if extraction stopped early.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }

    /// The error that stopped extraction, if any.
    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            Self::Complete => None,
            Self::Partial { error } => Some(error),
        }
    }
}
