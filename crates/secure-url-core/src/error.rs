//! Error types for option validation and URL resolution.

/// Error raised by the URL resolver when an input cannot be parsed or
/// resolved. Passed through unchanged.
pub type ResolutionError = url::ParseError;

/// An option bag carried a value outside its allowed set.
///
/// Raised before any parsing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{field}\" is expected to be {expected}, but received \"{received}\"")]
pub struct ValidationError {
    field: &'static str,
    expected: &'static str,
    received: String,
}

impl ValidationError {
    pub(crate) fn new(
        field: &'static str,
        expected: &'static str,
        received: impl Into<String>,
    ) -> Self {
        Self {
            field,
            expected,
            received: received.into(),
        }
    }

    /// Name of the offending option, as spelled in option bags.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Human-readable description of the accepted values.
    pub fn expected(&self) -> &str {
        self.expected
    }

    /// The value that was supplied.
    pub fn received(&self) -> &str {
        &self.received
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
