use formdom::SelectorError;
use thiserror::Error;

/// Errors raised by misconfiguration. Failed validation is not an error;
/// it is reported through [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Error)]
pub enum Error {
    /// `field(name)` was called with a name the form does not resolve.
    #[error("Field '{0}' not found in form")]
    UnknownField(String),

    /// `validate_field(name)` targeted a field never passed to `field()`.
    #[error("Field '{0}' has no rules attached; call field() first")]
    UntrackedField(String),

    #[error("Form element '#{0}' not found")]
    FormNotFound(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Invalid error container selector: {0}")]
    InvalidSelector(#[from] SelectorError),

    #[error("Invalid validator configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
