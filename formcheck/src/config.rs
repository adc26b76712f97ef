use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Presentation options for a [`FormValidator`](crate::FormValidator).
///
/// Deserializes from a camelCase object, so a configuration written for the
/// browser can be loaded unchanged:
///
/// ```
/// use formcheck::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r##"{ "errorContainer": "#errors" }"##)?;
/// assert_eq!(config.error_container.as_deref(), Some("#errors"));
/// assert_eq!(config.error_class, "is-invalid");
/// # Ok::<(), formcheck::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Selector for error containers. `#id` selects one element of the whole
    /// document; anything else is resolved relative to each control.
    pub error_container: Option<String>,
    /// Added to a control whose last validation failed.
    pub error_class: String,
    /// Added to a control whose last validation passed.
    pub valid_class: String,
    /// Added to the label of a control whose last validation failed.
    pub invalid_class: String,
    /// Reserved for markup helpers; not read during validation.
    pub field_class: Option<String>,
    /// Reserved for markup helpers; not read during validation.
    pub label: Option<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            error_container: None,
            error_class: "is-invalid".to_string(),
            valid_class: "is-valid".to_string(),
            invalid_class: "invalid".to_string(),
            field_class: None,
            label: None,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_error_container(mut self, selector: impl Into<String>) -> Self {
        self.error_container = Some(selector.into());
        self
    }

    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    pub fn with_valid_class(mut self, class: impl Into<String>) -> Self {
        self.valid_class = class.into();
        self
    }

    pub fn with_invalid_class(mut self, class: impl Into<String>) -> Self {
        self.invalid_class = class.into();
        self
    }
}
