use formdom::NodeId;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Field name (from `.field()` call).
    pub field_name: String,
    /// The field's control (for focusing).
    pub control: NodeId,
    /// Failure message, `None` when the field passed.
    pub error: Option<String>,
}

/// Result of a whole-form validation pass.
///
/// Holds one outcome per field touched through
/// [`FormValidator::field`](super::FormValidator::field), in first-touch
/// order. Fields never touched are absent rather than passing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationResult {
    pub(crate) fn push(&mut self, outcome: FieldOutcome) {
        self.outcomes.push(outcome);
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.error.is_none())
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Every outcome, passing fields included.
    pub fn errors(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// The failure message of `field`, `None` if it passed or was not
    /// validated.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.outcome(field)?.error.as_deref()
    }

    pub fn outcome(&self, field: &str) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| o.field_name == field)
    }

    /// Whether `field` took part in this pass.
    pub fn contains(&self, field: &str) -> bool {
        self.outcome(field).is_some()
    }

    /// Names of the fields that failed.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.error.is_some())
            .map(|o| o.field_name.as_str())
    }

    /// Get the first failing field (if any).
    pub fn first_error(&self) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| o.error.is_some())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
