/// Presentation state of a tracked field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Never validated, last validation passed, or reset.
    #[default]
    Clean,
    /// Last validation failed; the error is on display.
    Error,
}
