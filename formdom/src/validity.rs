//! Native constraint validation, computed from a control's attributes and
//! current state the way a browser's constraint validation API does.

use email_address::EmailAddress;
use fancy_regex::Regex;

use crate::control::{parse_number, ControlKind};
use crate::document::{Document, NodeId};

/// Validity flags for a form control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    /// Required and no value
    pub value_missing: bool,
    /// Value is not of the input's type (email, url)
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    /// Numeric input that does not parse
    pub bad_input: bool,
    /// A custom validity message is set
    pub custom_error: bool,
}

impl ValidityState {
    pub fn is_valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch
            || self.bad_input
            || self.custom_error)
    }

    /// Message for the first failing flag (custom errors excluded).
    fn message(&self) -> Option<&'static str> {
        let message = if self.value_missing {
            "Please fill out this field."
        } else if self.bad_input {
            "Please enter a number."
        } else if self.type_mismatch {
            "Please enter a valid value."
        } else if self.pattern_mismatch {
            "Please match the requested format."
        } else if self.too_long {
            "Please shorten this text."
        } else if self.too_short {
            "Please lengthen this text."
        } else if self.range_underflow {
            "Value is below the allowed minimum."
        } else if self.range_overflow {
            "Value is above the allowed maximum."
        } else if self.step_mismatch {
            "Please enter a valid value."
        } else {
            return None;
        };
        Some(message)
    }
}

fn length_attr(doc: &Document, node: NodeId, name: &str) -> Option<usize> {
    doc.attr(node, name)?.trim().parse().ok()
}

fn number_attr(doc: &Document, node: NodeId, name: &str) -> Option<f64> {
    parse_number(doc.attr(node, name)?)
}

impl Document {
    /// Whether the control takes part in constraint validation.
    pub fn will_validate(&self, node: NodeId) -> bool {
        let kind = ControlKind::of(self, node);
        if matches!(kind, ControlKind::Output | ControlKind::Button | ControlKind::None) {
            return false;
        }
        if self.tag(node) == "input" && self.input_type(node) == "hidden" {
            return false;
        }
        !self.has_attr(node, "disabled")
    }

    /// Native validity of a control, or `None` for nodes that are not
    /// validated (buttons, outputs, non-controls, disabled controls).
    pub fn validity(&self, node: NodeId) -> Option<ValidityState> {
        if !self.will_validate(node) {
            return None;
        }

        let kind = ControlKind::of(self, node);
        let value = self.value(node);
        let mut state = ValidityState {
            custom_error: !self.node(node).custom_validity.is_empty(),
            ..Default::default()
        };

        if self.has_attr(node, "required") {
            state.value_missing = match kind {
                ControlKind::Checkbox => !self.checked(node),
                ControlKind::Radio => !self.radio_group(node).iter().any(|&r| self.checked(r)),
                ControlKind::File => self.files(node).is_none_or(|f| f.is_empty()),
                _ => value.is_empty(),
            };
        }

        if kind.is_string_capable() && !value.is_empty() {
            let len = value.encode_utf16().count();
            state.too_long = length_attr(self, node, "maxlength").is_some_and(|max| len > max);
            state.too_short = length_attr(self, node, "minlength").is_some_and(|min| len < min);
        }

        if kind == ControlKind::TextEntry && !value.is_empty() {
            state.type_mismatch = match self.input_type(node).as_str() {
                "email" => !EmailAddress::is_valid(&value),
                "url" => url::Url::parse(&value).is_err(),
                _ => false,
            };
            if let Some(pattern) = self.attr(node, "pattern") {
                // An uncompilable pattern is ignored, as browsers do
                match Regex::new(&format!("^(?:{pattern})$")) {
                    Ok(re) => match re.is_match(&value) {
                        Ok(matched) => state.pattern_mismatch = !matched,
                        Err(e) => log::trace!("[validity] pattern on {node} gave up: {e}"),
                    },
                    Err(e) => log::trace!("[validity] ignoring pattern on {node}: {e}"),
                }
            }
        }

        if kind == ControlKind::Numeric && !value.trim().is_empty() {
            match parse_number(&value) {
                None => state.bad_input = true,
                Some(n) => {
                    let min = number_attr(self, node, "min");
                    state.range_underflow = min.is_some_and(|min| n < min);
                    state.range_overflow = number_attr(self, node, "max").is_some_and(|max| n > max);
                    state.step_mismatch = self.step_mismatch(node, n, min.unwrap_or(0.0));
                }
            }
        }

        Some(state)
    }

    fn step_mismatch(&self, node: NodeId, n: f64, base: f64) -> bool {
        let step = match self.attr(node, "step").map(str::trim) {
            Some(step) if step.eq_ignore_ascii_case("any") => return false,
            Some(step) => parse_number(step).filter(|s| *s > 0.0).unwrap_or(1.0),
            None => 1.0,
        };
        let steps = (n - base) / step;
        (steps - steps.round()).abs() > 1e-9
    }

    /// The message a browser would show for the control's current validity:
    /// the custom message if one is set, otherwise a fixed message for the
    /// first failing constraint, otherwise an empty string.
    pub fn validation_message(&self, node: NodeId) -> String {
        let Some(state) = self.validity(node) else {
            return String::new();
        };
        if state.custom_error {
            return self.node(node).custom_validity.clone();
        }
        state.message().map(str::to_string).unwrap_or_default()
    }
}
