use formdom::{ControlKind, Document, NodeId, parse_number};
use log::trace;
use fancy_regex::Regex;

use super::messages;
use super::rule::{Rule, RuleContext, RuleKind, Verdict};
use super::value::Value;
use crate::error::Error;

/// The ordered rule chain of one field.
///
/// Rules derived from the control's native constraints come first; rules
/// added through the builder methods follow in call order. Every builder
/// method returns the same engine so calls can be chained:
///
/// ```
/// use formcheck::prelude::*;
///
/// let doc = Document::new(Element::form().child(Element::text_input().name("nick")));
/// let form = doc.root();
/// let mut validator = FormValidator::new(doc, form, ValidatorConfig::default())?;
/// validator
///     .field("nick")?
///     .required()
///     .min(3)
///     .pattern("^[a-z]+$")?
///     .custom(|nick: &str| nick != "admin");
/// assert_eq!(validator.field("nick")?.rules().len(), 4);
/// # Ok::<(), formcheck::Error>(())
/// ```
#[derive(Debug)]
pub struct RuleEngine {
    control: NodeId,
    form: NodeId,
    kind: ControlKind,
    rules: Vec<Rule>,
    value: Value,
}

impl RuleEngine {
    /// Create the engine for `control` inside `form`, seeding it with the
    /// control's native constraints. Fails if the control carries a
    /// `pattern` attribute that does not compile.
    pub fn new(doc: &Document, control: NodeId, form: NodeId) -> Result<Self, Error> {
        let kind = ControlKind::of(doc, control);
        Ok(Self {
            control,
            form,
            kind,
            rules: implicit_rules(doc, control, kind)?,
            value: Value::extract(doc, control, kind),
        })
    }

    pub fn control(&self) -> NodeId {
        self.control
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The value read by the most recent [`validate`](Self::validate).
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Append a rule with a caller-supplied message.
    pub fn rule(&mut self, kind: RuleKind, message: impl Into<String>) -> &mut Self {
        self.rules.push(Rule::with_message(kind, message));
        self
    }

    fn push(&mut self, kind: RuleKind) -> &mut Self {
        self.rules.push(Rule::new(kind));
        self
    }

    pub fn required(&mut self) -> &mut Self {
        self.push(RuleKind::Required)
    }

    pub fn string(&mut self) -> &mut Self {
        self.push(RuleKind::IsString)
    }

    pub fn number(&mut self) -> &mut Self {
        self.push(RuleKind::IsNumber)
    }

    pub fn email(&mut self) -> &mut Self {
        self.push(RuleKind::Email)
    }

    /// Minimum text length.
    pub fn min(&mut self, len: usize) -> &mut Self {
        self.push(RuleKind::Min(len))
    }

    /// Maximum text length.
    pub fn max(&mut self, len: usize) -> &mut Self {
        self.push(RuleKind::Max(len))
    }

    pub fn min_number(&mut self, min: f64) -> &mut Self {
        self.push(RuleKind::MinNumber(min))
    }

    pub fn max_number(&mut self, max: f64) -> &mut Self {
        self.push(RuleKind::MaxNumber(max))
    }

    /// Require text to match `pattern` (unanchored). Fails if the pattern
    /// does not compile.
    pub fn pattern(&mut self, pattern: &str) -> Result<&mut Self, Error> {
        let kind = RuleKind::pattern(pattern)?;
        Ok(self.push(kind))
    }

    /// Like [`pattern`](Self::pattern) with an already compiled expression.
    pub fn pattern_regex(&mut self, re: Regex) -> &mut Self {
        self.push(RuleKind::Pattern(re))
    }

    /// Require the value to equal the raw value of another control of the
    /// form. Passes when no such control exists.
    pub fn confirm(&mut self, other: impl Into<String>) -> &mut Self {
        self.push(RuleKind::Confirm(other.into()))
    }

    pub fn array(&mut self) -> &mut Self {
        self.push(RuleKind::IsArray)
    }

    /// Minimum number of items of an array-like value.
    pub fn min_length(&mut self, len: usize) -> &mut Self {
        self.push(RuleKind::MinLength(len))
    }

    /// Maximum number of items of an array-like value.
    pub fn max_length(&mut self, len: usize) -> &mut Self {
        self.push(RuleKind::MaxLength(len))
    }

    /// Check text with `predicate`. Returning `false` fails with the default
    /// message, returning a string fails with that string. Values that are
    /// not text always fail.
    pub fn custom<F, R>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        self.push(RuleKind::custom(predicate))
    }

    /// Re-read the control and run the rule chain. Returns the message of
    /// the first failing rule; if every rule passes but the control is
    /// natively invalid, returns the native message. `None` means valid.
    pub fn validate(&mut self, doc: &Document) -> Option<String> {
        self.value = Value::extract(doc, self.control, self.kind);

        let cx = RuleContext {
            doc,
            form: self.form,
        };
        for rule in &self.rules {
            if let Some(message) = rule.check(&self.value, &cx) {
                trace!(
                    "[engine] {} failed {:?}: {}",
                    self.control,
                    rule.kind(),
                    message
                );
                return Some(message);
            }
        }

        match doc.validity(self.control) {
            Some(state) if !state.is_valid() => {
                let message = doc.validation_message(self.control);
                trace!("[engine] {} natively invalid: {:?}", self.control, state);
                if message.is_empty() {
                    Some(messages::INVALID.to_string())
                } else {
                    Some(message)
                }
            }
            _ => None,
        }
    }
}

/// Rules implied by the control's attributes, in fixed order: required,
/// text length, numeric range, pattern, email.
fn implicit_rules(doc: &Document, control: NodeId, kind: ControlKind) -> Result<Vec<Rule>, Error> {
    let mut rules = Vec::new();

    if doc.has_attr(control, "required") {
        rules.push(Rule::new(RuleKind::Required));
    }

    if kind.is_string_capable() {
        let length = |name: &str| {
            doc.attr(control, name)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&len| len > 0)
        };
        if let Some(min) = length("minlength") {
            rules.push(Rule::new(RuleKind::Min(min)));
        }
        if let Some(max) = length("maxlength") {
            rules.push(Rule::new(RuleKind::Max(max)));
        }
    }

    if kind == ControlKind::Numeric {
        if let Some(min) = doc.attr(control, "min").and_then(parse_number) {
            rules.push(Rule::new(RuleKind::MinNumber(min)));
        }
        if let Some(max) = doc.attr(control, "max").and_then(parse_number) {
            rules.push(Rule::new(RuleKind::MaxNumber(max)));
        }
    }

    if let Some(pattern) = doc.attr(control, "pattern") {
        // Native patterns must match the whole value
        rules.push(Rule::new(RuleKind::pattern(&format!("^(?:{pattern})$"))?));
    }

    if doc.tag(control) == "input" && doc.input_type(control) == "email" {
        rules.push(Rule::new(RuleKind::Email));
    }

    Ok(rules)
}
