use std::fmt;
use std::sync::LazyLock;

use fancy_regex::Regex;
use formdom::{ControlKind, Document, NodeId};
use log::trace;

use super::messages;
use super::value::Value;
use crate::error::Error;

static EMAIL: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Outcome of a custom predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Fail with the rule's message.
    Fail,
    /// Fail with this message.
    Message(String),
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail }
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Pass,
            Err(message) => Self::Message(message),
        }
    }
}

/// Custom predicate over a textual value.
pub type Predicate = Box<dyn Fn(&str) -> Verdict + Send + Sync>;

/// What a rule checks.
pub enum RuleKind {
    Required,
    IsString,
    IsNumber,
    Email,
    /// Minimum text length, in UTF-16 code units.
    Min(usize),
    /// Maximum text length, in UTF-16 code units.
    Max(usize),
    MinNumber(f64),
    MaxNumber(f64),
    Pattern(Regex),
    /// Equal to the raw value of the named control in the same form.
    Confirm(String),
    IsArray,
    /// Minimum length of an array-like value.
    MinLength(usize),
    /// Maximum length of an array-like value.
    MaxLength(usize),
    Custom(Predicate),
}

impl RuleKind {
    /// Compile `pattern` into a [`RuleKind::Pattern`].
    pub fn pattern(pattern: &str) -> Result<Self, Error> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn custom<F, R>(predicate: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self::Custom(Box::new(move |value: &str| predicate(value).into()))
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Required => messages::REQUIRED,
            Self::IsString => messages::STRING,
            Self::IsNumber => messages::NUMBER,
            Self::Email => messages::EMAIL,
            Self::Min(_) => messages::MIN,
            Self::Max(_) => messages::MAX,
            Self::MinNumber(_) => messages::MIN_NUMBER,
            Self::MaxNumber(_) => messages::MAX_NUMBER,
            Self::Pattern(_) => messages::PATTERN,
            Self::Confirm(_) => messages::CONFIRM,
            Self::IsArray => messages::ARRAY,
            Self::MinLength(_) => messages::MIN_LENGTH,
            Self::MaxLength(_) => messages::MAX_LENGTH,
            Self::Custom(_) => messages::CUSTOM,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::IsString => "string",
            Self::IsNumber => "number",
            Self::Email => "email",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::MinNumber(_) => "minNumber",
            Self::MaxNumber(_) => "maxNumber",
            Self::Pattern(_) => "pattern",
            Self::Confirm(_) => "confirm",
            Self::IsArray => "array",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min(n) | Self::Max(n) | Self::MinLength(n) | Self::MaxLength(n) => {
                write!(f, "{}({n})", self.name())
            }
            Self::MinNumber(n) | Self::MaxNumber(n) => write!(f, "{}({n})", self.name()),
            Self::Pattern(re) => write!(f, "pattern({})", re.as_str()),
            Self::Confirm(other) => write!(f, "confirm({other:?})"),
            _ => f.write_str(self.name()),
        }
    }
}

/// The form a rule is evaluated in, for rules that look beyond their own
/// control.
pub(crate) struct RuleContext<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) form: NodeId,
}

impl RuleContext<'_> {
    /// Raw value of the first control in the form named or identified by
    /// `name`.
    fn raw_value_of(&self, name: &str) -> Option<String> {
        self.doc
            .descendants(self.form)
            .filter(|&n| ControlKind::of(self.doc, n) != ControlKind::None)
            .find(|&n| {
                self.doc.attr(n, "name") == Some(name) || self.doc.element_id(n) == Some(name)
            })
            .map(|n| self.doc.value(n))
    }
}

/// A check paired with the message reported when it fails.
#[derive(Debug)]
pub struct Rule {
    kind: RuleKind,
    message: String,
}

impl Rule {
    /// A rule reporting its default message.
    pub fn new(kind: RuleKind) -> Self {
        let message = kind.default_message().to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure message, or `None` when `value` passes.
    pub(crate) fn check(&self, value: &Value, cx: &RuleContext<'_>) -> Option<String> {
        let failed = match &self.kind {
            RuleKind::Required => value.is_empty(),
            RuleKind::IsString => value.as_text().is_none(),
            RuleKind::IsNumber => !value.is_number(),
            RuleKind::Email => value.as_text().is_some_and(|text| !EMAIL.is_match(text)),
            RuleKind::Min(min) => value.as_text().is_some_and(|text| text_len(text) < *min),
            RuleKind::Max(max) => value.as_text().is_some_and(|text| text_len(text) > *max),
            RuleKind::MinNumber(min) => value.as_number().is_some_and(|n| n < *min),
            RuleKind::MaxNumber(max) => value.as_number().is_some_and(|n| n > *max),
            RuleKind::Pattern(re) => value.as_text().is_some_and(|text| match re.is_match(text) {
                Ok(matched) => !matched,
                Err(e) => {
                    trace!("[rules] pattern '{}' gave up: {e}", re.as_str());
                    true
                }
            }),
            RuleKind::Confirm(other) => cx
                .raw_value_of(other)
                .is_some_and(|raw| !value.matches_raw(&raw)),
            RuleKind::IsArray => value.array_len().is_none(),
            RuleKind::MinLength(min) => value.array_len().is_some_and(|len| len < *min),
            RuleKind::MaxLength(max) => value.array_len().is_some_and(|len| len > *max),
            // Only text reaches the predicate; anything else fails outright
            RuleKind::Custom(predicate) => match value.as_text().map(|text| predicate(text)) {
                Some(Verdict::Pass) => false,
                Some(Verdict::Message(message)) => return Some(message),
                Some(Verdict::Fail) | None => true,
            },
        };
        failed.then(|| self.message.clone())
    }
}

/// Length as the DOM counts it, in UTF-16 code units.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}
