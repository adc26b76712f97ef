use formdom::{ControlKind, Document, FileList, NodeId, parse_number};

/// The current value of a control, as seen by the rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unchecked radio group, or a file control without a file list.
    Null,
    /// Checkbox state.
    Bool(bool),
    /// Numeric control; `NaN` when the input does not parse.
    Number(f64),
    Text(String),
    /// Array-like list of selected files.
    Files(FileList),
}

impl Value {
    /// Read the value of `control`, dispatching on its kind.
    pub fn extract(doc: &Document, control: NodeId, kind: ControlKind) -> Self {
        match kind {
            ControlKind::Checkbox => Self::Bool(doc.checked(control)),
            ControlKind::Radio => doc
                .radio_group(control)
                .into_iter()
                .find(|&radio| doc.checked(radio))
                .map_or(Self::Null, |radio| Self::Text(doc.value(radio))),
            ControlKind::Numeric => {
                Self::Number(parse_number(&doc.value(control)).unwrap_or(f64::NAN))
            }
            ControlKind::File => doc.files(control).cloned().map_or(Self::Null, Self::Files),
            ControlKind::TextEntry
            | ControlKind::TextArea
            | ControlKind::Select
            | ControlKind::Output
            | ControlKind::Button
            | ControlKind::None => Self::Text(doc.value(control)),
        }
    }

    /// Empty in the sense of a required field: null, empty text, an empty
    /// list or an unchecked checkbox.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(checked) => !checked,
            Self::Number(_) => false,
            Self::Text(text) => text.is_empty(),
            Self::Files(files) => files.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Length of an array-like value.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Files(files) => Some(files.len()),
            _ => None,
        }
    }

    /// A real number, or text that parses as one.
    pub fn is_number(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_nan(),
            Self::Text(text) => parse_number(text).is_some(),
            _ => false,
        }
    }

    /// Numeric reading used by range rules. Text is coerced (`NaN` when it
    /// does not parse); other kinds have no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => Some(parse_number(text).unwrap_or(f64::NAN)),
            _ => None,
        }
    }

    /// Strict comparison with another control's raw value: only text can
    /// equal it.
    pub fn matches_raw(&self, raw: &str) -> bool {
        self.as_text() == Some(raw)
    }
}
