use crate::document::{Document, NodeId};

/// Classification of a node by how it holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Single-line text entry (`text`, `email`, `password`, `url`, ...).
    TextEntry,
    Checkbox,
    Radio,
    /// `number` and `range` inputs.
    Numeric,
    File,
    TextArea,
    Select,
    Output,
    /// Submit, reset and plain buttons, whether `<button>` or `<input>`.
    Button,
    /// Not a form control.
    None,
}

impl ControlKind {
    pub fn of(doc: &Document, node: NodeId) -> Self {
        match doc.tag(node) {
            "input" => match doc.input_type(node).as_str() {
                "checkbox" => Self::Checkbox,
                "radio" => Self::Radio,
                "number" | "range" => Self::Numeric,
                "file" => Self::File,
                "submit" | "reset" | "button" | "image" => Self::Button,
                _ => Self::TextEntry,
            },
            "textarea" => Self::TextArea,
            "select" => Self::Select,
            "output" => Self::Output,
            "button" => Self::Button,
            _ => Self::None,
        }
    }

    /// Controls a form registers as fields: everything but buttons.
    pub fn is_field(self) -> bool {
        !matches!(self, Self::Button | Self::None)
    }

    /// Kinds that honour `minlength` / `maxlength`.
    pub fn is_string_capable(self) -> bool {
        matches!(self, Self::TextEntry | Self::TextArea)
    }
}

/// One selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }
}

/// The files selected in a file control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    files: Vec<FileEntry>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list of empty files with the given names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| FileEntry::new(name, 0, "application/octet-stream"))
            .collect()
    }

    pub fn push(&mut self, file: FileEntry) {
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.files.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter()
    }
}

impl FromIterator<FileEntry> for FileList {
    fn from_iter<T: IntoIterator<Item = FileEntry>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Parse a control's text as a finite number. Surrounding whitespace is
/// ignored; empty, non-numeric and infinite inputs yield `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("25"), Some(25.0));
        assert_eq!(parse_number(" -1.5 "), Some(-1.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
