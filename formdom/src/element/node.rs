use std::collections::HashMap;

use super::Content;
use crate::control::FileList;

/// Owned description of a markup node, flattened into a
/// [`Document`](crate::Document) before use.
///
/// Elements are built with chained setters:
///
/// ```
/// use formdom::Element;
///
/// let form = Element::form().id("signup").child(
///     Element::div()
///         .class("field")
///         .child(Element::label("Name").for_id("name"))
///         .child(Element::text_input().id("name").name("name").required()),
/// );
/// # let _ = form;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
    // Identity
    pub tag: String,

    // Content
    pub content: Content,

    // Markup
    pub attrs: HashMap<String, String>,
    pub classes: Vec<String>,
    pub hidden: bool,

    // Control state
    pub value: Option<String>,
    /// Checkedness for checkboxes and radios, selectedness for options.
    pub checked: bool,
    pub files: Option<FileList>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    /// An `<input>` of the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn text_input() -> Self {
        Self::input("text")
    }

    pub fn email_input() -> Self {
        Self::input("email")
    }

    pub fn password_input() -> Self {
        Self::input("password")
    }

    pub fn number_input() -> Self {
        Self::input("number")
    }

    pub fn range_input() -> Self {
        Self::input("range")
    }

    pub fn checkbox() -> Self {
        Self::input("checkbox")
    }

    pub fn radio() -> Self {
        Self::input("radio")
    }

    pub fn file_input() -> Self {
        Self::input("file")
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(text)
    }

    pub fn output() -> Self {
        Self::new("output")
    }

    /// A `<button>` of the given type (`submit`, `reset` or `button`).
    pub fn button(button_type: impl Into<String>) -> Self {
        Self::new("button").attr("type", button_type)
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr(format!("data-{}", key.into()), value)
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Associate a `<label>` with the control whose id is `id`.
    pub fn for_id(self, id: impl Into<String>) -> Self {
        self.attr("for", id)
    }

    // Native constraints
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "")
    }

    pub fn minlength(self, len: usize) -> Self {
        self.attr("minlength", len.to_string())
    }

    pub fn maxlength(self, len: usize) -> Self {
        self.attr("maxlength", len.to_string())
    }

    pub fn min(self, min: impl ToString) -> Self {
        self.attr("min", min.to_string())
    }

    pub fn max(self, max: impl ToString) -> Self {
        self.attr("max", max.to_string())
    }

    pub fn step(self, step: impl ToString) -> Self {
        self.attr("step", step.to_string())
    }

    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.attr("pattern", pattern)
    }

    // Control state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Mark an `<option>` as selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.checked = selected;
        self
    }

    pub fn files(mut self, files: FileList) -> Self {
        self.files = Some(files);
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Text is kept in a leading span
                let text = Element::span().text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
            Content::Text(text) => {
                let text = Element::span().text(std::mem::take(text));
                self.content =
                    Content::Children(std::iter::once(text).chain(new_children).collect());
            }
        }
        self
    }
}
