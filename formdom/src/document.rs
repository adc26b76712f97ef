use std::collections::HashMap;

use crate::control::{ControlKind, FileList};
use crate::element::{Content, Element};
use crate::selector::Selector;

/// Handle to a node inside a [`Document`].
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) classes: Vec<String>,
    pub(crate) text: String,
    pub(crate) hidden: bool,
    pub(crate) value: Option<String>,
    pub(crate) checked: bool,
    pub(crate) files: Option<FileList>,
    pub(crate) custom_validity: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: HashMap::new(),
            classes: Vec::new(),
            text: String::new(),
            hidden: false,
            value: None,
            checked: false,
            files: None,
            custom_validity: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed node tree with parent, child and sibling relations.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Flatten an element tree into a document. Nodes are allocated in
    /// document order.
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.insert_element(root, None);
        doc
    }

    fn insert_element(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(element.tag);
        node.attrs = element.attrs;
        node.classes = element.classes;
        node.hidden = element.hidden;
        node.value = element.value;
        node.checked = element.checked;
        node.files = element.files;
        node.parent = parent;
        self.nodes.push(node);

        match element.content {
            Content::None => {}
            Content::Text(text) => self.nodes[id.0].text = text,
            Content::Children(children) => {
                for child in children {
                    let child_id = self.insert_element(child, Some(id));
                    self.nodes[id.0].children.push(child_id);
                }
            }
        }
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // Structure

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&s| s == id)?;
        siblings.get(index + 1).copied()
    }

    /// Ancestors of `id`, nearest first. Does not include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Descendants of `id` in document order. Does not include `id` itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Whether `id` lies inside the subtree rooted at `ancestor`.
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        id == ancestor || self.ancestors(id).any(|a| a == ancestor)
    }

    /// Nearest strict ancestor with the given tag.
    pub fn closest_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.tag(a) == tag)
    }

    /// The `<form>` owning `id`, if any.
    pub fn form_of(&self, id: NodeId) -> Option<NodeId> {
        self.closest_tag(id, "form")
    }

    // Attributes

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.node(id).attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.node_mut(id)
            .attrs
            .insert(name.into().to_ascii_lowercase(), value.into());
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.node_mut(id).attrs.remove(name)
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "id").filter(|s| !s.is_empty())
    }

    /// First node in document order whose id is `element_id`.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|&n| self.element_id(n) == Some(element_id))
    }

    /// Lowercased `type` attribute of an input, `text` when absent.
    pub fn input_type(&self, id: NodeId) -> String {
        self.attr(id, "type")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "text".to_string())
    }

    // Classes

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        if class.is_empty() || self.has_class(id, class) {
            return false;
        }
        self.node_mut(id).classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let classes = &mut self.node_mut(id).classes;
        let before = classes.len();
        classes.retain(|c| c != class);
        classes.len() != before
    }

    // Text and visibility

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = text.into();
    }

    /// Own text followed by the text of every descendant, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        std::iter::once(id)
            .chain(self.descendants(id))
            .map(|n| self.text(n))
            .collect()
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).hidden
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.node_mut(id).hidden = hidden;
    }

    // Mutation

    /// Allocate a detached node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != id);
        }
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Move `node` to directly after `reference`.
    /// Returns false, leaving the tree untouched, if `reference` has no parent.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> bool {
        if self.parent(reference).is_none() || reference == node {
            return false;
        }
        self.detach(node);
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        let siblings = &mut self.node_mut(parent).children;
        let index = siblings
            .iter()
            .position(|&s| s == reference)
            .map_or(siblings.len(), |i| i + 1);
        siblings.insert(index, node);
        self.node_mut(node).parent = Some(parent);
        true
    }

    // Control state

    /// The raw textual value of a node, as a form submission would see it.
    pub fn value(&self, id: NodeId) -> String {
        let node = self.node(id);
        match node.tag.as_str() {
            "select" => self
                .selected_option(id)
                .map(|option| self.option_value(option))
                .unwrap_or_default(),
            "option" => self.option_value(id),
            "input" if matches!(self.input_type(id).as_str(), "checkbox" | "radio") => {
                node.value.clone().unwrap_or_else(|| "on".to_string())
            }
            _ => node.value.clone().unwrap_or_default(),
        }
    }

    /// Set the value of a control. For a `<select>` this selects the first
    /// option with a matching value and deselects the rest.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        let value = value.into();
        if self.tag(id) == "select" {
            let options = self.options(id);
            let target = options
                .iter()
                .copied()
                .find(|&o| self.option_value(o) == value);
            for option in options {
                self.node_mut(option).checked = Some(option) == target;
            }
            return;
        }
        self.node_mut(id).value = Some(value);
    }

    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .filter(|&n| self.tag(n) == "option")
            .collect()
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attr(option, "value")
            .map(str::to_string)
            .unwrap_or_else(|| self.text_content(option).trim().to_string())
    }

    fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.options(select);
        options
            .iter()
            .copied()
            .find(|&o| self.node(o).checked)
            .or_else(|| options.first().copied())
    }

    pub fn checked(&self, id: NodeId) -> bool {
        self.node(id).checked
    }

    /// Set checkedness. Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if checked && ControlKind::of(self, id) == ControlKind::Radio {
            for other in self.radio_group(id) {
                self.node_mut(other).checked = false;
            }
        }
        self.node_mut(id).checked = checked;
    }

    /// Radios sharing `radio`'s name inside the same form (or the whole
    /// document when it has no form), in document order. A radio without a
    /// name forms a group of one.
    pub fn radio_group(&self, radio: NodeId) -> Vec<NodeId> {
        let Some(name) = self.attr(radio, "name").filter(|n| !n.is_empty()) else {
            return vec![radio];
        };
        let scope = self.form_of(radio).unwrap_or(self.root);
        self.descendants(scope)
            .filter(|&n| {
                ControlKind::of(self, n) == ControlKind::Radio
                    && self.attr(n, "name") == Some(name)
                    && self.form_of(n).unwrap_or(self.root) == scope
            })
            .collect()
    }

    pub fn files(&self, id: NodeId) -> Option<&FileList> {
        self.node(id).files.as_ref()
    }

    pub fn set_files(&mut self, id: NodeId, files: Option<FileList>) {
        self.node_mut(id).files = files;
    }

    /// Set or, with an empty message, clear a custom validity error.
    pub fn set_custom_validity(&mut self, id: NodeId, message: impl Into<String>) {
        self.node_mut(id).custom_validity = message.into();
    }

    // Selectors

    /// Every attached node matching `selector`, root included, in document
    /// order.
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        selector.select_all(self)
    }

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.select_all(selector).contains(&id)
    }

    /// First descendant of `scope` matching `selector`, in document order.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.select_all(selector)
            .into_iter()
            .find(|&n| n != scope && self.contains(scope, n))
    }

    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.select_all(selector)
            .into_iter()
            .filter(|&n| n != scope && self.contains(scope, n))
            .collect()
    }

    /// First node of the whole document, root included, matching `selector`.
    pub fn select(&self, selector: &Selector) -> Option<NodeId> {
        self.select_all(selector).into_iter().next()
    }

    /// Nearest strict ancestor matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let matched = self.select_all(selector);
        self.ancestors(id).find(|a| matched.contains(a))
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(next).iter().rev().copied());
        Some(next)
    }
}
