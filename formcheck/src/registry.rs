//! Resolution of logical field names to controls, labels and error
//! containers.

use std::collections::{HashMap, HashSet};

use formdom::{ControlKind, Document, NodeId, Selector};
use log::debug;

use crate::error::Error;

/// Attribute naming a field explicitly. Takes precedence over `name` and `id`.
pub const FIELD_NAME_ATTR: &str = "data-field-name";

/// Class marking an error container when no selector is configured.
pub const DEFAULT_ERROR_CLASS: &str = "error-message";

/// Name → control / label / error-container tables for one form.
///
/// The tables are built once by [`FieldRegistry::new`]; the registry only
/// records node handles and never changes the document.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    form: NodeId,
    fields: HashMap<String, NodeId>,
    labels: HashMap<String, NodeId>,
    error_containers: HashMap<String, NodeId>,
    error_selector: Option<Selector>,
}

impl FieldRegistry {
    /// Resolve every field of `form`.
    ///
    /// `error_container` is the configured error-container selector, if any;
    /// a malformed selector fails construction.
    pub fn new(doc: &Document, form: NodeId, error_container: Option<&str>) -> Result<Self, Error> {
        let error_selector = error_container
            .filter(|s| !s.trim().is_empty())
            .map(Selector::parse)
            .transpose()?;

        let mut registry = Self {
            form,
            fields: HashMap::new(),
            labels: HashMap::new(),
            error_containers: HashMap::new(),
            error_selector,
        };
        registry.resolve_fields(doc);

        let matched = registry
            .error_selector
            .as_ref()
            .map(|selector| doc.select_all(selector))
            .unwrap_or_default();
        for (name, &control) in &registry.fields {
            if let Some(label) = find_label(doc, control) {
                registry.labels.insert(name.clone(), label);
            }
            if let Some(container) = registry.find_error_container(doc, control, &matched) {
                registry.error_containers.insert(name.clone(), container);
            }
        }

        debug!(
            "[registry] resolved {} field(s), {} label(s), {} error container(s) in {}",
            registry.fields.len(),
            registry.labels.len(),
            registry.error_containers.len(),
            form
        );
        Ok(registry)
    }

    fn resolve_fields(&mut self, doc: &Document) {
        // Explicitly named elements claim their names first
        let mut tagged = HashSet::new();
        for node in doc.descendants(self.form) {
            if let Some(name) = doc.attr(node, FIELD_NAME_ATTR).filter(|n| !n.is_empty()) {
                tagged.insert(node);
                self.fields.entry(name.to_string()).or_insert(node);
            }
        }

        for node in doc.descendants(self.form) {
            if tagged.contains(&node) || !ControlKind::of(doc, node).is_field() {
                continue;
            }
            let unclaimed = [doc.attr(node, "name"), doc.element_id(node)]
                .into_iter()
                .flatten()
                .filter(|n| !n.is_empty())
                .find(|n| !self.fields.contains_key(*n));
            if let Some(name) = unclaimed {
                self.fields.insert(name.to_string(), node);
            }
        }
    }

    /// `matched` holds every node the configured selector matches.
    fn find_error_container(
        &self,
        doc: &Document,
        control: NodeId,
        matched: &[NodeId],
    ) -> Option<NodeId> {
        if let Some(selector) = &self.error_selector {
            let found = if selector.is_id_selector() {
                matched.first().copied()
            } else {
                // The parent's subtree covers the control's next sibling
                doc.ancestors(control)
                    .find(|a| matched.contains(a))
                    .or_else(|| {
                        let parent = doc.parent(control)?;
                        matched
                            .iter()
                            .copied()
                            .find(|&n| n != parent && doc.contains(parent, n))
                    })
            };
            if found.is_some() {
                return found;
            }
        }

        let parent = doc.parent(control)?;
        doc.children(parent)
            .iter()
            .copied()
            .find(|&child| doc.has_class(child, DEFAULT_ERROR_CLASS))
    }

    /// The control registered under `name`.
    pub fn field(&self, name: &str) -> Option<NodeId> {
        self.fields.get(name).copied()
    }

    pub fn label(&self, name: &str) -> Option<NodeId> {
        self.labels.get(name).copied()
    }

    /// The error container resolved for `name`. With an `#id` selector
    /// configured, that element is returned for any name, registered or not.
    pub fn error_container(&self, doc: &Document, name: &str) -> Option<NodeId> {
        self.error_containers.get(name).copied().or_else(|| {
            self.error_selector
                .as_ref()
                .filter(|s| s.is_id_selector())
                .and_then(|s| doc.select(s))
        })
    }

    /// A copy of the name → control table.
    pub fn fields(&self) -> HashMap<String, NodeId> {
        self.fields.clone()
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A `<label for=...>` naming the control's id, else an enclosing `<label>`.
fn find_label(doc: &Document, control: NodeId) -> Option<NodeId> {
    if let Some(id) = doc.element_id(control) {
        let root = doc.root();
        let by_for = std::iter::once(root)
            .chain(doc.descendants(root))
            .find(|&n| doc.tag(n) == "label" && doc.attr(n, "for") == Some(id));
        if by_for.is_some() {
            return by_for;
        }
    }
    doc.closest_tag(control, "label")
}
