//! Field lifecycle and error presentation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use formdom::{Document, NodeId};
use log::{debug, trace};

use super::engine::RuleEngine;
use super::field_state::FieldState;
use super::result::{FieldOutcome, ValidationResult};
use crate::config::ValidatorConfig;
use crate::error::Error;
use crate::registry::{DEFAULT_ERROR_CLASS, FieldRegistry};

/// Validates one form and renders the outcome onto its document.
///
/// The validator owns the document; use [`document_mut`](Self::document_mut)
/// to change control values between passes.
///
/// # Example
///
/// ```
/// use formcheck::prelude::*;
///
/// let doc = Document::new(
///     Element::form().id("login").child(
///         Element::div().children([
///             Element::text_input().name("user").required(),
///             Element::span().class("error-message"),
///         ]),
///     ),
/// );
/// let mut validator = FormValidator::for_form_id(doc, "login", ValidatorConfig::default())?;
/// validator.field("user")?;
///
/// let result = validator.validate();
/// assert!(result.is_invalid());
/// assert_eq!(validator.field_state("user"), Some(FieldState::Error));
///
/// let user = validator.registry().field("user").unwrap();
/// validator.document_mut().set_value(user, "john");
/// assert!(validator.validate().is_valid());
/// assert!(validator.document().has_class(user, "is-valid"));
/// # Ok::<(), formcheck::Error>(())
/// ```
#[derive(Debug)]
pub struct FormValidator {
    document: Document,
    config: ValidatorConfig,
    registry: FieldRegistry,
    engines: HashMap<String, RuleEngine>,
    /// Tracked field names in first-touch order.
    order: Vec<String>,
    states: HashMap<String, FieldState>,
    /// Error containers this validator had to create, by field.
    created: HashMap<String, NodeId>,
}

impl FormValidator {
    /// Create a validator for the form rooted at `form`.
    ///
    /// Fails if the configured error-container selector is malformed.
    pub fn new(document: Document, form: NodeId, config: ValidatorConfig) -> Result<Self, Error> {
        let registry = FieldRegistry::new(&document, form, config.error_container.as_deref())?;
        Ok(Self {
            document,
            config,
            registry,
            engines: HashMap::new(),
            order: Vec::new(),
            states: HashMap::new(),
            created: HashMap::new(),
        })
    }

    /// Create a validator for the element whose id is `form_id`.
    pub fn for_form_id(
        document: Document,
        form_id: &str,
        config: ValidatorConfig,
    ) -> Result<Self, Error> {
        let form = document
            .get_element_by_id(form_id)
            .ok_or_else(|| Error::FormNotFound(form_id.to_string()))?;
        Self::new(document, form, config)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule engine of `name`, created on first access. Later calls
    /// return the same engine, so rules accumulate across calls.
    pub fn field(&mut self, name: &str) -> Result<&mut RuleEngine, Error> {
        match self.engines.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let control = self
                    .registry
                    .field(name)
                    .ok_or_else(|| Error::UnknownField(name.to_string()))?;
                let engine = RuleEngine::new(&self.document, control, self.registry.form())?;
                debug!(
                    "[validator] tracking field '{}' ({:?}, {} implicit rule(s))",
                    name,
                    engine.kind(),
                    engine.rules().len()
                );
                self.order.push(name.to_string());
                Ok(entry.insert(engine))
            }
        }
    }

    /// Names of the tracked fields, in first-touch order.
    pub fn tracked_fields(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Presentation state of `name`, `None` if the field is not tracked.
    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        if !self.engines.contains_key(name) {
            return None;
        }
        Some(self.states.get(name).copied().unwrap_or_default())
    }

    /// Validate every tracked field and render each outcome.
    pub fn validate(&mut self) -> ValidationResult {
        let mut result = ValidationResult::default();
        for name in self.order.clone() {
            if let Some((control, error)) = self.run(&name) {
                self.present(&name, control, error.as_deref());
                result.push(FieldOutcome {
                    field_name: name,
                    control,
                    error,
                });
            }
        }
        debug!(
            "[validator] validated {} field(s), {} invalid",
            result.len(),
            result.invalid_fields().count()
        );
        result
    }

    /// Validate and render a single tracked field.
    pub fn validate_field(&mut self, name: &str) -> Result<Option<String>, Error> {
        let (control, error) = self
            .run(name)
            .ok_or_else(|| Error::UntrackedField(name.to_string()))?;
        self.present(name, control, error.as_deref());
        Ok(error)
    }

    /// Return every tracked field to clean presentation. Rules are kept.
    pub fn reset(&mut self) {
        for name in self.order.clone() {
            let Some(control) = self.engines.get(&name).map(RuleEngine::control) else {
                continue;
            };
            self.document.remove_class(control, &self.config.error_class);
            self.document.remove_class(control, &self.config.valid_class);
            if let Some(label) = self.registry.label(&name) {
                self.document.remove_class(label, &self.config.invalid_class);
            }
            self.hide_container(&name);
            self.states.insert(name, FieldState::Clean);
        }
        debug!("[validator] reset {} field(s)", self.order.len());
    }

    fn run(&mut self, name: &str) -> Option<(NodeId, Option<String>)> {
        let engine = self.engines.get_mut(name)?;
        let error = engine.validate(&self.document);
        Some((engine.control(), error))
    }

    fn present(&mut self, name: &str, control: NodeId, error: Option<&str>) {
        match error {
            Some(message) => self.show_error(name, control, message),
            None => self.show_valid(name, control),
        }
    }

    fn show_error(&mut self, name: &str, control: NodeId, message: &str) {
        self.document.add_class(control, &self.config.error_class);
        self.document.remove_class(control, &self.config.valid_class);
        if let Some(label) = self.registry.label(name) {
            self.document.add_class(label, &self.config.invalid_class);
        }

        let container = match self.container(name) {
            Some(container) => container,
            None => self.create_container(name, control),
        };
        self.document.set_text(container, message);
        self.document.set_hidden(container, false);

        trace!("[validator] '{name}' -> error: {message}");
        self.states.insert(name.to_string(), FieldState::Error);
    }

    fn show_valid(&mut self, name: &str, control: NodeId) {
        self.document.remove_class(control, &self.config.error_class);
        self.document.add_class(control, &self.config.valid_class);
        if let Some(label) = self.registry.label(name) {
            self.document.remove_class(label, &self.config.invalid_class);
        }
        self.hide_container(name);

        trace!("[validator] '{name}' -> valid");
        self.states.insert(name.to_string(), FieldState::Clean);
    }

    fn hide_container(&mut self, name: &str) {
        if let Some(container) = self.container(name) {
            self.document.set_text(container, "");
            self.document.set_hidden(container, true);
        }
    }

    fn container(&self, name: &str) -> Option<NodeId> {
        self.created
            .get(name)
            .copied()
            .or_else(|| self.registry.error_container(&self.document, name))
    }

    /// Create an error container after the field's label, or at the end of
    /// the control's parent when there is no label.
    fn create_container(&mut self, name: &str, control: NodeId) -> NodeId {
        let container = self.document.create_element("div");
        self.document.add_class(container, DEFAULT_ERROR_CLASS);

        let placed = self
            .registry
            .label(name)
            .is_some_and(|label| self.document.insert_after(label, container));
        if !placed {
            let parent = self
                .document
                .parent(control)
                .unwrap_or_else(|| self.registry.form());
            self.document.append_child(parent, container);
        }

        debug!("[validator] created error container {container} for '{name}'");
        self.created.insert(name.to_string(), container);
        container
    }
}
