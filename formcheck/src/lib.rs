//! Declarative, rule-based validation for forms held in a [`formdom`]
//! document.
//!
//! A [`FormValidator`] resolves the form's fields once, hands out one
//! [`RuleEngine`] per field through [`FormValidator::field`], and on
//! [`FormValidator::validate`] evaluates every touched field and renders the
//! outcome back onto the document (classes and error-message nodes).
//!
//! # Example
//!
//! ```
//! use formcheck::prelude::*;
//!
//! let doc = Document::new(
//!     Element::form().id("signup").children([
//!         Element::text_input().name("username").required(),
//!         Element::password_input().name("password"),
//!         Element::password_input().name("confirm"),
//!     ]),
//! );
//! let mut validator = FormValidator::for_form_id(doc, "signup", ValidatorConfig::default())?;
//! validator.field("username")?.min(3).max(10);
//! validator.field("confirm")?.confirm("password");
//!
//! let result = validator.validate();
//! assert!(!result.is_valid());
//! assert_eq!(result.error("username"), Some("Поле обязательно для заполнения"));
//! assert_eq!(result.error("confirm"), None);
//! # Ok::<(), formcheck::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod validation;

pub use fancy_regex;
pub use formdom;

pub use config::ValidatorConfig;
pub use error::Error;
pub use registry::FieldRegistry;
pub use validation::{
    FieldOutcome, FieldState, FormValidator, Rule, RuleEngine, RuleKind, ValidationResult, Value,
    Verdict,
};

pub mod prelude {
    pub use crate::config::ValidatorConfig;
    pub use crate::error::Error;
    pub use crate::registry::FieldRegistry;
    pub use crate::validation::{
        FieldState, FormValidator, RuleEngine, RuleKind, ValidationResult, Value, Verdict,
        messages,
    };

    pub use formdom::{Document, Element, FileList, NodeId};
}
