//! Rule evaluation and the validate/present cycle.
//!
//! # Example
//!
//! ```
//! use formcheck::prelude::*;
//!
//! let doc = Document::new(
//!     Element::form().children([
//!         Element::text_input().name("age"),
//!         Element::file_input().name("docs"),
//!     ]),
//! );
//! let form = doc.root();
//! let mut validator = FormValidator::new(doc, form, ValidatorConfig::default())?;
//! validator.field("age")?.number().min_number(18.0).max_number(100.0);
//! validator.field("docs")?.array().min_length(1).max_length(3);
//!
//! let age = validator.registry().field("age").unwrap();
//! validator.document_mut().set_value(age, "15");
//! assert_eq!(
//!     validator.validate_field("age")?.as_deref(),
//!     Some(messages::MIN_NUMBER)
//! );
//! # Ok::<(), formcheck::Error>(())
//! ```

mod engine;
mod field_state;
pub mod messages;
mod result;
mod rule;
mod validator;
mod value;

pub use engine::RuleEngine;
pub use field_state::FieldState;
pub use result::{FieldOutcome, ValidationResult};
pub use rule::{Predicate, Rule, RuleKind, Verdict};
pub use validator::FormValidator;
pub use value::Value;
