#![allow(dead_code)]

use formcheck::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// A validator over a `<form>` holding `controls`, with default config.
pub fn validator(controls: impl IntoIterator<Item = Element>) -> FormValidator {
    validator_with(controls, ValidatorConfig::default())
}

pub fn validator_with(
    controls: impl IntoIterator<Item = Element>,
    config: ValidatorConfig,
) -> FormValidator {
    init_logging();
    let doc = Document::new(Element::form().id("form").children(controls));
    FormValidator::for_form_id(doc, "form", config).expect("form should build")
}

/// The control registered under `name`.
pub fn control(validator: &FormValidator, name: &str) -> NodeId {
    validator
        .registry()
        .field(name)
        .expect("field should resolve")
}

pub fn set_value(validator: &mut FormValidator, name: &str, value: &str) {
    let node = control(validator, name);
    validator.document_mut().set_value(node, value);
}
