use formcheck::{Error, ValidatorConfig};

#[test]
fn test_defaults() {
    let config = ValidatorConfig::default();
    assert_eq!(config.error_container, None);
    assert_eq!(config.error_class, "is-invalid");
    assert_eq!(config.valid_class, "is-valid");
    assert_eq!(config.invalid_class, "invalid");
    assert_eq!(config, ValidatorConfig::new());
}

#[test]
fn test_from_json_partial() {
    let config = ValidatorConfig::from_json(
        r#"{ "errorContainer": ".feedback", "validClass": "ok", "fieldClass": "field" }"#,
    )
    .unwrap();
    assert_eq!(config.error_container.as_deref(), Some(".feedback"));
    assert_eq!(config.valid_class, "ok");
    assert_eq!(config.field_class.as_deref(), Some("field"));
    // Unspecified keys keep their defaults
    assert_eq!(config.error_class, "is-invalid");
    assert_eq!(config.label, None);
}

#[test]
fn test_from_json_invalid() {
    let err = ValidatorConfig::from_json(r#"{ "errorClass": 3 }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid validator configuration"));
}

#[test]
fn test_serializes_camel_case() {
    let config = ValidatorConfig::default().with_error_container("#errors");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"errorContainer\":\"#errors\""));
    assert!(json.contains("\"invalidClass\":\"invalid\""));
    assert_eq!(ValidatorConfig::from_json(&json).unwrap(), config);
}
