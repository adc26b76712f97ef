use formdom::{Document, Element, FileList, NodeId};

fn single(control: Element) -> (Document, NodeId) {
    let doc = Document::new(Element::form().child(control.id("c")));
    let id = doc.get_element_by_id("c").unwrap();
    (doc, id)
}

#[test]
fn test_value_missing() {
    let (mut doc, c) = single(Element::text_input().required());
    let state = doc.validity(c).unwrap();
    assert!(state.value_missing);
    assert!(!state.is_valid());
    assert_eq!(doc.validation_message(c), "Please fill out this field.");

    doc.set_value(c, "x");
    assert!(doc.validity(c).unwrap().is_valid());
    assert_eq!(doc.validation_message(c), "");
}

#[test]
fn test_checkbox_and_file_missing() {
    let (mut doc, c) = single(Element::checkbox().required());
    assert!(doc.validity(c).unwrap().value_missing);
    doc.set_checked(c, true);
    assert!(doc.validity(c).unwrap().is_valid());

    let (mut doc, c) = single(Element::file_input().required());
    assert!(doc.validity(c).unwrap().value_missing);
    doc.set_files(c, Some(FileList::new()));
    assert!(doc.validity(c).unwrap().value_missing);
    doc.set_files(c, Some(FileList::from_names(["a.txt"])));
    assert!(doc.validity(c).unwrap().is_valid());
}

#[test]
fn test_type_mismatch() {
    let (mut doc, c) = single(Element::email_input());
    assert!(doc.validity(c).unwrap().is_valid());
    doc.set_value(c, "not-an-email");
    assert!(doc.validity(c).unwrap().type_mismatch);
    doc.set_value(c, "user@example.com");
    assert!(doc.validity(c).unwrap().is_valid());

    let (mut doc, c) = single(Element::input("url").value("nope"));
    assert!(doc.validity(c).unwrap().type_mismatch);
    doc.set_value(c, "https://example.com/");
    assert!(doc.validity(c).unwrap().is_valid());
}

#[test]
fn test_pattern_is_anchored() {
    let (mut doc, c) = single(Element::text_input().pattern("[0-9]{3}").value("1234"));
    assert!(doc.validity(c).unwrap().pattern_mismatch);
    doc.set_value(c, "123");
    assert!(doc.validity(c).unwrap().is_valid());

    // Lookahead and backreferences are accepted
    let (mut doc, c) = single(
        Element::password_input()
            .pattern(r"(?=.*\d).{8,}")
            .value("password"),
    );
    assert!(doc.validity(c).unwrap().pattern_mismatch);
    doc.set_value(c, "passw0rd");
    assert!(doc.validity(c).unwrap().is_valid());

    let (doc, c) = single(Element::text_input().pattern(r"(\w)\1").value("aa"));
    assert!(doc.validity(c).unwrap().is_valid());

    // Broken patterns are ignored
    let (doc, c) = single(Element::text_input().pattern("(").value("x"));
    assert!(doc.validity(c).unwrap().is_valid());
}

#[test]
fn test_numeric_constraints() {
    let (mut doc, c) = single(Element::number_input().min(10).max(20).value("abc"));
    assert!(doc.validity(c).unwrap().bad_input);
    assert_eq!(doc.validation_message(c), "Please enter a number.");

    doc.set_value(c, "5");
    assert!(doc.validity(c).unwrap().range_underflow);
    doc.set_value(c, "25");
    assert!(doc.validity(c).unwrap().range_overflow);
    doc.set_value(c, "12.5");
    assert!(doc.validity(c).unwrap().step_mismatch);
    doc.set_value(c, "12");
    assert!(doc.validity(c).unwrap().is_valid());

    let (doc, c) = single(Element::number_input().step("any").value("0.25"));
    assert!(doc.validity(c).unwrap().is_valid());
}

#[test]
fn test_length_constraints_ignore_empty() {
    let (mut doc, c) = single(Element::textarea().minlength(3).maxlength(5));
    assert!(doc.validity(c).unwrap().is_valid());
    doc.set_value(c, "ab");
    assert!(doc.validity(c).unwrap().too_short);
    doc.set_value(c, "abcdef");
    assert!(doc.validity(c).unwrap().too_long);
}

#[test]
fn test_length_counts_utf16_units() {
    // Each emoji is a surrogate pair
    let (mut doc, c) = single(Element::text_input().minlength(3).maxlength(4));
    doc.set_value(c, "😀😀");
    assert!(doc.validity(c).unwrap().is_valid());
    doc.set_value(c, "😀😀😀");
    assert!(doc.validity(c).unwrap().too_long);
    doc.set_value(c, "é");
    assert!(doc.validity(c).unwrap().too_short);
}

#[test]
fn test_custom_validity() {
    let (mut doc, c) = single(Element::text_input());
    doc.set_custom_validity(c, "Taken");
    assert!(doc.validity(c).unwrap().custom_error);
    assert_eq!(doc.validation_message(c), "Taken");
    doc.set_custom_validity(c, "");
    assert!(doc.validity(c).unwrap().is_valid());
}

#[test]
fn test_not_validated() {
    let (doc, c) = single(Element::output());
    assert!(doc.validity(c).is_none());
    let (doc, c) = single(Element::text_input().required().disabled());
    assert!(doc.validity(c).is_none());
    let (doc, c) = single(Element::input("hidden").required());
    assert!(!doc.will_validate(c));
}
