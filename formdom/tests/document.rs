use formdom::{ControlKind, Document, Element, FileList, NodeId};

fn signup() -> Document {
    Document::new(
        Element::form().id("signup").children([
            Element::div()
                .class("field")
                .child(Element::label("Name").for_id("name"))
                .child(Element::text_input().id("name").name("name"))
                .child(Element::span().class("error-message")),
            Element::div().class("field").child(
                Element::label("Agree").child(Element::checkbox().id("agree").name("agree")),
            ),
            Element::select().id("country").name("country").children([
                Element::option("fr", "France"),
                Element::option("de", "Germany"),
            ]),
            Element::radio().name("plan").value("free").id("free"),
            Element::radio().name("plan").value("pro").id("pro"),
            Element::button("submit").id("go"),
        ]),
    )
}

fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id).expect("element should exist")
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_document_order_and_relations() {
    let doc = signup();
    let form = doc.root();
    assert_eq!(doc.tag(form), "form");

    let name = by_id(&doc, "name");
    let field = doc.parent(name).unwrap();
    assert!(doc.has_class(field, "field"));
    assert_eq!(doc.parent(field), Some(form));

    let error = doc.next_sibling(name).unwrap();
    assert!(doc.has_class(error, "error-message"));
    assert_eq!(doc.next_sibling(error), None);

    let ancestors: Vec<_> = doc.ancestors(name).collect();
    assert_eq!(ancestors, vec![field, form]);

    // Descendants come out in document order
    let tags: Vec<_> = doc
        .descendants(field)
        .map(|n| doc.tag(n).to_string())
        .collect();
    assert_eq!(tags, vec!["label", "input", "span"]);
    assert!(doc.contains(form, name));
    assert!(!doc.contains(name, form));
}

#[test]
fn test_label_text_kept_when_wrapping_control() {
    let doc = signup();
    let agree = by_id(&doc, "agree");
    let label = doc.closest_tag(agree, "label").unwrap();
    assert_eq!(doc.text_content(label), "Agree");
    assert_eq!(doc.form_of(agree), Some(doc.root()));
}

#[test]
fn test_insert_and_append() {
    let mut doc = signup();
    let name = by_id(&doc, "name");
    let field = doc.parent(name).unwrap();

    let note = doc.create_element("div");
    assert_eq!(doc.parent(note), None);
    assert!(doc.insert_after(name, note));
    assert_eq!(doc.next_sibling(name), Some(note));
    assert_eq!(doc.children(field).len(), 4);

    // Appending moves rather than copies
    doc.append_child(field, note);
    assert_eq!(doc.children(field).len(), 4);
    assert_eq!(doc.children(field).last(), Some(&note));

    let detached = doc.create_element("div");
    let orphan = doc.create_element("span");
    assert!(!doc.insert_after(detached, orphan));
}

// ============================================================================
// Attributes and classes
// ============================================================================

#[test]
fn test_classes_are_unique() {
    let mut doc = signup();
    let name = by_id(&doc, "name");
    assert!(doc.add_class(name, "is-invalid"));
    assert!(!doc.add_class(name, "is-invalid"));
    assert_eq!(doc.classes(name), ["is-invalid".to_string()]);
    assert!(doc.remove_class(name, "is-invalid"));
    assert!(!doc.remove_class(name, "is-invalid"));
}

#[test]
fn test_attributes() {
    let mut doc = signup();
    let name = by_id(&doc, "name");
    assert_eq!(doc.attr(name, "name"), Some("name"));
    doc.set_attr(name, "Placeholder", "Your name");
    assert_eq!(doc.attr(name, "placeholder"), Some("Your name"));
    assert_eq!(doc.remove_attr(name, "placeholder").as_deref(), Some("Your name"));
    assert!(!doc.has_attr(name, "placeholder"));
    assert_eq!(doc.input_type(name), "text");
}

#[test]
fn test_builder_attributes() {
    let element = Element::text_input()
        .attr("Autocomplete", "off")
        .data("field-name", "login");
    assert_eq!(element.get_attr("autocomplete").map(String::as_str), Some("off"));
    assert_eq!(
        element.get_attr("data-field-name").map(String::as_str),
        Some("login")
    );
    assert_eq!(element.get_attr("Autocomplete"), None);
}

// ============================================================================
// Control state
// ============================================================================

#[test]
fn test_control_kinds() {
    let doc = signup();
    assert_eq!(ControlKind::of(&doc, by_id(&doc, "name")), ControlKind::TextEntry);
    assert_eq!(ControlKind::of(&doc, by_id(&doc, "agree")), ControlKind::Checkbox);
    assert_eq!(ControlKind::of(&doc, by_id(&doc, "country")), ControlKind::Select);
    assert_eq!(ControlKind::of(&doc, by_id(&doc, "free")), ControlKind::Radio);
    assert_eq!(ControlKind::of(&doc, by_id(&doc, "go")), ControlKind::Button);
    assert_eq!(ControlKind::of(&doc, doc.root()), ControlKind::None);
    assert!(!ControlKind::Button.is_field());
    assert!(ControlKind::Output.is_field());
}

#[test]
fn test_select_value() {
    let mut doc = signup();
    let country = by_id(&doc, "country");
    // First option is selected by default
    assert_eq!(doc.value(country), "fr");
    doc.set_value(country, "de");
    assert_eq!(doc.value(country), "de");
    doc.set_value(country, "xx");
    assert_eq!(doc.value(country), "fr");
}

#[test]
fn test_radio_group_is_exclusive() {
    let mut doc = signup();
    let free = by_id(&doc, "free");
    let pro = by_id(&doc, "pro");
    assert_eq!(doc.radio_group(free), vec![free, pro]);

    doc.set_checked(free, true);
    doc.set_checked(pro, true);
    assert!(!doc.checked(free));
    assert!(doc.checked(pro));
    assert_eq!(doc.value(pro), "pro");
}

#[test]
fn test_files() {
    let mut doc = Document::new(Element::form().child(Element::file_input().id("docs")));
    let docs = by_id(&doc, "docs");
    assert!(doc.files(docs).is_none());
    doc.set_files(docs, Some(FileList::from_names(["a.pdf", "b.pdf"])));
    assert_eq!(doc.files(docs).map(FileList::len), Some(2));
    assert_eq!(doc.files(docs).unwrap().get(1).unwrap().name, "b.pdf");
}
