use super::*;
use serde_json::json;

#[test]
fn children_shapes_deserialize_without_ambiguity() {
    let absent: ComponentSpec = serde_json::from_value(json!({ "type": "Box" })).unwrap();
    assert_eq!(absent.children, Children::Absent);

    let null: ComponentSpec =
        serde_json::from_value(json!({ "type": "Box", "children": null })).unwrap();
    assert_eq!(null.children, Children::Absent);

    let text: ComponentSpec =
        serde_json::from_value(json!({ "type": "Text", "children": "type" })).unwrap();
    assert_eq!(text.children, Children::Text("type".to_string()));

    let single: ComponentSpec = serde_json::from_value(json!({
        "type": "Card",
        "children": { "type": "Text", "children": "hi" }
    }))
    .unwrap();
    let Children::Single(child) = &single.children else {
        panic!("expected single child, got {:?}", single.children);
    };
    assert_eq!(child.type_name, "Text");

    let many: ComponentSpec = serde_json::from_value(json!({
        "type": "Flex",
        "children": [{ "type": "a" }, { "type": "b" }]
    }))
    .unwrap();
    assert_eq!(many.children.specs().len(), 2);
}

#[test]
fn object_without_type_is_not_a_child() {
    let res: Result<ComponentSpec, _> =
        serde_json::from_value(json!({ "type": "Box", "children": { "label": "x" } }));
    assert!(res.is_err());
}

#[test]
fn props_alias_and_camel_case_fields() {
    let spec: ComponentSpec = serde_json::from_value(json!({
        "type": "Button",
        "props": { "variant": "primary" },
        "className": "wide",
        "asChild": true,
        "testId": "cta",
        "a11y": { "ariaLabel": "Go", "tabIndex": 0 }
    }))
    .unwrap();
    assert_eq!(spec.properties["variant"], json!("primary"));
    assert_eq!(spec.class_name.as_deref(), Some("wide"));
    assert_eq!(spec.as_child, Some(true));
    assert_eq!(spec.test_id.as_deref(), Some("cta"));
    let a11y = spec.a11y.unwrap();
    assert_eq!(a11y.aria_label.as_deref(), Some("Go"));
    assert_eq!(a11y.tab_index, Some(0));
}

#[test]
fn count_nodes_ignores_text_leaves() {
    let spec = ComponentSpec::new("Card").with_children([
        ComponentSpec::new("Heading").with_text("Title"),
        ComponentSpec::new("Flex").with_children([
            ComponentSpec::new("Button"),
            ComponentSpec::new("Button"),
        ]),
    ]);
    assert_eq!(spec.count_nodes(), 5);
}

#[test]
fn serialization_skips_empty_fields() {
    let spec = ComponentSpec::new("Text").with_text("hi");
    let v = serde_json::to_value(&spec).unwrap();
    assert_eq!(v, json!({ "type": "Text", "children": "hi" }));
}

#[test]
fn document_metadata_keeps_custom_keys() {
    let doc: UISpecification = serde_json::from_value(json!({
        "version": "1.0",
        "metadata": { "title": "Home", "tags": ["a"], "owner": "web" },
        "root": { "type": "Box" },
        "state": { "initial": { "count": 1 } }
    }))
    .unwrap();
    let meta = doc.metadata.as_ref().unwrap();
    assert_eq!(meta.title.as_deref(), Some("Home"));
    assert_eq!(meta.extra["owner"], json!("web"));
    assert_eq!(doc.initial_state().unwrap()["count"], json!(1));
    assert_eq!(Document::Full(doc.clone()).root().type_name, "Box");
}
