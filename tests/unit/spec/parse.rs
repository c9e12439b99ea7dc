use super::*;
use serde_json::json;

fn parse(v: Value) -> ParseReport {
    SpecParser::new().parse_value(&v).unwrap()
}

#[test]
fn distinguishes_document_from_bare_component() {
    let doc = parse(json!({ "version": "1.0", "root": { "type": "Box" } }));
    assert!(matches!(doc.document, Document::Full(_)));

    let bare = parse(json!({ "type": "Box" }));
    assert!(matches!(bare.document, Document::Component(_)));
    assert!(bare.is_clean());
}

#[test]
fn rejects_non_objects_and_shapeless_objects() {
    let err = SpecParser::new().parse_value(&json!([1, 2])).unwrap_err();
    assert!(err.to_string().contains("expected object, got array"));

    let err = SpecParser::new()
        .parse_value(&json!({ "title": "x" }))
        .unwrap_err();
    assert!(err.to_string().contains("missing required properties"));
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = SpecParser::new().parse_str("{ not json").unwrap_err();
    assert!(matches!(err, SduiError::Serde(_)));
}

#[test]
fn envelope_errors_are_fatal() {
    let err = SpecParser::new()
        .parse_value(&json!({ "version": 3, "root": { "type": "Box" } }))
        .unwrap_err();
    assert!(err.to_string().contains("$.version: version must be a string"));

    let err = SpecParser::new()
        .parse_value(&json!({ "version": "1", "root": "Box" }))
        .unwrap_err();
    assert!(err.to_string().contains("$.root: root must be an object"));
}

#[test]
fn malformed_children_prune_only_the_offending_node() {
    let report = parse(json!({
        "version": "1.0",
        "root": {
            "type": "Flex",
            "children": [
                { "type": "Text", "children": "ok" },
                { "type": "Card", "id": "bad", "children": 42 },
                { "type": "Button" }
            ]
        }
    }));

    let root = report.document.root();
    let kept: Vec<_> = root
        .children
        .specs()
        .iter()
        .map(|c| c.type_name.as_str())
        .collect();
    assert_eq!(kept, vec!["Text", "Button"]);

    assert_eq!(report.errors.len(), 1);
    let err = &report.errors[0];
    assert_eq!(err.path_string(), "$.root.children[1].children");
    assert!(err.message.contains("Card#bad"));
    assert!(err.message.contains("got number"));
}

#[test]
fn typeless_children_prune_the_owning_node() {
    let report = parse(json!({
        "type": "Flex",
        "children": [
            { "type": "Card", "id": "num", "children": 42 },
            { "type": "Card", "id": "obj", "children": { "label": "x" } },
            { "type": "Card", "id": "arr", "children": [1, { "type": "Text" }] },
            { "type": "Card", "id": "ok", "children": [{ "type": "Text" }] }
        ]
    }));

    let kept: Vec<_> = report
        .document
        .root()
        .children
        .specs()
        .iter()
        .map(|c| c.id.as_deref())
        .collect();
    assert_eq!(kept, vec![Some("ok")]);

    let paths: Vec<_> = report.errors.iter().map(SpecError::path_string).collect();
    assert_eq!(
        paths,
        vec![
            "$.children[0].children",
            "$.children[1].children",
            "$.children[2].children",
        ]
    );
    assert!(report.errors[1].message.contains("Card#obj"));
    assert!(report.errors[1].message.contains("object without a string 'type'"));
    assert!(report.errors[2].message.contains("Card#arr"));
    assert!(report.errors[2].message.contains("number at index 0"));
}

#[test]
fn typeless_array_element_is_reported_on_its_parent() {
    let report = parse(json!({
        "type": "Box",
        "children": {
            "type": "Flex",
            "id": "row",
            "children": [{ "type": "a" }, { "label": "no type" }]
        }
    }));
    assert_eq!(report.document.root().children, Children::Absent);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path_string(), "$.children.children");
    assert!(report.errors[0].message.contains("Flex#row"));
    assert!(report.errors[0].message.contains("at index 1"));
}

#[test]
fn typeless_children_on_the_root_fail_the_parse() {
    let err = SpecParser::new()
        .parse_value(&json!({ "type": "Box", "children": [{ "label": "x" }] }))
        .unwrap_err();
    assert!(err.to_string().contains("$.children"));
}

#[test]
fn event_entries_require_an_action() {
    let report = parse(json!({
        "type": "Box",
        "children": [
            { "type": "Button", "events": { "click": { "params": 1 } } },
            { "type": "Button", "events": { "click": { "action": "go" } } }
        ]
    }));
    let kept = report.document.root().children.specs();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].events["click"].action, "go");
    assert_eq!(report.errors[0].path_string(), "$.children[0].events.click");
}

#[test]
fn malformed_root_fails_the_parse() {
    let err = SpecParser::new()
        .parse_value(&json!({ "type": "Box", "children": true }))
        .unwrap_err();
    assert!(err.to_string().contains("$.children"));
}

#[test]
fn optional_envelope_fields_are_dropped_with_errors() {
    let report = parse(json!({
        "version": "1.0",
        "root": { "type": "Box" },
        "theme": "dark",
        "state": { "initial": { "open": false } },
        "dataSources": [1]
    }));
    let Document::Full(doc) = &report.document else {
        panic!("expected full document");
    };
    assert!(doc.theme.is_none());
    assert_eq!(doc.initial_state().unwrap()["open"], json!(false));
    let paths: Vec<_> = report.errors.iter().map(SpecError::path_string).collect();
    assert_eq!(paths, vec!["$.theme", "$.dataSources"]);
}

#[test]
fn into_strict_rejects_pruned_documents() {
    let report = parse(json!({
        "type": "Box",
        "children": { "type": "Card", "children": 1.5 }
    }));
    assert_eq!(report.document.root().children, Children::Absent);
    let err = report.into_strict().unwrap_err();
    assert!(matches!(err, SduiError::Validation(_)));
}
