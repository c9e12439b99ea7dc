use super::*;
use crate::spec::model::EventSpec;
use serde_json::json;

#[test]
fn collects_every_reference_shape_across_the_tree() {
    let mut button = ComponentSpec::new("Button").with_prop("onClick", "save");
    button.events.insert(
        "focus".into(),
        EventSpec {
            action: "track".into(),
            params: Some(json!({ "event": "focus" })),
        },
    );
    let form = ComponentSpec::new("Form")
        .with_prop("submitAction", "submit")
        .with_prop("menuAction", json!({ "onOpen": "openMenu", "label": "x" }))
        .with_prop("title", "Not a ref")
        .with_children([button, ComponentSpec::new("Text").with_text("hi")]);

    let refs: Vec<_> = collect_action_refs(&form).into_iter().collect();
    assert_eq!(refs, vec!["openMenu", "save", "submit", "track"]);
}

#[test]
fn specs_without_references_yield_nothing() {
    let spec = ComponentSpec::new("Box").with_prop("Action", "bare");
    assert!(collect_action_refs(&spec).is_empty());
}
