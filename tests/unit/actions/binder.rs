use super::*;
use crate::actions::handler::HandlerContext;
use serde_json::json;

fn props(v: Value) -> PropertyMap {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

fn ctx() -> HandlerContext {
    HandlerContext::new()
        .with_handler("onSubmitHandler", |_| json!("submitted"))
        .with_handler("openMenu", |_| json!("opened"))
}

#[test]
fn action_suffix_binds_under_the_stripped_key() {
    let out = bind_actions(props(json!({ "submitAction": "onSubmitHandler" })), &ctx());
    let h = out.bound.handler("submit").expect("submit should be bound");
    assert_eq!(h.name(), "onSubmitHandler");
    assert_eq!(h.call(&[]), json!("submitted"));
    assert!(!out.bound.contains_key("submitAction"));
    assert!(out.missing.is_empty());
}

#[test]
fn missing_action_handler_drops_both_keys() {
    let out = bind_actions(
        props(json!({ "submitAction": "onSubmitHandler", "label": "Go" })),
        &HandlerContext::new(),
    );
    assert!(!out.bound.contains_key("submit"));
    assert!(!out.bound.contains_key("submitAction"));
    assert_eq!(out.bound.props["label"], json!("Go"));
    assert_eq!(
        out.missing,
        vec![MissingHandler {
            key: "submitAction".into(),
            handler: "onSubmitHandler".into(),
        }]
    );
}

#[test]
fn event_props_bind_in_place() {
    let out = bind_actions(
        props(json!({ "onClick": "openMenu", "onHover": "nothing", "online": "yes" })),
        &ctx(),
    );
    assert_eq!(out.bound.handler("onClick").map(Handler::name), Some("openMenu"));
    assert!(!out.bound.contains_key("onHover"));
    assert_eq!(out.bound.props["online"], json!("yes"));
    assert_eq!(out.missing.len(), 1);
}

#[test]
fn nested_action_objects_bind_only_event_props() {
    let out = bind_actions(
        props(json!({
            "menuAction": {
                "onOpen": "openMenu",
                "onClose": "closeMenu",
                "label": "Menu",
                "dismissAction": "openMenu"
            }
        })),
        &ctx(),
    );
    let Some(BoundAction::Object { props, handlers }) = out.bound.actions.get("menuAction") else {
        panic!("menuAction should be an object action");
    };
    assert_eq!(handlers.keys().collect::<Vec<_>>(), vec!["onOpen"]);
    assert_eq!(
        Value::Object(props.clone()),
        json!({ "label": "Menu", "dismissAction": "openMenu" })
    );
    assert_eq!(out.missing[0].key, "menuAction.onClose");
    assert_eq!(out.bound.handler_count(), 1);
}

#[test]
fn non_reference_values_pass_through() {
    let raw = props(json!({
        "Action": "openMenu",
        "onClick": true,
        "retryAction": 3,
        "label": "x"
    }));
    let out = bind_actions(raw.clone(), &ctx());
    assert!(out.bound.actions.is_empty());
    assert_eq!(out.bound.props, raw);
}

#[test]
fn event_prop_convention() {
    assert!(is_event_prop("onClick"));
    assert!(is_event_prop("onX"));
    assert!(!is_event_prop("on"));
    assert!(!is_event_prop("online"));
    assert!(!is_event_prop("click"));
}

#[test]
fn action_keys_strip_exactly_one_suffix() {
    let out = bind_actions(
        props(json!({ "openActionAction": "openMenu", "menuAction": { "onOpen": "openMenu" } })),
        &ctx(),
    );
    assert_eq!(out.bound.handler("openAction").map(Handler::name), Some("openMenu"));
    assert!(out.bound.actions.contains_key("menuAction"));
    assert_eq!(out.bound.handler_count(), 2);
}
