use super::*;
use serde_json::json;

fn props(v: Value) -> PropertyMap {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

/// One value for every key any rule reads, chosen so that each rule actually rewrites.
fn sample() -> PropertyMap {
    props(json!({
        "level": 2,
        "direction": "row-reverse",
        "justify": "space-between",
        "align": "flex-start",
        "wrap": "wrap-reverse",
        "cols": 2,
        "colsMd": 4,
        "rows": 3,
        "rowsLg": 5,
        "inputType": "email",
        "variant": "primary",
        "size": "small",
        "iconPosition": "end",
        "orientation": "v",
        "maxWidth": "screen-xl",
        "label": "untouched"
    }))
}

#[test]
fn heading_level_accepts_numbers_and_digit_strings() {
    assert_eq!(heading_level(&json!(2)), Some(json!("h2")));
    assert_eq!(heading_level(&json!(6.0)), Some(json!("h6")));
    assert_eq!(heading_level(&json!("3")), Some(json!("h3")));
    assert_eq!(heading_level(&json!(7)), None);
    assert_eq!(heading_level(&json!(0)), None);
    assert_eq!(heading_level(&json!(2.5)), None);
    assert_eq!(heading_level(&json!("h2")), None);
}

#[test]
fn camel_token_only_rewrites_hyphenated_values() {
    assert_eq!(camel_token(&json!("row-reverse")), Some(json!("rowReverse")));
    assert_eq!(camel_token(&json!("space-between")), Some(json!("spaceBetween")));
    assert_eq!(camel_token(&json!("screen-2xl")), Some(json!("screen2xl")));
    assert_eq!(camel_token(&json!("row")), None);
    assert_eq!(camel_token(&json!(3)), None);
}

#[test]
fn rename_keeps_an_explicit_target() {
    let rule = Rule::Rename {
        from: "inputType",
        to: "type",
    };
    let mut p = props(json!({ "inputType": "email", "type": "password" }));
    rule.apply(&mut p);
    assert_eq!(Value::Object(p), json!({ "type": "password" }));
}

#[test]
fn responsive_overlays_an_existing_object() {
    let rule = Rule::Responsive {
        target: "columns",
        base: "cols",
    };
    let mut p = props(json!({ "columns": { "base": 1, "lg": 6 }, "colsMd": 3 }));
    rule.apply(&mut p);
    assert_eq!(
        Value::Object(p),
        json!({ "columns": { "base": 1, "md": 3, "lg": 6 } })
    );
}

#[test]
fn responsive_lifts_a_scalar_target_into_base() {
    let rule = Rule::Responsive {
        target: "columns",
        base: "cols",
    };
    let mut p = props(json!({ "columns": 2, "colsSm": 1, "cols2xl": 8 }));
    rule.apply(&mut p);
    assert_eq!(
        Value::Object(p),
        json!({ "columns": { "base": 2, "sm": 1, "2xl": 8 } })
    );
}

#[test]
fn responsive_without_flat_keys_is_a_no_op() {
    let rule = Rule::Responsive {
        target: "columns",
        base: "cols",
    };
    let mut p = props(json!({ "columns": 3, "gap": 2 }));
    rule.apply(&mut p);
    assert_eq!(Value::Object(p), json!({ "columns": 3, "gap": 2 }));
}

#[test]
fn responsive_with_shared_target_and_base_does_not_nest() {
    let rule = Rule::Responsive {
        target: "rows",
        base: "rows",
    };
    let mut p = props(json!({ "rows": 2, "rowsMd": 3 }));
    rule.apply(&mut p);
    let once = p.clone();
    rule.apply(&mut p);
    assert_eq!(p, once);
    assert_eq!(Value::Object(p), json!({ "rows": { "base": 2, "md": 3 } }));
}

#[test]
fn rule_keys_cover_every_breakpoint() {
    let rule = Rule::Responsive {
        target: "columns",
        base: "cols",
    };
    let keys = rule.keys();
    for k in ["columns", "cols", "colsSm", "colsMd", "colsLg", "colsXl", "cols2xl"] {
        assert!(keys.iter().any(|x| x == k), "missing {k}");
    }
}

#[test]
fn rules_on_disjoint_keys_commute() {
    for ty in TYPES_WITH_RULES {
        let rules = rules_for(ty);
        assert!(!rules.is_empty(), "{ty} has no rules");
        for (i, a) in rules.iter().enumerate() {
            for b in &rules[i + 1..] {
                let ka = a.keys();
                if b.keys().iter().any(|k| ka.contains(k)) {
                    continue;
                }
                let mut ab = sample();
                a.apply(&mut ab);
                b.apply(&mut ab);
                let mut ba = sample();
                b.apply(&mut ba);
                a.apply(&mut ba);
                assert_eq!(ab, ba, "{ty}: {a:?} and {b:?} do not commute");
            }
        }
    }
}

#[test]
fn every_rule_is_idempotent() {
    for ty in TYPES_WITH_RULES {
        for rule in rules_for(ty) {
            let mut once = sample();
            rule.apply(&mut once);
            let mut twice = once.clone();
            rule.apply(&mut twice);
            assert_eq!(once, twice, "{ty}: {rule:?} rewrote twice");
        }
    }
}

#[test]
fn unknown_types_have_no_rules() {
    assert!(rules_for("UnknownWidget").is_empty());
    assert!(rules_for("heading").is_empty());
}
