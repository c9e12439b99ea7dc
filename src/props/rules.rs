use crate::props::transform::PropertyMap;
use serde_json::{Map, Value};

/// Breakpoint suffixes of flat responsive keys and the bucket each one fills.
pub(crate) const BREAKPOINTS: [(&str, &str); 5] = [
    ("Sm", "sm"),
    ("Md", "md"),
    ("Lg", "lg"),
    ("Xl", "xl"),
    ("2xl", "2xl"),
];

/// One normalization step. Every rule is idempotent.
#[derive(Clone, Copy)]
pub(crate) enum Rule {
    /// Move `from` to `to`; an explicit `to` wins.
    Rename {
        from: &'static str,
        to: &'static str,
    },
    /// Rewrite the value of `key` when `rewrite` recognizes it.
    Enum {
        key: &'static str,
        rewrite: fn(&Value) -> Option<Value>,
    },
    /// Collect `base`, `baseSm`, `baseMd`, ... into one object under `target`.
    Responsive {
        target: &'static str,
        base: &'static str,
    },
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rename { from, to } => write!(f, "Rename({from} -> {to})"),
            Self::Enum { key, .. } => write!(f, "Enum({key})"),
            Self::Responsive { target, base } => write!(f, "Responsive({base}* -> {target})"),
        }
    }
}

impl Rule {
    pub(crate) fn apply(&self, props: &mut PropertyMap) {
        match *self {
            Self::Rename { from, to } => {
                if let Some(v) = props.remove(from) {
                    props.entry(to).or_insert(v);
                }
            }
            Self::Enum { key, rewrite } => {
                if let Some(v) = props.get_mut(key) {
                    if let Some(canonical) = rewrite(v) {
                        *v = canonical;
                    }
                }
            }
            Self::Responsive { target, base } => collect_responsive(props, target, base),
        }
    }

    /// Every property key this rule reads or writes.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<String> {
        match *self {
            Self::Rename { from, to } => vec![from.to_owned(), to.to_owned()],
            Self::Enum { key, .. } => vec![key.to_owned()],
            Self::Responsive { target, base } => {
                let mut keys = vec![target.to_owned(), base.to_owned()];
                keys.extend(BREAKPOINTS.iter().map(|(suffix, _)| format!("{base}{suffix}")));
                keys
            }
        }
    }
}

fn collect_responsive(props: &mut PropertyMap, target: &str, base: &str) {
    // With `base == target` an object under that key is an already-collected value.
    let base_is_collected = base == target && props.get(base).is_some_and(Value::is_object);

    let mut buckets = Map::new();
    if !base_is_collected {
        if let Some(v) = props.remove(base) {
            buckets.insert("base".to_owned(), v);
        }
    }
    for (suffix, bucket) in BREAKPOINTS {
        if let Some(v) = props.remove(&format!("{base}{suffix}")) {
            buckets.insert(bucket.to_owned(), v);
        }
    }
    if buckets.is_empty() {
        return;
    }

    let mut merged = match props.remove(target) {
        Some(Value::Object(existing)) => existing,
        None | Some(Value::Null) => Map::new(),
        Some(scalar) => {
            let mut m = Map::new();
            m.insert("base".to_owned(), scalar);
            m
        }
    };
    merged.extend(buckets);
    props.insert(target.to_owned(), Value::Object(merged));
}

const HEADING: &[Rule] = &[Rule::Enum {
    key: "level",
    rewrite: heading_level,
}];

const FLEX: &[Rule] = &[
    Rule::Enum {
        key: "direction",
        rewrite: camel_token,
    },
    Rule::Enum {
        key: "justify",
        rewrite: camel_token,
    },
    Rule::Enum {
        key: "align",
        rewrite: camel_token,
    },
    Rule::Enum {
        key: "wrap",
        rewrite: camel_token,
    },
];

const GRID: &[Rule] = &[
    Rule::Responsive {
        target: "columns",
        base: "cols",
    },
    Rule::Responsive {
        target: "rows",
        base: "rows",
    },
];

const SIMPLE_GRID: &[Rule] = &[Rule::Responsive {
    target: "columns",
    base: "cols",
}];

const INPUT: &[Rule] = &[Rule::Rename {
    from: "inputType",
    to: "type",
}];

const BUTTON: &[Rule] = &[
    Rule::Enum {
        key: "variant",
        rewrite: button_variant,
    },
    Rule::Enum {
        key: "size",
        rewrite: button_size,
    },
    Rule::Enum {
        key: "iconPosition",
        rewrite: icon_position,
    },
];

const BADGE: &[Rule] = &[Rule::Enum {
    key: "variant",
    rewrite: badge_variant,
}];

const SEPARATOR: &[Rule] = &[Rule::Enum {
    key: "orientation",
    rewrite: orientation,
}];

const CONTAINER: &[Rule] = &[Rule::Enum {
    key: "maxWidth",
    rewrite: camel_token,
}];

/// Rule list for a canonical (PascalCase) type name, in application order.
pub(crate) fn rules_for(canonical: &str) -> &'static [Rule] {
    match canonical {
        "Heading" => HEADING,
        "Flex" => FLEX,
        "Grid" => GRID,
        "SimpleGrid" => SIMPLE_GRID,
        "Input" => INPUT,
        "Button" => BUTTON,
        "Badge" => BADGE,
        "Separator" => SEPARATOR,
        "Container" => CONTAINER,
        _ => &[],
    }
}

/// Type names that carry at least one rule.
#[cfg(test)]
pub(crate) const TYPES_WITH_RULES: [&str; 9] = [
    "Heading",
    "Flex",
    "Grid",
    "SimpleGrid",
    "Input",
    "Button",
    "Badge",
    "Separator",
    "Container",
];

/// `2`, `2.0` or `"2"` -> `"h2"` for levels 1 through 6.
fn heading_level(v: &Value) -> Option<Value> {
    let level = match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })?,
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()?
        }
        _ => return None,
    };
    (1..=6)
        .contains(&level)
        .then(|| Value::String(format!("h{level}")))
}

/// `row-reverse` -> `rowReverse`. Tokens without a hyphen are left alone.
fn camel_token(v: &Value) -> Option<Value> {
    let s = v.as_str()?;
    if !s.contains('-') {
        return None;
    }
    let mut out = String::with_capacity(s.len());
    for (i, part) in s.split('-').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    Some(Value::String(out))
}

fn synonym(v: &Value, table: &[(&str, &str)]) -> Option<Value> {
    let s = v.as_str()?;
    table
        .iter()
        .find(|(alias, _)| *alias == s)
        .map(|(_, canonical)| Value::String((*canonical).to_owned()))
}

fn button_variant(v: &Value) -> Option<Value> {
    synonym(
        v,
        &[
            ("primary", "default"),
            ("danger", "destructive"),
            ("text", "link"),
        ],
    )
}

fn button_size(v: &Value) -> Option<Value> {
    synonym(v, &[("small", "sm"), ("medium", "default"), ("large", "lg")])
}

fn icon_position(v: &Value) -> Option<Value> {
    synonym(
        v,
        &[
            ("before", "left"),
            ("start", "left"),
            ("after", "right"),
            ("end", "right"),
        ],
    )
}

fn badge_variant(v: &Value) -> Option<Value> {
    synonym(
        v,
        &[
            ("danger", "destructive"),
            ("error", "destructive"),
            ("primary", "default"),
        ],
    )
}

fn orientation(v: &Value) -> Option<Value> {
    synonym(v, &[("h", "horizontal"), ("v", "vertical")])
}

#[cfg(test)]
#[path = "../../tests/unit/props/rules.rs"]
mod tests;
