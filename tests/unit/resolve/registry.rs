use super::*;

#[test]
fn standard_registry_covers_every_kind_under_its_name() {
    let reg = ComponentRegistry::standard();
    assert_eq!(reg.len(), ComponentKind::ALL.len());
    for kind in ComponentKind::ALL {
        assert_eq!(reg.lookup(kind.name()), Some(&kind));
    }
    assert_eq!(reg.lookup("heading"), None);
}

#[test]
fn register_replaces_and_returns_previous_entry() {
    let mut reg = ComponentRegistry::new();
    assert_eq!(reg.register("Card", 1), None);
    assert_eq!(reg.register("Card", 2), Some(1));
    assert_eq!(reg.lookup("Card"), Some(&2));
}

#[test]
fn independent_registries_do_not_share_entries() {
    let a = ComponentRegistry::new().with("Chart", "a");
    let b = ComponentRegistry::new().with("Map", "b");
    assert!(a.lookup("Map").is_none());
    assert!(b.lookup("Chart").is_none());
    assert_eq!(a.names().collect::<Vec<_>>(), vec!["Chart"]);
}

#[test]
fn plain_maps_are_registries() {
    let mut map = std::collections::HashMap::new();
    map.insert("Box".to_string(), 7u8);
    assert_eq!(RenderableRegistry::lookup(&map, "Box"), Some(&7));
}
