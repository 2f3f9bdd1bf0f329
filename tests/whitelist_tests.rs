use proptest::prelude::*;
use ransackable::{DEFAULT_ATTRIBUTES, RansackConfig, Whitelist};

fn baseline() -> Whitelist {
    DEFAULT_ATTRIBUTES.into_iter().collect()
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z_]{1,10}", 0..8)
}

#[test]
fn test_whitelist_collapses_duplicates() {
    let list: Whitelist = ["status", "total", "status"].into_iter().collect();
    assert_eq!(list.len(), 2);
    assert!(list.contains("status"));
    assert!(!list.contains("name"));
}

#[test]
fn test_whitelist_union_and_subset() {
    let a: Whitelist = ["id", "total"].into_iter().collect();
    let b: Whitelist = ["total", "status"].into_iter().collect();
    let both = a.union(&b);
    assert_eq!(both.len(), 3);
    assert!(a.is_subset(&both));
    assert!(b.is_subset(&both));
}

#[test]
fn test_whitelist_serializes_as_sorted_array() {
    let list: Whitelist = ["updated_at", "id", "created_at"].into_iter().collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["created_at","id","updated_at"]"#);
}

#[test]
fn test_default_config_is_baseline_only() {
    let config = RansackConfig::default();
    assert_eq!(config.attributes(), &baseline());
    assert!(config.associations().is_empty());
    assert!(config.scopes().is_empty());
    assert!(config.configured_attributes().is_empty());
}

#[test]
fn test_attributes_overlapping_baseline() {
    let config = RansackConfig::builder().attributes(["id"]).build();
    assert_eq!(config.attributes(), &baseline());
    assert_eq!(config.attributes().len(), 3);
}

#[test]
fn test_custom_baseline_replaces_defaults() {
    let config = RansackConfig::builder()
        .default_attributes(["uuid"])
        .attributes(["name"])
        .build();
    let expected: Whitelist = ["uuid", "name"].into_iter().collect();
    assert_eq!(config.attributes(), &expected);
    assert!(!config.attributes().contains("id"));
}

#[test]
fn test_associations_and_scopes_kept_apart_from_attributes() {
    let config = RansackConfig::builder()
        .associations(["customer", "line_items"])
        .scopes(["recent"])
        .build();
    assert_eq!(config.associations().len(), 2);
    assert!(config.scopes().contains("recent"));
    assert!(!config.attributes().contains("customer"));
}

proptest! {
    #[test]
    fn attributes_always_contain_baseline_and_configured(names in arb_names()) {
        let config = RansackConfig::builder().attributes(names.clone()).build();
        let configured: Whitelist = names.into_iter().collect();

        let expected = baseline().union(&configured);

        prop_assert!(baseline().is_subset(config.attributes()));
        prop_assert!(configured.is_subset(config.attributes()));
        prop_assert_eq!(config.attributes(), &expected);
    }

    #[test]
    fn results_do_not_depend_on_insertion_order(names in arb_names()) {
        let mut reversed = names.clone();
        reversed.reverse();

        let forward = RansackConfig::builder()
            .attributes(names.clone())
            .associations(names.clone())
            .scopes(names)
            .build();
        let backward = RansackConfig::builder()
            .attributes(reversed.clone())
            .associations(reversed.clone())
            .scopes(reversed)
            .build();

        prop_assert_eq!(forward.attributes(), backward.attributes());
        prop_assert_eq!(forward.associations(), backward.associations());
        prop_assert_eq!(forward.scopes(), backward.scopes());
    }
}
