// tests/property_env.rs

use std::collections::BTreeMap;

use proptest::prelude::*;

use dcclaunch::env::{expand, path_list_separator, prepend_entries};
use dcclaunch_test_utils::builders::ToolConfigBuilder;

// Path-ish fragments that never contain a list separator on either
// platform, so splitting the joined result is unambiguous.
fn fragment() -> impl Strategy<Value = String> {
    "[a-z0-9_/.]{0,12}".prop_map(|s| s)
}

fn var_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,10}".prop_map(|s| s)
}

proptest! {
    #[test]
    fn prepend_keeps_order_and_existing_last(
        entries in proptest::collection::vec(fragment(), 0..5),
        existing in proptest::option::of(fragment()),
    ) {
        let result = prepend_entries(existing.as_deref(), &entries);

        let mut expected: Vec<&str> =
            entries.iter().map(|s| s.as_str()).filter(|s| !s.is_empty()).collect();
        if let Some(ref value) = existing {
            if !value.is_empty() {
                expected.push(value.as_str());
            }
        }

        if expected.is_empty() {
            prop_assert_eq!(result, "");
        } else {
            let sep = path_list_separator();
            let parts: Vec<&str> = result.split(sep).collect();
            prop_assert_eq!(parts, expected);
        }
    }

    #[test]
    fn prepend_never_adds_trailing_separator(
        entries in proptest::collection::vec(fragment(), 0..5),
    ) {
        let result = prepend_entries(None, &entries);
        let sep = path_list_separator();
        prop_assert!(!result.ends_with(sep));
    }

    #[test]
    fn script_path_is_pure_concatenation(
        dir in "[a-z0-9_/.]{1,12}",
        script in "[a-z0-9_]{1,12}\\.py",
    ) {
        let tool = ToolConfigBuilder::new(&dir, &script).build();
        let path = tool.script_path();

        prop_assert!(path.starts_with(dir.as_str()));
        prop_assert!(path.ends_with(script.as_str()));
        prop_assert_eq!(path.len(), dir.len() + script.len());
    }

    #[test]
    fn expand_is_identity_without_templates(
        value in "[a-zA-Z0-9_/. :-]{0,24}",
    ) {
        let parent = BTreeMap::new();
        let expanded = expand(&value, "root/", &parent).unwrap();
        prop_assert_eq!(expanded, value);
    }

    #[test]
    fn expand_resolves_known_variables(
        name in var_name(),
        resolved in fragment(),
        prefix in "[a-z0-9_/]{0,8}",
        suffix in "[a-z0-9_/]{0,8}",
    ) {
        let mut parent = BTreeMap::new();
        parent.insert(name.clone(), resolved.clone());

        let value = format!("{prefix}${{{name}}}{suffix}");
        let expanded = expand(&value, "root/", &parent).unwrap();

        prop_assert_eq!(expanded, format!("{prefix}{resolved}{suffix}"));
    }

    #[test]
    fn expand_fails_on_unknown_variables(
        name in var_name(),
    ) {
        let parent: BTreeMap<String, String> = BTreeMap::new();
        let value = format!("${{{name}}}");
        prop_assert!(expand(&value, "root/", &parent).is_err());
    }
}
