use super::*;

#[test]
fn last_segment_of_dotted_name() {
    assert_eq!(last_segment("a.b.c"), Some("c"));
}

#[test]
fn last_segment_of_top_level_name() {
    assert_eq!(last_segment("app"), Some("app"));
}

#[test]
fn last_segment_keeps_unicode() {
    assert_eq!(last_segment("paquet.modülé"), Some("modülé"));
    assert_eq!(last_segment("名前"), Some("名前"));
}

#[test]
fn empty_names_have_no_segment() {
    assert_eq!(last_segment(""), None);
    assert_eq!(last_segment("."), None);
    assert_eq!(last_segment("a.b."), None);
}

#[test]
fn parent_of_nested_name() {
    assert_eq!(parent_name("a.b.c"), Some("a.b"));
    assert_eq!(parent_name("a.b"), Some("a"));
}

#[test]
fn top_level_name_has_no_parent() {
    assert_eq!(parent_name("a"), None);
    assert_eq!(parent_name(".a"), None);
}

#[test]
fn artifact_file_name_appends_extension() {
    assert_eq!(artifact_file_name("mod"), "mod.pyf");
}

mod proptest_names {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn last_segment_never_contains_a_dot(name in "[a-z.]{0,24}") {
            if let Some(segment) = last_segment(&name) {
                prop_assert!(!segment.contains('.'));
                prop_assert!(name.ends_with(segment));
            }
        }

        #[test]
        fn parent_and_segment_rebuild_the_name(
            parts in proptest::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,8}", 1..5)
        ) {
            let name = parts.join(".");
            let last = parts.last().map(String::as_str);
            prop_assert_eq!(last_segment(&name), last);
            match parent_name(&name) {
                Some(parent) => prop_assert_eq!(format!("{parent}.{}", parts[parts.len() - 1]), name),
                None => prop_assert_eq!(parts.len(), 1),
            }
        }
    }
}
