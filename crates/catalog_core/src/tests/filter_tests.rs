use super::*;
use shared::domain::{GroupId, ItemId};

fn item(id: i64, title: &str) -> Item {
    Item {
        id: ItemId(id),
        group_id: GroupId(1),
        title: title.to_string(),
        image_url: format!("https://img.test/600/{id}"),
        thumbnail_url: format!("https://img.test/150/{id}"),
    }
}

fn titles(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn empty_term_keeps_every_item_in_order() {
    let items = vec![item(3, "gamma"), item(1, "alpha"), item(2, "beta")];
    let filtered = filter_items(&items, "");
    assert_eq!(filtered, items);
}

#[test]
fn matches_literal_case_sensitive_substrings_in_input_order() {
    let items = vec![
        item(1, "accusamus beatae"),
        item(2, "Reprehenderit est"),
        item(3, "officia porro est"),
        item(4, "culpa odio"),
    ];

    assert_eq!(
        titles(&filter_items(&items, "est")),
        vec!["Reprehenderit est", "officia porro est"]
    );
    assert_eq!(
        titles(&filter_items(&items, "Rep")),
        vec!["Reprehenderit est"]
    );
    assert!(filter_items(&items, "rep").is_empty());
}

#[test]
fn regex_metacharacters_are_matched_literally() {
    let items = vec![item(1, "a.b"), item(2, "axb")];
    assert_eq!(titles(&filter_items(&items, "a.b")), vec!["a.b"]);
}

#[test]
fn no_match_yields_empty_page() {
    let items = vec![item(1, "alpha")];
    assert!(filter_items(&items, "zeta").is_empty());
    assert!(filter_items(&[], "zeta").is_empty());
}
