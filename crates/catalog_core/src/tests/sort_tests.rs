use super::*;
use shared::domain::{GroupId, ItemId};

fn item(id: i64, title: &str) -> Item {
    Item {
        id: ItemId(id),
        group_id: GroupId(1),
        title: title.to_string(),
        image_url: String::new(),
        thumbnail_url: String::new(),
    }
}

fn ids(items: &[Item]) -> Vec<i64> {
    items.iter().map(|item| item.id.0).collect()
}

#[test]
fn ordinal_ascending_puts_uppercase_before_lowercase() {
    let items = vec![item(1, "Banana"), item(2, "apple")];
    let sorted = sort_items(&items, SortOrder::Asc, Collation::Ordinal);
    let titles: Vec<&str> = sorted.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Banana", "apple"]);
}

#[test]
fn case_insensitive_collation_interleaves_cases() {
    let items = vec![item(1, "Banana"), item(2, "apple"), item(3, "cherry")];
    let sorted = sort_items(&items, SortOrder::Asc, Collation::CaseInsensitive);
    assert_eq!(ids(&sorted), vec![2, 1, 3]);
}

#[test]
fn ascending_and_descending_are_inverse_orderings() {
    let items = vec![
        item(1, "delta"),
        item(2, "alpha"),
        item(3, "charlie"),
        item(4, "bravo"),
    ];

    let asc = sort_items(&items, SortOrder::Asc, Collation::Ordinal);
    let desc = sort_items(&asc, SortOrder::Desc, Collation::Ordinal);

    assert_eq!(ids(&asc), vec![2, 4, 3, 1]);
    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

#[test]
fn descending_keeps_input_order_for_equal_titles() {
    let items = vec![item(1, "same"), item(2, "other"), item(3, "same")];

    let asc = sort_items(&items, SortOrder::Asc, Collation::Ordinal);
    let desc = sort_items(&items, SortOrder::Desc, Collation::Ordinal);

    assert_eq!(ids(&asc), vec![2, 1, 3]);
    assert_eq!(ids(&desc), vec![1, 3, 2]);
}

#[test]
fn sorting_leaves_the_input_untouched() {
    let items = vec![item(1, "b"), item(2, "c"), item(3, "a")];
    let before = items.clone();

    let asc = sort_items(&items, SortOrder::Asc, Collation::Ordinal);
    let desc = sort_items(&items, SortOrder::Desc, Collation::Ordinal);

    assert_eq!(items, before);
    assert_eq!(ids(&asc), vec![3, 1, 2]);
    assert_eq!(ids(&desc), vec![2, 1, 3]);
}
