use shared::domain::{Collation, Item, SortOrder};

/// Returns a title-ordered copy of `items`.
///
/// `Desc` runs the comparator with its arguments swapped rather than reversing
/// the ascending result, so items with equal titles keep their input order in
/// both directions.
pub fn sort_items(items: &[Item], order: SortOrder, collation: Collation) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| collation.compare(&a.title, &b.title)),
        SortOrder::Desc => sorted.sort_by(|a, b| collation.compare(&b.title, &a.title)),
    }
    sorted
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
