use shared::domain::Item;

/// Keeps the items whose title contains `term` as a literal, case-sensitive
/// substring. An empty term keeps everything.
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.title.contains(term))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
