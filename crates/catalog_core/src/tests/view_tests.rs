use super::*;
use shared::domain::GroupId;

fn item(id: i64, title: &str) -> Item {
    Item {
        id: ItemId(id),
        group_id: GroupId(1),
        title: title.to_string(),
        image_url: String::new(),
        thumbnail_url: String::new(),
    }
}

fn ready_inputs(items: Vec<Item>) -> ViewInputs {
    ViewInputs {
        raw_page: Arc::from(items),
        fetch: FetchStatus::Ready,
        ..ViewInputs::default()
    }
}

fn titles(view: &ViewState) -> Vec<&str> {
    view.visible_items
        .iter()
        .map(|item| item.title.as_str())
        .collect()
}

#[test]
fn pinned_collation_fixture() {
    let inputs = ready_inputs(vec![item(1, "Banana"), item(2, "apple")]);
    let view = recompute(&inputs);
    assert_eq!(titles(&view), vec!["Banana", "apple"]);
    assert_eq!(view.sort_order, SortOrder::Asc);
}

#[test]
fn filters_then_sorts_without_touching_raw_page() {
    let raw = vec![
        item(1, "quidem molestiae"),
        item(2, "natus nisi omnis"),
        item(3, "molestiae accusamus"),
    ];
    let mut inputs = ready_inputs(raw.clone());
    inputs.search_term = "molestiae".to_string();
    inputs.sort_order = SortOrder::Desc;

    let view = recompute(&inputs);
    assert_eq!(
        titles(&view),
        vec!["quidem molestiae", "molestiae accusamus"]
    );
    assert_eq!(&*inputs.raw_page, raw.as_slice());

    inputs.sort_order = SortOrder::Asc;
    let view = recompute(&inputs);
    assert_eq!(
        titles(&view),
        vec!["molestiae accusamus", "quidem molestiae"]
    );
}

#[test]
fn selection_resolves_after_filter_and_goes_stale_quietly() {
    let mut inputs = ready_inputs(vec![item(1, "alpha"), item(2, "beta")]);
    inputs.selection.toggle(ItemId(2));

    let view = recompute(&inputs);
    assert_eq!(view.selected_item.as_ref().map(|item| item.id), Some(ItemId(2)));

    inputs.search_term = "alp".to_string();
    let view = recompute(&inputs);
    assert_eq!(view.selected_item_id, Some(ItemId(2)));
    assert!(view.selected_item.is_none());
}

#[test]
fn failed_fetch_suppresses_list_but_keeps_cart_and_paging() {
    let a = item(5, "alpha");
    let mut inputs = ready_inputs(vec![a.clone()]);
    inputs.selection.toggle(ItemId(5));
    inputs.cart = inputs.cart.add(&a);
    inputs.pagination.next_page();
    inputs.fetch = FetchStatus::Failed {
        message: "collection responded with status 503".to_string(),
    };

    let view = recompute(&inputs);
    assert!(view.visible_items.is_empty());
    assert!(view.selected_item.is_none());
    assert_eq!(view.total_metric, 5);
    assert_eq!(view.page, 1);
    assert!(!view.previous_disabled);
}

#[test]
fn loading_keeps_previous_page_as_basis() {
    let mut inputs = ready_inputs(vec![item(1, "alpha")]);
    inputs.fetch = FetchStatus::Loading;

    let view = recompute(&inputs);
    assert!(view.fetch.is_loading());
    assert_eq!(titles(&view), vec!["alpha"]);
}

#[test]
fn recompute_is_deterministic() {
    let mut inputs = ready_inputs(vec![item(2, "b"), item(1, "a")]);
    inputs.cart = inputs.cart.add(&item(2, "b"));
    assert_eq!(recompute(&inputs), recompute(&inputs));
}
