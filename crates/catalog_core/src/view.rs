use std::sync::Arc;

use shared::domain::{Collation, Item, ItemId, PageSize, SortOrder};

use crate::{
    cart::CartLedger, filter::filter_items, pagination::PaginationController,
    selection::SelectionTracker, sort::sort_items,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Everything a view is derived from.
#[derive(Debug, Clone)]
pub struct ViewInputs {
    pub raw_page: Arc<[Item]>,
    pub search_term: String,
    pub sort_order: SortOrder,
    pub collation: Collation,
    pub pagination: PaginationController,
    pub selection: SelectionTracker,
    pub cart: CartLedger,
    pub fetch: FetchStatus,
}

impl Default for ViewInputs {
    fn default() -> Self {
        Self {
            raw_page: Arc::from(Vec::new()),
            search_term: String::new(),
            sort_order: SortOrder::default(),
            collation: Collation::default(),
            pagination: PaginationController::default(),
            selection: SelectionTracker::default(),
            cart: CartLedger::default(),
            fetch: FetchStatus::default(),
        }
    }
}

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: PageSize,
    pub previous_disabled: bool,
    pub visible_items: Vec<Item>,
    pub selected_item_id: Option<ItemId>,
    pub selected_item: Option<Item>,
    pub cart: CartLedger,
    pub total_metric: i128,
    pub fetch: FetchStatus,
}

/// Derives a complete view from `inputs`. Pure: the raw page is only read.
///
/// A failed fetch suppresses the list and the selected item; cart and
/// pagination are still reported so the retry screen can show them.
pub fn recompute(inputs: &ViewInputs) -> ViewState {
    let (visible_items, selected_item) = if inputs.fetch.is_failed() {
        (Vec::new(), None)
    } else {
        let filtered = filter_items(&inputs.raw_page, &inputs.search_term);
        let visible = sort_items(&filtered, inputs.sort_order, inputs.collation);
        let selected = inputs.selection.resolve(&visible).cloned();
        (visible, selected)
    };

    ViewState {
        search_term: inputs.search_term.clone(),
        sort_order: inputs.sort_order,
        page: inputs.pagination.page(),
        page_size: inputs.pagination.page_size(),
        previous_disabled: inputs.pagination.previous_disabled(),
        visible_items,
        selected_item_id: inputs.selection.selected(),
        selected_item,
        cart: inputs.cart.clone(),
        total_metric: inputs.cart.aggregate_metric(),
        fetch: inputs.fetch.clone(),
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
