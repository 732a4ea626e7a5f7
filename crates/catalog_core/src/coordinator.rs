use std::sync::Arc;

use shared::domain::{Collation, Item, ItemId, PageSize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    error::SourceError,
    fence::{Generation, GenerationFence},
    pagination::PaginationController,
    view::{recompute, FetchStatus, ViewInputs, ViewState},
};

/// User commands accepted by the coordinator. This is the only way to change
/// catalog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetSearchTerm(String),
    ToggleSortOrder,
    NextPage,
    PreviousPage,
    SetPageSize(PageSize),
    ToggleSelection(ItemId),
    AddToCart(Item),
    RemoveFromCart(Item),
    Retry,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetSearchTerm(_) => "set_search_term",
            Command::ToggleSortOrder => "toggle_sort_order",
            Command::NextPage => "next_page",
            Command::PreviousPage => "previous_page",
            Command::SetPageSize(_) => "set_page_size",
            Command::ToggleSelection(_) => "toggle_selection",
            Command::AddToCart(_) => "add_to_cart",
            Command::RemoveFromCart(_) => "remove_from_cart",
            Command::Retry => "retry",
        }
    }
}

/// A page fetch the caller must issue against a collection source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: Generation,
    pub page: u32,
    pub page_size: PageSize,
    pub offset: u64,
    pub limit: u32,
    /// Fresh on every retry so intermediaries cannot serve a cached failure.
    pub cache_token: Option<Uuid>,
}

/// Result of a page fetch, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: Generation,
    pub result: Result<Vec<Item>, SourceError>,
}

pub struct ViewCoordinator {
    inputs: ViewInputs,
    fence: GenerationFence,
    view: ViewState,
}

impl ViewCoordinator {
    pub fn new(page_size: PageSize, collation: Collation) -> Self {
        let inputs = ViewInputs {
            pagination: PaginationController::new(page_size),
            collation,
            ..ViewInputs::default()
        };
        let view = recompute(&inputs);
        Self {
            inputs,
            fence: GenerationFence::default(),
            view,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn latest_generation(&self) -> Option<Generation> {
        self.fence.latest()
    }

    /// Issues the fetch for the current page, normally the first one.
    pub fn start(&mut self) -> PageRequest {
        let request = self.issue_request(None);
        self.refresh();
        request
    }

    /// Applies `command` and recomputes the view. Returns the page fetch to
    /// issue when the command changed which page is wanted, or on retry.
    pub fn dispatch(&mut self, command: Command) -> Option<PageRequest> {
        debug!(command = command.name(), "dispatching catalog command");

        let request = match command {
            Command::SetSearchTerm(term) => {
                self.inputs.search_term = term;
                None
            }
            Command::ToggleSortOrder => {
                self.inputs.sort_order = self.inputs.sort_order.toggled();
                None
            }
            Command::NextPage => {
                self.inputs.pagination.next_page();
                Some(self.issue_request(None))
            }
            Command::PreviousPage => {
                if self.inputs.pagination.previous_page() {
                    Some(self.issue_request(None))
                } else {
                    None
                }
            }
            Command::SetPageSize(page_size) => {
                let before = self.inputs.pagination;
                self.inputs.pagination.set_page_size(page_size);
                if self.inputs.pagination != before {
                    Some(self.issue_request(None))
                } else {
                    None
                }
            }
            Command::ToggleSelection(id) => {
                self.inputs.selection.toggle(id);
                None
            }
            Command::AddToCart(item) => {
                self.inputs.cart = self.inputs.cart.add(&item);
                None
            }
            Command::RemoveFromCart(item) => {
                self.inputs.cart = self.inputs.cart.remove(&item);
                None
            }
            Command::Retry => {
                if self.inputs.fetch.is_failed() {
                    Some(self.issue_request(Some(Uuid::new_v4())))
                } else {
                    debug!("retry ignored; last fetch did not fail");
                    None
                }
            }
        };

        self.refresh();
        request
    }

    /// Folds a finished fetch into the view. Outcomes from any generation
    /// other than the latest issued are dropped; returns whether it applied.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if !self.fence.is_current(outcome.generation) {
            debug!(
                generation = %outcome.generation,
                latest = ?self.fence.latest(),
                "discarding page from stale generation"
            );
            return false;
        }

        match outcome.result {
            Ok(items) => {
                info!(
                    generation = %outcome.generation,
                    items = items.len(),
                    "page loaded"
                );
                self.inputs.raw_page = Arc::from(items);
                self.inputs.fetch = FetchStatus::Ready;
            }
            Err(err) => {
                warn!(generation = %outcome.generation, "page fetch failed: {err}");
                self.inputs.fetch = FetchStatus::Failed {
                    message: err.to_string(),
                };
            }
        }

        self.refresh();
        true
    }

    fn issue_request(&mut self, cache_token: Option<Uuid>) -> PageRequest {
        let pagination = self.inputs.pagination;
        let request = PageRequest {
            generation: self.fence.issue(),
            page: pagination.page(),
            page_size: pagination.page_size(),
            offset: pagination.offset(),
            limit: pagination.page_size().get(),
            cache_token,
        };
        self.inputs.fetch = FetchStatus::Loading;
        info!(
            generation = %request.generation,
            offset = request.offset,
            limit = request.limit,
            "requesting catalog page"
        );
        request
    }

    fn refresh(&mut self) {
        self.view = recompute(&self.inputs);
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
