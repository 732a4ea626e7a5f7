//! View-derivation engine for a paginated, searchable product catalog.
//!
//! A [`ViewCoordinator`] owns the raw page, the user's search/sort/selection
//! state, pagination and the cart ledger. Commands go in through
//! [`ViewCoordinator::dispatch`], completed fetches through
//! [`ViewCoordinator::apply_fetch`], and every call leaves behind a freshly
//! recomputed [`ViewState`].

pub mod cart;
pub mod coordinator;
pub mod driver;
pub mod error;
pub mod fence;
pub mod filter;
pub mod http_source;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod source;
pub mod view;

pub use cart::CartLedger;
pub use coordinator::{Command, FetchOutcome, PageRequest, ViewCoordinator};
pub use driver::{fetch, spawn_fetch};
pub use error::{CatalogError, SourceError};
pub use fence::{Generation, GenerationFence};
pub use http_source::{HttpCollectionSource, HttpSourceOptions, DEFAULT_SOURCE_URL};
pub use pagination::PaginationController;
pub use selection::SelectionTracker;
pub use source::{CollectionSource, InMemoryCollectionSource};
pub use view::{recompute, FetchStatus, ViewInputs, ViewState};
