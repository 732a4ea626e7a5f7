//! Runs page fetches off the event loop and reports their outcomes.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{
    coordinator::{FetchOutcome, PageRequest},
    source::CollectionSource,
};

pub async fn fetch(source: &dyn CollectionSource, request: &PageRequest) -> FetchOutcome {
    FetchOutcome {
        generation: request.generation,
        result: source.fetch_page(request).await,
    }
}

/// Spawns the fetch for `request`; the outcome is sent on `outcomes` when it
/// completes, whatever order that ends up in.
pub fn spawn_fetch(
    source: Arc<dyn CollectionSource>,
    request: PageRequest,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = fetch(source.as_ref(), &request).await;
        if outcomes.send(outcome).is_err() {
            debug!(generation = %request.generation, "fetch finished after receiver closed");
        }
    })
}
