use async_trait::async_trait;
use shared::{domain::Item, protocol::PhotoRecord};

use crate::{coordinator::PageRequest, error::SourceError};

/// Remote collection the catalog pages through.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Item>, SourceError>;
}

/// Serves pages out of a fixed item list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollectionSource {
    items: Vec<Item>,
}

impl InMemoryCollectionSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn from_records(records: Vec<PhotoRecord>) -> Self {
        Self::new(records.into_iter().map(Item::from).collect())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CollectionSource for InMemoryCollectionSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Item>, SourceError> {
        let start = usize::try_from(request.offset).unwrap_or(usize::MAX);
        Ok(self
            .items
            .iter()
            .skip(start)
            .take(request.limit as usize)
            .cloned()
            .collect())
    }
}
