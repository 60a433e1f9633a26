//! Process-wide registry of site indexes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::index::SiteIndex;
use crate::types::SiteId;

/// Site indexes held for the life of the process.
///
/// Populated on analyze, read on chat, never evicted; memory use is bounded
/// by the number of distinct sites analyzed in-process. Concurrent analyses
/// of the same site race on replacement; the last writer wins.
#[derive(Default)]
pub struct IndexRegistry {
    inner: RwLock<HashMap<SiteId, Arc<SiteIndex>>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the index for a site, replacing any previous one.
    pub fn insert(&self, site: SiteId, index: SiteIndex) {
        self.inner.write().unwrap().insert(site, Arc::new(index));
    }

    /// Look up the index for a site, if it was analyzed in this process.
    pub fn get(&self, site: &SiteId) -> Option<Arc<SiteIndex>> {
        self.inner.read().unwrap().get(site).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockEmbedder;
    use crate::types::FetchedContent;

    async fn empty_index() -> SiteIndex {
        SiteIndex::build(&FetchedContent::new(), &MockEmbedder::new())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let registry = IndexRegistry::new();
        let site = SiteId::from_url("https://mocksite.com").unwrap();

        assert!(registry.get(&site).is_none());
        registry.insert(site.clone(), empty_index().await);
        assert!(registry.get(&site).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_reinsert_replaces_index() {
        let registry = IndexRegistry::new();
        let site = SiteId::from_url("https://mocksite.com").unwrap();

        registry.insert(site.clone(), empty_index().await);
        let first = registry.get(&site).unwrap();

        registry.insert(site.clone(), empty_index().await);
        let second = registry.get(&site).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }
}
