//! Durable per-site cache of fetched content.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::types::{FetchedContent, SiteId};

/// File-per-site cache of fetched content maps, keyed by host name.
///
/// Entries never expire: a present entry is returned unconditionally,
/// however stale. Invalidation is deleting the file.
pub struct ResultCache {
    dir: PathBuf,
}

impl ResultCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, site: &SiteId) -> PathBuf {
        self.dir.join(format!("{}.bin", site.as_str()))
    }

    /// Load the cached content map for a site, if present.
    pub fn load(&self, site: &SiteId) -> Result<Option<FetchedContent>, AnalysisError> {
        let path = self.path_for(site);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| AnalysisError::Cache(e.into()))?;
        let content = bincode::deserialize(&bytes).map_err(|e| AnalysisError::Cache(e))?;

        debug!(site = %site, "Cache hit");
        Ok(Some(content))
    }

    /// Persist the content map for a site, replacing any previous entry.
    pub fn save(&self, site: &SiteId, content: &FetchedContent) -> Result<(), AnalysisError> {
        fs::create_dir_all(&self.dir).map_err(|e| AnalysisError::Cache(e.into()))?;

        let bytes = bincode::serialize(content).map_err(|e| AnalysisError::Cache(e))?;
        fs::write(self.path_for(site), bytes).map_err(|e| AnalysisError::Cache(e.into()))?;

        info!(site = %site, pages = content.len(), "Saved analysis to cache");
        Ok(())
    }
}
