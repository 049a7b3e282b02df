use crate::modules::provider::{AnimeRecord, CatalogProvider, CatalogQuery};
use crate::modules::season::SeasonOfYear;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::dedupe;
use std::sync::Arc;

/// Assembles category and search result lists. Every list goes through the
/// deduplicator so overlapping pages can't surface the same entry twice.
pub struct BrowseService {
    provider: Arc<dyn CatalogProvider>,
}

impl BrowseService {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    pub async fn category(&self, query: &CatalogQuery) -> AppResult<Vec<AnimeRecord>> {
        let items = self.provider.fetch_list(query).await?;
        Ok(dedupe(items))
    }

    /// Resolve a category by its display name, relative to the season the
    /// caller is browsing from. Unknown names are rejected.
    pub async fn category_by_name(
        &self,
        category: &str,
        current: SeasonOfYear,
    ) -> AppResult<Vec<AnimeRecord>> {
        let query = CatalogQuery::for_category(category, current)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown category: {}", category)))?;
        self.category(&query).await
    }

    pub async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<AnimeRecord>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query must not be blank".to_string(),
            ));
        }
        let items = self.provider.search_anime(query, limit).await?;
        Ok(dedupe(items))
    }
}
