use crate::modules::provider::domain::{AnimeRecord, CatalogQuery};
use crate::modules::season::Season;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Seam between the orchestration layers and a concrete catalog backend.
///
/// The live implementation is [`crate::modules::provider::JikanCatalogClient`];
/// tests substitute stubs with scripted failures.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn get_anime_by_id(&self, mal_id: i64) -> AppResult<AnimeRecord>;

    async fn get_top_anime(&self, page: i32, limit: i32) -> AppResult<Vec<AnimeRecord>>;

    async fn get_seasonal_anime(
        &self,
        year: i32,
        season: Season,
        page: i32,
    ) -> AppResult<Vec<AnimeRecord>>;

    async fn search_anime(&self, query: &str, limit: usize) -> AppResult<Vec<AnimeRecord>>;

    /// Dispatch a list-returning query to the matching operation.
    async fn fetch_list(&self, query: &CatalogQuery) -> AppResult<Vec<AnimeRecord>> {
        match query {
            CatalogQuery::Top { page, limit } => self.get_top_anime(*page, *limit).await,
            CatalogQuery::Season { year, season, page } => {
                self.get_seasonal_anime(*year, *season, *page).await
            }
            CatalogQuery::Search { query, limit } => self.search_anime(query, *limit).await,
        }
    }
}
