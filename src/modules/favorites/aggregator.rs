use crate::modules::provider::{AnimeRecord, CatalogProvider};
use crate::shared::utils::RequestSpacer;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Spacing between successive per-id lookups, keeping the loop under the
/// upstream's 3 req/sec ceiling.
pub const FAVORITE_LOOKUP_INTERVAL: Duration = Duration::from_millis(350);

/// Resolves a user's favorite ids into full records.
///
/// Lookups run strictly sequentially: the favorites list is unbounded, so
/// unrestricted concurrency here would blow the shared rate limit. A lookup
/// whose retries are exhausted is logged and omitted; the batch never fails
/// because one id did.
pub struct FavoritesAggregator {
    provider: Arc<dyn CatalogProvider>,
    spacer: RequestSpacer,
}

impl FavoritesAggregator {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self::with_spacing(provider, FAVORITE_LOOKUP_INTERVAL)
    }

    pub fn with_spacing(provider: Arc<dyn CatalogProvider>, interval: Duration) -> Self {
        Self {
            provider,
            spacer: RequestSpacer::new(interval),
        }
    }

    /// Resolve `ids` in order. Output order matches input order minus the
    /// ids whose lookups failed terminally.
    pub async fn resolve(&self, ids: &[i64]) -> Vec<AnimeRecord> {
        let mut results = Vec::with_capacity(ids.len());

        for &mal_id in ids {
            self.spacer.wait().await;
            match self.provider.get_anime_by_id(mal_id).await {
                Ok(record) => results.push(record),
                Err(error) => {
                    warn!("Skipping favorite {}: {}", mal_id, error);
                }
            }
        }

        results
    }
}
