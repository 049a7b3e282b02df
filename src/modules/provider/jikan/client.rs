use crate::modules::provider::domain::AnimeRecord;
use crate::modules::provider::http_client::{RequestExecutor, RetryPolicy};
use crate::modules::provider::traits::CatalogProvider;
use crate::modules::season::Season;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::dto::{JikanItemResponse, JikanListResponse, JikanSearchParams};

const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
/// Jikan rejects list requests above this page size.
const MAX_PAGE_SIZE: i32 = 25;

/// Catalog client for the Jikan v4 API.
///
/// All calls run through the shared executor: one token bucket sized to
/// Jikan's documented 3 req/sec ceiling, plus the retry/backoff policy.
pub struct JikanCatalogClient {
    client: Client,
    base_url: String,
    executor: RequestExecutor,
    policy: RetryPolicy,
}

impl JikanCatalogClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(JIKAN_BASE_URL)
    }

    /// Client pointed at a different base URL (test servers, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("aniview/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        // 3 req/sec steady state with matching burst (official Jikan limit)
        let limiter = RequestExecutor::shared_limiter(3.0, 3);

        Ok(Self {
            client,
            base_url: base_url.into(),
            executor: RequestExecutor::with_rate_limiter("Jikan", limiter),
            policy: RetryPolicy::jikan(),
        })
    }

    pub async fn get_anime_by_id(&self, mal_id: i64) -> AppResult<AnimeRecord> {
        let url = format!("{}/anime/{}", self.base_url, mal_id);
        let response: JikanItemResponse = self.get_json(&url, &[] as &[(&str, String)]).await?;
        Ok(response.data)
    }

    pub async fn get_top_anime(&self, page: i32, limit: i32) -> AppResult<Vec<AnimeRecord>> {
        let url = format!("{}/top/anime", self.base_url);
        let query = [
            ("page", page.to_string()),
            ("limit", limit.min(MAX_PAGE_SIZE).to_string()),
        ];
        let response: JikanListResponse = self.get_json(&url, &query).await?;
        Ok(response.data)
    }

    pub async fn get_seasonal_anime(
        &self,
        year: i32,
        season: Season,
        page: i32,
    ) -> AppResult<Vec<AnimeRecord>> {
        let url = format!("{}/seasons/{}/{}", self.base_url, year, season.as_str());
        let query = [("page", page.to_string())];
        let response: JikanListResponse = self.get_json(&url, &query).await?;
        Ok(response.data)
    }

    pub async fn search_anime(&self, query: &str, limit: usize) -> AppResult<Vec<AnimeRecord>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query must not be blank".to_string(),
            ));
        }

        let params = JikanSearchParams {
            q: trimmed.to_string(),
            limit: (limit as i32).min(MAX_PAGE_SIZE),
            sfw: true,
        };

        let url = format!("{}/anime", self.base_url);
        let response: JikanListResponse = self.get_json(&url, &params).await?;
        Ok(response.data)
    }

    async fn get_json<T, Q>(&self, url: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.executor
            .execute(&self.policy, || async move {
                let response = self
                    .client
                    .get(url)
                    .query(query)
                    .send()
                    .await
                    .map_err(AppError::from)?;

                Self::check_status(response.status())?;

                response.json::<T>().await.map_err(|e| {
                    AppError::SerializationError(format!("Failed to parse Jikan response: {}", e))
                })
            })
            .await
    }

    fn check_status(status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(
                "Jikan rate limit exceeded".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::BAD_REQUEST => {
                Err(AppError::ApiError("Bad request to Jikan API".to_string()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized(
                "Not authorized to access Jikan API".to_string(),
            )),
            s if s.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "Jikan service unavailable: {}",
                s
            ))),
            s => Err(AppError::ApiError(format!(
                "Unexpected status code from Jikan: {}",
                s
            ))),
        }
    }
}

#[async_trait]
impl CatalogProvider for JikanCatalogClient {
    async fn get_anime_by_id(&self, mal_id: i64) -> AppResult<AnimeRecord> {
        self.get_anime_by_id(mal_id).await
    }

    async fn get_top_anime(&self, page: i32, limit: i32) -> AppResult<Vec<AnimeRecord>> {
        self.get_top_anime(page, limit).await
    }

    async fn get_seasonal_anime(
        &self,
        year: i32,
        season: Season,
        page: i32,
    ) -> AppResult<Vec<AnimeRecord>> {
        self.get_seasonal_anime(year, season, page).await
    }

    async fn search_anime(&self, query: &str, limit: usize) -> AppResult<Vec<AnimeRecord>> {
        self.search_anime(query, limit).await
    }
}
