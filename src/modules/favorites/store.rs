use crate::modules::auth::UserId;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence of favorite records keyed by user and item id.
///
/// Implemented outside this crate (the app backs it with a cloud document
/// database); the core only consumes it.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn list_favorite_ids(&self, user_id: &UserId) -> AppResult<Vec<i64>>;

    async fn add_favorite(&self, user_id: &UserId, mal_id: i64) -> AppResult<()>;

    async fn remove_favorite(&self, user_id: &UserId, mal_id: i64) -> AppResult<()>;

    async fn is_favorite(&self, user_id: &UserId, mal_id: i64) -> AppResult<bool> {
        Ok(self.list_favorite_ids(user_id).await?.contains(&mal_id))
    }
}
