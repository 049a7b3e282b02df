use super::store::FavoriteStore;
use crate::modules::auth::UserId;
use crate::shared::errors::AppResult;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Session-scoped container for the signed-in user's favorite ids.
///
/// Created at sign-in by loading the store, dropped at sign-out. Components
/// that need read access receive a reference or a subscription; mutations
/// write through to the store first and mirror locally only on success.
pub struct SessionFavorites {
    session_id: Uuid,
    user_id: UserId,
    store: Arc<dyn FavoriteStore>,
    tx: watch::Sender<Vec<i64>>,
}

impl SessionFavorites {
    pub async fn load(store: Arc<dyn FavoriteStore>, user_id: UserId) -> AppResult<Self> {
        let ids = store.list_favorite_ids(&user_id).await?;
        let (tx, _rx) = watch::channel(ids);
        Ok(Self {
            session_id: Uuid::new_v4(),
            user_id,
            store,
            tx,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Current ids in insertion order.
    pub fn ids(&self) -> Vec<i64> {
        self.tx.borrow().clone()
    }

    pub fn contains(&self, mal_id: i64) -> bool {
        self.tx.borrow().contains(&mal_id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<i64>> {
        self.tx.subscribe()
    }

    pub async fn add(&self, mal_id: i64) -> AppResult<()> {
        if self.contains(mal_id) {
            return Ok(());
        }
        self.store.add_favorite(&self.user_id, mal_id).await?;
        self.tx.send_modify(|ids| {
            if !ids.contains(&mal_id) {
                ids.push(mal_id);
            }
        });
        Ok(())
    }

    pub async fn remove(&self, mal_id: i64) -> AppResult<()> {
        self.store.remove_favorite(&self.user_id, mal_id).await?;
        self.tx.send_modify(|ids| ids.retain(|id| *id != mal_id));
        Ok(())
    }
}
