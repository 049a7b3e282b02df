use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity-provider user id. Opaque here; it only keys favorites records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub profile: UserProfile,
}

impl Session {
    pub fn new(user_id: UserId, profile: UserProfile) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            profile,
        }
    }
}

/// Managed identity provider, implemented outside this crate.
///
/// Sign-in failures surface as `AppError::Unauthorized`; the core never
/// inspects credentials itself.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session>;

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Sign in with a federated credential token (e.g. an OAuth id token).
    async fn sign_in_with_token(&self, token: &str) -> AppResult<Session>;

    async fn sign_out(&self) -> AppResult<()>;

    fn current_session(&self) -> Option<Session>;
}
