use crate::modules::provider::domain::AnimeRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct JikanItemResponse {
    pub data: AnimeRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanListResponse {
    pub data: Vec<AnimeRecord>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanPagination {
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JikanSearchParams {
    pub q: String,
    pub limit: i32,
    pub sfw: bool,
}
