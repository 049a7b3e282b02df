use crate::modules::provider::AnimeRecord;
use crate::shared::errors::AppError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Observable state of one named home-feed section.
///
/// Transitions: idle -> loading -> success | failed, and back to loading on
/// refresh from either terminal state. Constructed only through the
/// functions below so `error` is present exactly when the status is failed
/// and `items` is already deduplicated.
#[derive(Debug, Clone)]
pub struct SectionState {
    pub status: SectionStatus,
    pub items: Vec<AnimeRecord>,
    pub error: Option<AppError>,
}

impl SectionState {
    pub fn idle() -> Self {
        Self {
            status: SectionStatus::Idle,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            status: SectionStatus::Loading,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn success(items: Vec<AnimeRecord>) -> Self {
        Self {
            status: SectionStatus::Success,
            items,
            error: None,
        }
    }

    pub fn failed(error: AppError) -> Self {
        Self {
            status: SectionStatus::Failed,
            items: Vec::new(),
            error: Some(error),
        }
    }
}

impl Default for SectionState {
    fn default() -> Self {
        Self::idle()
    }
}
