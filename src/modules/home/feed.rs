use super::coordinator::SectionCoordinator;
use crate::modules::provider::CatalogProvider;
use crate::modules::season::SeasonResolver;
use crate::shared::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;

pub const SECTION_TOP: &str = "top";
pub const SECTION_AIRING: &str = "airing";
pub const SECTION_UPCOMING: &str = "upcoming";

const PAGE_SIZE: i32 = 25;
// Deliberate staggering so the three sections don't hit the rate limit in
// the same instant at screen-load time.
const AIRING_STAGGER: Duration = Duration::from_millis(1000);
const UPCOMING_STAGGER: Duration = Duration::from_millis(2000);

/// Wires the home screen's three independent sections to the coordinator:
/// the top list, the current season, and the next season.
pub struct HomeFeed {
    provider: Arc<dyn CatalogProvider>,
    coordinator: SectionCoordinator,
}

impl HomeFeed {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            coordinator: SectionCoordinator::new(),
        }
    }

    pub fn coordinator(&self) -> &SectionCoordinator {
        &self.coordinator
    }

    /// Start all three sections concurrently.
    pub fn load(&self) {
        self.load_at(Utc::now().date_naive());
    }

    /// Same as [`HomeFeed::load`] with an explicit "today" for the season
    /// computation.
    pub fn load_at(&self, today: NaiveDate) {
        self.start_top();
        self.start_airing(today);
        self.start_upcoming(today);
    }

    /// Refresh a single section by name.
    pub fn refresh(&self, section: &str, today: NaiveDate) -> AppResult<()> {
        match section {
            SECTION_TOP => self.start_top(),
            SECTION_AIRING => self.start_airing(today),
            SECTION_UPCOMING => self.start_upcoming(today),
            other => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown home section: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    fn start_top(&self) {
        let provider = Arc::clone(&self.provider);
        self.coordinator
            .start_section(SECTION_TOP, Duration::ZERO, async move {
                provider.get_top_anime(1, PAGE_SIZE).await
            });
    }

    fn start_airing(&self, today: NaiveDate) {
        let provider = Arc::clone(&self.provider);
        let current = SeasonResolver::current(today);
        self.coordinator
            .start_section(SECTION_AIRING, AIRING_STAGGER, async move {
                provider
                    .get_seasonal_anime(current.year, current.season, 1)
                    .await
            });
    }

    fn start_upcoming(&self, today: NaiveDate) {
        let provider = Arc::clone(&self.provider);
        let next = SeasonResolver::next(SeasonResolver::current(today));
        self.coordinator
            .start_section(SECTION_UPCOMING, UPCOMING_STAGGER, async move {
                provider.get_seasonal_anime(next.year, next.season, 1).await
            });
    }
}
