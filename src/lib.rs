pub mod modules;
pub mod shared;

// Re-exports for the pieces callers touch most
pub use modules::browse::BrowseService;
pub use modules::favorites::{FavoritesAggregator, SessionFavorites};
pub use modules::home::{HomeFeed, SectionCoordinator, SectionState, SectionStatus};
pub use modules::provider::{AnimeRecord, CatalogProvider, CatalogQuery};
pub use modules::season::{Season, SeasonOfYear, SeasonResolver};
pub use shared::errors::{AppError, AppResult};
