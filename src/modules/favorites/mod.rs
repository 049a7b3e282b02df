pub mod aggregator;
pub mod session;
pub mod store;

pub use aggregator::FavoritesAggregator;
pub use session::SessionFavorites;
pub use store::FavoriteStore;
