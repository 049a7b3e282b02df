pub mod domain;
pub mod http_client;
pub mod jikan;
pub mod traits;

pub use domain::{AnimeRecord, CatalogQuery};
pub use http_client::{ErrorClass, RequestExecutor, RetryPolicy};
pub use jikan::JikanCatalogClient;
pub use traits::CatalogProvider;
