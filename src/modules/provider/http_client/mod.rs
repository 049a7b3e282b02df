pub mod executor;
pub mod retry_policy;

pub use executor::RequestExecutor;
pub use retry_policy::{ErrorClass, RetryPolicy};
