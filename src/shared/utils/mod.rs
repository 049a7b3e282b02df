pub mod dedupe;
pub mod logger;
pub mod spacer;

pub use dedupe::{dedupe, dedupe_by_id};
pub use spacer::RequestSpacer;
