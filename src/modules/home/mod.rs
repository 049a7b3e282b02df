pub mod coordinator;
pub mod feed;
pub mod section_state;

pub use coordinator::SectionCoordinator;
pub use feed::{HomeFeed, SECTION_AIRING, SECTION_TOP, SECTION_UPCOMING};
pub use section_state::{SectionState, SectionStatus};
