pub mod providers;
pub mod search;

pub use providers::MovieSearchService;
pub use search::{SearchAggregator, PAGE_SIZE};
